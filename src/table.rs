//! This module provides the loader for whitespace-delimited benchmark result files.
//!
//! Result files are plain text: an optional header line (often prefixed with `#`)
//! followed by rows of whitespace-separated fields. Column positions are fixed per
//! file; header names are informational only.
//!
//! Every cell is kept as text. Numeric views are produced on demand with
//! [`parse_numeric`], which maps anything unparseable (e.g. `N/A`) to NaN instead
//! of failing, so a single bad measurement only leaves a gap in the chart.

use crate::error::{PlotError, PlotErrorKind, Result};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// Controls which leading lines are skipped and how columns are named.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    skip_rows: usize,
    comment: Option<char>,
    names: Option<Vec<String>>,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skips the first `n` lines of the file unconditionally.
    pub fn skip_rows(mut self, n: usize) -> Self {
        self.skip_rows = n;
        self
    }

    /// Skips every line whose first non-blank character is `marker`.
    pub fn comment(mut self, marker: char) -> Self {
        self.comment = Some(marker);
        self
    }

    /// Supplies explicit column names, overriding any header line.
    pub fn names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = Some(names.into_iter().map(Into::into).collect());
        self
    }
}

/// A rectangular table of text cells read from a result file.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// Coerces a cell to `f64`, returning NaN for anything that is not a number.
///
/// `inf` and `nan` spellings accepted by [`str::parse`] are passed through.
pub fn parse_numeric(token: &str) -> f64 {
    token.trim().parse::<f64>().unwrap_or(f64::NAN)
}

impl Table {
    /// Loads a table from `path` using the given options.
    ///
    /// # Errors
    /// Fails if the file cannot be read, has no data rows, or contains a row whose
    /// width differs from the first data row.
    pub fn load(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let table = Self::from_reader(BufReader::new(file), options)?;
        log::debug!(
            "Loaded {} rows x {} columns from {:?}",
            table.len(),
            table.width(),
            path
        );
        Ok(table)
    }

    /// Parses a table from any buffered reader. See [`Table::load`].
    pub fn from_reader(reader: impl BufRead, options: &LoadOptions) -> Result<Self> {
        let mut header: Option<Vec<String>> = None;
        let mut rows: Vec<Vec<String>> = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = index + 1;

            // The first skipped or commented line is remembered as a header candidate.
            if index < options.skip_rows {
                if header.is_none() {
                    header = Some(header_tokens(&line, options.comment));
                }
                continue;
            }
            let trimmed = line.trim_start();
            if let Some(marker) = options.comment {
                if trimmed.starts_with(marker) {
                    if header.is_none() && rows.is_empty() {
                        header = Some(header_tokens(trimmed, Some(marker)));
                    }
                    continue;
                }
            }

            let fields: Vec<String> = line.split_whitespace().map(str::to_string).collect();
            if fields.is_empty() {
                continue;
            }
            if let Some(first) = rows.first() {
                if fields.len() != first.len() {
                    return Err(PlotErrorKind::RaggedRow {
                        line: line_no,
                        expected: first.len(),
                        found: fields.len(),
                    }
                    .into());
                }
            }
            rows.push(fields);
        }

        let width = rows.first().map(Vec::len).ok_or(PlotErrorKind::EmptyTable)?;

        let columns = match (&options.names, header) {
            (Some(names), _) => {
                if names.len() != width {
                    return Err(PlotError::input(format!(
                        "{} column names given for a table with {} columns",
                        names.len(),
                        width
                    )));
                }
                names.clone()
            }
            (None, Some(tokens)) if tokens.len() == width => tokens,
            _ => (0..width).map(|i| format!("col{i}")).collect(),
        };

        Ok(Table { columns, rows })
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the position of the column called `name`.
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| PlotErrorKind::UnknownColumn(name.to_string()).into())
    }

    /// Raw text of a single cell.
    pub fn cell(&self, row: usize, col: usize) -> Result<&str> {
        self.check_column(col)?;
        self.rows
            .get(row)
            .map(|r| r[col].as_str())
            .ok_or_else(|| PlotError::input(format!("row {row} is out of range")))
    }

    /// The whole column as text.
    pub fn text(&self, col: usize) -> Result<Vec<&str>> {
        self.check_column(col)?;
        Ok(self.rows.iter().map(|r| r[col].as_str()).collect())
    }

    /// The whole column coerced to numbers; unparseable cells become NaN.
    pub fn numeric(&self, col: usize) -> Result<Vec<f64>> {
        self.check_column(col)?;
        Ok(self.rows.iter().map(|r| parse_numeric(&r[col])).collect())
    }

    /// The numeric values of `col` for the given row indices, in the given order.
    pub fn numeric_at(&self, rows: &[usize], col: usize) -> Result<Vec<f64>> {
        self.check_column(col)?;
        rows.iter()
            .map(|&i| {
                self.rows
                    .get(i)
                    .map(|r| parse_numeric(&r[col]))
                    .ok_or_else(|| PlotError::input(format!("row {i} is out of range")))
            })
            .collect()
    }

    pub(crate) fn check_column(&self, col: usize) -> Result<()> {
        if col >= self.width() {
            return Err(PlotErrorKind::ColumnOutOfRange {
                column: col,
                width: self.width(),
            }
            .into());
        }
        Ok(())
    }
}

fn header_tokens(line: &str, marker: Option<char>) -> Vec<String> {
    line.trim_start()
        .trim_start_matches(marker.unwrap_or('#'))
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::io::Cursor;

    const AMDAHL: &str = "\
N Threads Placement Version ExecutionTime Speedup
64 1 close 1 2.00 1.00
64 2 close 1 N/A N/A
64 4 spread 2 0.60 3.33
";

    #[test]
    fn test_skip_rows_uses_header_names() {
        let table =
            Table::from_reader(Cursor::new(AMDAHL), &LoadOptions::new().skip_rows(1)).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.width(), 6);
        assert_eq!(table.column_index("Speedup").unwrap(), 5);
        assert_eq!(table.text(2).unwrap(), vec!["close", "close", "spread"]);
    }

    #[test]
    fn test_cell_access() {
        let table =
            Table::from_reader(Cursor::new(AMDAHL), &LoadOptions::new().skip_rows(1)).unwrap();
        assert_eq!(table.cell(2, 2).unwrap(), "spread");
        assert_eq!(table.cell(1, 4).unwrap(), "N/A");
        assert_eq!(table.cell(3, 0).unwrap_err().kind(), ErrorKind::InvalidInput);
        assert_eq!(table.cell(0, 6).unwrap_err().kind(), ErrorKind::Column);
    }

    #[test]
    fn test_na_cells_become_nan() {
        let table =
            Table::from_reader(Cursor::new(AMDAHL), &LoadOptions::new().skip_rows(1)).unwrap();
        let speedup = table.numeric(5).unwrap();
        assert_eq!(speedup[0], 1.0);
        assert!(speedup[1].is_nan());
        assert!((speedup[2] - 3.33).abs() < 1e-12);
    }

    #[test]
    fn test_comment_lines_are_skipped_anywhere() {
        let input = "# Iterations N Time Rate\n10 8 0.5 20\n# rerun\n\n12 16 0.4 30\n";
        let table = Table::from_reader(Cursor::new(input), &LoadOptions::new().comment('#'))
            .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.columns(), ["Iterations", "N", "Time", "Rate"]);
        assert_eq!(table.numeric(1).unwrap(), vec![8.0, 16.0]);
    }

    #[test]
    fn test_explicit_names_override_header() {
        let input = "# a b\n1 2\n";
        let options = LoadOptions::new().comment('#').names(["x", "y"]);
        let table = Table::from_reader(Cursor::new(input), &options).unwrap();
        assert_eq!(table.columns(), ["x", "y"]);
    }

    #[test]
    fn test_header_with_wrong_width_is_replaced() {
        let input = "Iteration Grid Tolerance\n1 8 0.001 0.5\n";
        let table =
            Table::from_reader(Cursor::new(input), &LoadOptions::new().skip_rows(1)).unwrap();
        assert_eq!(table.columns(), ["col0", "col1", "col2", "col3"]);
    }

    #[test]
    fn test_ragged_row_is_rejected() {
        let input = "1 2 3\n4 5\n";
        let err = Table::from_reader(Cursor::new(input), &LoadOptions::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedTable);
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_header_only_file_is_empty_table() {
        let options = LoadOptions::new().comment('#');
        let err = Table::from_reader(Cursor::new("# only a header\n"), &options).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedTable);
    }

    #[test]
    fn test_column_bounds_are_checked() {
        let table = Table::from_reader(Cursor::new("1 2\n"), &LoadOptions::new()).unwrap();
        assert_eq!(table.numeric(2).unwrap_err().kind(), ErrorKind::Column);
        assert_eq!(table.column_index("missing").unwrap_err().kind(), ErrorKind::Column);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Table::load("does/not/exist.data", &LoadOptions::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_parse_numeric_sentinels() {
        assert_eq!(parse_numeric("1e-6"), 1e-6);
        assert!(parse_numeric("N/A").is_nan());
        assert!(parse_numeric("").is_nan());
        assert!(parse_numeric("-").is_nan());
    }
}
