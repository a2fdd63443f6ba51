//! This module defines the error type shared by every part of the library.
//!
//! All failure conditions (reading a result file, shaping it into a table,
//! addressing its columns and drawing a figure) are collected in the private
//! [`PlotErrorKind`] enum and surfaced through the opaque [`PlotError`] wrapper.
//! Callers that need to branch on the failure use [`PlotError::kind`].
//!
//! Malformed *numeric* cells are deliberately not an error: they are coerced to
//! NaN by the table layer and show up as gaps in the rendered chart.
use std::io;
use thiserror::Error;

/// Represents all possible errors that can occur while loading or plotting data.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct PlotError(#[from] PlotErrorKind);

/// Private enum containing the distinct kinds of errors.
#[derive(Error, Debug)]
pub(crate) enum PlotErrorKind {
    /// Wraps a standard I/O error, most commonly a missing input file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A data row has a different number of fields than the first data row.
    #[error("Malformed table: line {line} has {found} fields, expected {expected}.")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// The input contained header or comment lines only.
    #[error("Malformed table: no data rows found.")]
    EmptyTable,

    /// A positional column index exceeds the table width.
    #[error("Column index {column} is out of range for a table with {width} columns.")]
    ColumnOutOfRange { column: usize, width: usize },

    /// A named column lookup failed.
    #[error("Unknown column '{0}'.")]
    UnknownColumn(String),

    /// An invalid argument was passed to a library function.
    #[error("Invalid input parameter: {0}")]
    InputError(String),

    /// The plotting backend failed to draw or encode a figure.
    #[error("Rendering failed: {0}")]
    Render(String),
}

/// A coarse, public classification of a [`PlotError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    MalformedTable,
    Column,
    InvalidInput,
    Render,
}

impl PlotError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match &self.0 {
            PlotErrorKind::Io(_) => ErrorKind::Io,
            PlotErrorKind::RaggedRow { .. } | PlotErrorKind::EmptyTable => {
                ErrorKind::MalformedTable
            }
            PlotErrorKind::ColumnOutOfRange { .. } | PlotErrorKind::UnknownColumn(_) => {
                ErrorKind::Column
            }
            PlotErrorKind::InputError(_) => ErrorKind::InvalidInput,
            PlotErrorKind::Render(_) => ErrorKind::Render,
        }
    }

    pub(crate) fn render(err: impl std::fmt::Display) -> Self {
        PlotErrorKind::Render(err.to_string()).into()
    }

    pub(crate) fn input(msg: impl Into<String>) -> Self {
        PlotErrorKind::InputError(msg.into()).into()
    }
}

impl From<io::Error> for PlotError {
    fn from(err: io::Error) -> Self {
        PlotError(PlotErrorKind::Io(err))
    }
}

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, PlotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ragged_row_error_message() {
        let error = PlotError(PlotErrorKind::RaggedRow {
            line: 7,
            expected: 4,
            found: 3,
        });
        assert_eq!(
            error.to_string(),
            "Malformed table: line 7 has 3 fields, expected 4."
        );
        assert_eq!(error.kind(), ErrorKind::MalformedTable);
    }

    #[test]
    fn test_column_out_of_range_message() {
        let error = PlotError(PlotErrorKind::ColumnOutOfRange {
            column: 9,
            width: 4,
        });
        assert_eq!(
            error.to_string(),
            "Column index 9 is out of range for a table with 4 columns."
        );
        assert_eq!(error.kind(), ErrorKind::Column);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "jacobi_convergence.data");
        let error: PlotError = io_err.into();
        assert_eq!(error.kind(), ErrorKind::Io);
        assert!(error.to_string().contains("jacobi_convergence.data"));
    }

    #[test]
    fn test_render_error_message() {
        let error = PlotError::render("font not found");
        assert_eq!(error.to_string(), "Rendering failed: font not found");
        assert_eq!(error.kind(), ErrorKind::Render);
    }
}
