//! Speedup per grid size from the thread/grid sweep.
//!
//! Input columns: `N Threads Serial_Time Parallel_Time Speedup`, one header line.
//! `#` comment lines are skipped anywhere in the file.

use super::{column_series, number_label};
use crate::{
    chart::{Axes, Chart, Figure, Marker, Palette},
    error::Result,
    group::{Key, group_by, unique_numeric},
    table::{LoadOptions, Table},
};

pub const DEFAULT_INPUT: &str = "speedup_threads_grids.data";
pub const FILE_NAME: &str = "speedup_threads_grids.png";

pub const GRID_SIZE: usize = 0;
pub const THREADS: usize = 1;
pub const SPEEDUP: usize = 4;

pub fn load_options() -> LoadOptions {
    LoadOptions::new().skip_rows(1).comment('#')
}

pub fn build(table: &Table) -> Result<Chart> {
    let mut axes = Axes::new("Speedup vs. Number of Threads for Different Grid Sizes")
        .labels("Number of Threads", "Speedup (Parallel / Optimized Parallel)")
        .x_ticks(unique_numeric(table, THREADS)?);

    let mut color = 0;
    for group in group_by(table, &[Key::numeric(GRID_SIZE)])? {
        let label = format!("Grid Size {}", number_label(group.values[0].as_f64()));
        let series = column_series(table, &group.rows, THREADS, SPEEDUP, label)?
            .marker(Marker::Circle)
            .color(Palette::TAB10.color(color));
        if axes.plot(series) {
            color += 1;
        }
    }
    Ok(Chart::new(FILE_NAME, Figure::single(8.0, 5.0, axes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_speedup_column_is_fifth() {
        let data = "N Threads Serial Parallel Speedup\n32 2 1.0 0.6 1.67\n32 4 1.0 0.3 3.3\n";
        let table = Table::from_reader(Cursor::new(data), &load_options()).unwrap();
        let chart = build(&table).unwrap();
        let series = &chart.figure.axes[0].series;
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].label, "Grid Size 32");
        assert_eq!(series[0].points, vec![(2.0, 1.67), (4.0, 3.3)]);
    }

    #[test]
    fn test_comment_lines_between_rows_are_skipped() {
        let data = "\
# N Threads Serial Parallel Speedup
64 2 1.0 0.55 1.8
# rerun below x
# a b c d
64 4 1.0 0.3 3.3
";
        let table = Table::from_reader(Cursor::new(data), &load_options()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.columns()[4], "Speedup");
        let chart = build(&table).unwrap();
        assert_eq!(chart.figure.axes[0].series[0].points, vec![(2.0, 1.8), (4.0, 3.3)]);
    }
}
