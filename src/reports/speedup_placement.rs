//! Speedup per grid size and thread placement.
//!
//! Input columns: `N Threads Placement Version ExecutionTime Speedup`, one header
//! line, `#` comment lines anywhere. `N/A` measurements are coerced to NaN and
//! leave gaps.

use super::{column_series, number_label};
use crate::{
    chart::{Axes, Chart, Figure, Marker, Palette},
    error::Result,
    group::{Key, group_by, unique_numeric},
    table::{LoadOptions, Table},
};

pub const DEFAULT_INPUT: &str = "speedup_threads_grids_placement.data";
pub const FILE_NAME: &str = "speedup_threads_grids_placements.png";

pub const GRID_SIZE: usize = 0;
pub const THREADS: usize = 1;
pub const PLACEMENT: usize = 2;
pub const VERSION: usize = 3;
pub const EXECUTION_TIME: usize = 4;
pub const SPEEDUP: usize = 5;

pub fn load_options() -> LoadOptions {
    LoadOptions::new().skip_rows(1).comment('#')
}

pub fn build(table: &Table) -> Result<Chart> {
    let mut axes =
        Axes::new("Speedup vs. Number of Threads for Different Grid Sizes and Placements")
            .labels("Number of Threads", "Speedup (Parallel / Optimized Parallel)")
            .x_ticks(unique_numeric(table, THREADS)?);

    let mut color = 0;
    for group in group_by(table, &[Key::numeric(GRID_SIZE), Key::text(PLACEMENT)])? {
        if group.is_empty() {
            continue;
        }
        let label = format!(
            "Grid Size {}, {}",
            number_label(group.values[0].as_f64()),
            group.values[1]
        );
        let series = column_series(table, &group.rows, THREADS, SPEEDUP, label)?
            .marker(Marker::Circle)
            .color(Palette::TAB10.color(color));
        if axes.plot(series) {
            color += 1;
        }
    }
    Ok(Chart::new(FILE_NAME, Figure::single(8.0, 5.0, axes)))
}
