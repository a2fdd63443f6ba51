//! Gauss-Seidel strong scaling.
//!
//! Input columns: `N Threads Time Speedup`, one header line.
//! `#` comment lines are skipped anywhere in the file.

use super::{column_series, number_label};
use crate::{
    chart::{Axes, Chart, Figure, LineStyle, Marker, Palette, Rgb, Series},
    error::Result,
    group::{Key, group_by, unique_numeric},
    metrics::ideal_speedup,
    table::{LoadOptions, Table},
};

pub const DEFAULT_INPUT: &str = "gauss_seidel_scaling.data";
pub const FILE_NAME: &str = "gauss_seidel_speedup.png";

pub const GRID_SIZE: usize = 0;
pub const THREADS: usize = 1;
pub const TIME: usize = 2;
pub const SPEEDUP: usize = 3;

pub fn load_options() -> LoadOptions {
    LoadOptions::new().skip_rows(1).comment('#')
}

pub fn build(table: &Table) -> Result<Chart> {
    let threads = unique_numeric(table, THREADS)?;
    let max_threads = threads.last().copied().unwrap_or(1.0).max(1.0);

    let mut axes = Axes::new("Gauss-Seidel Speedup vs. Number of Threads for Different Grid Sizes")
        .labels("Number of Threads", "Speedup")
        .x_ticks(threads.clone())
        .y_ticks((1..=max_threads as usize).map(|t| t as f64).collect());

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

    axes.plot(
        Series::from_points("Ideal Linear Scaling", ideal_speedup(&threads))
            .color(Rgb::BLACK)
            .line(LineStyle::Dashed),
    );

    Ok(Chart::new(FILE_NAME, Figure::single(8.0, 5.0, axes)))
}
