//! Charts and derived metrics for the Jacobi solver result table.
//!
//! Input columns (no header, `#` comment lines):
//! `Version N Threads Iterations Tolerance Final_Diff Time`.
//!
//! Five charts are produced: execution time, speedup and MLUP/s against the
//! thread count (one curve per grid size), then execution time and iteration
//! count against the grid size (one curve per thread count).

use super::{column_series, number_label};
use crate::{
    chart::{Axes, Chart, Figure, Marker, Palette, Scale, Series},
    error::Result,
    group::{Group, Key, group_by},
    metrics::{mlups, speedup},
    table::{LoadOptions, Table},
};
use serde::Serialize;

pub const DEFAULT_INPUT: &str = "jacobi_opt_results.data";

pub const NAMES: [&str; 7] = [
    "Version",
    "N",
    "Threads",
    "Iterations",
    "Tolerance",
    "Final_Diff",
    "Time",
];

pub const VERSION: usize = 0;
pub const GRID_SIZE: usize = 1;
pub const THREADS: usize = 2;
pub const ITERATIONS: usize = 3;
pub const TOLERANCE: usize = 4;
pub const FINAL_DIFF: usize = 5;
pub const TIME: usize = 6;

pub fn load_options() -> LoadOptions {
    LoadOptions::new().comment('#').names(NAMES)
}

/// One row of the result table with its derived metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedMetrics {
    pub version: String,
    pub n: f64,
    pub threads: f64,
    pub iterations: f64,
    pub time_s: f64,
    /// NaN when the grid size has no single-thread run.
    pub speedup: f64,
    pub mlups: f64,
}

/// Computes speedup and MLUP/s for every row, in file order.
///
/// Speedup is relative to the first single-thread row of the same grid size.
pub fn derived_metrics(table: &Table) -> Result<Vec<DerivedMetrics>> {
    let n = table.numeric(GRID_SIZE)?;
    let threads = table.numeric(THREADS)?;
    let iterations = table.numeric(ITERATIONS)?;
    let times = table.numeric(TIME)?;

    let mut speedups = vec![f64::NAN; table.len()];
    for group in group_by(table, &[Key::numeric(GRID_SIZE)])? {
        let group_threads = group.numeric(table, THREADS)?;
        let group_times = group.numeric(table, TIME)?;
        match speedup(&group_threads, &group_times) {
            Some(values) => {
                for (&row, value) in group.rows.iter().zip(values) {
                    speedups[row] = value;
                }
            }
            None => log::warn!(
                "No single-thread run for N={}; speedup left undefined",
                group.values[0]
            ),
        }
    }

    (0..table.len())
        .map(|i| {
            Ok(DerivedMetrics {
                version: table.cell(i, VERSION)?.to_string(),
                n: n[i],
                threads: threads[i],
                iterations: iterations[i],
                time_s: times[i],
                speedup: speedups[i],
                mlups: mlups(n[i], iterations[i], times[i]),
            })
        })
        .collect()
}

fn thread_axes(title: &str, y_label: &str, y_scale: Scale) -> Axes {
    Axes::new(title)
        .labels("Number of Threads", y_label)
        .scales(Scale::Log2, y_scale)
}

fn grid_axes(title: &str, y_label: &str) -> Axes {
    Axes::new(title).labels("Grid Size (N)", y_label)
}

fn styled(series: Series, index: usize) -> Series {
    series
        .marker(Marker::Circle)
        .color(Palette::TAB10.color(index))
}

fn per_group(
    axes: &mut Axes,
    groups: &[Group],
    mut make: impl FnMut(&Group) -> Result<Option<Series>>,
) -> Result<()> {
    let mut index = 0;
    for group in groups.iter().filter(|g| !g.is_empty()) {
        if let Some(series) = make(group)? {
            if axes.plot(styled(series, index)) {
                index += 1;
            }
        }
    }
    Ok(())
}

pub fn build(table: &Table) -> Result<Vec<Chart>> {
    let by_grid = group_by(table, &[Key::numeric(GRID_SIZE)])?;
    let by_threads = group_by(table, &[Key::numeric(THREADS)])?;
    let grid_label = |g: &Group| format!("N={}", number_label(g.values[0].as_f64()));
    let threads_label = |g: &Group| format!("Threads={}", number_label(g.values[0].as_f64()));

    let mut time = thread_axes(
        "Execution Time vs. Number of Threads",
        "Execution Time (s)",
        Scale::Linear,
    );
    per_group(&mut time, &by_grid, |g| {
        column_series(table, &g.rows, THREADS, TIME, grid_label(g)).map(Some)
    })?;

    let mut scaling = thread_axes("Speedup vs. Number of Threads", "Speedup", Scale::Log2);
    per_group(&mut scaling, &by_grid, |g| {
        let threads = g.numeric(table, THREADS)?;
        let times = g.numeric(table, TIME)?;
        Ok(match speedup(&threads, &times) {
            Some(values) => Some(Series::new(grid_label(g), &threads, &values)),
            None => {
                log::warn!("Skipping speedup curve for {}: no single-thread run", grid_label(g));
                None
            }
        })
    })?;

    let mut throughput = thread_axes(
        "MLUP/s vs. Number of Threads",
        "MLUP/s (Millions of Lattice Updates per Second)",
        Scale::Linear,
    );
    per_group(&mut throughput, &by_grid, |g| {
        let n = g.numeric(table, GRID_SIZE)?;
        let threads = g.numeric(table, THREADS)?;
        let iterations = g.numeric(table, ITERATIONS)?;
        let times = g.numeric(table, TIME)?;
        let values: Vec<f64> = n
            .iter()
            .zip(&iterations)
            .zip(&times)
            .map(|((&n, &it), &t)| mlups(n, it, t))
            .collect();
        Ok(Some(Series::new(grid_label(g), &threads, &values)))
    })?;

    let mut time_by_grid = grid_axes("Execution Time vs. Grid Size", "Execution Time (s)");
    per_group(&mut time_by_grid, &by_threads, |g| {
        column_series(table, &g.rows, GRID_SIZE, TIME, threads_label(g)).map(Some)
    })?;

    let mut iterations_by_grid = grid_axes("Iterations vs. Grid Size", "Iterations to Convergence");
    per_group(&mut iterations_by_grid, &by_threads, |g| {
        column_series(table, &g.rows, GRID_SIZE, ITERATIONS, threads_label(g)).map(Some)
    })?;

    Ok(vec![
        Chart::new("execution_time_vs_threads.png", Figure::single(8.0, 6.0, time)),
        Chart::new("speedup_vs_threads.png", Figure::single(8.0, 6.0, scaling)),
        Chart::new("mlups_vs_threads.png", Figure::single(8.0, 6.0, throughput)),
        Chart::new("execution_time_vs_N.png", Figure::single(8.0, 6.0, time_by_grid)),
        Chart::new("iterations_vs_N.png", Figure::single(8.0, 6.0, iterations_by_grid)),
    ])
}
