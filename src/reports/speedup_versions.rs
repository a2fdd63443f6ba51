//! Baseline vs optimised parallel Jacobi speedup, per placement and grid size.
//!
//! Input columns: `N Threads Placement Version ExecutionTime Speedup`, one header
//! line. Version `1` is the baseline parallel solver, version `2` the optimised
//! one. Missing measurements are written as `N/A` and plotted as gaps; `#`
//! comment lines are skipped.
//!
//! Two charts are produced: the versions side by side with a shared speedup axis,
//! and both versions overlaid on a single panel.

use super::{column_series, number_label};
use crate::{
    chart::{Axes, Chart, Figure, LineStyle, Marker, Palette, Scale, Series},
    error::Result,
    group::{Key, KeyValue, select, unique_numeric, unique_text},
    table::{LoadOptions, Table},
};

pub const DEFAULT_INPUT: &str = "speedup_threads_grids_amdahl.data";
pub const SIDE_BY_SIDE_FILE_NAME: &str = "speedup_parallel_vs_optimized.png";
pub const COMBINED_FILE_NAME: &str = "speedup_comparison.png";

pub const GRID_SIZE: usize = 0;
pub const THREADS: usize = 1;
pub const PLACEMENT: usize = 2;
pub const VERSION: usize = 3;
pub const EXECUTION_TIME: usize = 4;
pub const SPEEDUP: usize = 5;

/// Thread counts shown on the x axis regardless of which were measured.
pub const THREAD_TICKS: [f64; 4] = [2.0, 4.0, 8.0, 16.0];

pub fn load_options() -> LoadOptions {
    LoadOptions::new().skip_rows(1).comment('#')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    Baseline = 1,
    Optimized = 2,
}

impl Version {
    fn marker(self) -> Marker {
        match self {
            Version::Baseline => Marker::Circle,
            Version::Optimized => Marker::Square,
        }
    }

    fn line(self) -> LineStyle {
        match self {
            Version::Baseline => LineStyle::Solid,
            Version::Optimized => LineStyle::Dashed,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Version::Baseline => "Baseline",
            Version::Optimized => "Improved",
        }
    }
}

/// Speedup curve of one (placement, grid size, version) combination.
fn version_series(
    table: &Table,
    placement: &str,
    grid_size: f64,
    version: Version,
    label: String,
) -> Result<Series> {
    let rows = select(
        table,
        &[
            (Key::numeric(GRID_SIZE), KeyValue::Number(grid_size)),
            (Key::text(PLACEMENT), KeyValue::Text(placement.to_string())),
            (Key::numeric(VERSION), KeyValue::Number(version as i32 as f64)),
        ],
    )?;
    Ok(column_series(table, &rows, THREADS, SPEEDUP, label)?
        .marker(version.marker())
        .line(version.line()))
}

fn thread_axes(title: &str) -> Axes {
    Axes::new(title)
        .labels("Number of Threads", "Speedup")
        .scales(Scale::Log10, Scale::Linear)
        .x_ticks(THREAD_TICKS.to_vec())
}

pub fn build(table: &Table) -> Result<Vec<Chart>> {
    let placements = unique_text(table, PLACEMENT)?;
    let grid_sizes = unique_numeric(table, GRID_SIZE)?;

    let mut panels = [
        (Version::Baseline, thread_axes("Speedup for Parallel Jacobi"), 0),
        (
            Version::Optimized,
            thread_axes("Speedup for Optimized Parallel Jacobi"),
            0,
        ),
    ];
    panels[1].1.y_label.clear();

    let mut combined = thread_axes("Speedup Comparison: Baseline vs Improved");
    let mut combined_color = 0;

    for placement in &placements {
        for &n in &grid_sizes {
            let base_label = format!("Grid {}, {}", number_label(n), placement);

            for (version, axes, color) in panels.iter_mut() {
                let series = version_series(table, placement, n, *version, base_label.clone())?
                    .color(Palette::TAB10.color(*color));
                if axes.plot(series) {
                    *color += 1;
                }
            }

            for version in [Version::Baseline, Version::Optimized] {
                let label = format!("{base_label}, {}", version.suffix());
                let series = version_series(table, placement, n, version, label)?
                    .color(Palette::TAB10.color(combined_color));
                if combined.plot(series) {
                    combined_color += 1;
                }
            }
        }
    }

    let mut side_by_side = Figure::subplots(1, 2, 14.0, 5.0).share_y();
    let [(_, baseline, _), (_, optimized, _)] = panels;
    side_by_side.set_axes(0, baseline)?;
    side_by_side.set_axes(1, optimized)?;

    Ok(vec![
        Chart::new(SIDE_BY_SIDE_FILE_NAME, side_by_side),
        Chart::new(COMBINED_FILE_NAME, Figure::single(10.0, 6.0, combined)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const DATA: &str = "\
N Threads Placement Version ExecutionTime Speedup
64 2 close 1 1.0 1.9
64 4 close 1 N/A N/A
64 8 close 1 0.4 4.8
64 2 close 2 0.8 2.4
64 4 close 2 0.5 3.9
128 2 spread 1 9.0 1.9
";

    fn charts() -> Vec<Chart> {
        let table = Table::from_reader(Cursor::new(DATA), &load_options()).unwrap();
        build(&table).unwrap()
    }

    #[test]
    fn test_file_names() {
        let charts = charts();
        assert_eq!(charts[0].file_name, "speedup_parallel_vs_optimized.png");
        assert_eq!(charts[1].file_name, "speedup_comparison.png");
        assert!(charts[0].figure.share_y);
    }

    #[test]
    fn test_na_speedup_leaves_gap() {
        let charts = charts();
        let baseline = &charts[0].figure.axes[0];
        let close = &baseline.series[0];
        assert_eq!(close.label, "Grid 64, close");
        assert_eq!(close.points.len(), 3);
        assert!(close.points[1].1.is_nan());
        assert_eq!(close.segments(Scale::Log10, Scale::Linear).len(), 2);
    }

    #[test]
    fn test_absent_combinations_are_omitted() {
        let charts = charts();
        let optimized = &charts[0].figure.axes[1];
        // Only 64/close has version 2 rows.
        assert_eq!(optimized.series.len(), 1);
        assert_eq!(optimized.series[0].line, LineStyle::Dashed);

        let combined: Vec<&str> = charts[1].figure.axes[0]
            .series
            .iter()
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(
            combined,
            [
                "Grid 64, close, Baseline",
                "Grid 64, close, Improved",
                "Grid 128, spread, Baseline"
            ]
        );
    }
}
