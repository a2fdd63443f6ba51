//! Chart definitions for each benchmark result file.
//!
//! Every submodule describes one input schema (its fixed column positions, the
//! default input path and how to load it) and a `build` function that turns a
//! loaded [`Table`] into one or more named [`Chart`]s. Nothing here draws; the
//! binaries pass the returned charts to [`crate::render::save_png`].
//!
//! - **`convergence`**: residual history per grid size, one chart per tolerance.
//! - **`gauss_scaling`**: Gauss-Seidel speedup against an ideal scaling line.
//! - **`iters_per_sec`**: Jacobi vs Gauss-Seidel throughput and iteration counts.
//! - **`speedup_versions`**: baseline vs optimised parallel Jacobi per placement.
//! - **`speedup_placement`**: speedup per grid size and thread placement.
//! - **`threads_grids`**: speedup per grid size.
//! - **`results`**: time, speedup, MLUP/s and iteration charts from solver runs,
//!   plus the per-row derived metrics used by the CSV export.

pub mod convergence;
pub mod gauss_scaling;
pub mod iters_per_sec;
pub mod results;
pub mod speedup_placement;
pub mod speedup_versions;
pub mod threads_grids;

use crate::{chart::Series, error::Result, group::KeyValue, table::Table};

/// Builds a series from two numeric columns restricted to `rows`.
pub(crate) fn column_series(
    table: &Table,
    rows: &[usize],
    x_col: usize,
    y_col: usize,
    label: impl Into<String>,
) -> Result<Series> {
    let xs = table.numeric_at(rows, x_col)?;
    let ys = table.numeric_at(rows, y_col)?;
    Ok(Series::new(label, &xs, &ys))
}

/// Renders a numeric key the way it appears in legends (`64`, not `64.0`).
pub(crate) fn number_label(value: f64) -> String {
    KeyValue::Number(value).to_string()
}
