//! Chart generation for Jacobi and Gauss-Seidel benchmark result files.
//!
//! The benchmark harness (not part of this crate) writes its measurements as
//! whitespace-delimited text tables: convergence histories, thread-scaling sweeps,
//! per-placement speedups and so on. This crate loads those tables, groups their
//! rows by key columns, derives metrics such as speedup and MLUP/s, and renders
//! one line per group to PNG files.
//!
//! ## Pipeline
//!
//! 1. **Load** ([`table`]): every cell is kept as text; numeric views coerce
//!    unparseable cells such as `N/A` to NaN instead of failing.
//! 2. **Group** ([`group`]): the cross-product of the distinct values of one or
//!    more key columns, each combination selecting the rows that match all keys.
//! 3. **Derive** ([`metrics`]): elementwise speedup, MLUP/s and throughput.
//! 4. **Describe** ([`chart`], [`reports`]): an explicit [`chart::Figure`] value
//!    holding axes and series. Groups with no drawable points are omitted.
//! 5. **Render** ([`render`]): draw the figure with `plotters` and save it.
//!
//! ## Example Usage
//!
//! ```rust
//! use solver_plots::{metrics, reports::results, table::Table};
//! use std::io::Cursor;
//!
//! let data = "\
//! ## Version N Threads Iterations Tolerance Final_Diff Time
//! opt 64 1 1000 1e-6 9e-7 8.0
//! opt 64 4 1000 1e-6 9e-7 2.0
//! ";
//! let table = Table::from_reader(Cursor::new(data), &results::load_options()).unwrap();
//! let rows = results::derived_metrics(&table).unwrap();
//! assert_eq!(rows[0].speedup, 1.0);
//! assert_eq!(rows[1].speedup, 4.0);
//! assert!((metrics::mlups(64.0, 1000.0, 2.0) - 131.072).abs() < 1e-9);
//!
//! let charts = results::build(&table).unwrap();
//! assert_eq!(charts[1].file_name, "speedup_vs_threads.png");
//! ```

pub mod chart;
pub mod error;
pub mod group;
pub mod metrics;
pub mod render;
pub mod reports;
pub mod table;
pub mod utils;

pub use chart::{Chart, Figure};
pub use error::{PlotError, Result};
pub use table::{LoadOptions, Table};
