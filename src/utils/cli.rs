//! Command-line arguments shared by the chart binaries.

use crate::{
    chart::Chart,
    render::save_png,
    table::{LoadOptions, Table},
};
use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

/// Highest resolution accepted by `--dpi`.
pub const MAX_DPI: i64 = 1200;

/// Where and how charts are written.
///
/// Flattened into each binary's own argument struct so every chart program
/// accepts the same output flags.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Directory the PNG files are written to. Created if missing.
    #[clap(long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Overrides the resolution (dots per inch) of every chart.
    #[clap(long, value_parser = clap::value_parser!(u32).range(1..=MAX_DPI))]
    pub dpi: Option<u32>,
}

impl OutputArgs {
    /// Renders every chart into the output directory and returns the written paths.
    pub fn save_all(&self, charts: &mut [Chart]) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(&self.output_dir).with_context(|| {
            format!("Failed to create output directory: {:?}", self.output_dir)
        })?;

        let mut written = Vec::with_capacity(charts.len());
        for chart in charts.iter_mut() {
            if let Some(dpi) = self.dpi {
                chart.figure.dpi = dpi;
            }
            let path = save_png(chart, &self.output_dir)
                .with_context(|| format!("Failed to render {}", chart.file_name))?;
            written.push(path);
        }
        Ok(written)
    }
}

/// Loads a result table, attaching the path to any error.
pub fn load_table(path: &Path, options: &LoadOptions) -> Result<Table> {
    let table =
        Table::load(path, options).with_context(|| format!("Failed to load table {path:?}"))?;
    log::info!(
        "Loaded {} rows ({} columns) from {:?}",
        table.len(),
        table.width(),
        path
    );
    Ok(table)
}
