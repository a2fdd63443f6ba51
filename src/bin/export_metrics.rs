//! Exports the derived metrics of a Jacobi result table to CSV.
//!
//! Each input row becomes one CSV record with its speedup (relative to the
//! single-thread run of the same grid size) and MLUP/s. Undefined values are
//! written as `NaN`.

use anyhow::{Context, Result};
use clap::Parser;
use solver_plots::{
    reports::results::{self, derived_metrics},
    utils::{cli::load_table, logging},
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "export-metrics",
    about = "Writes speedup and MLUP/s for every solver run to a CSV file."
)]
struct ExportArgs {
    /// Result table with columns `Version N Threads Iterations Tolerance Final_Diff Time`.
    #[clap(long, value_name = "PATH", default_value = results::DEFAULT_INPUT)]
    input: PathBuf,

    /// Path to the output CSV file.
    #[clap(long, value_name = "PATH", default_value = "jacobi_metrics.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    logging::init()?;
    let args = ExportArgs::parse();

    let table = load_table(&args.input, &results::load_options())?;
    let records = derived_metrics(&table)?;

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("Failed to create CSV writer for {:?}", &args.output))?;
    for record in &records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    log::info!(
        "Exported metrics for {} runs to {:?}.",
        records.len(),
        &args.output
    );
    Ok(())
}
