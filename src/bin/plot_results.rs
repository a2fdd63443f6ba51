//! Plots the Jacobi solver result table.
//!
//! Produces five charts: execution time, speedup and MLUP/s against the thread
//! count, then execution time and iterations to convergence against the grid size.
//! Point `--input` at `jacobi_noopt_results.data` to plot the unoptimised runs.

use anyhow::Result;
use clap::Parser;
use solver_plots::{
    reports::results,
    utils::{
        cli::{OutputArgs, load_table},
        logging,
    },
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "plot-results",
    about = "Plots time, speedup, MLUP/s and iteration charts for Jacobi solver runs."
)]
struct ResultsArgs {
    /// Result table with columns `Version N Threads Iterations Tolerance Final_Diff Time`.
    #[clap(long, value_name = "PATH", default_value = results::DEFAULT_INPUT)]
    input: PathBuf,

    #[clap(flatten)]
    output: OutputArgs,
}

fn main() -> Result<()> {
    logging::init()?;
    let args = ResultsArgs::parse();

    let table = load_table(&args.input, &results::load_options())?;
    let mut charts = results::build(&table)?;
    let written = args.output.save_all(&mut charts)?;
    log::info!("Wrote {} result chart(s).", written.len());
    Ok(())
}
