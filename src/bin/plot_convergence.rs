//! Plots the convergence history of the Jacobi method.
//!
//! One chart is written per tolerance found in the input, named
//! `jacobi_convergence_tol_<tolerance>.png`, with one residual curve per grid size.

use anyhow::Result;
use clap::Parser;
use solver_plots::{
    reports::convergence,
    utils::{
        cli::{OutputArgs, load_table},
        logging,
    },
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "plot-convergence",
    about = "Plots Jacobi residual histories, one chart per tolerance."
)]
struct ConvergenceArgs {
    /// Convergence table with columns `Iteration Grid_Size Tolerance Diff`.
    #[clap(long, value_name = "PATH", default_value = convergence::DEFAULT_INPUT)]
    input: PathBuf,

    #[clap(flatten)]
    output: OutputArgs,
}

fn main() -> Result<()> {
    logging::init()?;
    let args = ConvergenceArgs::parse();

    let table = load_table(&args.input, &convergence::load_options())?;
    let mut charts = convergence::build(&table)?;
    if charts.is_empty() {
        log::warn!("No tolerance values found in {:?}; nothing to plot.", args.input);
    }

    let written = args.output.save_all(&mut charts)?;
    log::info!("Wrote {} convergence chart(s).", written.len());
    Ok(())
}
