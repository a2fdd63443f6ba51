//! Compares the Jacobi and Gauss-Seidel methods by iteration rate and by the
//! number of iterations needed to converge, as two stacked panels.

use anyhow::Result;
use clap::Parser;
use solver_plots::{
    reports::iters_per_sec,
    utils::{
        cli::{OutputArgs, load_table},
        logging,
    },
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "plot-iters-per-sec",
    about = "Plots iterations per second and total iterations for Jacobi and Gauss-Seidel."
)]
struct ItersPerSecArgs {
    /// Jacobi table with columns `Iterations N Time Iterations_per_sec`.
    #[clap(long, value_name = "PATH", default_value = iters_per_sec::DEFAULT_JACOBI_INPUT)]
    jacobi: PathBuf,

    /// Gauss-Seidel table with the same columns.
    #[clap(long, value_name = "PATH", default_value = iters_per_sec::DEFAULT_GAUSS_INPUT)]
    gauss: PathBuf,

    #[clap(flatten)]
    output: OutputArgs,
}

fn main() -> Result<()> {
    logging::init()?;
    let args = ItersPerSecArgs::parse();

    let options = iters_per_sec::load_options();
    let jacobi = load_table(&args.jacobi, &options)?;
    let gauss = load_table(&args.gauss, &options)?;

    let chart = iters_per_sec::build(&jacobi, &gauss)?;
    args.output.save_all(&mut [chart])?;
    Ok(())
}
