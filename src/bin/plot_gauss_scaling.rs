//! Plots Gauss-Seidel speedup against the number of threads, one curve per grid
//! size, together with the ideal linear-scaling line.

use anyhow::Result;
use clap::Parser;
use solver_plots::{
    reports::gauss_scaling,
    utils::{
        cli::{OutputArgs, load_table},
        logging,
    },
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "plot-gauss-scaling",
    about = "Plots Gauss-Seidel speedup vs. thread count for each grid size."
)]
struct GaussScalingArgs {
    /// Scaling table with columns `N Threads Time Speedup`.
    #[clap(long, value_name = "PATH", default_value = gauss_scaling::DEFAULT_INPUT)]
    input: PathBuf,

    #[clap(flatten)]
    output: OutputArgs,
}

fn main() -> Result<()> {
    logging::init()?;
    let args = GaussScalingArgs::parse();

    let table = load_table(&args.input, &gauss_scaling::load_options())?;
    let chart = gauss_scaling::build(&table)?;
    args.output.save_all(&mut [chart])?;
    Ok(())
}
