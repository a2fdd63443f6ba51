//! Plots speedup against the number of threads, one curve per grid size.

use anyhow::Result;
use clap::Parser;
use solver_plots::{
    reports::threads_grids,
    utils::{
        cli::{OutputArgs, load_table},
        logging,
    },
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "plot-threads-grids",
    about = "Plots speedup vs. thread count for each grid size."
)]
struct ThreadsGridsArgs {
    /// Table with columns `N Threads Serial_Time Parallel_Time Speedup`.
    #[clap(long, value_name = "PATH", default_value = threads_grids::DEFAULT_INPUT)]
    input: PathBuf,

    #[clap(flatten)]
    output: OutputArgs,
}

fn main() -> Result<()> {
    logging::init()?;
    let args = ThreadsGridsArgs::parse();

    let table = load_table(&args.input, &threads_grids::load_options())?;
    let chart = threads_grids::build(&table)?;
    args.output.save_all(&mut [chart])?;
    Ok(())
}
