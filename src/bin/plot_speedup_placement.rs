//! Plots speedup against the number of threads for every combination of grid
//! size and thread placement.

use anyhow::Result;
use clap::Parser;
use solver_plots::{
    reports::speedup_placement,
    utils::{
        cli::{OutputArgs, load_table},
        logging,
    },
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "plot-speedup-placement",
    about = "Plots speedup vs. thread count per grid size and placement."
)]
struct SpeedupPlacementArgs {
    /// Table with columns `N Threads Placement Version ExecutionTime Speedup`.
    #[clap(long, value_name = "PATH", default_value = speedup_placement::DEFAULT_INPUT)]
    input: PathBuf,

    #[clap(flatten)]
    output: OutputArgs,
}

fn main() -> Result<()> {
    logging::init()?;
    let args = SpeedupPlacementArgs::parse();

    let table = load_table(&args.input, &speedup_placement::load_options())?;
    let chart = speedup_placement::build(&table)?;
    args.output.save_all(&mut [chart])?;
    Ok(())
}
