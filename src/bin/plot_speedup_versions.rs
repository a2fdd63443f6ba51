//! Compares the speedup of the baseline and optimised parallel Jacobi solvers for
//! every thread placement and grid size.
//!
//! Writes a side-by-side chart (`speedup_parallel_vs_optimized.png`) and an
//! overlaid one (`speedup_comparison.png`). `N/A` measurements appear as gaps.

use anyhow::Result;
use clap::Parser;
use solver_plots::{
    reports::speedup_versions,
    utils::{
        cli::{OutputArgs, load_table},
        logging,
    },
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "plot-speedup-versions",
    about = "Plots baseline vs. optimised parallel Jacobi speedup."
)]
struct SpeedupVersionsArgs {
    /// Table with columns `N Threads Placement Version ExecutionTime Speedup`.
    #[clap(long, value_name = "PATH", default_value = speedup_versions::DEFAULT_INPUT)]
    input: PathBuf,

    #[clap(flatten)]
    output: OutputArgs,
}

fn main() -> Result<()> {
    logging::init()?;
    let args = SpeedupVersionsArgs::parse();

    let table = load_table(&args.input, &speedup_versions::load_options())?;
    let mut charts = speedup_versions::build(&table)?;
    args.output.save_all(&mut charts)?;
    Ok(())
}
