//! Integration tests building every report from the sample tables in `data/`.
//!
//! Rendering needs system fonts, so these tests stop at the [`Figure`] model: they
//! check the grouping, derived metrics, omitted series and output file names that
//! the chart binaries would draw.

use anyhow::{Result, anyhow, ensure};
use solver_plots::{
    Chart,
    chart::{LineStyle, Scale},
    group::{Key, group_by},
    render::tick_labels,
    reports::{
        convergence, gauss_scaling, iters_per_sec, results, speedup_placement, speedup_versions,
        threads_grids,
    },
    table::{LoadOptions, Table},
};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

fn load(name: &str, options: &LoadOptions) -> Result<Table> {
    Ok(Table::load(fixture(name), options)?)
}

fn labels(chart: &Chart, panel: usize) -> Vec<String> {
    chart.figure.axes[panel]
        .series
        .iter()
        .map(|s| s.label.clone())
        .collect()
}

#[test]
fn convergence_writes_one_chart_per_tolerance() -> Result<()> {
    let table = load(convergence::DEFAULT_INPUT, &convergence::load_options())?;
    let charts = convergence::build(&table)?;

    let names: Vec<&str> = charts.iter().map(|c| c.file_name.as_str()).collect();
    ensure!(
        names == ["jacobi_convergence_tol_1.0e-06.png", "jacobi_convergence_tol_1.0e-04.png"],
        "unexpected file names {names:?}"
    );
    for chart in &charts {
        ensure!(labels(chart, 0) == ["Grid Size 16", "Grid Size 32"]);
        ensure!(chart.figure.pixel_size() == (2400, 1500));
    }
    Ok(())
}

#[test]
fn gauss_scaling_has_ideal_line() -> Result<()> {
    let table = load(gauss_scaling::DEFAULT_INPUT, &gauss_scaling::load_options())?;
    let chart = gauss_scaling::build(&table)?;
    let axes = &chart.figure.axes[0];

    let ideal = axes
        .series
        .last()
        .ok_or_else(|| anyhow!("no series plotted"))?;
    ensure!(ideal.label == "Ideal Linear Scaling");
    ensure!(ideal.line == LineStyle::Dashed);
    ensure!(ideal.points == [(1.0, 1.0), (2.0, 2.0), (4.0, 4.0), (8.0, 8.0)]);
    ensure!(axes.y_ticks.as_ref().map(Vec::len) == Some(8));
    Ok(())
}

#[test]
fn iterations_per_second_shares_grid_axis() -> Result<()> {
    let options = iters_per_sec::load_options();
    let jacobi = load(iters_per_sec::DEFAULT_JACOBI_INPUT, &options)?;
    let gauss = load(iters_per_sec::DEFAULT_GAUSS_INPUT, &options)?;
    let chart = iters_per_sec::build(&jacobi, &gauss)?;

    ensure!(chart.file_name == "iterations_per_second.png");
    ensure!(chart.figure.share_x);
    ensure!(chart.figure.axes[0].y_scale == Scale::Log10);
    ensure!(labels(&chart, 1) == ["Jacobi Method", "Gauss-Seidel Method"]);
    Ok(())
}

#[test]
fn speedup_versions_turns_na_into_gaps() -> Result<()> {
    let table = load(speedup_versions::DEFAULT_INPUT, &speedup_versions::load_options())?;
    let speedups = table.numeric(speedup_versions::SPEEDUP)?;
    ensure!(speedups.iter().filter(|v| v.is_nan()).count() == 2);

    let charts = speedup_versions::build(&table)?;
    ensure!(charts.len() == 2);

    // 128/spread has no rows at all: absent from every panel.
    for chart in &charts {
        for panel in 0..chart.figure.axes.len() {
            ensure!(labels(chart, panel).iter().all(|l| !l.contains("128, spread")));
        }
    }

    let baseline = &charts[0].figure.axes[0];
    let close_64 = &baseline.series[0];
    ensure!(close_64.label == "Grid 64, close");
    ensure!(close_64.points.len() == 4 && close_64.points[3].1.is_nan());
    Ok(())
}

#[test]
fn placement_and_grid_charts_have_one_series_per_group() -> Result<()> {
    let table = load(speedup_placement::DEFAULT_INPUT, &speedup_placement::load_options())?;
    let chart = speedup_placement::build(&table)?;
    ensure!(
        labels(&chart, 0)
            == [
                "Grid Size 64, close",
                "Grid Size 64, spread",
                "Grid Size 128, close",
                "Grid Size 128, spread"
            ]
    );

    let table = load(threads_grids::DEFAULT_INPUT, &threads_grids::load_options())?;
    let chart = threads_grids::build(&table)?;
    ensure!(chart.file_name == "speedup_threads_grids.png");
    ensure!(labels(&chart, 0) == ["Grid Size 64", "Grid Size 128"]);
    Ok(())
}

#[test]
fn results_speedup_starts_at_one() -> Result<()> {
    let table = load(results::DEFAULT_INPUT, &results::load_options())?;
    let charts = results::build(&table)?;
    ensure!(charts.len() == 5);

    let speedup = &charts[1].figure.axes[0];
    for series in &speedup.series {
        ensure!(series.points[0] == (1.0, 1.0), "{} does not start at 1", series.label);
    }

    let metrics = results::derived_metrics(&table)?;
    let first = &metrics[0];
    ensure!((first.mlups - 131.072).abs() < 1e-9, "mlups = {}", first.mlups);
    ensure!(metrics.iter().all(|m| m.speedup.is_finite()));
    Ok(())
}

#[test]
fn thread_axes_are_labelled_at_thread_counts() -> Result<()> {
    let table = load(speedup_versions::DEFAULT_INPUT, &speedup_versions::load_options())?;
    for chart in speedup_versions::build(&table)? {
        for (panel, (x, _)) in tick_labels(&chart.figure).iter().enumerate() {
            ensure!(
                x == &["2", "4", "8", "16"],
                "{} panel {panel} x ticks {x:?}",
                chart.file_name
            );
        }
    }

    let table = load(gauss_scaling::DEFAULT_INPUT, &gauss_scaling::load_options())?;
    let chart = gauss_scaling::build(&table)?;
    let (x, y) = &tick_labels(&chart.figure)[0];
    ensure!(x == &["1", "2", "4", "8"], "gauss x ticks {x:?}");
    ensure!(y.first().map(String::as_str) == Some("1"), "gauss y ticks {y:?}");

    let table = load(results::DEFAULT_INPUT, &results::load_options())?;
    for chart in results::build(&table)?.iter().take(3) {
        let (x, _) = &tick_labels(&chart.figure)[0];
        ensure!(x == &["1", "2", "4", "8"], "{} x ticks {x:?}", chart.file_name);
    }
    Ok(())
}

#[test]
fn grouping_partitions_every_fixture() -> Result<()> {
    let table = load(speedup_versions::DEFAULT_INPUT, &speedup_versions::load_options())?;
    let groups = group_by(
        &table,
        &[
            Key::numeric(speedup_versions::GRID_SIZE),
            Key::text(speedup_versions::PLACEMENT),
            Key::numeric(speedup_versions::VERSION),
        ],
    )?;

    let mut rows: Vec<usize> = groups.iter().flat_map(|g| g.rows.clone()).collect();
    let total = rows.len();
    rows.sort_unstable();
    rows.dedup();
    ensure!(total == table.len() && rows.len() == table.len());
    Ok(())
}
