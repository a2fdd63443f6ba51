//! Convergence history of the Jacobi method.
//!
//! Input columns: `Iteration Grid_Size Tolerance Diff`, one header line.
//! `#` comment lines are skipped anywhere in the file.
//! One chart is produced per distinct tolerance, with one residual curve per
//! grid size on a logarithmic y axis.

use super::{column_series, number_label};
use crate::{
    chart::{Axes, Chart, Figure, LegendPosition, Palette, Scale, format_sci},
    error::Result,
    group::{Key, group_by, unique_numeric},
    table::{LoadOptions, Table},
};

pub const DEFAULT_INPUT: &str = "jacobi_convergence.data";

pub const ITERATION: usize = 0;
pub const GRID_SIZE: usize = 1;
pub const TOLERANCE: usize = 2;
pub const DIFF: usize = 3;

pub fn load_options() -> LoadOptions {
    LoadOptions::new().skip_rows(1).comment('#')
}

/// Output file name for a tolerance, e.g. `jacobi_convergence_tol_1.0e-06.png`.
pub fn file_name(tolerance: f64) -> String {
    format!("jacobi_convergence_tol_{}.png", format_sci(tolerance, 1))
}

pub fn build(table: &Table) -> Result<Vec<Chart>> {
    let tolerances = unique_numeric(table, TOLERANCE)?;
    let grid_sizes = unique_numeric(table, GRID_SIZE)?;
    if grid_sizes.is_empty() {
        return Ok(Vec::new());
    }

    // Tolerance varies slowest, so each chunk holds every grid size for one tolerance.
    let groups = group_by(table, &[Key::numeric(TOLERANCE), Key::numeric(GRID_SIZE)])?;
    let mut charts = Vec::with_capacity(tolerances.len());

    for (&tolerance, chunk) in tolerances.iter().zip(groups.chunks(grid_sizes.len())) {
        let mut axes = Axes::new(format!(
            "Convergence of Jacobi Method (Tolerance {})",
            format_sci(tolerance, 1)
        ))
        .labels("Iteration Number", "Mean Squared Difference (Diff)")
        .scales(Scale::Linear, Scale::Log10)
        .legend(LegendPosition::UpperRight);

        // Colour follows the grid size index so a size keeps its colour across charts.
        for (i, (group, &n)) in chunk.iter().zip(&grid_sizes).enumerate() {
            if group.is_empty() {
                continue;
            }
            let series = column_series(
                table,
                &group.rows,
                ITERATION,
                DIFF,
                format!("Grid Size {}", number_label(n)),
            )?;
            axes.plot(series.color(Palette::SOFT.color(i)));
        }

        charts.push(Chart::new(
            file_name(tolerance),
            Figure::single(8.0, 5.0, axes).dpi(300),
        ));
    }
    Ok(charts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const DATA: &str = "\
Iteration Grid_Size Tolerance Diff
1 16 1e-6 0.5
2 16 1e-6 0.1
1 32 1e-6 0.7
1 16 1e-4 0.5
2 16 1e-4 0.05
";

    #[test]
    fn test_one_chart_per_tolerance() {
        let table = Table::from_reader(Cursor::new(DATA), &load_options()).unwrap();
        let charts = build(&table).unwrap();
        let names: Vec<&str> = charts.iter().map(|c| c.file_name.as_str()).collect();
        assert_eq!(
            names,
            [
                "jacobi_convergence_tol_1.0e-06.png",
                "jacobi_convergence_tol_1.0e-04.png"
            ]
        );
    }

    #[test]
    fn test_missing_grid_size_is_omitted() {
        let table = Table::from_reader(Cursor::new(DATA), &load_options()).unwrap();
        let charts = build(&table).unwrap();
        let tight = &charts[0].figure.axes[0];
        assert_eq!(tight.series.len(), 2);
        let loose = &charts[1].figure.axes[0];
        assert_eq!(loose.series.len(), 1);
        assert_eq!(loose.series[0].label, "Grid Size 16");
        assert_eq!(loose.series[0].points, vec![(1.0, 0.5), (2.0, 0.05)]);
    }

    #[test]
    fn test_colours_follow_grid_index() {
        let table = Table::from_reader(Cursor::new(DATA), &load_options()).unwrap();
        let charts = build(&table).unwrap();
        let tight = &charts[0].figure.axes[0];
        assert_eq!(tight.series[1].color, Palette::SOFT.color(1));
        assert_eq!(charts[0].figure.dpi, 300);
        assert_eq!(tight.y_scale, Scale::Log10);
    }

    #[test]
    fn test_comment_row_with_data_width_is_not_a_row() {
        let data = "Iteration Grid_Size Tolerance Diff\n1 16 1e-6 0.5\n#rerun 16 1e-6 0\n2 16 1e-6 0.1\n";
        let table = Table::from_reader(Cursor::new(data), &load_options()).unwrap();
        assert_eq!(table.len(), 2);
        let charts = build(&table).unwrap();
        assert_eq!(charts[0].figure.axes[0].series[0].points, vec![(1.0, 0.5), (2.0, 0.1)]);
    }
}
