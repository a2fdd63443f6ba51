//! Jacobi vs Gauss-Seidel: iteration rate and iteration count until convergence.
//!
//! Input columns: `Iterations N Time Iterations_per_sec`, with `#` comment lines.
//! The two methods are read from separate files and drawn as two stacked panels
//! sharing the grid-size axis.

use crate::{
    chart::{Axes, Chart, Figure, Marker, Rgb, Scale, Series},
    error::Result,
    table::{LoadOptions, Table},
};

pub const DEFAULT_JACOBI_INPUT: &str = "jacobi_iterspersec.data";
pub const DEFAULT_GAUSS_INPUT: &str = "gauss_iterspersec.data";
pub const FILE_NAME: &str = "iterations_per_second.png";

pub const TOTAL_ITERATIONS: usize = 0;
pub const GRID_SIZE: usize = 1;
pub const TIME: usize = 2;
pub const ITERATIONS_PER_SEC: usize = 3;

pub fn load_options() -> LoadOptions {
    LoadOptions::new().comment('#')
}

struct Method<'a> {
    name: &'static str,
    table: &'a Table,
    color: Rgb,
    marker: Marker,
}

impl Method<'_> {
    fn series(&self, y_col: usize) -> Result<Series> {
        let xs = self.table.numeric(GRID_SIZE)?;
        let ys = self.table.numeric(y_col)?;
        Ok(Series::new(self.name, &xs, &ys)
            .color(self.color)
            .marker(self.marker))
    }
}

pub fn build(jacobi: &Table, gauss: &Table) -> Result<Chart> {
    let methods = [
        Method {
            name: "Jacobi Method",
            table: jacobi,
            color: Rgb::BLUE,
            marker: Marker::Circle,
        },
        Method {
            name: "Gauss-Seidel Method",
            table: gauss,
            color: Rgb::RED,
            marker: Marker::Square,
        },
    ];

    let mut rate = Axes::new("Iterations per Second vs Grid Size until Convergence")
        .labels("", "Iterations per Second")
        .scales(Scale::Linear, Scale::Log10);
    let mut total = Axes::new("Total Iterations vs Grid Size until Convergence")
        .labels("Grid Size (N)", "Total Iterations");

    for method in &methods {
        rate.plot(method.series(ITERATIONS_PER_SEC)?);
        total.plot(method.series(TOTAL_ITERATIONS)?);
    }

    let mut figure = Figure::subplots(2, 1, 8.0, 10.0).share_x();
    figure.set_axes(0, rate)?;
    figure.set_axes(1, total)?;
    Ok(Chart::new(FILE_NAME, figure))
}
