//! An explicit, backend-independent chart model.
//!
//! Report code builds a [`Figure`] value (a grid of [`Axes`], each holding line
//! [`Series`]) and hands it to [`crate::render`]. Nothing here touches a drawing
//! backend, which keeps chart construction testable without fonts or files.

use crate::error::{PlotError, Result};

/// An sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const BLUE: Rgb = Rgb(0, 0, 255);
    pub const RED: Rgb = Rgb(255, 0, 0);
}

/// A fixed colour cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette(&'static [Rgb]);

impl Palette {
    /// The ten-colour default cycle of common plotting tools.
    pub const TAB10: Palette = Palette(&[
        Rgb(0x1f, 0x77, 0xb4),
        Rgb(0xff, 0x7f, 0x0e),
        Rgb(0x2c, 0xa0, 0x2c),
        Rgb(0xd6, 0x27, 0x28),
        Rgb(0x94, 0x67, 0xbd),
        Rgb(0x8c, 0x56, 0x4b),
        Rgb(0xe3, 0x77, 0xc2),
        Rgb(0x7f, 0x7f, 0x7f),
        Rgb(0xbc, 0xbd, 0x22),
        Rgb(0x17, 0xbe, 0xcf),
    ]);

    /// Pink, blue, yellow, green.
    pub const SOFT: Palette = Palette(&[
        Rgb(0xE6, 0x39, 0x46),
        Rgb(0x45, 0x7B, 0x9D),
        Rgb(0xF4, 0xA2, 0x61),
        Rgb(0x2A, 0x9D, 0x8F),
    ]);

    /// The `i`-th colour, wrapping around.
    pub fn color(&self, i: usize) -> Rgb {
        self.0[i % self.0.len()]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Marker {
    #[default]
    None,
    Circle,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
}

/// Axis scaling. Log scales drop non-positive values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scale {
    #[default]
    Linear,
    Log10,
    Log2,
}

impl Scale {
    /// Maps a data value into plotting space, or `None` if it cannot be shown.
    pub fn apply(self, v: f64) -> Option<f64> {
        if !v.is_finite() {
            return None;
        }
        match self {
            Scale::Linear => Some(v),
            Scale::Log10 if v > 0.0 => Some(v.log10()),
            Scale::Log2 if v > 0.0 => Some(v.log2()),
            _ => None,
        }
    }

    /// Maps a plotting-space coordinate back to a data value.
    pub fn invert(self, v: f64) -> f64 {
        match self {
            Scale::Linear => v,
            Scale::Log10 => 10f64.powf(v),
            Scale::Log2 => 2f64.powf(v),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendPosition {
    #[default]
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
    Hidden,
}

/// One plotted line.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
    pub color: Rgb,
    pub marker: Marker,
    pub line: LineStyle,
    /// Stroke width in pixels at 100 dpi.
    pub width: u32,
}

impl Series {
    /// Pairs `xs` with `ys`; extra elements of the longer slice are ignored.
    pub fn new(label: impl Into<String>, xs: &[f64], ys: &[f64]) -> Self {
        Self::from_points(label, xs.iter().copied().zip(ys.iter().copied()).collect())
    }

    pub fn from_points(label: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Series {
            label: label.into(),
            points,
            color: Palette::TAB10.color(0),
            marker: Marker::None,
            line: LineStyle::Solid,
            width: 2,
        }
    }

    pub fn color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    pub fn line(mut self, line: LineStyle) -> Self {
        self.line = line;
        self
    }

    /// True if at least one point is finite on both axes.
    pub fn has_data(&self) -> bool {
        self.points
            .iter()
            .any(|&(x, y)| x.is_finite() && y.is_finite())
    }

    /// Splits the series into continuous runs of drawable points in plotting
    /// space. A point that cannot be shown on the given scales breaks the line.
    pub fn segments(&self, x_scale: Scale, y_scale: Scale) -> Vec<Vec<(f64, f64)>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();
        for &(x, y) in &self.points {
            match (x_scale.apply(x), y_scale.apply(y)) {
                (Some(px), Some(py)) => current.push((px, py)),
                _ => {
                    if !current.is_empty() {
                        segments.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }
}

/// A single plotting panel.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Axes {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_scale: Scale,
    pub y_scale: Scale,
    /// Data-space tick values; when set, the axis spans exactly these ticks.
    pub x_ticks: Option<Vec<f64>>,
    pub y_ticks: Option<Vec<f64>>,
    pub legend: LegendPosition,
    pub grid: bool,
    pub series: Vec<Series>,
}

impl Axes {
    pub fn new(title: impl Into<String>) -> Self {
        Axes {
            title: title.into(),
            grid: true,
            ..Default::default()
        }
    }

    pub fn labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_label = x.into();
        self.y_label = y.into();
        self
    }

    pub fn scales(mut self, x: Scale, y: Scale) -> Self {
        self.x_scale = x;
        self.y_scale = y;
        self
    }

    pub fn x_ticks(mut self, ticks: Vec<f64>) -> Self {
        self.x_ticks = Some(ticks);
        self
    }

    pub fn y_ticks(mut self, ticks: Vec<f64>) -> Self {
        self.y_ticks = Some(ticks);
        self
    }

    pub fn legend(mut self, position: LegendPosition) -> Self {
        self.legend = position;
        self
    }

    /// Adds a series unless it has no finite point. Returns whether it was added.
    pub fn plot(&mut self, series: Series) -> bool {
        if !series.has_data() {
            log::debug!("Omitting empty series '{}'", series.label);
            return false;
        }
        self.series.push(series);
        true
    }

    /// Plotting-space extent of all drawable points and ticks on each axis.
    pub fn extent(&self) -> (Option<(f64, f64)>, Option<(f64, f64)>) {
        let mut xs = Extent::default();
        let mut ys = Extent::default();
        for series in &self.series {
            for segment in series.segments(self.x_scale, self.y_scale) {
                for (x, y) in segment {
                    xs.add(x);
                    ys.add(y);
                }
            }
        }
        if let Some(ticks) = &self.x_ticks {
            ticks.iter().filter_map(|&t| self.x_scale.apply(t)).for_each(|t| xs.add(t));
        }
        if let Some(ticks) = &self.y_ticks {
            ticks.iter().filter_map(|&t| self.y_scale.apply(t)).for_each(|t| ys.add(t));
        }
        (xs.get(), ys.get())
    }
}

#[derive(Default)]
struct Extent(Option<(f64, f64)>);

impl Extent {
    fn add(&mut self, v: f64) {
        self.0 = Some(match self.0 {
            Some((lo, hi)) => (lo.min(v), hi.max(v)),
            None => (v, v),
        });
    }

    fn get(&self) -> Option<(f64, f64)> {
        self.0
    }
}

/// A grid of axes rendered into one image.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// Size in inches.
    pub size: (f64, f64),
    pub dpi: u32,
    /// Rows and columns of the subplot grid.
    pub layout: (usize, usize),
    pub share_x: bool,
    pub share_y: bool,
    pub axes: Vec<Axes>,
}

impl Figure {
    /// A figure with a single empty panel.
    pub fn new(width_in: f64, height_in: f64) -> Self {
        Self::subplots(1, 1, width_in, height_in)
    }

    /// A figure with `rows * cols` empty panels, filled row by row.
    pub fn subplots(rows: usize, cols: usize, width_in: f64, height_in: f64) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        Figure {
            size: (width_in, height_in),
            dpi: 100,
            layout: (rows, cols),
            share_x: false,
            share_y: false,
            axes: vec![Axes::new(""); rows * cols],
        }
    }

    pub fn dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn share_x(mut self) -> Self {
        self.share_x = true;
        self
    }

    pub fn share_y(mut self) -> Self {
        self.share_y = true;
        self
    }

    /// Replaces panel `i` wholesale.
    pub fn set_axes(&mut self, i: usize, axes: Axes) -> Result<()> {
        *self.axes_mut(i)? = axes;
        Ok(())
    }

    pub fn axes_mut(&mut self, i: usize) -> Result<&mut Axes> {
        let count = self.axes.len();
        self.axes
            .get_mut(i)
            .ok_or_else(|| PlotError::input(format!("axes {i} out of range ({count} panels)")))
    }

    /// Pixel dimensions for the configured size and resolution.
    pub fn pixel_size(&self) -> (u32, u32) {
        let px = |inches: f64| (inches * self.dpi as f64).round().max(1.0) as u32;
        (px(self.size.0), px(self.size.1))
    }

    /// The figure with one panel, built in one step.
    pub fn single(width_in: f64, height_in: f64, axes: Axes) -> Self {
        let mut figure = Self::new(width_in, height_in);
        figure.axes[0] = axes;
        figure
    }
}

/// A figure paired with the file name it is saved under.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub file_name: String,
    pub figure: Figure,
}

impl Chart {
    pub fn new(file_name: impl Into<String>, figure: Figure) -> Self {
        Chart {
            file_name: file_name.into(),
            figure,
        }
    }
}

/// Formats `value` in scientific notation with a signed, at least two-digit
/// exponent, e.g. `format_sci(1e-6, 1) == "1.0e-06"`.
pub fn format_sci(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let formatted = format!("{value:.precision$e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(d) => ('-', d),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => formatted,
    }
}
