//! Rendering of [`Figure`] values with [`plotters`].
//!
//! Log axes are drawn on a linear coordinate system over the transformed values
//! (see [`crate::chart::Scale::apply`]); tick labels are mapped back to data space by the label
//! formatter. This keeps a single code path for every combination of axis scales.
//! Tick positions come from [`tick_positions`]: explicit ticks are drawn exactly
//! where requested and log axes are labelled at whole powers of their base.
//!
//! Text is rendered with the system sans-serif font, so drawing requires fonts to
//! be installed. [`draw_figure`] is generic over the backend; [`save_png`] is the
//! entry point used by the chart binaries.

use crate::{
    chart::{Axes, Chart, Figure, LegendPosition, LineStyle, Marker, Rgb, Scale, format_sci},
    error::{PlotError, Result},
};
use plotters::{
    coord::{
        Shift,
        ranged1d::{DefaultFormatting, KeyPointHint, Ranged},
        types::RangedCoordf64,
    },
    prelude::*,
};
use std::{
    ops::Range,
    path::{Path, PathBuf},
};

/// Renders `chart` to `<out_dir>/<chart.file_name>` as a PNG and returns the path.
pub fn save_png(chart: &Chart, out_dir: impl AsRef<Path>) -> Result<PathBuf> {
    let path = out_dir.as_ref().join(&chart.file_name);
    let (width, height) = chart.figure.pixel_size();
    {
        let root = BitMapBackend::new(&path, (width, height)).into_drawing_area();
        draw_figure(&chart.figure, &root)?;
        root.present().map_err(PlotError::render)?;
    }
    log::info!("Saved {width}x{height} chart to {path:?}");
    Ok(path)
}

/// Draws every panel of `figure` onto `root`, row by row.
pub fn draw_figure<DB: DrawingBackend>(
    figure: &Figure,
    root: &DrawingArea<DB, Shift>,
) -> Result<()> {
    root.fill(&WHITE).map_err(PlotError::render)?;
    let panels = root.split_evenly(figure.layout);
    let ranges = axis_ranges(figure);
    for ((axes, area), (x_range, y_range)) in figure.axes.iter().zip(&panels).zip(ranges) {
        draw_axes(axes, area, x_range, y_range, figure.dpi)?;
    }
    Ok(())
}

/// Plotting-space ranges of every panel, merged across panels for shared axes.
pub fn axis_ranges(figure: &Figure) -> Vec<(Range<f64>, Range<f64>)> {
    let extents: Vec<_> = figure.axes.iter().map(Axes::extent).collect();
    let union = |pick: fn(&(Option<(f64, f64)>, Option<(f64, f64)>)) -> Option<(f64, f64)>| {
        extents
            .iter()
            .filter_map(pick)
            .reduce(|(a0, a1), (b0, b1)| (a0.min(b0), a1.max(b1)))
    };
    let shared_x = union(|e| e.0);
    let shared_y = union(|e| e.1);

    extents
        .iter()
        .map(|(x, y)| {
            let x = if figure.share_x { shared_x } else { *x };
            let y = if figure.share_y { shared_y } else { *y };
            (padded(x), padded(y))
        })
        .collect()
}

fn padded(extent: Option<(f64, f64)>) -> Range<f64> {
    match extent {
        None => 0.0..1.0,
        Some((lo, hi)) if hi - lo <= f64::EPSILON * hi.abs().max(1.0) => (lo - 0.5)..(hi + 0.5),
        Some((lo, hi)) => {
            let pad = (hi - lo) * 0.05;
            (lo - pad)..(hi + pad)
        }
    }
}

/// Label count requested from plotters on axes without fixed ticks.
const AUTO_LABELS: usize = 10;

/// Upper bound on whole-exponent ticks before every other power is skipped.
const MAX_LOG_TICKS: u64 = 10;

/// Plotting-space positions of the labelled ticks on one axis.
///
/// Explicit data-space `ticks` are kept as given, minus those the scale cannot
/// show or that fall outside `range`. A log axis without explicit ticks gets one
/// tick per whole power of its base when at least two fit. `None` leaves the
/// choice to plotters.
pub fn tick_positions(
    range: &Range<f64>,
    scale: Scale,
    ticks: Option<&[f64]>,
) -> Option<Vec<f64>> {
    let inside = |t: &f64| range.start <= *t && *t <= range.end;
    if let Some(ticks) = ticks {
        return Some(
            ticks
                .iter()
                .filter_map(|&t| scale.apply(t))
                .filter(inside)
                .collect(),
        );
    }
    if scale == Scale::Linear {
        return None;
    }
    let first = range.start.ceil() as i64;
    let last = range.end.floor() as i64;
    if last <= first {
        return None;
    }
    let step = ((last - first) as u64).div_ceil(MAX_LOG_TICKS) as usize;
    Some((first..=last).step_by(step).map(|e| e as f64).collect())
}

/// A linear plotting-space coordinate whose key points are fixed ticks when
/// there are any, and plotters' own choice otherwise.
pub struct TickedAxis {
    inner: RangedCoordf64,
    ticks: Option<Vec<f64>>,
}

impl TickedAxis {
    pub fn new(range: Range<f64>, scale: Scale, ticks: Option<&[f64]>) -> Self {
        let ticks = tick_positions(&range, scale, ticks);
        TickedAxis {
            inner: range.into(),
            ticks,
        }
    }
}

impl Ranged for TickedAxis {
    type FormatOption = DefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        self.inner.map(value, limit)
    }

    fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        match &self.ticks {
            Some(_) if hint.max_num_points() == 0 => Vec::new(),
            Some(ticks) => ticks.clone(),
            None => self.inner.key_points(hint),
        }
    }

    fn range(&self) -> Range<f64> {
        self.inner.range()
    }
}

/// The `(x, y)` tick labels every panel of `figure` is drawn with.
pub fn tick_labels(figure: &Figure) -> Vec<(Vec<String>, Vec<String>)> {
    let labels = |axis: TickedAxis, scale: Scale| -> Vec<String> {
        axis.key_points(AUTO_LABELS)
            .into_iter()
            .map(|v| format_tick(scale.invert(v)))
            .collect()
    };
    figure
        .axes
        .iter()
        .zip(axis_ranges(figure))
        .map(|(axes, (x_range, y_range))| {
            (
                labels(
                    TickedAxis::new(x_range, axes.x_scale, axes.x_ticks.as_deref()),
                    axes.x_scale,
                ),
                labels(
                    TickedAxis::new(y_range, axes.y_scale, axes.y_ticks.as_deref()),
                    axes.y_scale,
                ),
            )
        })
        .collect()
}

/// Formats a data-space tick value compactly.
pub fn format_tick(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-3..1e5).contains(&magnitude) {
        return format_sci(value, 1);
    }
    if (value - value.round()).abs() < 1e-9 * magnitude.max(1.0) {
        return format!("{}", value.round() as i64);
    }
    let text = format!("{value:.3}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn font<'a>(size: f64, dpi: u32) -> FontDesc<'a> {
    FontDesc::new(
        FontFamily::SansSerif,
        size * dpi as f64 / 100.0,
        FontStyle::Normal,
    )
}

fn scaled(pixels: u32, dpi: u32) -> u32 {
    pixels.saturating_mul(dpi).div_ceil(100)
}

fn to_color(rgb: Rgb) -> RGBColor {
    RGBColor(rgb.0, rgb.1, rgb.2)
}

fn series_label_position(position: LegendPosition) -> SeriesLabelPosition {
    match position {
        LegendPosition::UpperLeft | LegendPosition::Hidden => SeriesLabelPosition::UpperLeft,
        LegendPosition::UpperRight => SeriesLabelPosition::UpperRight,
        LegendPosition::LowerLeft => SeriesLabelPosition::LowerLeft,
        LegendPosition::LowerRight => SeriesLabelPosition::LowerRight,
    }
}

fn draw_axes<DB: DrawingBackend>(
    axes: &Axes,
    area: &DrawingArea<DB, Shift>,
    x_range: Range<f64>,
    y_range: Range<f64>,
    dpi: u32,
) -> Result<()> {
    let mut builder = ChartBuilder::on(area);
    builder
        .margin(scaled(12, dpi))
        .x_label_area_size(scaled(45, dpi))
        .y_label_area_size(scaled(65, dpi));
    if !axes.title.is_empty() {
        builder.caption(&axes.title, font(18.0, dpi));
    }
    let x_scale = axes.x_scale;
    let y_scale = axes.y_scale;
    let mut chart = builder
        .build_cartesian_2d(
            TickedAxis::new(x_range, x_scale, axes.x_ticks.as_deref()),
            TickedAxis::new(y_range, y_scale, axes.y_ticks.as_deref()),
        )
        .map_err(PlotError::render)?;

    let x_formatter = move |v: &f64| format_tick(x_scale.invert(*v));
    let y_formatter = move |v: &f64| format_tick(y_scale.invert(*v));

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(axes.x_label.as_str())
        .y_desc(axes.y_label.as_str())
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter)
        .label_style(font(12.0, dpi))
        .axis_desc_style(font(14.0, dpi))
        .bold_line_style(&BLACK.mix(0.15))
        .light_line_style(&BLACK.mix(0.04))
        .x_labels(AUTO_LABELS)
        .y_labels(AUTO_LABELS);
    if !axes.grid {
        mesh.disable_mesh();
    }
    mesh.draw().map_err(PlotError::render)?;

    let radius = scaled(4, dpi) as i32;
    for series in &axes.series {
        let color = to_color(series.color);
        let style = ShapeStyle::from(&color).stroke_width(scaled(series.width, dpi));
        let mut labelled = false;

        for segment in series.segments(x_scale, y_scale) {
            let annotation = match series.line {
                LineStyle::Solid => chart.draw_series(LineSeries::new(segment.clone(), style)),
                LineStyle::Dashed => chart.draw_series(DashedLineSeries::new(
                    segment.clone(),
                    scaled(10, dpi),
                    scaled(6, dpi),
                    style,
                )),
            }
            .map_err(PlotError::render)?;

            if !labelled && !series.label.is_empty() {
                let legend_width = scaled(20, dpi) as i32;
                let legend_stroke = scaled(2, dpi);
                annotation.label(series.label.as_str()).legend(move |(x, y)| {
                    PathElement::new(
                        vec![(x, y), (x + legend_width, y)],
                        color.stroke_width(legend_stroke),
                    )
                });
                labelled = true;
            }

            match series.marker {
                Marker::None => {}
                Marker::Circle => {
                    chart
                        .draw_series(
                            segment
                                .iter()
                                .map(|&point| Circle::new(point, radius, style.filled())),
                        )
                        .map_err(PlotError::render)?;
                }
                Marker::Square => {
                    chart
                        .draw_series(segment.iter().map(|&point| {
                            EmptyElement::at(point)
                                + Rectangle::new([(-radius, -radius), (radius, radius)], style.filled())
                        }))
                        .map_err(PlotError::render)?;
                }
            }
        }
    }

    let has_labels = axes.series.iter().any(|s| !s.label.is_empty());
    if has_labels && axes.legend != LegendPosition::Hidden {
        chart
            .configure_series_labels()
            .position(series_label_position(axes.legend))
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK.mix(0.3))
            .label_font(font(11.0, dpi))
            .draw()
            .map_err(PlotError::render)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Series;

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(16.0), "16");
        assert_eq!(format_tick(0.25), "0.25");
        assert_eq!(format_tick(1e-6), "1.0e-06");
        assert_eq!(format_tick(131072.0), "1.3e+05");
        assert_eq!(format_tick(0.0), "0");
        assert_eq!(format_tick(f64::NAN), "");
    }

    #[test]
    fn test_padded_ranges() {
        assert_eq!(padded(None), 0.0..1.0);
        assert_eq!(padded(Some((2.0, 2.0))), 1.5..2.5);
        let r = padded(Some((0.0, 10.0)));
        assert_eq!(r, -0.5..10.5);
    }

    #[test]
    fn test_shared_y_ranges_are_merged() {
        let mut figure = Figure::subplots(1, 2, 14.0, 5.0).share_y();
        figure.axes[0].plot(Series::new("a", &[1.0, 2.0], &[0.0, 10.0]));
        figure.axes[1].plot(Series::new("b", &[1.0, 2.0], &[0.0, 20.0]));
        let ranges = axis_ranges(&figure);
        assert_eq!(ranges[0].1, ranges[1].1);
        assert_eq!(ranges[0].1, -1.0..21.0);
        // x is not shared, but both panels happen to span the same data.
        assert_eq!(ranges[0].0, ranges[1].0);
    }

    #[test]
    fn test_explicit_ticks_are_drawn_on_log_axis() {
        let mut figure = Figure::single(
            10.0,
            6.0,
            Axes::new("speedup")
                .scales(Scale::Log10, Scale::Linear)
                .x_ticks(vec![2.0, 4.0, 8.0, 16.0]),
        );
        figure.axes[0].plot(Series::new("close", &[2.0, 4.0, 8.0], &[1.8, 3.1, 5.0]));
        let (x, _) = &tick_labels(&figure)[0];
        assert_eq!(x, &["2", "4", "8", "16"]);
    }

    #[test]
    fn test_log_axis_ticks_sit_on_whole_powers() {
        let mut figure = Figure::single(
            8.0,
            5.0,
            Axes::new("time").scales(Scale::Log2, Scale::Log10),
        );
        figure.axes[0].plot(Series::new(
            "64",
            &[1.0, 2.0, 4.0, 8.0],
            &[8.0, 4.1, 2.2, 1e-2],
        ));
        let (x, y) = &tick_labels(&figure)[0];
        assert_eq!(x, &["1", "2", "4", "8"]);
        assert_eq!(y, &["0.01", "0.1", "1", "10"]);
    }

    #[test]
    fn test_tick_positions() {
        let range = -0.5..10.5;
        assert_eq!(tick_positions(&range, Scale::Linear, None), None);
        assert_eq!(
            tick_positions(&range, Scale::Linear, Some(&[0.0, 5.0, 20.0, f64::NAN])),
            Some(vec![0.0, 5.0])
        );
        assert_eq!(
            tick_positions(&(0.1..0.9), Scale::Log10, None),
            None,
            "no whole power inside the range"
        );
        let dense = tick_positions(&(-20.5..0.5), Scale::Log10, None).unwrap();
        assert_eq!(dense.len(), 11);
        assert_eq!(dense[0], -20.0);
        assert_eq!(dense[1], -18.0);
    }

    #[test]
    fn test_fixed_key_points_ignore_hint_size() {
        let axis = TickedAxis::new(0.0..4.0, Scale::Log2, Some(&[1.0, 2.0, 4.0, 8.0, 16.0]));
        assert_eq!(axis.key_points(2), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        assert!(axis.key_points(0).is_empty());
        assert_eq!(axis.range(), 0.0..4.0);
    }

    #[test]
    fn test_scaled_saturates() {
        assert_eq!(scaled(12, 300), 36);
        assert_eq!(scaled(120, u32::MAX), u32::MAX / 100 + 1);
    }

    #[test]
    fn test_unshared_ranges_are_independent() {
        let mut figure = Figure::subplots(2, 1, 8.0, 10.0);
        figure.axes[0].plot(Series::new("a", &[1.0, 3.0], &[1.0, 1.0]));
        figure.axes[1].plot(Series::new("b", &[10.0, 30.0], &[1.0, 1.0]));
        let ranges = axis_ranges(&figure);
        assert_ne!(ranges[0].0, ranges[1].0);
        assert_eq!(ranges[0].1, 0.5..1.5);
    }
}
