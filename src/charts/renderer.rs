//! Static Chart Renderer
//! Renders chart specs to PNG bytes with plotters, for "Save PNG".
//!
//! Layout: caption on top, value axis on the left, categories or bins along
//! the bottom. Categorical axes place category `i` at x = i.

use crate::charts::plotter::{ChartPlotter, PALETTE, PRIMARY_COLOR};
use crate::charts::{BarPlotSpec, BoxPlotSpec, ChartSpec, HistogramSpec};
use image::{ImageFormat, RgbImage};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::io::Cursor;
use std::ops::Range;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Drawing failed: {0}")]
    Draw(String),
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error("Invalid canvas size {0}x{1}")]
    Canvas(u32, u32),
}

fn draw_err<E: std::fmt::Debug>(e: E) -> RenderError {
    RenderError::Draw(format!("{:?}", e))
}

fn rgb(color: egui::Color32) -> RGBColor {
    RGBColor(color.r(), color.g(), color.b())
}

fn palette(index: usize) -> RGBColor {
    rgb(PALETTE[index % PALETTE.len()])
}

/// Renders chart specs into PNG images.
pub struct ChartRenderer;

impl ChartRenderer {
    /// Render a chart to an in-memory PNG.
    ///
    /// When no usable font is installed the chart is exported without its
    /// caption and axis text.
    pub fn render_png(spec: &ChartSpec, width: u32, height: u32) -> Result<Vec<u8>, RenderError> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(3))
            .filter(|&n| n > 0)
            .ok_or(RenderError::Canvas(width, height))?;
        let mut buffer = vec![0u8; len];
        if let Err(e) = Self::draw_into(&mut buffer, (width, height), spec, true) {
            warn!(chart = %spec.title(), error = %e, "exporting chart without text");
            buffer.fill(0);
            Self::draw_into(&mut buffer, (width, height), spec, false)?;
        }

        let image = RgbImage::from_raw(width, height, buffer)
            .ok_or(RenderError::Canvas(width, height))?;
        let mut png = Cursor::new(Vec::new());
        image.write_to(&mut png, ImageFormat::Png)?;
        Ok(png.into_inner())
    }

    fn draw_into(
        buffer: &mut [u8],
        size: (u32, u32),
        spec: &ChartSpec,
        labelled: bool,
    ) -> Result<(), RenderError> {
        let root = BitMapBackend::with_buffer(buffer, size).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;
        let title = spec.title();
        match spec {
            ChartSpec::Histogram(h) => Self::draw_histogram(&root, &title, h, labelled)?,
            ChartSpec::BoxPlot(b) => Self::draw_box_plot(&root, &title, b, labelled)?,
            ChartSpec::BarPlot(b) => Self::draw_bar_plot(&root, &title, b, labelled)?,
        }
        root.present().map_err(draw_err)
    }

    fn draw_histogram<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        title: &str,
        spec: &HistogramSpec,
        labelled: bool,
    ) -> Result<(), RenderError> {
        let x_range = match (spec.bins.first(), spec.bins.last()) {
            (Some(first), Some(last)) => first.lower..last.upper,
            _ => 0.0..1.0,
        };
        let max_count = spec.bins.iter().map(|b| b.count).max().unwrap_or(0) as f64;
        let y_range = 0.0..Self::padded_top(max_count);

        let mut builder = ChartBuilder::on(root);
        builder.margin(20).x_label_area_size(50).y_label_area_size(70);
        if labelled {
            builder.caption(title, ("sans-serif", 28));
        }
        let mut chart = builder
            .build_cartesian_2d(x_range, y_range)
            .map_err(draw_err)?;

        let mut mesh = chart.configure_mesh();
        if labelled {
            mesh.x_desc(spec.column.as_str()).y_desc("count");
        } else {
            mesh.x_labels(0).y_labels(0);
        }
        mesh.draw().map_err(draw_err)?;

        let fill = rgb(PRIMARY_COLOR);
        chart
            .draw_series(spec.bins.iter().map(|bin| {
                Rectangle::new([(bin.lower, 0.0), (bin.upper, bin.count as f64)], fill.filled())
            }))
            .map_err(draw_err)?;
        chart
            .draw_series(spec.bins.iter().map(|bin| {
                Rectangle::new(
                    [(bin.lower, 0.0), (bin.upper, bin.count as f64)],
                    WHITE.stroke_width(1),
                )
            }))
            .map_err(draw_err)?;
        Ok(())
    }

    fn draw_box_plot<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        title: &str,
        spec: &BoxPlotSpec,
        labelled: bool,
    ) -> Result<(), RenderError> {
        let labels: Vec<String> = spec.groups.iter().map(|g| g.label.clone()).collect();
        let (lo, hi) = spec
            .groups
            .iter()
            .filter_map(|g| g.stats.as_ref())
            .flat_map(|s| {
                s.outliers
                    .iter()
                    .copied()
                    .chain([s.lower_whisker, s.upper_whisker])
            })
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
        let y_range = Self::padded_range(lo, hi);

        let mut builder = ChartBuilder::on(root);
        builder.margin(20).x_label_area_size(50).y_label_area_size(70);
        if labelled {
            builder.caption(title, ("sans-serif", 28));
        }
        let mut chart = builder
            .build_cartesian_2d(Self::category_range(labels.len()), y_range)
            .map_err(draw_err)?;

        let formatter = |x: &f64| ChartPlotter::category_tick(&labels, *x);
        let mut mesh = chart.configure_mesh();
        mesh.disable_x_mesh();
        if labelled {
            mesh.x_labels(labels.len().max(1))
                .x_label_formatter(&formatter)
                .x_desc(spec.group_column.as_str())
                .y_desc(spec.value_column.as_str());
        } else {
            mesh.x_labels(0).y_labels(0);
        }
        mesh.draw().map_err(draw_err)?;

        for (i, group) in spec.groups.iter().enumerate() {
            let Some(stats) = &group.stats else {
                continue;
            };
            let color = palette(i);
            let x = i as f64;
            let half = 0.25;

            chart
                .draw_series(std::iter::once(Rectangle::new(
                    [(x - half, stats.q1), (x + half, stats.q3)],
                    color.mix(0.3).filled(),
                )))
                .map_err(draw_err)?;
            chart
                .draw_series(std::iter::once(Rectangle::new(
                    [(x - half, stats.q1), (x + half, stats.q3)],
                    color.stroke_width(2),
                )))
                .map_err(draw_err)?;

            let segments = [
                [(x - half, stats.median), (x + half, stats.median)],
                [(x, stats.q3), (x, stats.upper_whisker)],
                [(x, stats.q1), (x, stats.lower_whisker)],
                [(x - half / 2.0, stats.upper_whisker), (x + half / 2.0, stats.upper_whisker)],
                [(x - half / 2.0, stats.lower_whisker), (x + half / 2.0, stats.lower_whisker)],
            ];
            chart
                .draw_series(
                    segments
                        .iter()
                        .map(|seg| PathElement::new(seg.to_vec(), color.stroke_width(2))),
                )
                .map_err(draw_err)?;

            chart
                .draw_series(
                    stats
                        .outliers
                        .iter()
                        .map(|&y| Circle::new((x, y), 3, color.filled())),
                )
                .map_err(draw_err)?;
        }
        Ok(())
    }

    fn draw_bar_plot<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        title: &str,
        spec: &BarPlotSpec,
        labelled: bool,
    ) -> Result<(), RenderError> {
        let labels: Vec<String> = spec.bars.iter().map(|b| b.label.clone()).collect();
        let lo = spec.bars.iter().map(|b| b.total).fold(0.0, f64::min);
        let hi = spec.bars.iter().map(|b| b.total).fold(0.0, f64::max);
        let y_range = lo..Self::padded_top(hi);

        let mut builder = ChartBuilder::on(root);
        builder.margin(20).x_label_area_size(50).y_label_area_size(80);
        if labelled {
            builder.caption(title, ("sans-serif", 28));
        }
        let mut chart = builder
            .build_cartesian_2d(Self::category_range(labels.len()), y_range)
            .map_err(draw_err)?;

        let formatter = |x: &f64| ChartPlotter::category_tick(&labels, *x);
        let mut mesh = chart.configure_mesh();
        mesh.disable_x_mesh();
        if labelled {
            mesh.x_labels(labels.len().max(1))
                .x_label_formatter(&formatter)
                .x_desc(spec.category_column.as_str())
                .y_desc(spec.value_column.as_str());
        } else {
            mesh.x_labels(0).y_labels(0);
        }
        mesh.draw().map_err(draw_err)?;

        chart
            .draw_series(spec.bars.iter().enumerate().map(|(i, bar)| {
                let x = i as f64;
                Rectangle::new([(x - 0.35, 0.0), (x + 0.35, bar.total)], palette(i).filled())
            }))
            .map_err(draw_err)?;
        Ok(())
    }

    fn category_range(n: usize) -> Range<f64> {
        -0.5..(n.max(1) as f64 - 0.5)
    }

    fn padded_top(max: f64) -> f64 {
        if max > 0.0 {
            max * 1.1
        } else {
            1.0
        }
    }

    fn padded_range(lo: f64, hi: f64) -> Range<f64> {
        if !lo.is_finite() || !hi.is_finite() {
            return 0.0..1.0;
        }
        if lo == hi {
            return (lo - 1.0)..(hi + 1.0);
        }
        let pad = (hi - lo) * 0.1;
        (lo - pad)..(hi + pad)
    }
}
