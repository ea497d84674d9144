//! Chart Plotter Module
//! Draws chart specs as interactive plots using egui_plot.

use crate::charts::{BarPlotSpec, BoxPlotSpec, ChartSpec, HistogramSpec};
use egui::Color32;
use egui_plot::{Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Legend, Plot, PlotPoints, Points};

/// Single-series colour (histograms).
pub const PRIMARY_COLOR: Color32 = Color32::from_rgb(99, 110, 250);

/// Per-category colours, cycled.
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(99, 110, 250),  // Blue
    Color32::from_rgb(239, 85, 59),   // Red
    Color32::from_rgb(0, 204, 150),   // Green
    Color32::from_rgb(171, 99, 250),  // Purple
    Color32::from_rgb(255, 161, 90),  // Orange
    Color32::from_rgb(25, 211, 243),  // Cyan
    Color32::from_rgb(255, 102, 146), // Pink
    Color32::from_rgb(182, 232, 128), // Lime
    Color32::from_rgb(255, 151, 255), // Magenta
    Color32::from_rgb(254, 203, 82),  // Yellow
];

const PLOT_HEIGHT: f32 = 360.0;

/// Draws chart specs with egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    pub fn category_color(index: usize) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    /// Draw any chart spec; `id` must be unique per visible chart.
    pub fn draw(ui: &mut egui::Ui, id: &str, spec: &ChartSpec) {
        match spec {
            ChartSpec::Histogram(h) => Self::draw_histogram(ui, id, h),
            ChartSpec::BoxPlot(b) => Self::draw_box_plot(ui, id, b),
            ChartSpec::BarPlot(b) => Self::draw_bar_plot(ui, id, b),
        }
    }

    fn draw_histogram(ui: &mut egui::Ui, id: &str, spec: &HistogramSpec) {
        let bars: Vec<Bar> = spec
            .bins
            .iter()
            .map(|bin| {
                Bar::new((bin.lower + bin.upper) / 2.0, bin.count as f64)
                    .width(bin.upper - bin.lower)
                    .name(format!("{:.2} – {:.2}", bin.lower, bin.upper))
            })
            .collect();

        Plot::new(id)
            .height(PLOT_HEIGHT)
            .allow_scroll(false)
            .x_axis_label(spec.column.clone())
            .y_axis_label("count")
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .color(PRIMARY_COLOR)
                        .name(spec.column.clone()),
                );
            });
    }

    /// One coloured box per group at x = 0, 1, 2, ...; outliers as points.
    fn draw_box_plot(ui: &mut egui::Ui, id: &str, spec: &BoxPlotSpec) {
        let x_labels: Vec<String> = spec.groups.iter().map(|g| g.label.clone()).collect();

        Plot::new(id)
            .height(PLOT_HEIGHT)
            .allow_scroll(false)
            .legend(Legend::default())
            .x_axis_label(spec.group_column.clone())
            .y_axis_label(spec.value_column.clone())
            .x_axis_formatter(move |mark, _range| Self::category_tick(&x_labels, mark.value))
            .show(ui, |plot_ui| {
                for (i, group) in spec.groups.iter().enumerate() {
                    let Some(stats) = &group.stats else {
                        continue;
                    };
                    let color = Self::category_color(i);

                    let box_elem = BoxElem::new(
                        i as f64,
                        BoxSpread::new(
                            stats.lower_whisker,
                            stats.q1,
                            stats.median,
                            stats.q3,
                            stats.upper_whisker,
                        ),
                    )
                    .box_width(0.5)
                    .fill(color.gamma_multiply(0.3))
                    .stroke(egui::Stroke::new(1.5, color))
                    .name(&group.label);

                    plot_ui.box_plot(BoxPlot::new(vec![box_elem]).name(&group.label));

                    if !stats.outliers.is_empty() {
                        let points: PlotPoints =
                            stats.outliers.iter().map(|&y| [i as f64, y]).collect();
                        plot_ui.points(
                            Points::new(points)
                                .radius(2.5)
                                .color(color)
                                .name(&group.label),
                        );
                    }
                }
            });
    }

    fn draw_bar_plot(ui: &mut egui::Ui, id: &str, spec: &BarPlotSpec) {
        let x_labels: Vec<String> = spec.bars.iter().map(|b| b.label.clone()).collect();

        Plot::new(id)
            .height(PLOT_HEIGHT)
            .allow_scroll(false)
            .legend(Legend::default())
            .x_axis_label(spec.category_column.clone())
            .y_axis_label(spec.value_column.clone())
            .x_axis_formatter(move |mark, _range| Self::category_tick(&x_labels, mark.value))
            .show(ui, |plot_ui| {
                for (i, entry) in spec.bars.iter().enumerate() {
                    let color = Self::category_color(i);
                    let bar = Bar::new(i as f64, entry.total)
                        .width(0.7)
                        .fill(color)
                        .name(&entry.label);
                    plot_ui.bar_chart(BarChart::new(vec![bar]).color(color).name(&entry.label));
                }
            });
    }

    /// Label for an integer tick on a categorical axis; blank between
    /// categories.
    pub fn category_tick(labels: &[String], value: f64) -> String {
        let rounded = value.round();
        if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
            return String::new();
        }
        labels.get(rounded as usize).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_only_on_category_positions() {
        let labels = vec!["Eco".to_string(), "Business".to_string()];
        assert_eq!(ChartPlotter::category_tick(&labels, 1.0), "Business");
        assert_eq!(ChartPlotter::category_tick(&labels, 0.5), "");
        assert_eq!(ChartPlotter::category_tick(&labels, -1.0), "");
        assert_eq!(ChartPlotter::category_tick(&labels, 5.0), "");
    }

    #[test]
    fn palette_cycles() {
        assert_eq!(ChartPlotter::category_color(0), ChartPlotter::category_color(10));
    }
}
