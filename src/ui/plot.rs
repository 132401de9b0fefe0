use eframe::egui::{vec2, Color32, RichText, Ui};
use egui_plot::{
    AxisHints, HPlacement, Legend, Line, LineStyle, MarkerShape, Plot, PlotPoints, Points,
};

use crate::color::SeriesColors;
use crate::config::ViewerConfig;
use crate::data::chart::RenderedChart;
use crate::state::PanelState;

// ---------------------------------------------------------------------------
// Twin axis mapping
// ---------------------------------------------------------------------------

/// Affine map between the secondary series' own range and the primary
/// y range, so both can share one plot while keeping separate scales.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwinAxis {
    primary: (f64, f64),
    secondary: (f64, f64),
}

impl TwinAxis {
    pub fn new(primary: &[f64], secondary: &[f64]) -> Self {
        Self {
            primary: finite_range(primary),
            secondary: finite_range(secondary),
        }
    }

    /// Secondary value → position on the primary axis.
    pub fn to_primary(&self, z: f64) -> f64 {
        let (p_min, p_max) = self.primary;
        let (s_min, s_max) = self.secondary;
        let s_span = s_max - s_min;
        if s_span.abs() < 1e-15 {
            return 0.5 * (p_min + p_max);
        }
        p_min + (z - s_min) / s_span * (p_max - p_min)
    }

    /// Position on the primary axis → secondary value (for tick labels).
    pub fn to_secondary(&self, y: f64) -> f64 {
        let (p_min, p_max) = self.primary;
        let (s_min, s_max) = self.secondary;
        let p_span = p_max - p_min;
        if p_span.abs() < 1e-15 {
            return 0.5 * (s_min + s_max);
        }
        s_min + (y - p_min) / p_span * (s_max - s_min)
    }
}

fn finite_range(values: &[f64]) -> (f64, f64) {
    let (min, max) = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if min > max {
        (0.0, 1.0)
    } else {
        (min, max)
    }
}

fn format_tick(v: f64, step: f64) -> String {
    if step.abs() < 0.001 && step != 0.0 {
        format!("{v:.3e}")
    } else {
        format!("{v:.3}")
    }
}

// ---------------------------------------------------------------------------
// Panel chart
// ---------------------------------------------------------------------------

/// Render one panel's chart, or a hint when nothing has been plotted yet.
pub fn panel_plot(ui: &mut Ui, panel: &PanelState, config: &ViewerConfig, height: f32) {
    let Some(chart) = &panel.chart else {
        ui.strong(format!("{}", panel.kind));
        ui.allocate_ui(vec2(ui.available_width(), height), |ui: &mut Ui| {
            ui.centered_and_justified(|ui: &mut Ui| {
                let hint = format!(
                    "Open a {} file to plot it  (File → Open…)",
                    panel.kind.to_string().to_lowercase()
                );
                ui.label(RichText::new(hint).color(Color32::GRAY));
            });
        });
        return;
    };

    ui.strong(format!("{} – {}", panel.kind, chart.title));
    chart_plot(ui, chart, panel.kind.tag(), config, height);
}

fn chart_plot(ui: &mut Ui, chart: &RenderedChart, id: &str, config: &ViewerConfig, height: f32) {
    let colors = SeriesColors::default();

    let primary: Vec<[f64; 2]> = chart
        .x
        .values
        .iter()
        .zip(chart.y.values.iter())
        .map(|(&xi, &yi)| [xi, yi])
        .collect();

    let twin = chart
        .z
        .as_ref()
        .map(|z| (z, TwinAxis::new(&chart.y.values, &z.values)));

    let mut plot = Plot::new(format!("{id}_plot"))
        .legend(Legend::default())
        .height(height)
        .x_axis_label(chart.x.label.clone())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);

    plot = match &twin {
        Some((z, axis)) => {
            let axis = *axis;
            plot.custom_y_axes(vec![
                AxisHints::new_y().label(chart.y.label.clone()),
                AxisHints::new_y()
                    .label(z.label.clone())
                    .placement(HPlacement::Right)
                    .formatter(move |mark, _range| {
                        format_tick(axis.to_secondary(mark.value), mark.step_size)
                    }),
            ])
        }
        None => plot.y_axis_label(chart.y.label.clone()),
    };

    plot.show(ui, |plot_ui| {
        plot_ui.line(
            Line::new(PlotPoints::from(primary.clone()))
                .name(&chart.y.label)
                .color(colors.primary)
                .width(config.line_width),
        );
        plot_ui.points(
            Points::new(PlotPoints::from(primary))
                .name(&chart.y.label)
                .shape(MarkerShape::Circle)
                .radius(config.marker_radius)
                .color(colors.primary),
        );

        if let Some((z, axis)) = &twin {
            let secondary: PlotPoints = chart
                .x
                .values
                .iter()
                .zip(z.values.iter())
                .map(|(&xi, &zi)| [xi, axis.to_primary(zi)])
                .collect();
            plot_ui.line(
                Line::new(secondary)
                    .name(format!("{} (right axis)", z.label))
                    .color(colors.secondary)
                    .style(LineStyle::dashed_dense())
                    .width(config.line_width),
            );
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twin_axis_maps_ranges() {
        let axis = TwinAxis::new(&[0.0, 10.0], &[-1.0, 1.0]);
        assert!((axis.to_primary(-1.0) - 0.0).abs() < 1e-12);
        assert!((axis.to_primary(1.0) - 10.0).abs() < 1e-12);
        assert!((axis.to_primary(0.0) - 5.0).abs() < 1e-12);
        assert!((axis.to_secondary(5.0) - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_twin_axis_round_trip() {
        let axis = TwinAxis::new(&[2.0, 4.0, 3.0], &[100.0, 300.0]);
        for z in [100.0, 150.0, 275.0] {
            assert!((axis.to_secondary(axis.to_primary(z)) - z).abs() < 1e-9);
        }
    }

    #[test]
    fn test_twin_axis_flat_secondary() {
        let axis = TwinAxis::new(&[0.0, 2.0], &[7.0, 7.0]);
        assert!((axis.to_primary(7.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_finite_range_ignores_nan() {
        assert_eq!(finite_range(&[f64::NAN, 1.0, 3.0]), (1.0, 3.0));
        assert_eq!(finite_range(&[]), (0.0, 1.0));
    }
}
