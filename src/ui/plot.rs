use eframe::egui::{Align2, RichText, Ui};
use egui_plot::{HLine, Legend, Line, Plot, PlotPoint, PlotPoints, Points, Text};

use crate::state::ViewState;

// ---------------------------------------------------------------------------
// Sweep plot (central panel)
// ---------------------------------------------------------------------------

/// Render the sweep plot in the central panel.
pub fn sweep_plot(ui: &mut Ui, state: &ViewState) {
    let chart = &state.chart;

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(chart.title.clone());
    });

    let any_drawn = state
        .curves
        .iter()
        .zip(&state.visible)
        .any(|(curve, visible)| *visible && !curve.points.is_empty());

    let mut plot = Plot::new("sweep_plot")
        .x_axis_label(chart.x_label.clone())
        .y_axis_label(chart.y_label.clone())
        .show_grid(true)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);

    // Legend only when at least one curve is actually drawn; an empty
    // figure still renders.
    if any_drawn {
        plot = plot.legend(Legend::default().position(chart.legend_corner));
    }

    plot.show(ui, |plot_ui| {
        for (idx, curve) in state.curves.iter().enumerate() {
            if !state.visible[idx] || curve.points.is_empty() {
                continue;
            }
            let color = state.colors[idx];

            let points: PlotPoints = curve.points.iter().copied().collect();
            let line = Line::new(points)
                .name(&curve.label)
                .color(color)
                .width(1.5);
            plot_ui.line(line);

            if chart.markers {
                let dots: PlotPoints = curve.points.iter().copied().collect();
                plot_ui.points(
                    Points::new(dots)
                        .name(&curve.label)
                        .color(color)
                        .radius(2.5),
                );
            }
        }

        if let Some(threshold) = &chart.threshold {
            plot_ui.hline(HLine::new(threshold.y).width(1.0));
            plot_ui.text(
                Text::new(
                    PlotPoint::new(threshold.label_x, threshold.y),
                    RichText::new(&threshold.label),
                )
                .anchor(Align2::LEFT_BOTTOM),
            );
        }
    });
}
