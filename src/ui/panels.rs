use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::state::ViewState;

// ---------------------------------------------------------------------------
// Left side panel – per-curve visibility
// ---------------------------------------------------------------------------

/// Render the curve list with visibility checkboxes.
pub fn side_panel(ui: &mut Ui, state: &mut ViewState) {
    ui.heading("Curves");
    ui.separator();

    if state.curves.is_empty() {
        ui.label("No curves in the input file.");
        return;
    }

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all();
        }
        if ui.small_button("None").clicked() {
            state.select_none();
        }
    });
    ui.add_space(4.0);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for idx in 0..state.curves.len() {
                let label = state.curves[idx].label.clone();
                let text = RichText::new(label).color(state.colors[idx]);
                ui.checkbox(&mut state.visible[idx], text);
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar.
pub fn top_bar(ui: &mut Ui, state: &mut ViewState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(state.source.display().to_string());

        ui.separator();

        ui.label(format!(
            "{} curves loaded, {} visible",
            state.curves.len(),
            state.n_visible()
        ));

        ui.separator();

        if ui
            .selectable_label(state.chart.markers, "Markers")
            .clicked()
        {
            state.chart.markers = !state.chart.markers;
        }
    });
}
