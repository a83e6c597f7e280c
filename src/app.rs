use eframe::egui;

use crate::state::ViewState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SweepViewerApp {
    pub state: ViewState,
}

impl SweepViewerApp {
    pub fn new(state: ViewState) -> Self {
        Self { state }
    }
}

impl eframe::App for SweepViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: source file and counts ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: curve visibility ----
        egui::SidePanel::left("curve_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::sweep_plot(ui, &self.state);
        });
    }
}
