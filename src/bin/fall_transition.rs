//! Plot output fall-transition time vs. load capacitance, one curve per
//! input-slope corner. Reads `measurements.dat` from the working directory.

use std::path::Path;

use anyhow::{Context, Result};
use eframe::egui;
use egui_plot::Corner;

use sweepview::app::SweepViewerApp;
use sweepview::data::loader;
use sweepview::state::{ChartConfig, Threshold, ViewState};

const DATA_PATH: &str = "measurements.dat";

/// Cells are characterized against this output-slope limit.
const MAX_ALLOWED_TRANSITION_NS: f64 = 0.20;

fn main() -> Result<()> {
    env_logger::init();

    // Missing title is fatal here; only setup-explore prints a usage line.
    let title = std::env::args()
        .nth(1)
        .context("usage: fall-transition \"Title\"")?;

    let curves = loader::load_fall_transition(Path::new(DATA_PATH))?;
    log::info!("loaded {} slope corners from {DATA_PATH}", curves.len());

    let chart = ChartConfig {
        title: title.clone(),
        x_label: "Load capacitor (ff)".into(),
        y_label: "Output fall transition time (ns)".into(),
        legend_corner: Corner::LeftTop,
        markers: false,
        threshold: Some(Threshold {
            y: MAX_ALLOWED_TRANSITION_NS,
            label: "max allowed transition".into(),
            label_x: 12.0,
        }),
    };
    let state = ViewState::new(chart, curves, DATA_PATH.into());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(SweepViewerApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("display error: {e}"))
}
