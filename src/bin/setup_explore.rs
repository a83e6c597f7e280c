//! Plot total propagation delay (propagation + clock delay) vs. setup time,
//! one curve per (input slope, load capacitance) corner.

use std::path::Path;

use anyhow::Result;
use eframe::egui;
use egui_plot::Corner;

use sweepview::app::SweepViewerApp;
use sweepview::data::loader::{self, LoadError};
use sweepview::state::{ChartConfig, ViewState};

const DEFAULT_DATA_PATH: &str = "results/TSPCFF_setup_explore.dat";

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(title) = args.next() else {
        println!("Usage: setup-explore \"Title\" [data_file]");
        std::process::exit(1);
    };
    let data_path = args
        .next()
        .unwrap_or_else(|| DEFAULT_DATA_PATH.to_string());

    // A missing file must be reported before any window opens.
    let curves = match loader::load_setup_explore(Path::new(&data_path)) {
        Ok(curves) => curves,
        Err(err @ LoadError::FileNotFound(_)) => {
            println!("Error: {err}");
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };
    log::info!("loaded {} corner curves from {data_path}", curves.len());

    let chart = ChartConfig {
        title: title.clone(),
        x_label: "Setup time (ps)".into(),
        y_label: "Propagation delay + setup time (ns)".into(),
        legend_corner: Corner::RightTop,
        markers: true,
        threshold: None,
    };
    let state = ViewState::new(chart, curves, data_path.into());

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
