use std::path::PathBuf;

use eframe::egui::Color32;
use egui_plot::Corner;

use crate::color::curve_palette;
use crate::data::model::Curve;

// ---------------------------------------------------------------------------
// Chart configuration
// ---------------------------------------------------------------------------

/// A horizontal reference line with a text annotation next to it.
#[derive(Debug, Clone)]
pub struct Threshold {
    /// The y value the line sits at.
    pub y: f64,
    /// Annotation text drawn adjacent to the line.
    pub label: String,
    /// x position of the annotation.
    pub label_x: f64,
}

/// Per-figure settings fixed by the binary, not per curve.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub legend_corner: Corner,
    /// Draw circular markers at each sweep point.
    pub markers: bool,
    pub threshold: Option<Threshold>,
}

// ---------------------------------------------------------------------------
// Viewer state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct ViewState {
    pub chart: ChartConfig,
    /// All decoded curves, in file order.
    pub curves: Vec<Curve>,
    /// One color per curve, same indexing as `curves`.
    pub colors: Vec<Color32>,
    /// Per-curve visibility toggled from the side panel.
    pub visible: Vec<bool>,
    /// Where the curves came from, shown in the top bar.
    pub source: PathBuf,
}

impl ViewState {
    pub fn new(chart: ChartConfig, curves: Vec<Curve>, source: PathBuf) -> Self {
        let colors = curve_palette(curves.len());
        let visible = vec![true; curves.len()];
        Self {
            chart,
            curves,
            colors,
            visible,
            source,
        }
    }

    /// Number of curves currently shown.
    pub fn n_visible(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }

    pub fn select_all(&mut self) {
        self.visible.fill(true);
    }

    pub fn select_none(&mut self) {
        self.visible.fill(false);
    }
}
