//! sweepview – interactive viewer for circuit characterization sweeps.
//!
//! Two binaries share this library:
//! * `fall-transition` – output fall-transition time vs. load capacitance,
//!   one curve per input-slope corner (`measurements.dat`).
//! * `setup-explore` – total propagation delay vs. setup time, one curve
//!   per (slope, load capacitance) corner (`results/TSPCFF_setup_explore.dat`).
//!
//! Both follow the same pipeline: load a whitespace-delimited matrix,
//! decode each row into a labelled curve, hand the curves to an egui plot.

pub mod app;
pub mod color;
pub mod data;
pub mod state;
pub mod ui;
