//! Write plausible sample sweep files so the viewers can be demoed without
//! a simulator run: `measurements.dat` (fall-transition sweep) and
//! `results/TSPCFF_setup_explore.dat` (setup exploration).

use std::fmt::Write as _;

use anyhow::{Context, Result};

/// Minimal deterministic PRNG (64-bit LCG), uniform in [0, 1).
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg(seed.wrapping_mul(0x9E3779B97F4A7C15).wrapping_add(1))
    }

    fn next_f64(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Symmetric jitter in [-amplitude, amplitude].
    fn jitter(&mut self, amplitude: f64) -> f64 {
        (self.next_f64() * 2.0 - 1.0) * amplitude
    }
}

/// Fall time grows with both the input slope and the load.
fn fall_transition_ns(slope_ns: f64, cap_ff: f64, rng: &mut Lcg) -> f64 {
    0.02 + 0.04 * slope_ns + 0.011 * cap_ff * (1.0 + 0.25 * slope_ns) + rng.jitter(0.002)
}

/// Propagation delay rises sharply as the setup margin shrinks.
fn propagation_ns(slope_ns: f64, cap_ff: f64, clk_ps: f64, rng: &mut Lcg) -> f64 {
    let base = 0.06 + 0.03 * slope_ns + 0.008 * cap_ff;
    base + 0.35 * (-clk_ps / 40.0).exp() + rng.jitter(0.001)
}

fn write_fall_transition(rng: &mut Lcg) -> Result<()> {
    let slopes = [0.05, 0.1, 0.2, 0.4, 0.8, 1.6, 3.2];
    let caps: Vec<f64> = (1..=10).map(|i| i as f64 * 2.0).collect();

    let mut out = String::from("islope(ns) then (load_cap(fF) fall(ns)) pairs\n");
    for &slope in &slopes {
        write!(out, "{slope}")?;
        for &cap in &caps {
            write!(out, " {cap} {:.4}", fall_transition_ns(slope, cap, rng))?;
        }
        out.push('\n');
    }
    std::fs::write("measurements.dat", out).context("writing measurements.dat")?;
    Ok(())
}

fn write_setup_explore(rng: &mut Lcg) -> Result<()> {
    let corners = [(0.1, 2.0), (0.1, 8.0), (0.4, 2.0), (0.4, 8.0)];
    let clk_delays: Vec<f64> = (1..=8).map(|i| i as f64 * 25.0).collect();

    let mut out =
        String::from("islope(ns) capa(fF) then (clk_delay(ps) propagation(ns)) pairs\n");
    for &(slope, cap) in &corners {
        write!(out, "{slope} {cap}")?;
        for &clk in &clk_delays {
            write!(out, " {clk} {:.4}", propagation_ns(slope, cap, clk, rng))?;
        }
        out.push('\n');
    }
    std::fs::create_dir_all("results").context("creating results/")?;
    std::fs::write("results/TSPCFF_setup_explore.dat", out)
        .context("writing results/TSPCFF_setup_explore.dat")?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = Lcg::new(42);
    write_fall_transition(&mut rng)?;
    write_setup_explore(&mut rng)?;

    println!("Wrote measurements.dat and results/TSPCFF_setup_explore.dat");
    Ok(())
}
