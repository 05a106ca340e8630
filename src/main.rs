//! Phys Modelling - coupled pendulums from `config.json`
//!
//! Runs the pendulum pipeline against the legacy config name and output
//! file names. Configs written for this entry point usually omit
//! `time_step`, which then defaults to 1 ms.
//!
//! Usage:
//!   cargo run                       # reads ./config.json
//!   RUST_LOG=debug cargo run        # verbose logging

use std::path::Path;

use phys_modelling::pipeline::{self, PendulumOutputs};

const CONFIG_FILE: &str = "config.json";

fn main() {
    pipeline::init_logging();

    let outputs = PendulumOutputs {
        angles_png: Path::new("pendulum_angles_vs_time.png"),
        velocities_png: Path::new("pendulum_velocities_vs_time.png"),
    };

    match pipeline::run_pendulums_from_file(CONFIG_FILE, outputs) {
        Ok(simulation) => phys_modelling::print_frequencies(&simulation.frequencies),
        Err(e) => pipeline::exit_with_error(e),
    }
}
