//! Coupled pendulums from `pendulums_config.json`

use std::path::Path;

use phys_modelling::pipeline::{self, PendulumOutputs};

const CONFIG_FILE: &str = "pendulums_config.json";

fn main() {
    pipeline::init_logging();

    let outputs = PendulumOutputs {
        angles_png: Path::new("pendulums_angles_vs_time.png"),
        velocities_png: Path::new("pendulums_velocities_vs_time.png"),
    };

    match pipeline::run_pendulums_from_file(CONFIG_FILE, outputs) {
        Ok(simulation) => phys_modelling::print_frequencies(&simulation.frequencies),
        Err(e) => pipeline::exit_with_error(e),
    }
}
