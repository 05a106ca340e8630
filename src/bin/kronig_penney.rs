//! Kronig-Penney potential and graphical analysis
//!
//! Reads `kronig_penney_config.json` when present, defaults otherwise.

use std::path::Path;

use phys_modelling::{pipeline, KronigPenneyParameters};

const CONFIG_FILE: &str = "kronig_penney_config.json";

fn main() {
    pipeline::init_logging();

    let params = KronigPenneyParameters::load_or_default(CONFIG_FILE);
    match pipeline::run_kronig_penney(&params, Path::new(".")) {
        Ok(profile) => {
            let bands = profile.allowed_bands();
            println!("Allowed bands (a * alpha) for P = {}:", profile.barrier_strength);
            for (start, end) in bands {
                println!("  [{:.4}, {:.4}]", start, end);
            }
        }
        Err(e) => pipeline::exit_with_error(e),
    }
}
