//! Newton's rings intensity image from `newtons_rings_config.json`

use std::path::Path;
use std::time::Instant;

use phys_modelling::pipeline;

const CONFIG_FILE: &str = "newtons_rings_config.json";
const OUTPUT_FILE: &str = "rings_intensity_distribution.png";

fn main() {
    pipeline::init_logging();

    let start = Instant::now();
    if let Err(e) = pipeline::run_newtons_rings_from_file(CONFIG_FILE, Path::new(OUTPUT_FILE)) {
        pipeline::exit_with_error(e);
    }
    log::info!("Done in {:.2?}", start.elapsed());
}
