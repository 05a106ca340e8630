//! Config → engine → output wiring shared by the binaries.
//!
//! Every run validates its parameters and computes its full result before any
//! output is committed.

use std::path::Path;

use anyhow::{Context, Result};

use crate::config::{KronigPenneyParameters, PendulumParameters, RingsParameters};
use crate::export::{save_intensity_png, OutputBatch};
use crate::physics::{kronig_penney, pendulums, rings, KronigPenneyProfile, PendulumSimulation};
use crate::render::{self, ChartStyle, LineChart};

/// Output files of a pendulum run
#[derive(Debug, Clone, Copy)]
pub struct PendulumOutputs<'a> {
    pub angles_png: &'a Path,
    pub velocities_png: &'a Path,
}

/// Initialise `env_logger`, defaulting to `info` when `RUST_LOG` is unset
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

/// Log the error chain and exit non-zero
pub fn exit_with_error(err: anyhow::Error) -> ! {
    log::error!("{:#}", err);
    std::process::exit(1)
}

/// Render every chart and stage it in `batch`
fn stage_charts(batch: &mut OutputBatch, charts: &[(LineChart, &Path)], style: &ChartStyle) -> Result<()> {
    for (chart, path) in charts {
        let pixels = chart
            .render(style)
            .with_context(|| format!("failed to render {}", path.display()))?;
        batch.stage_png(&pixels, style.width_px, style.height_px, path)?;
    }
    Ok(())
}

/// Simulate the coupled pendulums and write both charts, plus the CSV when
/// `csv_output` is set. Either every output appears or none does.
pub fn run_pendulums(params: &PendulumParameters, outputs: PendulumOutputs<'_>) -> Result<PendulumSimulation> {
    params.validate()?;
    let simulation = pendulums::simulate(params);

    let style = ChartStyle::pendulum();
    let angles = render::pendulums::angles_chart(&simulation.series, params.max_time);
    let velocities = render::pendulums::velocities_chart(&simulation.series, params.max_time);

    let mut batch = OutputBatch::new();
    stage_charts(
        &mut batch,
        &[(angles, outputs.angles_png), (velocities, outputs.velocities_png)],
        &style,
    )?;
    if let Some(csv_path) = &params.csv_output {
        batch.stage_csv(&simulation.series, csv_path)?;
    }
    batch.commit()?;

    Ok(simulation)
}

/// Load a pendulum config file and run it
pub fn run_pendulums_from_file<P: AsRef<Path>>(
    config: P,
    outputs: PendulumOutputs<'_>,
) -> Result<PendulumSimulation> {
    let params = PendulumParameters::load(config)?;
    run_pendulums(&params, outputs)
}

/// Compute the rings grid and write it as PNG
pub fn run_newtons_rings(params: &RingsParameters, output: &Path) -> Result<()> {
    params.validate()?;
    let grid = rings::simulate(params);
    save_intensity_png(&grid, output).context("failed to plot intensity distribution")
}

pub fn run_newtons_rings_from_file<P: AsRef<Path>>(config: P, output: &Path) -> Result<()> {
    let params = RingsParameters::load(config)?;
    run_newtons_rings(&params, output)
}

/// Sample the Kronig-Penney model and write both charts into `out_dir`
pub fn run_kronig_penney(params: &KronigPenneyParameters, out_dir: &Path) -> Result<KronigPenneyProfile> {
    params.validate()?;
    let profile = kronig_penney::simulate(params);

    let style = ChartStyle::kronig_penney();
    let potential_png = out_dir.join("potential.png");
    let dispersion_png =
        out_dir.join(render::kronig_penney::dispersion_file_name(profile.barrier_strength));

    let mut batch = OutputBatch::new();
    stage_charts(
        &mut batch,
        &[
            (render::kronig_penney::potential_chart(&profile), potential_png.as_path()),
            (render::kronig_penney::dispersion_chart(&profile), dispersion_png.as_path()),
        ],
        &style,
    )?;
    batch.commit()?;

    Ok(profile)
}
