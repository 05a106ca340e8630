//! Simulation result containers.
//!
//! Each pipeline owns its result exclusively until it is handed to the
//! output layer. Nothing here is mutated after construction.

mod grid;
mod series;

pub use grid::{channel_to_u8, IntensityGrid, Rgb};
pub use series::{PendulumSample, PendulumTimeSeries};
