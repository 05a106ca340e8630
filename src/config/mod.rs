//! Configuration module for loading simulation parameters.
//!
//! Every simulation reads one JSON document. Parsing and validation live here;
//! the engines assume they only ever see validated parameters.

mod error;
mod parameters;

pub use error::{ConfigError, Requirement};
pub use parameters::{KronigPenneyParameters, PendulumParameters, RingsParameters};
