//! Earthquake magnitude to energy conversions.
//!
//! The [`energy`] module holds the calculations and is free of I/O; the other
//! modules back the `quake-energy` command-line tool.

pub mod config;
pub mod energy;
pub mod interactive;
pub mod log;
pub mod output;
pub mod prompt;

pub use energy::{calculate_energy, compare_magnitudes, EnergyResult, ValidationError};
