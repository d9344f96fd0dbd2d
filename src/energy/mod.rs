pub mod calculator;
pub mod comparator;
pub mod numbers;
pub mod validation;

pub use calculator::{calculate_energy, EnergyReport, EnergyResult};
pub use comparator::{compare_magnitudes, relative_factor, ComparisonResult, Stronger};
pub use numbers::NumberFormat;
pub use validation::{validate_inputs, Magnitude, ValidationError, MAX_MAGNITUDE, MIN_MAGNITUDE};
