use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Smallest accepted moment magnitude.
pub const MIN_MAGNITUDE: f64 = 1.0;
/// Largest accepted moment magnitude.
pub const MAX_MAGNITUDE: f64 = 10.0;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("magnitude is required")]
    Empty,

    #[error("'{input}' is not a number")]
    NotANumber { input: String },

    #[error("magnitude must be a finite number")]
    NotFinite,

    #[error("magnitude {value} is outside the valid range 1.0-10.0")]
    OutOfRange { value: f64 },
}

/// A moment magnitude (Mw) known to be finite and within
/// [`MIN_MAGNITUDE`, `MAX_MAGNITUDE`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Magnitude(f64);

impl Magnitude {
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NotFinite);
        }
        if !(MIN_MAGNITUDE..=MAX_MAGNITUDE).contains(&value) {
            return Err(ValidationError::OutOfRange { value });
        }
        Ok(Magnitude(value))
    }

    /// Parse user input. Surrounding whitespace is ignored; anything else
    /// that is not a plain float is rejected.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty);
        }
        let value: f64 = trimmed.parse().map_err(|_| ValidationError::NotANumber {
            input: trimmed.to_string(),
        })?;
        Self::new(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Whole magnitudes read as "6.0", others keep their precision
        if self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Validate several named inputs at once.
/// Returns all validation errors at once (not just the first).
pub fn validate_inputs(inputs: &[(&str, &str)]) -> Result<Vec<Magnitude>, Vec<String>> {
    let mut magnitudes = Vec::with_capacity(inputs.len());
    let mut errors = Vec::new();

    for (name, raw) in inputs {
        match Magnitude::parse(raw) {
            Ok(m) => magnitudes.push(m),
            Err(e) => errors.push(format!("{}: {}", name, e)),
        }
    }

    if errors.is_empty() {
        Ok(magnitudes)
    } else {
        Err(errors)
    }
}
