use serde::Serialize;
use std::fmt;

use super::numbers::NumberFormat;
use super::validation::{Magnitude, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stronger {
    First,
    Second,
    Equal,
}

/// Energy ratio between two magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub first: Magnitude,
    pub second: Magnitude,
    /// Energy of `second` divided by energy of `first`.
    pub factor: f64,
    pub stronger: Stronger,
}

/// 10^(1.5 * (m2 - m1)): how many times more energy m2 releases than m1.
pub fn relative_factor(m1: Magnitude, m2: Magnitude) -> f64 {
    10f64.powf(1.5 * (m2.value() - m1.value()))
}

impl ComparisonResult {
    pub fn new(first: Magnitude, second: Magnitude) -> Self {
        let factor = relative_factor(first, second);
        let stronger = if factor == 1.0 {
            Stronger::Equal
        } else if factor > 1.0 {
            Stronger::Second
        } else {
            Stronger::First
        };
        Self {
            first,
            second,
            factor,
            stronger,
        }
    }

    /// How many times stronger the stronger magnitude is (always >= 1).
    pub fn strength_ratio(&self) -> f64 {
        match self.stronger {
            Stronger::Second => self.factor,
            Stronger::First => 1.0 / self.factor,
            Stronger::Equal => 1.0,
        }
    }

    pub fn message(&self) -> String {
        self.message_with(&NumberFormat::default())
    }

    pub fn message_with(&self, fmt: &NumberFormat) -> String {
        let (strong, weak) = match self.stronger {
            Stronger::Equal => {
                return format!(
                    "Magnitude {} and magnitude {} release equal energy.",
                    self.first, self.second
                );
            }
            Stronger::Second => (self.second, self.first),
            Stronger::First => (self.first, self.second),
        };
        format!(
            "Magnitude {} is {} times stronger than magnitude {}.",
            strong,
            fmt.fixed(self.strength_ratio(), 2),
            weak
        )
    }
}

impl fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Validate both magnitudes and describe their energy ratio.
pub fn compare_magnitudes(m1: f64, m2: f64) -> Result<String, ValidationError> {
    let first = Magnitude::new(m1)?;
    let second = Magnitude::new(m2)?;
    Ok(ComparisonResult::new(first, second).message())
}
