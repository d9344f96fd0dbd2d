use serde::Serialize;

use super::numbers::NumberFormat;
use super::validation::{Magnitude, ValidationError};

/// Joules released by one kilogram of TNT.
pub const JOULES_PER_KG_TNT: f64 = 4.184e6;
/// Yield of the Hiroshima bomb in kilograms of TNT (15 kt).
pub const HIROSHIMA_KG_TNT: f64 = 15_000.0;
/// Energy of a typical lightning strike in joules.
pub const JOULES_PER_LIGHTNING: f64 = 1e9;

pub const LABEL_JOULES: &str = "Energy (joules)";
pub const LABEL_TNT: &str = "TNT equivalent (kg)";
pub const LABEL_HIROSHIMA: &str = "Hiroshima bombs";
pub const LABEL_LIGHTNING: &str = "Lightning strikes";

/// One formatted line of an energy calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnergyResult {
    pub label: String,
    pub value: String,
}

/// Raw quantities derived from a single magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyReport {
    pub magnitude: Magnitude,
    pub joules: f64,
    pub tnt_kg: f64,
    pub hiroshima_equiv: f64,
    pub lightning_count: f64,
}

impl EnergyReport {
    pub fn from_magnitude(magnitude: Magnitude) -> Self {
        let joules = seismic_energy_joules(magnitude);
        let tnt_kg = joules / JOULES_PER_KG_TNT;
        Self {
            magnitude,
            joules,
            tnt_kg,
            hiroshima_equiv: tnt_kg / HIROSHIMA_KG_TNT,
            lightning_count: joules / JOULES_PER_LIGHTNING,
        }
    }

    /// Labelled values in display order: joules, TNT, Hiroshima, lightning.
    pub fn results(&self, fmt: &NumberFormat) -> Vec<EnergyResult> {
        vec![
            EnergyResult {
                label: LABEL_JOULES.to_string(),
                value: fmt.scientific(self.joules, 2),
            },
            EnergyResult {
                label: LABEL_TNT.to_string(),
                value: fmt.grouped(self.tnt_kg, 3),
            },
            EnergyResult {
                label: LABEL_HIROSHIMA.to_string(),
                value: fmt.fixed(self.hiroshima_equiv, 2),
            },
            EnergyResult {
                label: LABEL_LIGHTNING.to_string(),
                value: fmt.rounded(self.lightning_count),
            },
        ]
    }
}

/// Gutenberg-Richter energy relation: log10(E) = 1.5 * Mw + 4.8
pub fn seismic_energy_joules(magnitude: Magnitude) -> f64 {
    10f64.powf(1.5 * magnitude.value() + 4.8)
}

/// Validate `magnitude` and return its formatted energy equivalents.
pub fn calculate_energy(magnitude: f64) -> Result<Vec<EnergyResult>, ValidationError> {
    let magnitude = Magnitude::new(magnitude)?;
    Ok(EnergyReport::from_magnitude(magnitude).results(&NumberFormat::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relative_eq(a: f64, b: f64) -> bool {
        ((a - b) / b).abs() < 1e-9
    }

    #[test]
    fn test_joules_for_magnitude_six() {
        let report = EnergyReport::from_magnitude(Magnitude::new(6.0).unwrap());
        assert!(relative_eq(report.joules, 6.309_573_444_801_943e13));
    }

    #[test]
    fn test_derived_quantities_chain() {
        let report = EnergyReport::from_magnitude(Magnitude::new(7.3).unwrap());
        assert!(relative_eq(report.tnt_kg, report.joules / 4.184e6));
        assert!(relative_eq(report.hiroshima_equiv, report.tnt_kg / 15_000.0));
        assert!(relative_eq(report.lightning_count, report.joules / 1e9));
    }

    #[test]
    fn test_one_unit_is_about_31_6_times_energy() {
        let m5 = EnergyReport::from_magnitude(Magnitude::new(5.0).unwrap());
        let m6 = EnergyReport::from_magnitude(Magnitude::new(6.0).unwrap());
        assert!(relative_eq(m6.joules / m5.joules, 10f64.powf(1.5)));
    }

    #[test]
    fn test_calculate_energy_order_and_labels() {
        let results = calculate_energy(6.0).unwrap();
        let labels: Vec<&str> = results.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![LABEL_JOULES, LABEL_TNT, LABEL_HIROSHIMA, LABEL_LIGHTNING]
        );
    }

    #[test]
    fn test_calculate_energy_formatted_values() {
        let results = calculate_energy(6.0).unwrap();
        assert_eq!(results[0].value, "6.31e+13");
        assert_eq!(results[1].value, "15,080,242.459");
        assert_eq!(results[2].value, "1,005.35");
        assert_eq!(results[3].value, "63,096");
    }

    #[test]
    fn test_calculate_energy_small_magnitude() {
        let results = calculate_energy(1.0).unwrap();
        assert_eq!(results[0].value, "2.00e+6");
        assert_eq!(results[1].value, "0.477");
        assert_eq!(results[2].value, "0.00");
        assert_eq!(results[3].value, "0");
    }

    #[test]
    fn test_calculate_energy_largest_magnitude_grouped() {
        let results = calculate_energy(10.0).unwrap();
        assert_eq!(results[0].value, "6.31e+19");
        assert!(results[2].value.starts_with("1,005,349,"));
        assert_eq!(results[3].value, "63,095,734,448");
    }

    #[test]
    fn test_calculate_energy_rejects_out_of_range() {
        assert!(matches!(
            calculate_energy(0.5),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            calculate_energy(11.0),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_calculate_energy_rejects_nan() {
        assert_eq!(calculate_energy(f64::NAN), Err(ValidationError::NotFinite));
    }

    #[test]
    fn test_report_serializes_magnitude_as_number() {
        let report = EnergyReport::from_magnitude(Magnitude::new(6.5).unwrap());
        let json = serde_json::to_value(report).unwrap();
        assert_eq!(json["magnitude"], 6.5);
        assert!(json["joules"].as_f64().unwrap() > 0.0);
    }
}
