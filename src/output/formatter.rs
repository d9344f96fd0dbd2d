use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;

use super::options::{OutputFormat, RenderOptions};
use crate::energy::{ComparisonResult, EnergyReport, NumberFormat, Stronger};

/// Render energy reports in the requested output format.
pub fn render_energy(reports: &[EnergyReport], options: &RenderOptions) -> Result<String> {
    match options.format {
        OutputFormat::List => Ok(format_energy_list(reports, &options.numbers, options.colors)),
        OutputFormat::Tsv => Ok(format_energy_tsv(reports, &options.numbers)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(reports).context("Failed to serialize energy results")
        }
    }
}

/// JSON shape of a comparison: the raw fields plus the rendered sentence.
#[derive(Serialize)]
struct ComparisonJson<'a> {
    #[serde(flatten)]
    result: &'a ComparisonResult,
    message: String,
}

/// Render a comparison in the requested output format.
pub fn render_comparison(result: &ComparisonResult, options: &RenderOptions) -> Result<String> {
    match options.format {
        OutputFormat::List => Ok(format_comparison(result, &options.numbers, options.colors)),
        OutputFormat::Tsv => Ok(format_comparison_tsv(result)),
        OutputFormat::Json => {
            let json = ComparisonJson {
                result,
                message: result.message_with(&options.numbers),
            };
            serde_json::to_string_pretty(&json).context("Failed to serialize comparison")
        }
    }
}

/// Format each report as a header line followed by "  Label: value" lines.
/// Blocks are separated by a blank line.
pub fn format_energy_list(reports: &[EnergyReport], fmt: &NumberFormat, use_colors: bool) -> String {
    reports
        .iter()
        .map(|report| format_energy_block(report, fmt, use_colors))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn format_energy_block(report: &EnergyReport, fmt: &NumberFormat, use_colors: bool) -> String {
    let header = format!("Magnitude {}", report.magnitude);
    let mut lines = vec![if use_colors {
        header.bold().to_string()
    } else {
        header
    }];

    for result in report.results(fmt) {
        if use_colors {
            lines.push(format!("  {}: {}", result.label.cyan(), result.value.yellow()));
        } else {
            lines.push(format!("  {}: {}", result.label, result.value));
        }
    }
    lines.join("\n")
}

/// Format reports as tab-separated values for scripting
/// Columns: magnitude, label, value (no headers, no colors)
pub fn format_energy_tsv(reports: &[EnergyReport], fmt: &NumberFormat) -> String {
    reports
        .iter()
        .flat_map(|report| {
            report.results(fmt).into_iter().map(move |result| {
                format!("{}\t{}\t{}", report.magnitude, result.label, result.value)
            })
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a comparison as its sentence, highlighting the stronger magnitude.
pub fn format_comparison(result: &ComparisonResult, fmt: &NumberFormat, use_colors: bool) -> String {
    let message = result.message_with(fmt);
    if !use_colors {
        return message;
    }
    match result.stronger {
        Stronger::Equal => message.green().to_string(),
        Stronger::First | Stronger::Second => message.bold().to_string(),
    }
}

/// Columns: first, second, factor, stronger
pub fn format_comparison_tsv(result: &ComparisonResult) -> String {
    let stronger = match result.stronger {
        Stronger::First => "first",
        Stronger::Second => "second",
        Stronger::Equal => "equal",
    };
    format!(
        "{}\t{}\t{}\t{}",
        result.first, result.second, result.factor, stronger
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::Magnitude;

    fn report(value: f64) -> EnergyReport {
        EnergyReport::from_magnitude(Magnitude::new(value).unwrap())
    }

    fn comparison(a: f64, b: f64) -> ComparisonResult {
        ComparisonResult::new(Magnitude::new(a).unwrap(), Magnitude::new(b).unwrap())
    }

    #[test]
    fn test_format_energy_list_single() {
        let result = format_energy_list(&[report(6.0)], &NumberFormat::default(), false);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Magnitude 6.0");
        assert_eq!(lines[1], "  Energy (joules): 6.31e+13");
        assert_eq!(lines[2], "  TNT equivalent (kg): 15,080,242.459");
        assert_eq!(lines[3], "  Hiroshima bombs: 1,005.35");
        assert_eq!(lines[4], "  Lightning strikes: 63,096");
    }

    #[test]
    fn test_format_energy_list_multiple_blocks() {
        let result = format_energy_list(&[report(5.0), report(6.0)], &NumberFormat::default(), false);
        assert_eq!(result.split("\n\n").count(), 2);
        assert!(result.contains("Magnitude 5.0"));
        assert!(result.contains("Magnitude 6.0"));
    }

    #[test]
    fn test_format_energy_list_empty() {
        assert_eq!(format_energy_list(&[], &NumberFormat::default(), false), "");
    }

    #[test]
    fn test_format_energy_tsv() {
        let result = format_energy_tsv(&[report(6.0)], &NumberFormat::default());
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "6.0\tEnergy (joules)\t6.31e+13");
        assert!(lines.iter().all(|l| l.split('\t').count() == 3));
    }

    #[test]
    fn test_format_comparison_plain() {
        let result = format_comparison(&comparison(6.0, 7.0), &NumberFormat::default(), false);
        assert_eq!(result, "Magnitude 7.0 is 31.62 times stronger than magnitude 6.0.");
    }

    #[test]
    fn test_format_comparison_colored_keeps_text() {
        let result = format_comparison(&comparison(6.0, 6.0), &NumberFormat::default(), true);
        assert!(result.contains("release equal energy"));
        assert!(result.contains('\u{1b}'));
    }

    #[test]
    fn test_format_comparison_tsv() {
        let result = format_comparison_tsv(&comparison(6.0, 6.0));
        assert_eq!(result, "6.0\t6.0\t1\tequal");
    }

    #[test]
    fn test_render_energy_json() {
        let options = RenderOptions {
            format: OutputFormat::Json,
            ..RenderOptions::default()
        };
        let json = render_energy(&[report(6.0)], &options).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["magnitude"], 6.0);
        assert!(parsed[0]["lightning_count"].as_f64().unwrap() > 63_000.0);
    }

    #[test]
    fn test_render_comparison_json() {
        let options = RenderOptions {
            format: OutputFormat::Json,
            ..RenderOptions::default()
        };
        let json = render_comparison(&comparison(7.0, 6.0), &options).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["stronger"], "first");
        assert_eq!(parsed["first"], 7.0);
        assert_eq!(
            parsed["message"],
            "Magnitude 7.0 is 31.62 times stronger than magnitude 6.0."
        );
    }

    #[test]
    fn test_render_comparison_json_uses_separators() {
        let options = RenderOptions {
            format: OutputFormat::Json,
            numbers: NumberFormat {
                thousands_separator: '.',
                decimal_separator: ',',
            },
            colors: false,
        };
        let json = render_comparison(&comparison(4.0, 7.0), &options).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            parsed["message"],
            "Magnitude 7.0 is 31.622,78 times stronger than magnitude 4.0."
        );
    }
}
