use serde::{Deserialize, Serialize};

use crate::energy::NumberFormat;
use crate::output::{ColorMode, OutputFormat};

/// Main configuration file.
///
/// Example YAML:
/// ```yaml
/// format:
///   thousands_separator: "."
///   decimal_separator: ","
/// output: list
/// color: auto
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Number separators used in list and TSV output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<FormatConfig>,

    /// Default output format when `--output` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputFormat>,

    /// Default color mode when `--color` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorMode>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FormatConfig {
    /// Single character between digit groups (default ",")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thousands_separator: Option<String>,

    /// Single character before the fraction digits (default ".")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimal_separator: Option<String>,
}

impl Config {
    /// Number format with defaults filled in. Assumes `validate_config` passed;
    /// anything that is not a single character falls back to the default.
    pub fn number_format(&self) -> NumberFormat {
        let defaults = NumberFormat::default();
        let Some(format) = &self.format else {
            return defaults;
        };
        NumberFormat {
            thousands_separator: single_char(format.thousands_separator.as_deref())
                .unwrap_or(defaults.thousands_separator),
            decimal_separator: single_char(format.decimal_separator.as_deref())
                .unwrap_or(defaults.decimal_separator),
        }
    }
}

pub(crate) fn single_char(s: Option<&str>) -> Option<char> {
    let mut chars = s?.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        None
    } else {
        Some(c)
    }
}
