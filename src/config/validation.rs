use super::schema::{single_char, Config};

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let Some(format) = &config.format else {
        return Ok(());
    };

    let thousands = check_separator(
        "format.thousands_separator",
        format.thousands_separator.as_deref(),
        &mut errors,
    );
    let decimal = check_separator(
        "format.decimal_separator",
        format.decimal_separator.as_deref(),
        &mut errors,
    );

    let thousands = thousands.unwrap_or(',');
    let decimal = decimal.unwrap_or('.');
    if thousands == decimal {
        errors.push(format!(
            "format: thousands and decimal separators must differ (both '{}')",
            thousands
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

// Returns the configured char when it is valid, None when unset or invalid.
fn check_separator(field: &str, value: Option<&str>, errors: &mut Vec<String>) -> Option<char> {
    let value = value?;
    match single_char(Some(value)) {
        Some(c) if !is_usable_separator(c) => {
            errors.push(format!("{}: {:?} cannot be used as a separator", field, value));
            None
        }
        Some(c) => Some(c),
        None => {
            errors.push(format!(
                "{}: must be exactly one character, got '{}'",
                field, value
            ));
            None
        }
    }
}

// Digits, signs and the exponent marker appear in rendered numbers; control
// characters would break line and column based output.
fn is_usable_separator(c: char) -> bool {
    !(c.is_control() || c.is_ascii_digit() || matches!(c, '-' | '+' | 'e' | 'E'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormatConfig;

    fn with_format(thousands: Option<&str>, decimal: Option<&str>) -> Config {
        Config {
            format: Some(FormatConfig {
                thousands_separator: thousands.map(str::to_string),
                decimal_separator: decimal.map(str::to_string),
            }),
            ..Config::default()
        }
    }

    #[test]
    fn test_default_config_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_european_separators_valid() {
        assert!(validate_config(&with_format(Some("."), Some(","))).is_ok());
    }

    #[test]
    fn test_multi_char_separator() {
        let errors = validate_config(&with_format(Some("::"), None)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("format.thousands_separator"));
    }

    #[test]
    fn test_digit_separator() {
        let errors = validate_config(&with_format(None, Some("5"))).unwrap_err();
        assert!(errors[0].contains("format.decimal_separator"));
    }

    #[test]
    fn test_control_char_separator() {
        let errors = validate_config(&with_format(Some("\t"), None)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("format.thousands_separator"));

        let errors = validate_config(&with_format(Some("\n"), Some("\u{7}"))).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_exponent_marker_separator() {
        assert!(validate_config(&with_format(Some("e"), None)).is_err());
        assert!(validate_config(&with_format(None, Some("E"))).is_err());
    }

    #[test]
    fn test_space_thousands_separator_valid() {
        assert!(validate_config(&with_format(Some(" "), Some(","))).is_ok());
    }

    #[test]
    fn test_clashing_separators() {
        // Decimal defaults to '.', so setting thousands to '.' alone clashes
        let errors = validate_config(&with_format(Some("."), None)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("must differ"));
    }

    #[test]
    fn test_collects_all_errors() {
        let errors = validate_config(&with_format(Some(""), Some("ab"))).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
