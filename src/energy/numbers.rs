/// Separators used when rendering numbers for people.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub thousands_separator: char,
    pub decimal_separator: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            thousands_separator: ',',
            decimal_separator: '.',
        }
    }
}

impl NumberFormat {
    /// Scientific notation with a signed exponent: 6.31e+13, 2.50e-3
    pub fn scientific(&self, value: f64, fraction_digits: usize) -> String {
        let raw = format!("{:.*e}", fraction_digits, value);
        let (mantissa, exponent) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
        let exponent = if exponent.starts_with('-') {
            exponent.to_string()
        } else {
            format!("+{}", exponent)
        };
        format!("{}e{}", self.localize_decimal(mantissa), exponent)
    }

    /// Grouped thousands with at most `max_fraction_digits` decimals,
    /// trailing zeros trimmed: 15,080,242.459 or 0.477
    pub fn grouped(&self, value: f64, max_fraction_digits: usize) -> String {
        self.render_grouped(value, max_fraction_digits, true)
    }

    /// Grouped thousands with exactly `fraction_digits` decimals: 1,005.35
    pub fn fixed(&self, value: f64, fraction_digits: usize) -> String {
        self.render_grouped(value, fraction_digits, false)
    }

    /// Nearest integer, halves rounded away from zero, grouped: 63,096
    pub fn rounded(&self, value: f64) -> String {
        self.render_grouped(value.round(), 0, true)
    }

    fn render_grouped(&self, value: f64, fraction_digits: usize, trim_zeros: bool) -> String {
        let raw = format!("{:.*}", fraction_digits, value.abs());
        let (int_part, frac_part) = raw.split_once('.').unwrap_or((raw.as_str(), ""));
        let frac_part = if trim_zeros {
            frac_part.trim_end_matches('0')
        } else {
            frac_part
        };

        let mut out = String::new();
        if value.is_sign_negative() && raw.chars().any(|c| c.is_ascii_digit() && c != '0') {
            out.push('-');
        }
        out.push_str(&self.group_digits(int_part));
        if !frac_part.is_empty() {
            out.push(self.decimal_separator);
            out.push_str(frac_part);
        }
        out
    }

    fn group_digits(&self, digits: &str) -> String {
        let len = digits.len();
        let mut out = String::with_capacity(len + len / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(self.thousands_separator);
            }
            out.push(c);
        }
        out
    }

    fn localize_decimal(&self, s: &str) -> String {
        if self.decimal_separator == '.' {
            s.to_string()
        } else {
            s.replace('.', &self.decimal_separator.to_string())
        }
    }
}
