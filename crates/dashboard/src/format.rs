//! Display rules for numbers coming out of the metrics transform.
//!
//! Computed values stay unrounded; every rounding decision is made here.

use configuration::DisplaySettings;
use rust_decimal::Decimal;

/// Shown in place of a non-finite ratio.
pub const NOT_AVAILABLE: &str = "n/a";

const MILLIONS_PER_BILLION: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormatOptions {
    /// Maximum fraction digits; trailing zeros are dropped.
    pub max_decimals: usize,
    /// Fixed fraction digits for KPI headline values.
    pub kpi_decimals: usize,
    /// Magnitude (in millions) from which values switch to billions.
    pub billions_threshold: f64,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            max_decimals: 2,
            kpi_decimals: 1,
            billions_threshold: 1000.0,
        }
    }
}

impl From<&DisplaySettings> for FormatOptions {
    fn from(settings: &DisplaySettings) -> Self {
        Self {
            max_decimals: settings.decimals,
            kpi_decimals: settings.kpi_decimals,
            billions_threshold: settings.billions_threshold,
        }
    }
}

/// Formats a chart or tooltip value.
///
/// Values in millions (`unit` of `"M"` or `""`) whose magnitude reaches the
/// threshold are shown in billions with unit `"B"`. The sign is kept after the
/// prefix, so `-1500` with prefix `"$"` reads `"$-1.5B"`.
pub fn format_value(value: f64, unit: &str, prefix: &str, options: &FormatOptions) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }

    let (scaled, unit) =
        if value.abs() >= options.billions_threshold && (unit == "M" || unit.is_empty()) {
            (value / MILLIONS_PER_BILLION, "B")
        } else {
            (value, unit)
        };

    let number = group_thousands(&trim_fraction(scaled, options.max_decimals));
    format!("{prefix}{number}{unit}")
}

/// `31536.0` → `"$31.5B"` with one decimal.
pub fn billions(value_millions: f64, decimals: usize) -> String {
    if !value_millions.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    format!("${:.*}B", decimals, value_millions / MILLIONS_PER_BILLION)
}

/// `721` → `"$721M"`.
pub fn millions(value: Decimal) -> String {
    format!("${}M", value.normalize())
}

pub fn percent(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    format!("{:.*}%", decimals, value)
}

pub fn ratio(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    format!("{:.*}", decimals, value)
}

pub fn days(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    format!("{:.*} days", decimals, value)
}

/// Rounds to `max_decimals` and drops trailing zeros (and a bare point).
fn trim_fraction(value: f64, max_decimals: usize) -> String {
    let mut text = format!("{:.*}", max_decimals, value);
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text = "0".to_string();
    }
    text
}

/// Inserts `,` separators into the integer part of a plain decimal string.
fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_millions_switch_to_billions() {
        let options = FormatOptions::default();
        assert_eq!(format_value(24578.0, "M", "$", &options), "$24.58B");
        assert_eq!(format_value(1000.0, "M", "", &options), "1B");
        assert_eq!(format_value(721.0, "M", "$", &options), "$721M");
        assert_eq!(format_value(-976.0, "M", "$", &options), "$-976M");
        assert_eq!(format_value(-1500.0, "M", "$", &options), "$-1.5B");
    }

    #[test]
    fn test_unitless_values_also_switch() {
        let options = FormatOptions::default();
        assert_eq!(format_value(1.8751, "", "", &options), "1.88");
        assert_eq!(format_value(2500.0, "", "", &options), "2.5B");
    }

    #[test]
    fn test_percentages_never_switch() {
        let options = FormatOptions::default();
        assert_eq!(format_value(18.834164, "%", "", &options), "18.83%");
        assert_eq!(format_value(1200.0, "%", "", &options), "1,200%");
    }

    #[test]
    fn test_threshold_and_precision_are_configurable() {
        let options = FormatOptions {
            max_decimals: 0,
            kpi_decimals: 1,
            billions_threshold: 50000.0,
        };
        assert_eq!(format_value(31536.0, "M", "$", &options), "$31,536M");
        assert_eq!(format_value(52148.4, "M", "$", &options), "$52B");
    }

    #[test]
    fn test_non_finite_values() {
        let options = FormatOptions::default();
        assert_eq!(format_value(f64::NAN, "M", "$", &options), NOT_AVAILABLE);
        assert_eq!(format_value(f64::INFINITY, "", "", &options), NOT_AVAILABLE);
        assert_eq!(percent(f64::NEG_INFINITY, 1), NOT_AVAILABLE);
        assert_eq!(ratio(f64::NAN, 2), NOT_AVAILABLE);
        assert_eq!(billions(f64::NAN, 1), NOT_AVAILABLE);
    }

    #[test]
    fn test_fixed_precision_helpers() {
        assert_eq!(billions(31536.0, 1), "$31.5B");
        assert_eq!(billions(13116.0, 1), "$13.1B");
        assert_eq!(millions(dec!(721)), "$721M");
        assert_eq!(millions(dec!(-976)), "$-976M");
        assert_eq!(percent(28.3098, 1), "28.3%");
        assert_eq!(ratio(1.875140, 2), "1.88");
        assert_eq!(days(21.8287, 1), "21.8 days");
    }

    #[test]
    fn test_trim_fraction() {
        assert_eq!(trim_fraction(4.50, 2), "4.5");
        assert_eq!(trim_fraction(4.0, 2), "4");
        assert_eq!(trim_fraction(-0.001, 2), "0");
        assert_eq!(trim_fraction(120.0, 0), "120");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("31536"), "31,536");
        assert_eq!(group_thousands("-1234567.25"), "-1,234,567.25");
        assert_eq!(group_thousands("999"), "999");
    }
}
