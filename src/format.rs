//! Display formatting for monetary amounts and horizons

use serde::{Deserialize, Serialize};

/// Currency label and digit grouping used when rendering amounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    pub label: String,
    pub grouping_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            label: "HK$".into(),
            grouping_separator: ',',
        }
    }
}

impl CurrencyFormat {
    pub fn new(label: impl Into<String>, grouping_separator: char) -> Self {
        Self {
            label: label.into(),
            grouping_separator,
        }
    }

    /// Round to whole units, group thousands, prefix the label: `HK$1,234,568`
    pub fn format(&self, amount: f64) -> String {
        let rounded = amount.round();
        let sign = if rounded < 0.0 { "-" } else { "" };
        format!(
            "{}{}{}",
            sign,
            self.label,
            group_digits(rounded.abs(), self.grouping_separator)
        )
    }

    /// Like `format`, with a leading `+` for non-negative amounts
    pub fn format_gain(&self, amount: f64) -> String {
        if amount.round() < 0.0 {
            self.format(amount)
        } else {
            format!("+{}", self.format(amount))
        }
    }
}

/// Group the integer digits of a non-negative whole number
fn group_digits(whole: f64, separator: char) -> String {
    if !whole.is_finite() {
        return whole.to_string();
    }
    let digits = format!("{:.0}", whole);
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

/// "1 year", "3 years", "2.5 years"
pub fn time_frame_label(years: f64) -> String {
    if years == 1.0 {
        "1 year".to_string()
    } else {
        format!("{} years", years)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping_and_rounding() {
        let fmt = CurrencyFormat::default();
        assert_eq!(fmt.format(1_004_515.04), "HK$1,004,515");
        assert_eq!(fmt.format(999.5), "HK$1,000");
        assert_eq!(fmt.format(0.0), "HK$0");
        assert_eq!(fmt.format(6_000_000.0), "HK$6,000,000");
        assert_eq!(fmt.format(123.0), "HK$123");
    }

    #[test]
    fn test_negative_amounts() {
        let fmt = CurrencyFormat::default();
        assert_eq!(fmt.format(-12_345.6), "-HK$12,346");
        assert_eq!(fmt.format(-0.2), "HK$0");
        assert_eq!(fmt.format_gain(-500.0), "-HK$500");
    }

    #[test]
    fn test_gain_prefix() {
        let fmt = CurrencyFormat::default();
        assert_eq!(fmt.format_gain(644_515.04), "+HK$644,515");
    }

    #[test]
    fn test_custom_label() {
        let fmt = CurrencyFormat::new("US$", ' ');
        assert_eq!(fmt.format(1_500_000.0), "US$1 500 000");
    }

    #[test]
    fn test_time_frame_label() {
        assert_eq!(time_frame_label(1.0), "1 year");
        assert_eq!(time_frame_label(3.0), "3 years");
        assert_eq!(time_frame_label(2.5), "2.5 years");
    }
}
