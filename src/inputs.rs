//! Resolution of raw calculator inputs into concrete values
//!
//! Every calculator field has a documented default. A missing or non-numeric
//! value resolves to that default before any arithmetic runs; finite values,
//! including zero and negatives, pass through untouched.

/// Monthly expenses used by the retirement sizer when none is supplied
pub const DEFAULT_MONTHLY_EXPENSES: f64 = 20_000.0;

/// Monthly contribution used by the growth projector when none is supplied
pub const DEFAULT_MONTHLY_CONTRIBUTION: f64 = 1_000.0;

/// Contribution period (years) used by the growth projector
pub const DEFAULT_CONTRIBUTION_YEARS: f64 = 30.0;

/// Goal target amount used by the goal advisor
pub const DEFAULT_GOAL_AMOUNT: f64 = 100_000.0;

/// Goal horizon (years) used by the goal advisor
pub const DEFAULT_GOAL_YEARS: f64 = 3.0;

/// Label shown for a goal with no name
pub const DEFAULT_GOAL_NAME: &str = "Your Goal";

/// Resolve an optional numeric input against its default.
///
/// `None` and non-finite values (NaN, infinities) both fall back to `default`.
pub fn resolve(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => default,
    }
}

/// Resolve an optional display name, treating blank text as missing
pub fn resolve_name(name: Option<&str>) -> String {
    match name.map(str::trim) {
        Some(n) if !n.is_empty() => n.to_string(),
        _ => DEFAULT_GOAL_NAME.to_string(),
    }
}

/// Read a text field the way the calculator page does.
///
/// Parses the longest leading numeric prefix (so `"1500abc"` reads as 1500).
/// Empty text, text with no numeric prefix, and a value of zero all yield
/// `None`, because the page falls back to the default for any falsy reading.
pub fn parse_field(raw: &str) -> Option<f64> {
    let value = leading_number(raw.trim_start())?;
    if value == 0.0 || value.is_nan() {
        None
    } else {
        Some(value)
    }
}

/// Longest prefix of `text` that parses as a decimal number
fn leading_number(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    let mut seen_exp = false;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }

    let mut best = None;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => {
                seen_digit = true;
                end += 1;
                best = Some(end);
            }
            b'.' if !seen_dot && !seen_exp => {
                seen_dot = true;
                end += 1;
            }
            b'e' | b'E' if seen_digit && !seen_exp => {
                // Exponent only counts once at least one digit follows it
                let mut look = end + 1;
                if look < bytes.len() && (bytes[look] == b'+' || bytes[look] == b'-') {
                    look += 1;
                }
                if look < bytes.len() && bytes[look].is_ascii_digit() {
                    seen_exp = true;
                    end = look;
                } else {
                    break;
                }
            }
            _ => break,
        }
    }

    text[..best?].parse().ok()
}
