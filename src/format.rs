//! Thousands-separator helpers shared by the price field and the table.

/// Separator inserted between digit groups.
pub const THOUSANDS_SEPARATOR: char = ',';

/// Insert separators into a run of ASCII digits (`"1234567"` -> `"1,234,567"`).
fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}

/// Remove every separator so the text can be parsed as a number.
pub fn strip_separators(text: &str) -> String {
    text.chars().filter(|ch| *ch != THOUSANDS_SEPARATOR).collect()
}

/// Live formatting for the price field. Returns the regrouped text when the
/// input (separators ignored) is a non-empty run of ASCII digits, `None`
/// otherwise so the caller leaves the field untouched. Leading zeros are
/// dropped the same way integer formatting would drop them.
pub fn format_price_input(text: &str) -> Option<String> {
    let digits = strip_separators(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        Some("0".to_string())
    } else {
        Some(group_digits(significant))
    }
}

/// Display form of a stored price: integer part only, grouped. The fraction
/// is truncated toward zero for display and never written back. The whole
/// part is formatted from the float itself, so values past `i64::MAX` keep
/// every digit. Non-finite values are shown as-is.
pub fn format_price_display(price: f64) -> String {
    if !price.is_finite() {
        return price.to_string();
    }
    let whole = price.trunc();
    let digits = format!("{:.0}", whole.abs());
    if whole < 0.0 {
        format!("-{}", group_digits(&digits))
    } else {
        group_digits(&digits)
    }
}
