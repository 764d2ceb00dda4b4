//! # Formatting Utilities
//!
//! Number formatters for the assets table and totals footer.
//!
//! Three formatters cover the display cases:
//!
//! - [`format_fiat`] - fiat amounts, grouped with exactly 2 decimals
//! - [`format_balance`] - token quantities, grouped with up to 4 decimals
//! - [`format_integer`] - whole-unit amounts such as gas in gwei
//!
//! All three are built on [`format_number`], which adds thousands
//! separators to a fixed-precision rendering.

/// Format a number with commas (e.g. 1234567.89 -> "1,234,567.89")
///
/// # Arguments
///
/// * `value` - The number to format
/// * `decimals` - Number of decimal places to show
///
/// # Examples
///
/// ```rust
/// use exit_terminal::utils::format::format_number;
///
/// assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
/// assert_eq!(format_number(100.0, 2), "100.00");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals);
    let parts: Vec<&str> = formatted.split('.').collect();

    let integer_part = parts[0];
    let decimal_part = if parts.len() > 1 { parts[1] } else { "" };

    // Add commas to integer part
    let mut result = String::new();
    for (i, ch) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && ch != '-' {
            result.push(',');
        }
        result.push(ch);
    }

    let integer_with_commas: String = result.chars().rev().collect();

    if decimal_part.is_empty() {
        integer_with_commas
    } else {
        format!("{}.{}", integer_with_commas, decimal_part)
    }
}

/// Format a fiat amount with 2 decimal places (e.g. 1234.5 -> "1,234.50")
pub fn format_fiat(value: f64) -> String {
    format_number(value, 2)
}

/// Format a token quantity with up to 4 decimal places, trailing zeros trimmed
/// (e.g. 1.5 -> "1.5", 100.0 -> "100", 0.12345 -> "0.1235")
pub fn format_balance(value: f64) -> String {
    let fixed = format_number(value, 4);
    match fixed.split_once('.') {
        None => fixed,
        Some((integer, fraction)) => {
            let fraction = fraction.trim_end_matches('0');
            if fraction.is_empty() {
                integer.to_string()
            } else {
                format!("{}.{}", integer, fraction)
            }
        }
    }
}

/// Format a whole-unit amount with no decimal places (e.g. 12845.7 -> "12,846")
pub fn format_integer(value: f64) -> String {
    format_number(value, 0)
}
