// Display helpers shared by the engine's text reports and any other front end.
// Formatting only: amounts are never rounded before a calculation.

/// Formats `value` with `decimals` places and `,` thousands separators,
/// e.g. `format_amount(1234567.891, 2)` gives `"1,234,567.89"`.
pub fn format_amount(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.decimals$}", value.abs(), decimals = decimals);
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // "-0" is not worth showing after rounding
    let is_negative = value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if is_negative { "-" } else { "" };

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// `format_currency("₹", -1500.0, 0)` gives `"₹-1,500"`.
pub fn format_currency(symbol: &str, value: f64, decimals: usize) -> String {
    format!("{}{}", symbol, format_amount(value, decimals))
}

pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.decimals$}%", value, decimals = decimals)
}
