//! Number formatting for dashboards: no-break-space thousands, fixed decimals.

/// `15420` -> `15 420` (no-break space groups), sign kept
pub fn format_thousands(n: i64) -> String {
    let s = n.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Rounded to integer and grouped, e.g. tonnes of CO2e
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    format_thousands(value.round() as i64)
}

pub fn format_decimal(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    format!("{:.prec$}", value, prec = decimals)
}

/// Signed percent, `8.8` -> `+8.8%`
pub fn format_change_percent(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    if value > 0.0 {
        format!("+{:.1}%", value)
    } else {
        format!("{:.1}%", value)
    }
}

/// Ratio in `0..=1` shown as percent, `0.953` -> `95.3%`
pub fn format_ratio(value: f64) -> String {
    format!("{}%", format_decimal(value * 100.0, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(15420), "15\u{00a0}420");
        assert_eq!(format_thousands(-1234567), "-1\u{00a0}234\u{00a0}567");
    }

    #[test]
    fn test_format_amount_rounds() {
        assert_eq!(format_amount(1034.5), "1\u{00a0}035");
        assert_eq!(format_amount(f64::NAN), "—");
    }

    #[test]
    fn test_percent_helpers() {
        assert_eq!(format_change_percent(8.8), "+8.8%");
        assert_eq!(format_change_percent(-1.26), "-1.3%");
        assert_eq!(format_change_percent(0.0), "0.0%");
        assert_eq!(format_ratio(0.953), "95.3%");
        assert_eq!(format_decimal(2.0, 2), "2.00");
    }
}
