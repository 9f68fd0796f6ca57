pub mod anomaly;
pub mod carbon_cycle;
pub mod predict;

pub use anomaly::AiAnomalyPage;
pub use carbon_cycle::AiCarbonCyclePage;
pub use predict::AiPredictPage;

/// Positive count typed into a form field; blank, zero or garbage falls back.
pub(crate) fn parse_period(raw: &str, fallback: u32) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(days) if days > 0 => days,
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_period() {
        assert_eq!(parse_period("30", 7), 30);
        assert_eq!(parse_period(" 90 ", 7), 90);
        assert_eq!(parse_period("", 7), 7);
        assert_eq!(parse_period("0", 7), 7);
        assert_eq!(parse_period("-5", 7), 7);
        assert_eq!(parse_period("abc", 7), 7);
    }
}
