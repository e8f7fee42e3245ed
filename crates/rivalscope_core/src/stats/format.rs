//! Human-readable number abbreviation for stat cards and chart axes.

/// Abbreviates a value for display: `2_500_000` -> `"2.5M"`,
/// `1_500` -> `"1.5K"`, `999` -> `"999"`.
pub fn format_number(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Like [`format_number`] but renders zero as `"N/A"`, for card contexts
/// where no data and zero are indistinguishable in the source metrics.
pub fn format_metric(value: f64) -> String {
    if value == 0.0 {
        "N/A".to_string()
    } else {
        format_number(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{format_metric, format_number};

    #[test]
    fn abbreviates_thousands_and_millions() {
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1_000.0), "1.0K");
        assert_eq!(format_number(1_500.0), "1.5K");
        assert_eq!(format_number(2_500_000.0), "2.5M");
    }

    #[test]
    fn plain_values_keep_their_decimals() {
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn metric_contexts_use_the_no_data_sentinel() {
        assert_eq!(format_metric(0.0), "N/A");
        assert_eq!(format_metric(1_500.0), "1.5K");
        assert_eq!(format_metric(42.0), "42");
    }
}
