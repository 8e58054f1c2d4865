use num_format::{Locale, ToFormattedString};
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats `value` with Indian digit grouping (`12,34,567.89`) and exactly
/// `decimals` fraction digits.
///
/// A missing value is rendered as the bare string `"0"`, independent of
/// `decimals`.
pub fn format_indian_number(value: Option<Decimal>, decimals: u32) -> String {
    let Some(value) = value else {
        return "0".to_string();
    };

    let rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    let fixed = format!("{:.*}", decimals as usize, rounded.abs());
    let (whole, fraction) = match fixed.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let grouped = match whole.parse::<u128>() {
        Ok(whole) => whole.to_formatted_string(&Locale::en_IN),
        Err(_) => whole.to_string(),
    };
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Renders a fraction of net assets as a percentage, `0.1034` -> `10.34%`.
pub fn format_percentage(fraction: Option<Decimal>) -> String {
    let percent = fraction
        .unwrap_or(Decimal::ZERO)
        .saturating_mul(Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}%", percent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_indian_number(Some(dec!(1234567.891)), 2), "12,34,567.89");
        assert_eq!(format_indian_number(Some(dec!(12345678901)), 2), "12,34,56,78,901.00");
        assert_eq!(format_indian_number(Some(dec!(100000)), 0), "1,00,000");
        assert_eq!(format_indian_number(Some(dec!(1000)), 0), "1,000");
        assert_eq!(format_indian_number(Some(dec!(999)), 0), "999");
    }

    #[test]
    fn test_missing_value_ignores_decimals() {
        assert_eq!(format_indian_number(None, 2), "0");
        assert_eq!(format_indian_number(None, 0), "0");
    }

    #[test]
    fn test_zero() {
        assert_eq!(format_indian_number(Some(dec!(0)), 0), "0");
        assert_eq!(format_indian_number(Some(dec!(0)), 2), "0.00");
    }

    #[test]
    fn test_rounding() {
        assert_eq!(format_indian_number(Some(dec!(1234.5)), 0), "1,235");
        assert_eq!(format_indian_number(Some(dec!(0.125)), 2), "0.13");
        assert_eq!(format_indian_number(Some(dec!(99999.999)), 2), "1,00,000.00");
        assert_eq!(format_indian_number(Some(dec!(31548.3)), 2), "31,548.30");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_indian_number(Some(dec!(-1234567.5)), 0), "-12,34,568");
        assert_eq!(format_indian_number(Some(dec!(-0.004)), 2), "0.00");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(format_percentage(Some(dec!(0.1034))), "10.34%");
        assert_eq!(format_percentage(Some(dec!(1))), "100.00%");
        assert_eq!(format_percentage(Some(dec!(0.00005))), "0.01%");
        assert_eq!(format_percentage(None), "0.00%");
    }
}
