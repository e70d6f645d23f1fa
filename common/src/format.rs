use chrono::{DateTime, Utc};

/// Display prefix for Sri Lankan rupees.
pub const CURRENCY_PREFIX: &str = "Rs.";

/// Short display date, month/day/year without padding (e.g. `3/7/2026`).
const SHORT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Placeholder shown where a date is absent.
pub const MISSING_DATE: &str = "-";

/// Format an amount as rupees with thousands grouping, e.g. `Rs. 1,234,567`.
///
/// Up to three fraction digits are kept, with trailing zeros dropped, so whole
/// amounts never gain a `.00` suffix.
pub fn add_currency(amount: f64) -> String {
    format!("{CURRENCY_PREFIX} {}", group_number(amount))
}

/// Render `value` with `,` thousands separators and at most 3 decimals.
pub fn group_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞".into() } else { "-∞".into() };
    }

    // Ties round away from zero before formatting; `{:.3}` alone rounds them to even.
    let rounded = (value.abs() * 1000.0).round() / 1000.0;
    let fixed = format!("{rounded:.3}");
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
    // -0.0004 rounds to zero; don't print it as "-0".
    if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    let digits = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Short display date in UTC.
pub fn short_date(at: &DateTime<Utc>) -> String {
    at.format(SHORT_DATE_FORMAT).to_string()
}

/// Short display date, or [`MISSING_DATE`] when absent.
pub fn short_date_or_dash(at: Option<&DateTime<Utc>>) -> String {
    at.map(short_date).unwrap_or_else(|| MISSING_DATE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_add_currency_grouping() {
        assert_eq!(add_currency(1_234_567.0), "Rs. 1,234,567");
        assert_eq!(add_currency(0.0), "Rs. 0");
        assert_eq!(add_currency(999.0), "Rs. 999");
        assert_eq!(add_currency(1000.0), "Rs. 1,000");
        assert_eq!(add_currency(100_000.0), "Rs. 100,000");
    }

    #[test]
    fn test_add_currency_fractions() {
        assert_eq!(add_currency(4599.5), "Rs. 4,599.5");
        assert_eq!(add_currency(12.25), "Rs. 12.25");
        assert_eq!(add_currency(1.23456), "Rs. 1.235");
        assert_eq!(add_currency(2.0001), "Rs. 2");
    }

    #[test]
    fn test_add_currency_ties_round_up() {
        assert_eq!(add_currency(0.0625), "Rs. 0.063");
        assert_eq!(add_currency(1234.1875), "Rs. 1,234.188");
        assert_eq!(group_number(-0.0625), "-0.063");
    }

    #[test]
    fn test_group_number_edge_values() {
        assert_eq!(group_number(-1234.5), "-1,234.5");
        assert_eq!(group_number(-0.0001), "0");
        assert_eq!(group_number(f64::NAN), "NaN");
        assert_eq!(group_number(f64::INFINITY), "∞");
    }

    #[test]
    fn test_short_date() {
        let at = Utc.with_ymd_and_hms(2026, 3, 7, 23, 59, 0).unwrap();
        assert_eq!(short_date(&at), "3/7/2026");
        let at = Utc.with_ymd_and_hms(2025, 12, 25, 0, 0, 0).unwrap();
        assert_eq!(short_date(&at), "12/25/2025");
        assert_eq!(short_date_or_dash(None), "-");
    }
}
