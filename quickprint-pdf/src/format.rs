//! Money and date formatting for printable documents.

use chrono::DateTime;

/// Format a monetary value with thousands separators.
///
/// Whole amounts print without a fraction (`1,500`); fractional amounts
/// keep two decimal places (`1,234.50`).
pub fn format_money(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as i64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let mut out = String::new();
    if negative && cents != 0 {
        out.push('-');
    }
    out.push_str(&grouped);
    if fraction != 0 {
        out.push_str(&format!(".{:02}", fraction));
    }
    out
}

/// Money with the fixed currency label, e.g. `PKR 1,500`.
pub fn format_pkr(value: f64) -> String {
    format!("PKR {}", format_money(value))
}

/// Day-month-year, e.g. `22 Jan 2024`.
pub fn format_date(millis: i64) -> String {
    match DateTime::from_timestamp_millis(millis) {
        Some(dt) => dt.format("%d %b %Y").to_string(),
        None => "-".to_string(),
    }
}

/// Timestamp for token slips, e.g. `22/01/2024 14:32`.
pub fn format_datetime(millis: i64) -> String {
    match DateTime::from_timestamp_millis(millis) {
        Some(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money_grouping() {
        assert_eq!(format_money(0.0), "0");
        assert_eq!(format_money(500.0), "500");
        assert_eq!(format_money(1500.0), "1,500");
        assert_eq!(format_money(1_234_567.0), "1,234,567");
    }

    #[test]
    fn test_format_money_fraction() {
        assert_eq!(format_money(1234.5), "1,234.50");
        assert_eq!(format_money(99.99), "99.99");
        assert_eq!(format_money(100.004), "100");
    }

    #[test]
    fn test_format_money_negative() {
        // Overpaid orders carry a negative due
        assert_eq!(format_money(-20.0), "-20");
    }

    #[test]
    fn test_format_pkr() {
        assert_eq!(format_pkr(250.0), "PKR 250");
    }

    #[test]
    fn test_format_date() {
        // 2024-01-22 08:32:15 UTC
        assert_eq!(format_date(1_705_912_335_000), "22 Jan 2024");
        assert_eq!(format_datetime(1_705_912_335_000), "22/01/2024 08:32");
    }
}
