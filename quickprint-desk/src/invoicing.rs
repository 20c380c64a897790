//! Invoice number formatting
//!
//! Numbers are sequential per calendar year: the store keeps one
//! counter per year and this module turns a counter value into the
//! displayed identifier, e.g. counter 3 with prefix `RT-2024-` becomes
//! `RT-2024-00003`.

use chrono::Datelike;

/// Calendar year the counter is keyed by.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Format a sequence value with the shop prefix, zero padded to five
/// digits. Values past 99999 widen rather than truncate.
pub fn format_invoice_number(prefix: &str, sequence: u64) -> String {
    format!("{prefix}{sequence:05}")
}
