//! Sale folio numbering.
//!
//! A folio reads `VEN-YYYYMMDD-####`: the sale date followed by a per-day sequence starting at
//! `0001`. The whole string is at most 17 characters, inside the 20 allowed by `Folio`.

use chrono::NaiveDate;

/// Largest sequence number that fits the four digit suffix.
pub const MAX_SEQUENCE: u32 = 9999;

/// `VEN-YYYYMMDD-` for `date`.
pub fn folio_prefix(date: NaiveDate) -> String {
    format!("VEN-{}-", date.format("%Y%m%d"))
}

pub fn format_folio(date: NaiveDate, sequence: u32) -> String {
    format!("{}{:04}", folio_prefix(date), sequence)
}

/// Sequence number of `folio` if it carries `prefix` followed by digits only.
pub fn parse_sequence(folio: &str, prefix: &str) -> Option<u32> {
    let digits = folio.strip_prefix(prefix)?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    digits.parse().ok()
}

/// The folio following `last` on `date`, or `None` once the day's sequence is used up.
///
/// `last` is the greatest folio already stored for the day, if any. A malformed `last` is
/// treated as no folio at all.
pub fn next_folio(date: NaiveDate, last: Option<&str>) -> Option<String> {
    let prefix = folio_prefix(date);
    let last_sequence = last
        .and_then(|folio| parse_sequence(folio, &prefix))
        .unwrap_or(0);

    let next = last_sequence + 1;
    if next > MAX_SEQUENCE {
        return None;
    }

    Some(format_folio(date, next))
}
