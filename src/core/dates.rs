// Bill date handling
//
// Dates travel on the wire as ISO `YYYY-MM-DD` strings. The raw string is
// the sort key; parsing happens only when a date is formatted for display.

use chrono::{Datelike, NaiveDate};

/// Wire format for bill dates
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Abbreviated French month names, indexed by `month0`
const MONTHS_FR: [&str; 12] = [
    "Janv.", "Févr.", "Mars", "Avr.", "Mai", "Juin", "Juil.", "Août", "Sept.", "Oct.", "Nov.",
    "Déc.",
];

/// Parse an ISO `YYYY-MM-DD` string
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, ISO_DATE_FORMAT).ok()
}

/// Format an ISO date for display, e.g. `2004-04-04` -> `4 Avr. 04`
///
/// Returns `None` when the input does not parse as a date.
pub fn try_format_display(raw: &str) -> Option<String> {
    let date = parse_iso_date(raw)?;
    let month = MONTHS_FR[date.month0() as usize];
    Some(format!(
        "{} {} {:02}",
        date.day(),
        month,
        date.year().rem_euclid(100)
    ))
}

/// Display form of a bill date, falling back to the raw value when it does
/// not parse. A corrupted date coming back from the store must not break
/// the listing.
pub fn format_display(raw: &str) -> String {
    try_format_display(raw).unwrap_or_else(|| raw.to_string())
}
