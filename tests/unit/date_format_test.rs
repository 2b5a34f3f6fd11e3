// Property-based tests for bill date handling
//
// The raw ISO string stays the sort key; display formatting is best-effort
// and falls back to the raw value so a corrupted date never breaks the
// listing.

use proptest::prelude::*;

use billed::core::dates::{format_display, parse_iso_date, try_format_display};

#[test]
fn test_fixture_dates_format_as_abbreviated_french() {
    assert_eq!(format_display("2004-04-04"), "4 Avr. 04");
    assert_eq!(format_display("2003-03-03"), "3 Mars 03");
    assert_eq!(format_display("2002-02-02"), "2 Févr. 02");
    assert_eq!(format_display("2001-01-01"), "1 Janv. 01");
}

#[test]
fn test_corrupted_dates_pass_through_unchanged() {
    for raw in ["corrompue", "2004-13-40", "04/04/2004", ""] {
        assert_eq!(format_display(raw), raw);
        assert!(try_format_display(raw).is_none());
    }
}

proptest! {
    #[test]
    fn test_every_valid_date_formats(
        year in 1970i32..2100,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let raw = format!("{:04}-{:02}-{:02}", year, month, day);
        let formatted = try_format_display(&raw).expect("valid date should format");

        // Day without a leading zero, two-digit year at the end
        prop_assert!(formatted.starts_with(&day.to_string()));
        let expected_year = format!("{:02}", year.rem_euclid(100));
        prop_assert!(formatted.ends_with(&expected_year));
    }

    #[test]
    fn test_iso_ordering_matches_chronological_ordering(
        a in (1970i32..2100, 1u32..=12, 1u32..=28),
        b in (1970i32..2100, 1u32..=12, 1u32..=28),
    ) {
        let raw_a = format!("{:04}-{:02}-{:02}", a.0, a.1, a.2);
        let raw_b = format!("{:04}-{:02}-{:02}", b.0, b.1, b.2);

        let date_a = parse_iso_date(&raw_a).unwrap();
        let date_b = parse_iso_date(&raw_b).unwrap();

        // String comparison on the raw wire values is what the listing
        // sorts with; it must agree with the parsed dates
        prop_assert_eq!(raw_a.cmp(&raw_b), date_a.cmp(&date_b));
    }

    #[test]
    fn test_display_never_panics_on_arbitrary_input(raw in "\\PC{0,32}") {
        let shown = format_display(&raw);
        prop_assert!(shown == raw || try_format_display(&raw).is_some());
    }
}
