//! Tests for Thai/English date formatting and clock labels.

use chrono::NaiveDate;
use window_grid::calendar::{
    format_date_compact, format_english, format_thai, format_time_label, parse_date,
};
use window_grid::GridError;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn buddhist_era_year_is_gregorian_plus_543() {
    let th = format_thai(date(2025, 9, 24));
    assert_eq!(th.year_be, 2568);
}

#[test]
fn thai_parts_for_a_known_wednesday() {
    // 2025-09-24 is a Wednesday.
    let th = format_thai(date(2025, 9, 24));
    assert_eq!(th.weekday, "พุธ");
    assert_eq!(th.day, 24);
    assert_eq!(th.month_abbr, "ก.ย.");
}

#[test]
fn english_parts_for_a_known_wednesday() {
    let en = format_english(date(2025, 9, 24));
    assert_eq!(en.weekday, "Wednesday");
    assert_eq!(en.day, 24);
    assert_eq!(en.month, "September");
    assert_eq!(en.year, 2025);
}

#[test]
fn leap_day_formats_without_panic() {
    let th = format_thai(date(2024, 2, 29));
    assert_eq!(th.day, 29);
    assert_eq!(th.month_abbr, "ก.พ.");
    assert_eq!(th.year_be, 2567);

    let en = format_english(date(2024, 2, 29));
    assert_eq!(en.weekday, "Thursday");
    assert_eq!(en.month, "February");
}

#[test]
fn sunday_maps_to_first_table_entry() {
    // 2025-09-21 is a Sunday.
    assert_eq!(format_thai(date(2025, 9, 21)).weekday, "อาทิตย์");
    assert_eq!(format_english(date(2025, 9, 21)).weekday, "Sunday");
}

#[test]
fn time_labels_are_zero_padded() {
    assert_eq!(format_time_label(0), "00:00");
    assert_eq!(format_time_label(5), "00:05");
    assert_eq!(format_time_label(9 * 60), "09:00");
    assert_eq!(format_time_label(23 * 60 + 30), "23:30");
    assert_eq!(format_time_label(1439), "23:59");
}

#[test]
fn compact_date_has_abbreviated_month_and_weekday() {
    assert_eq!(format_date_compact(date(2025, 9, 24)), "24 Sep 2025 (Wed)");
    assert_eq!(format_date_compact(date(2026, 1, 4)), "4 Jan 2026 (Sun)");
}

#[test]
fn parse_date_roundtrips_iso_input() {
    assert_eq!(parse_date("2025-09-24").unwrap(), date(2025, 9, 24));
    assert_eq!(parse_date("2024-02-29").unwrap(), date(2024, 2, 29));
}

#[test]
fn parse_date_rejects_garbage_and_impossible_dates() {
    for bad in ["", "tomorrow", "2025-13-01", "2025-02-30", "24/09/2025"] {
        let err = parse_date(bad).unwrap_err();
        assert!(matches!(err, GridError::InvalidDate(_)), "accepted {bad:?}");
    }
}
