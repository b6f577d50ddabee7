//! Calendar and clock formatting -- pure lookups over `chrono::NaiveDate`.
//!
//! Thai dates use the Buddhist Era (Gregorian year + 543) and abbreviated
//! month names; English dates use full Gregorian names. Both weekday tables
//! are Sunday-first, matching `Weekday::num_days_from_sunday`.

use chrono::{Datelike, NaiveDate};

use crate::error::{GridError, Result};

/// Minutes in one calendar day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Offset between the Gregorian and Buddhist Era year numbers.
pub const BUDDHIST_ERA_OFFSET: i32 = 543;

pub const WEEKDAYS_TH: [&str; 7] = [
    "อาทิตย์",
    "จันทร์",
    "อังคาร",
    "พุธ",
    "พฤหัสบดี",
    "ศุกร์",
    "เสาร์",
];

pub const MONTHS_TH_ABBR: [&str; 12] = [
    "ม.ค.", "ก.พ.", "มี.ค.", "เม.ย.", "พ.ค.", "มิ.ย.", "ก.ค.", "ส.ค.", "ก.ย.", "ต.ค.", "พ.ย.",
    "ธ.ค.",
];

pub const WEEKDAYS_EN: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const MONTHS_EN_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A date broken into Thai display parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThaiDate {
    pub weekday: &'static str,
    pub day: u32,
    pub month_abbr: &'static str,
    /// Buddhist Era year (Gregorian + 543).
    pub year_be: i32,
}

/// A date broken into English display parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnglishDate {
    pub weekday: &'static str,
    pub day: u32,
    pub month: &'static str,
    pub year: i32,
}

/// Format a date into Thai display parts (abbreviated month, BE year).
pub fn format_thai(date: NaiveDate) -> ThaiDate {
    ThaiDate {
        weekday: WEEKDAYS_TH[date.weekday().num_days_from_sunday() as usize],
        day: date.day(),
        month_abbr: MONTHS_TH_ABBR[date.month0() as usize],
        year_be: date.year() + BUDDHIST_ERA_OFFSET,
    }
}

/// Format a date into English display parts (full month and weekday names).
pub fn format_english(date: NaiveDate) -> EnglishDate {
    EnglishDate {
        weekday: WEEKDAYS_EN[date.weekday().num_days_from_sunday() as usize],
        day: date.day(),
        month: MONTHS_EN[date.month0() as usize],
        year: date.year(),
    }
}

/// Format minutes-from-midnight as a zero-padded "HH:MM" label.
///
/// `total_minutes` must be in `[0, 1440)`. Callers that compute an exclusive
/// end boundary are responsible for wrapping 1440 back to 0 so a day boundary
/// renders as "00:00" of the next day, never "24:00".
pub fn format_time_label(total_minutes: u32) -> String {
    debug_assert!(total_minutes < MINUTES_PER_DAY);
    format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}

/// Abbreviated date form used in summary lines, e.g. "24 Sep 2025 (Wed)".
pub fn format_date_compact(date: NaiveDate) -> String {
    let weekday = &WEEKDAYS_EN[date.weekday().num_days_from_sunday() as usize][..3];
    format!(
        "{} {} {} ({})",
        date.day(),
        MONTHS_EN_ABBR[date.month0() as usize],
        date.year(),
        weekday
    )
}

/// Parse a "YYYY-MM-DD" string into a `NaiveDate`.
///
/// Boundary helper for the wasm and CLI layers; core APIs take `NaiveDate`
/// directly, which cannot represent an invalid calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| GridError::InvalidDate(s.to_string()))
}
