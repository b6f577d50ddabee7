//! Bilingual announcement rendering from a committed selection.
//!
//! Four fixed message bodies (pre-maintenance and during-maintenance, Thai
//! and English) plus the one-line topic, summary, and combined copy-paste
//! block. Templates are data: wording is fixed here once, including the
//! "next day" qualifier appended to the end-time clause when the window
//! wraps past midnight.

use crate::calendar::{format_date_compact, format_english, format_thai};
use crate::selection::SelectionModel;

/// Which announcement body to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Posted ahead of the window ("will be closed for upgrading").
    Pre,
    /// Shown while maintenance is running ("is now upgrading").
    DuringMaintenance,
}

/// Output language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Th,
    En,
}

/// Thai time-range clause, e.g. "22:00 – 06:00 ของวันถัดไป".
fn thai_range(model: &SelectionModel) -> String {
    if model.wraps_to_next_day() {
        format!("{} – {} ของวันถัดไป", model.start_time, model.end_time)
    } else {
        format!("{} – {}", model.start_time, model.end_time)
    }
}

/// English end-of-range clause following "from {start} ".
fn english_connector(model: &SelectionModel) -> String {
    if model.wraps_to_next_day() {
        format!("until {} next day", model.end_time)
    } else {
        format!("to {}", model.end_time)
    }
}

/// Render one of the four announcement bodies for a committed window.
pub fn render_announcement(kind: Kind, lang: Lang, model: &SelectionModel) -> String {
    match lang {
        Lang::Th => {
            let d = format_thai(model.date);
            let range = thai_range(model);
            match kind {
                Kind::Pre => format!(
                    "เรียนลูกค้าที่เคารพ ดีแทคแอปจะปิดปรับปรุงเพื่อบริการที่ดียิ่งขึ้นในวัน{}ที่ {} {} {} เวลา {} ขออภัยในความไม่สะดวก",
                    d.weekday, d.day, d.month_abbr, d.year_be, range
                ),
                Kind::DuringMaintenance => format!(
                    "ขณะนี้ dtac app กำลังปิดปรับปรุงเพื่อพัฒนาการให้บริการ ในวัน{}ที่ {} {} {} เวลา {} ขออภัยในความไม่สะดวก",
                    d.weekday, d.day, d.month_abbr, d.year_be, range
                ),
            }
        }
        Lang::En => {
            let d = format_english(model.date);
            let connector = english_connector(model);
            match kind {
                Kind::Pre => format!(
                    "Dear customers, please note that dtac app will be closed for upgrading the service on {}, {} {} {}, from {} {}. We sincerely apologize for the inconvenience.",
                    d.weekday, d.day, d.month, d.year, model.start_time, connector
                ),
                Kind::DuringMaintenance => format!(
                    "dtac app is now upgrading the service on {}, {} {} {}, from {} {}. We sincerely apologize for the inconvenience.",
                    d.weekday, d.day, d.month, d.year, model.start_time, connector
                ),
            }
        }
    }
}

/// Render the one-line notification topic for a committed window.
pub fn render_topic(kind: Kind, lang: Lang, model: &SelectionModel) -> String {
    let wraps = model.wraps_to_next_day();
    match lang {
        Lang::Th => {
            let d = format_thai(model.date);
            let range = if wraps {
                format!("{}–{} ของวันถัดไป", model.start_time, model.end_time)
            } else {
                format!("{}–{}", model.start_time, model.end_time)
            };
            match kind {
                Kind::Pre => format!(
                    "ปิดปรับปรุง dtac app – {} {} {} {} ({})",
                    d.weekday, d.day, d.month_abbr, d.year_be, range
                ),
                Kind::DuringMaintenance => format!(
                    "dtac app กำลังปิดปรับปรุง – {} {} {} ({})",
                    d.day, d.month_abbr, d.year_be, range
                ),
            }
        }
        Lang::En => {
            let d = format_english(model.date);
            let range = if wraps {
                format!("{}–{} next day", model.start_time, model.end_time)
            } else {
                format!("{}–{}", model.start_time, model.end_time)
            };
            match kind {
                Kind::Pre => format!(
                    "dtac app maintenance – {}, {} {} {} ({})",
                    d.weekday, d.day, d.month, d.year, range
                ),
                Kind::DuringMaintenance => format!(
                    "dtac app is under maintenance – {} {} {} ({})",
                    d.day, d.month, d.year, range
                ),
            }
        }
    }
}

/// One-line window summary, e.g.
/// "Maintenance Window: 24 Sep 2025 (Wed) 23:00 – 04:30 next day".
pub fn render_summary(model: &SelectionModel) -> String {
    let range = if model.wraps_to_next_day() {
        format!("{} – {} next day", model.start_time, model.end_time)
    } else {
        format!("{} – {}", model.start_time, model.end_time)
    };
    format!(
        "Maintenance Window: {} {}",
        format_date_compact(model.date),
        range
    )
}

/// The combined copy-paste block: all four bodies under section headers.
pub fn render_all(model: &SelectionModel) -> String {
    [
        "Pre-MA Announcement".to_string(),
        "TH:".to_string(),
        render_announcement(Kind::Pre, Lang::Th, model),
        String::new(),
        "EN:".to_string(),
        render_announcement(Kind::Pre, Lang::En, model),
        String::new(),
        "MA Mode".to_string(),
        "TH:".to_string(),
        render_announcement(Kind::DuringMaintenance, Lang::Th, model),
        String::new(),
        "EN:".to_string(),
        render_announcement(Kind::DuringMaintenance, Lang::En, model),
    ]
    .join("\n")
}
