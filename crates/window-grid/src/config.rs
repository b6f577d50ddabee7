//! Slot-grid configuration -- interval, slot count, and precomputed labels.

use crate::calendar::{format_time_label, MINUTES_PER_DAY};
use crate::error::{GridError, Result};

/// Immutable grid configuration for one interval setting.
///
/// Rebuilt whole whenever the interval changes. `slots_per_day` is
/// `floor(1440 / interval_minutes)`; intervals that do not divide the day
/// evenly leave a partial final slot before midnight (documented caveat --
/// labels still align because every full slot starts on an interval multiple).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeConfig {
    interval_minutes: u32,
    slots_per_day: u32,
    slot_labels: Vec<String>,
}

impl TimeConfig {
    /// Build a configuration for the given slot interval in minutes.
    ///
    /// # Errors
    /// Returns `GridError::InvalidInterval` when the interval is zero or
    /// longer than a day.
    pub fn new(interval_minutes: u32) -> Result<Self> {
        if interval_minutes == 0 || interval_minutes > MINUTES_PER_DAY {
            return Err(GridError::InvalidInterval(interval_minutes));
        }

        let slots_per_day = MINUTES_PER_DAY / interval_minutes;

        // One label per slot boundary, slots_per_day + 1 entries. The final
        // boundary is the next midnight and wraps to "00:00".
        let slot_labels = (0..=slots_per_day)
            .map(|i| format_time_label((i * interval_minutes) % MINUTES_PER_DAY))
            .collect();

        Ok(Self {
            interval_minutes,
            slots_per_day,
            slot_labels,
        })
    }

    pub fn interval_minutes(&self) -> u32 {
        self.interval_minutes
    }

    pub fn slots_per_day(&self) -> u32 {
        self.slots_per_day
    }

    /// Total linear columns across the concatenated two-day span.
    pub fn total_slots(&self) -> u32 {
        self.slots_per_day * 2
    }

    /// "HH:MM" label for a slot boundary within one day.
    ///
    /// Valid for `slot_in_day` in `[0, slots_per_day]`; the final entry is
    /// the wrapped midnight label "00:00".
    pub fn label(&self, slot_in_day: u32) -> &str {
        &self.slot_labels[slot_in_day as usize]
    }

    pub fn labels(&self) -> &[String] {
        &self.slot_labels
    }

    /// Clamp a linear index into the valid `[0, total_slots)` range.
    pub fn clamp_index(&self, index: u32) -> u32 {
        index.min(self.total_slots() - 1)
    }
}
