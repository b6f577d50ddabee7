//! Linear index arithmetic over the concatenated two-day slot sequence.
//!
//! Day 0 is the day before the base date, day 1 is the base date itself.
//! A linear index in `[0, 2 * slots_per_day)` decomposes into a day offset
//! and a slot offset within that day.

/// A linear index decomposed into its day and in-day slot parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRef {
    /// 0 = day before the base date, 1 = the base date.
    pub day_offset: u32,
    /// Slot position within the day, `[0, slots_per_day)`.
    pub slot_in_day: u32,
}

/// Decompose a linear index into `{day_offset, slot_in_day}`.
pub fn decompose(index: u32, slots_per_day: u32) -> SlotRef {
    SlotRef {
        day_offset: index / slots_per_day,
        slot_in_day: index % slots_per_day,
    }
}

/// Recompose a `SlotRef` back into its linear index.
pub fn recompose(slot: SlotRef, slots_per_day: u32) -> u32 {
    slot.day_offset * slots_per_day + slot.slot_in_day
}
