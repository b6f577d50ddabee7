//! Range selection engine -- turns discrete interaction events into a
//! committed maintenance window.
//!
//! One `{anchor, focus}` pair is shared by pointer and keyboard input.
//! Transient drag and focus updates never notify the host; only commit
//! points (pointer-release, a finalizing keystroke, a preset, a clear)
//! push a [`SelectionModel`] to the registered listener.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::TimeConfig;
use crate::error::Result;
use crate::index::decompose;

/// A committed maintenance window, derived from the normalized selection.
///
/// `end_time` comes from the exclusive upper slot boundary, so a single-slot
/// selection spans exactly one interval. When `crosses_midnight` is set the
/// end time falls on the day after `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionModel {
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub crosses_midnight: bool,
}

impl SelectionModel {
    /// Whether the window should be read as ending on the following day.
    ///
    /// True when the selection crossed the grid's midnight column, and also
    /// when `end_time` does not strictly follow `start_time` on the same
    /// day -- a window cannot have zero or negative duration, so an equal or
    /// earlier end wraps forward. Zero-padded "HH:MM" compares correctly as
    /// a plain string.
    pub fn wraps_to_next_day(&self) -> bool {
        self.crosses_midnight || self.end_time <= self.start_time
    }
}

/// Drag phase of the pointer interaction machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DragPhase {
    #[default]
    Idle,
    /// Pointer down, no movement yet.
    Anchoring,
    /// Pointer down and extended at least once.
    Dragging,
}

/// Fixed selection presets offered by the host page's quick-action buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// [09:00, 17:00) of the base date.
    BusinessHours,
    /// 22:00 of the previous day through 06:00 of the base date.
    Overnight,
    /// The entire 48-hour span.
    FullRange,
    /// Empty selection.
    Clear,
}

/// Listener invoked synchronously at every commit point. `None` means the
/// committed selection is empty.
pub type CommitListener = Box<dyn FnMut(Option<&SelectionModel>)>;

/// The range selection engine.
///
/// Owns the linear index space (two concatenated days), the in-progress
/// `{anchor, focus}` pair, the keyboard focus cursor, and the last committed
/// model. All index arguments are clamped to `[0, total_slots)`.
pub struct SelectionEngine {
    config: TimeConfig,
    base_date: NaiveDate,
    anchor: Option<u32>,
    focus: Option<u32>,
    cursor: u32,
    phase: DragPhase,
    committed: Option<SelectionModel>,
    listener: Option<CommitListener>,
}

impl SelectionEngine {
    /// Build an engine for the given slot interval and base date.
    ///
    /// # Errors
    /// Returns `GridError::InvalidInterval` for a zero or over-long interval.
    pub fn new(interval_minutes: u32, base_date: NaiveDate) -> Result<Self> {
        Ok(Self {
            config: TimeConfig::new(interval_minutes)?,
            base_date,
            anchor: None,
            focus: None,
            cursor: 0,
            phase: DragPhase::Idle,
            committed: None,
            listener: None,
        })
    }

    /// Register the commit listener. Replaces any previous listener.
    pub fn set_commit_listener(&mut self, listener: CommitListener) {
        self.listener = Some(listener);
    }

    /// Apply a new interval and base date, rebuilding the index space.
    ///
    /// Clears both the in-progress and committed selection and notifies the
    /// listener with `None`. Safe to call mid-drag: the drag is aborted
    /// silently rather than committing a stale range. On error the previous
    /// configuration is retained untouched.
    ///
    /// # Errors
    /// Returns `GridError::InvalidInterval`; the engine state is unchanged.
    pub fn configure(&mut self, interval_minutes: u32, base_date: NaiveDate) -> Result<()> {
        // Validate before mutating anything.
        let config = TimeConfig::new(interval_minutes)?;

        self.config = config;
        self.base_date = base_date;
        self.anchor = None;
        self.focus = None;
        self.cursor = 0;
        self.phase = DragPhase::Idle;
        self.committed = None;

        // State is fully consistent before the listener observes the reset.
        self.notify();
        Ok(())
    }

    /// Start a new selection at `index` (pointer-down or Space/Enter).
    pub fn begin_selection(&mut self, index: u32) {
        let index = self.config.clamp_index(index);
        self.anchor = Some(index);
        self.focus = Some(index);
        self.cursor = index;
        self.phase = DragPhase::Anchoring;
    }

    /// Move the focus edge of the in-progress selection (pointer-drag-over).
    ///
    /// A no-op unless a selection was begun first.
    pub fn extend_selection(&mut self, index: u32) {
        if self.anchor.is_none() {
            return;
        }
        let index = self.config.clamp_index(index);
        self.focus = Some(index);
        self.cursor = index;
        if self.phase == DragPhase::Anchoring {
            self.phase = DragPhase::Dragging;
        }
    }

    /// Finalize the in-progress selection (pointer-release) and commit it.
    ///
    /// Idempotent: calling again without an intervening begin/extend commits
    /// the same model again.
    pub fn end_selection(&mut self) {
        self.phase = DragPhase::Idle;
        self.commit();
    }

    /// Empty the selection and commit `None`.
    pub fn clear_selection(&mut self) {
        self.anchor = None;
        self.focus = None;
        self.phase = DragPhase::Idle;
        self.commit();
    }

    /// Move the keyboard focus cursor by `delta` slots, clamped to bounds.
    ///
    /// Does not change the selection by itself; returns the new cursor.
    pub fn move_focus(&mut self, delta: i64) -> u32 {
        let max = (self.config.total_slots() - 1) as i64;
        let next = (self.cursor as i64).saturating_add(delta).clamp(0, max);
        self.cursor = next as u32;
        self.cursor
    }

    /// Keyboard range step: move the cursor, then update the selection.
    ///
    /// With `extend` (Shift held) the range grows from the remembered anchor
    /// -- seeded from the pre-move cursor when none exists -- and commits.
    /// Without it, any existing range collapses to a single cell at the new
    /// cursor and commits; plain movement over an empty selection commits
    /// nothing.
    pub fn step_focus(&mut self, delta: i64, extend: bool) {
        let previous = self.cursor;
        self.move_focus(delta);

        if extend {
            if self.anchor.is_none() {
                self.anchor = Some(previous);
            }
            self.focus = Some(self.cursor);
            self.commit();
        } else if self.anchor.is_some() {
            self.anchor = Some(self.cursor);
            self.focus = Some(self.cursor);
            self.commit();
        }
    }

    /// Select the single cell under the keyboard cursor and commit it
    /// (Space/Enter on a focused cell).
    pub fn select_at_focus(&mut self) {
        self.anchor = Some(self.cursor);
        self.focus = Some(self.cursor);
        self.phase = DragPhase::Idle;
        self.commit();
    }

    /// Set the selection to a fixed preset pair and commit immediately.
    pub fn apply_preset(&mut self, preset: Preset) {
        let spd = self.config.slots_per_day();
        let interval = self.config.interval_minutes();
        let slots_for = |minutes: u32| minutes / interval;

        let pair = match preset {
            // Day 1 (the base date): 09:00 up to the slot before 17:00.
            Preset::BusinessHours => Some((
                spd + slots_for(9 * 60),
                (spd + slots_for(17 * 60)).saturating_sub(1),
            )),
            // 22:00 of day 0 through the slot before 06:00 of day 1.
            Preset::Overnight => Some((slots_for(22 * 60), (spd + slots_for(6 * 60)).saturating_sub(1))),
            Preset::FullRange => Some((0, self.config.total_slots() - 1)),
            Preset::Clear => None,
        };

        match pair {
            Some((a, f)) => {
                self.anchor = Some(self.config.clamp_index(a));
                self.focus = Some(self.config.clamp_index(f));
                self.cursor = self.config.clamp_index(a);
            }
            None => {
                self.anchor = None;
                self.focus = None;
            }
        }
        self.phase = DragPhase::Idle;
        self.commit();
    }

    pub fn config(&self) -> &TimeConfig {
        &self.config
    }

    pub fn base_date(&self) -> NaiveDate {
        self.base_date
    }

    pub fn focus_index(&self) -> u32 {
        self.cursor
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// The in-progress selection as a normalized `(low, high)` pair, for
    /// host-side cell highlighting.
    pub fn selection_range(&self) -> Option<(u32, u32)> {
        let (a, f) = (self.anchor?, self.focus?);
        Some((a.min(f), a.max(f)))
    }

    /// The last committed model, if any.
    pub fn committed(&self) -> Option<&SelectionModel> {
        self.committed.as_ref()
    }

    /// Derive the model from the current pair, store it, and notify.
    fn commit(&mut self) {
        self.committed = self.derive_model();
        self.notify();
    }

    fn notify(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            listener(self.committed.as_ref());
        }
    }

    fn derive_model(&self) -> Option<SelectionModel> {
        let (low, high) = self.selection_range()?;
        let spd = self.config.slots_per_day();

        let start = decompose(low, spd);

        // The end boundary is exclusive: a single-slot selection ends one
        // interval after it starts. Splitting high + 1 by slots_per_day
        // wraps a day-final slot to "00:00" of the next day.
        let end_exclusive = high + 1;
        let end_day = end_exclusive / spd;
        let end_slot = end_exclusive % spd;

        let date = self.base_date + Duration::days(start.day_offset as i64 - 1);

        Some(SelectionModel {
            date,
            start_time: self.config.label(start.slot_in_day).to_string(),
            end_time: self.config.label(end_slot).to_string(),
            crosses_midnight: end_day > start.day_offset,
        })
    }
}

impl std::fmt::Debug for SelectionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionEngine")
            .field("config", &self.config)
            .field("base_date", &self.base_date)
            .field("anchor", &self.anchor)
            .field("focus", &self.focus)
            .field("cursor", &self.cursor)
            .field("phase", &self.phase)
            .field("committed", &self.committed)
            .finish_non_exhaustive()
    }
}
