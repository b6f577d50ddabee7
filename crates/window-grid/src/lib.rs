//! # window-grid
//!
//! Dual-day maintenance-window selection engine with bilingual announcement
//! rendering.
//!
//! The engine maps pointer and keyboard interaction on a linear sequence of
//! time slots -- two concatenated calendar days at a configurable interval --
//! into a canonical `{date, start_time, end_time, crosses_midnight}` window,
//! and renders that window into fixed Thai/English announcement text
//! (Buddhist-era years, day-rollover wording). DOM wiring, styling, and
//! clipboard plumbing live in the host page; this crate is pure state and
//! strings.
//!
//! ## Modules
//!
//! - [`config`] — slot interval, slots-per-day, and precomputed labels
//! - [`index`] — linear index ↔ `{day_offset, slot_in_day}` arithmetic
//! - [`selection`] — the interaction engine and the committed window model
//! - [`calendar`] — Thai/English date parts and "HH:MM" clock labels
//! - [`announce`] — the four announcement bodies, topics, and summaries
//! - [`error`] — error types

pub mod announce;
pub mod calendar;
pub mod config;
pub mod error;
pub mod index;
pub mod selection;

pub use announce::{render_all, render_announcement, render_summary, render_topic, Kind, Lang};
pub use config::TimeConfig;
pub use error::GridError;
pub use selection::{Preset, SelectionEngine, SelectionModel};
