//! WASM bindings for window-grid.
//!
//! Exposes the range selection engine and the announcement renderers to the
//! browser host page via `wasm-bindgen`. The host maps DOM pointer/keyboard
//! events onto the engine methods; committed selections cross the boundary
//! as JSON strings (`null`/`None` when the selection is empty), so the page
//! can render highlights and output text without holding any state of its
//! own.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p window-grid-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir assets/wasm/ \
//!   target/wasm32-unknown-unknown/release/window_grid_wasm.wasm
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use window_grid::{calendar, Kind, Lang, Preset, SelectionEngine, SelectionModel};

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// Committed window as seen by JavaScript:
/// `{"date":"2025-09-24","startTime":"00:00","endTime":"03:00","crossesMidnight":false}`.
#[derive(Serialize, Deserialize)]
struct SelectionModelDto {
    date: String,
    #[serde(rename = "startTime")]
    start_time: String,
    #[serde(rename = "endTime")]
    end_time: String,
    #[serde(rename = "crossesMidnight")]
    crosses_midnight: bool,
}

impl From<&SelectionModel> for SelectionModelDto {
    fn from(model: &SelectionModel) -> Self {
        Self {
            date: model.date.format("%Y-%m-%d").to_string(),
            start_time: model.start_time.clone(),
            end_time: model.end_time.clone(),
            crosses_midnight: model.crosses_midnight,
        }
    }
}

impl TryFrom<SelectionModelDto> for SelectionModel {
    type Error = JsValue;

    fn try_from(dto: SelectionModelDto) -> Result<Self, JsValue> {
        Ok(SelectionModel {
            date: parse_date(&dto.date)?,
            start_time: dto.start_time,
            end_time: dto.end_time,
            crosses_midnight: dto.crosses_midnight,
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_date(s: &str) -> Result<NaiveDate, JsValue> {
    calendar::parse_date(s).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_model_json(json: &str) -> Result<SelectionModel, JsValue> {
    let dto: SelectionModelDto = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid selection JSON: {}", e)))?;
    dto.try_into()
}

fn parse_kind(kind: &str) -> Result<Kind, JsValue> {
    match kind {
        "pre" => Ok(Kind::Pre),
        "ma" => Ok(Kind::DuringMaintenance),
        other => Err(JsValue::from_str(&format!(
            "Unknown announcement kind: '{}'. Expected 'pre' or 'ma'.",
            other
        ))),
    }
}

fn parse_lang(lang: &str) -> Result<Lang, JsValue> {
    match lang {
        "th" => Ok(Lang::Th),
        "en" => Ok(Lang::En),
        other => Err(JsValue::from_str(&format!(
            "Unknown language: '{}'. Expected 'th' or 'en'.",
            other
        ))),
    }
}

fn model_json(model: Option<&SelectionModel>) -> Result<Option<String>, JsValue> {
    match model {
        Some(model) => {
            let dto = SelectionModelDto::from(model);
            serde_json::to_string(&dto)
                .map(Some)
                .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
        }
        None => Ok(None),
    }
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// The selection engine, held by the host page for the duration of the
/// session. Mutating interaction methods return the committed window as a
/// JSON string where a commit point was reached; `undefined` means the
/// committed selection is empty.
#[wasm_bindgen]
pub struct TimeRangeGrid {
    engine: SelectionEngine,
}

#[wasm_bindgen]
impl TimeRangeGrid {
    /// Create an engine for the given slot interval (minutes) and base date
    /// ("YYYY-MM-DD").
    #[wasm_bindgen(constructor)]
    pub fn new(interval_minutes: u32, base_date: &str) -> Result<TimeRangeGrid, JsValue> {
        let date = parse_date(base_date)?;
        let engine = SelectionEngine::new(interval_minutes, date)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(TimeRangeGrid { engine })
    }

    /// Apply a new interval and base date, clearing any selection.
    /// On error the previous configuration is kept.
    #[wasm_bindgen(js_name = "configure")]
    pub fn configure(&mut self, interval_minutes: u32, base_date: &str) -> Result<(), JsValue> {
        let date = parse_date(base_date)?;
        self.engine
            .configure(interval_minutes, date)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = "slotsPerDay")]
    pub fn slots_per_day(&self) -> u32 {
        self.engine.config().slots_per_day()
    }

    #[wasm_bindgen(js_name = "totalSlots")]
    pub fn total_slots(&self) -> u32 {
        self.engine.config().total_slots()
    }

    /// Slot boundary labels for one day, "00:00" through the wrapped final
    /// midnight, as a JS string array.
    #[wasm_bindgen(js_name = "slotLabels")]
    pub fn slot_labels(&self) -> Vec<String> {
        self.engine.config().labels().to_vec()
    }

    #[wasm_bindgen(js_name = "beginSelection")]
    pub fn begin_selection(&mut self, index: u32) {
        self.engine.begin_selection(index);
    }

    #[wasm_bindgen(js_name = "extendSelection")]
    pub fn extend_selection(&mut self, index: u32) {
        self.engine.extend_selection(index);
    }

    /// Finalize the drag; returns the committed window JSON.
    #[wasm_bindgen(js_name = "endSelection")]
    pub fn end_selection(&mut self) -> Result<Option<String>, JsValue> {
        self.engine.end_selection();
        model_json(self.engine.committed())
    }

    #[wasm_bindgen(js_name = "clearSelection")]
    pub fn clear_selection(&mut self) {
        self.engine.clear_selection();
    }

    /// Move the keyboard focus cursor; returns the new cursor index.
    #[wasm_bindgen(js_name = "moveFocus")]
    pub fn move_focus(&mut self, delta: i32) -> u32 {
        self.engine.move_focus(delta as i64)
    }

    /// Keyboard step (arrows, Home/End, PageUp/Down mapped to a delta by the
    /// host); `extend` is the Shift modifier. Returns the committed window
    /// JSON when the step committed.
    #[wasm_bindgen(js_name = "stepFocus")]
    pub fn step_focus(&mut self, delta: i32, extend: bool) -> Result<Option<String>, JsValue> {
        self.engine.step_focus(delta as i64, extend);
        model_json(self.engine.committed())
    }

    /// Space/Enter on the focused cell: single-slot selection, committed.
    #[wasm_bindgen(js_name = "selectAtFocus")]
    pub fn select_at_focus(&mut self) -> Result<Option<String>, JsValue> {
        self.engine.select_at_focus();
        model_json(self.engine.committed())
    }

    /// Apply a quick-action preset: "business", "overnight", "all", "clear".
    #[wasm_bindgen(js_name = "applyPreset")]
    pub fn apply_preset(&mut self, name: &str) -> Result<Option<String>, JsValue> {
        let preset = match name {
            "business" => Preset::BusinessHours,
            "overnight" => Preset::Overnight,
            "all" => Preset::FullRange,
            "clear" => Preset::Clear,
            other => {
                return Err(JsValue::from_str(&format!(
                    "Unknown preset: '{}'. Available presets: business, overnight, all, clear",
                    other
                )))
            }
        };
        self.engine.apply_preset(preset);
        model_json(self.engine.committed())
    }

    #[wasm_bindgen(js_name = "focusIndex")]
    pub fn focus_index(&self) -> u32 {
        self.engine.focus_index()
    }

    /// The in-progress selection as `[low, high]` for cell highlighting,
    /// or `undefined` when empty.
    #[wasm_bindgen(js_name = "selectionRange")]
    pub fn selection_range(&self) -> Option<Vec<u32>> {
        self.engine.selection_range().map(|(a, b)| vec![a, b])
    }

    #[wasm_bindgen(js_name = "isDragging")]
    pub fn is_dragging(&self) -> bool {
        self.engine.is_dragging()
    }

    /// The last committed window JSON, if any.
    #[wasm_bindgen(js_name = "committed")]
    pub fn committed(&self) -> Result<Option<String>, JsValue> {
        model_json(self.engine.committed())
    }
}

/// Render one announcement body from a committed window JSON.
///
/// `kind` is "pre" or "ma"; `lang` is "th" or "en".
#[wasm_bindgen(js_name = "renderAnnouncement")]
pub fn render_announcement(kind: &str, lang: &str, model_json: &str) -> Result<String, JsValue> {
    let model = parse_model_json(model_json)?;
    Ok(window_grid::render_announcement(
        parse_kind(kind)?,
        parse_lang(lang)?,
        &model,
    ))
}

/// Render the one-line notification topic from a committed window JSON.
#[wasm_bindgen(js_name = "renderTopic")]
pub fn render_topic(kind: &str, lang: &str, model_json: &str) -> Result<String, JsValue> {
    let model = parse_model_json(model_json)?;
    Ok(window_grid::render_topic(
        parse_kind(kind)?,
        parse_lang(lang)?,
        &model,
    ))
}

/// Render the "Maintenance Window: ..." summary line.
#[wasm_bindgen(js_name = "renderSummary")]
pub fn render_summary(model_json: &str) -> Result<String, JsValue> {
    Ok(window_grid::render_summary(&parse_model_json(model_json)?))
}

/// Render the combined copy-paste block with all four message bodies.
#[wasm_bindgen(js_name = "renderAll")]
pub fn render_all(model_json: &str) -> Result<String, JsValue> {
    Ok(window_grid::render_all(&parse_model_json(model_json)?))
}
