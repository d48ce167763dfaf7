use std::sync::Mutex;

use chrono::{DateTime, Utc};
use dotline_core::model::ActivitySet;
use dotline_core::svg::render_svg;
use dotline_core::views::render_timeline;
use dotline_protocol::Canvas;
use wasm_bindgen::prelude::*;

static SETS: Mutex<Vec<ActivitySet>> = Mutex::new(Vec::new());

/// Parse an activity map from JSON. Returns a handle (index) for later use.
#[wasm_bindgen]
pub fn parse_activity(json: &str) -> Result<usize, JsError> {
    let set =
        dotline_core::parsers::parse_activity(json).map_err(|e| JsError::new(&e.to_string()))?;
    let mut sets = SETS.lock().unwrap();
    let idx = sets.len();
    sets.push(set);
    Ok(idx)
}

/// Render the timeline for a parsed activity set, returning render
/// commands as JSON.
///
/// `now_ms` is the clock upper bound in milliseconds since the Unix epoch
/// (typically `Date.now()`).
#[wasm_bindgen]
pub fn render_commands(set_index: usize, now_ms: f64) -> Result<String, JsError> {
    let sets = SETS.lock().unwrap();
    let set = sets
        .get(set_index)
        .ok_or_else(|| JsError::new("invalid activity handle"))?;

    let commands = render_timeline(set, &Canvas::default(), clock_from_ms(now_ms)?);
    serde_json::to_string(&commands).map_err(|e| JsError::new(&e.to_string()))
}

/// Render the timeline as a standalone SVG document string.
#[wasm_bindgen]
pub fn render_svg_document(set_index: usize, now_ms: f64) -> Result<String, JsError> {
    let sets = SETS.lock().unwrap();
    let set = sets
        .get(set_index)
        .ok_or_else(|| JsError::new("invalid activity handle"))?;

    let canvas = Canvas::default();
    let commands = render_timeline(set, &canvas, clock_from_ms(now_ms)?);
    Ok(render_svg(&commands, &canvas))
}

/// Render with the page clock and attach the SVG to the container element
/// with the given id.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn mount(set_index: usize, container_id: &str) -> Result<(), JsError> {
    let svg = render_svg_document(set_index, js_sys::Date::now())?;

    let document = web_sys::window()
        .ok_or_else(|| JsError::new("no window"))?
        .document()
        .ok_or_else(|| JsError::new("no document"))?;
    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| JsError::new(&format!("no element with id {container_id:?}")))?;
    container.set_inner_html(&svg);
    Ok(())
}

fn clock_from_ms(now_ms: f64) -> Result<DateTime<Utc>, JsError> {
    DateTime::<Utc>::from_timestamp_millis(now_ms as i64)
        .ok_or_else(|| JsError::new("clock timestamp out of range"))
}
