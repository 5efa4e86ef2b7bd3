//! Types exposed to JavaScript via wasm-bindgen.

use tagfilter_browser::{FilterListeners, MarkupConfig, ToggleOutcome};
use wasm_bindgen::prelude::*;

/// Result of a filter toggle.
#[wasm_bindgen]
pub struct JsToggleOutcome {
    /// Which rule fired, e.g. `"isolate"` or `"reset-from-last-enabled"`.
    #[wasm_bindgen(getter_with_clone)]
    pub transition: String,
    /// All rows were shown unconditionally.
    pub reset: bool,
    #[wasm_bindgen(js_name = visibleRows)]
    pub visible_rows: u32,
}

impl From<ToggleOutcome> for JsToggleOutcome {
    fn from(outcome: ToggleOutcome) -> Self {
        Self {
            transition: outcome.transition.as_str().to_owned(),
            reset: outcome.reset,
            visible_rows: u32::try_from(outcome.visible_rows).unwrap_or(u32::MAX),
        }
    }
}

/// Attached click listeners. Call `free()` to detach them.
#[wasm_bindgen]
pub struct FilterHandle {
    listeners: FilterListeners,
}

#[wasm_bindgen]
impl FilterHandle {
    /// Number of filters being listened to.
    #[wasm_bindgen(getter)]
    pub fn len(&self) -> u32 {
        u32::try_from(self.listeners.len()).unwrap_or(u32::MAX)
    }
}

impl FilterHandle {
    pub(crate) fn new(listeners: FilterListeners) -> Self {
        Self { listeners }
    }
}

/// Read a markup config from a JS object; `undefined`/`null` give the defaults.
pub(crate) fn parse_config(value: Option<JsValue>) -> Result<MarkupConfig, JsError> {
    match value {
        Some(value) if !value.is_undefined() && !value.is_null() => {
            serde_wasm_bindgen::from_value(value)
                .map_err(|e| JsError::new(&format!("Invalid markup config: {}", e)))
        }
        _ => Ok(MarkupConfig::default()),
    }
}
