//! WASM bindings for tagfilter listings.
//!
//! The listing page calls `toggle(this)` from each filter's `onclick`, or
//! calls `install()` once to attach the listeners from Rust.

mod types;

pub use types::*;

use tagfilter_browser::{MarkupConfig, document, toggle_filter};
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Initialize panic hook and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    #[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
    {
        use tracing::Level;
        use tracing::subscriber::set_global_default;
        use tracing_subscriber::Registry;
        use tracing_subscriber::layer::SubscriberExt;

        let console_level = if cfg!(debug_assertions) {
            Level::DEBUG
        } else {
            Level::INFO
        };

        let wasm_layer = tracing_wasm::WASMLayer::new(
            tracing_wasm::WASMLayerConfigBuilder::new()
                .set_max_level(console_level)
                .build(),
        );

        let _ = set_global_default(Registry::default().with(wasm_layer));
    }
}

/// Toggle the clicked filter using the stock markup.
///
/// Never throws: a click on something that isn't a filter is logged and
/// ignored.
#[wasm_bindgen]
pub fn toggle(filter: &Element) {
    let config = MarkupConfig::default();
    let result = document().and_then(|doc| toggle_filter(&doc, filter, &config));
    if let Err(err) = result {
        tracing::warn!(%err, "filter click ignored");
    }
}

/// Toggle the clicked filter with a custom markup config.
///
/// # Arguments
/// * `filter` - The clicked filter element (or an element inside it)
/// * `config` - Partial config object, e.g. `{ rowSelector: "li.entry" }`
#[wasm_bindgen(js_name = toggleWith)]
pub fn toggle_with(filter: &Element, config: JsValue) -> Result<JsToggleOutcome, JsError> {
    let config = parse_config(Some(config))?;
    let doc = document().map_err(|e| JsError::new(&e.to_string()))?;
    toggle_filter(&doc, filter, &config)
        .map(JsToggleOutcome::from)
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Attach click listeners to every filter in the listing.
///
/// Keep the returned handle alive; freeing it detaches the listeners.
#[wasm_bindgen]
pub fn install(config: Option<JsValue>) -> Result<FilterHandle, JsError> {
    let config = parse_config(config)?;
    let doc = document().map_err(|e| JsError::new(&e.to_string()))?;
    let listeners =
        tagfilter_browser::install(&doc, config).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(FilterHandle::new(listeners))
}
