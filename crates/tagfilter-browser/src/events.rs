//! Click listeners on the filter labels.

use std::rc::Rc;

use gloo_events::EventListener;
use web_sys::Document;

use tagfilter_core::MarkupConfig;

use crate::dom::{snapshot, toggle_filter};
use crate::error::DomError;

/// Keeps the filter click listeners attached.
///
/// Dropping this removes every listener it holds.
#[must_use = "listeners are removed when this is dropped"]
pub struct FilterListeners {
    listeners: Vec<EventListener>,
}

impl FilterListeners {
    /// Number of filters with a listener attached.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

/// Attach a click listener to every filter in the listing.
///
/// Each click re-reads the DOM and toggles the clicked filter, so filters
/// or rows changed by other scripts between clicks are picked up.
pub fn install(document: &Document, config: MarkupConfig) -> Result<FilterListeners, DomError> {
    let config = Rc::new(config);
    let snap = snapshot(document, &config)?;

    let listeners: Vec<EventListener> = snap
        .filter_elements
        .iter()
        .map(|element| {
            let document = document.clone();
            let config = Rc::clone(&config);
            let clicked = element.clone();
            EventListener::new(element, "click", move |_event| {
                if let Err(err) = toggle_filter(&document, &clicked, &config) {
                    tracing::warn!(%err, "filter click ignored");
                }
            })
        })
        .collect();

    tracing::debug!(filters = listeners.len(), "installed filter listeners");
    Ok(FilterListeners { listeners })
}
