//! Snapshotting the listing DOM into a [`FilterState`] and writing it back.
//!
//! # How it works
//!
//! 1. `snapshot()` reads filter labels, disabled classes, row tags and row display
//! 2. Core's `FilterState::toggle()` computes the next state
//! 3. `DomSnapshot::apply()` writes the disabled class of every filter and the
//!    `display` style of every row
//!
//! A fresh snapshot is taken on every click, so the DOM stays the single
//! source of truth between clicks.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Node, NodeList};

use tagfilter_core::{Filter, FilterId, FilterState, MarkupConfig, Row, SmolStr, ToggleOutcome};

use crate::error::DomError;

/// The listing state together with the elements it was read from.
///
/// `filter_elements[i]` backs `state.filters[i]`, `row_elements[i]` backs
/// `state.rows[i]`.
#[derive(Debug)]
pub struct DomSnapshot {
    pub state: FilterState,
    pub(crate) filter_elements: Vec<Element>,
    row_elements: Vec<HtmlElement>,
}

/// Get the global document.
pub fn document() -> Result<Document, DomError> {
    web_sys::window()
        .ok_or(DomError::NoWindow)?
        .document()
        .ok_or(DomError::NoDocument)
}

/// Read the filters and rows of the listing.
pub fn snapshot(document: &Document, config: &MarkupConfig) -> Result<DomSnapshot, DomError> {
    let container = document
        .query_selector(&config.filters_selector)
        .map_err(|e| DomError::query(&config.filters_selector, e))?
        .ok_or_else(|| DomError::MissingContainer(config.filters_selector.clone()))?;

    let filter_nodes = container
        .query_selector_all(&config.filter_selector)
        .map_err(|e| DomError::query(&config.filter_selector, e))?;
    let filter_elements: Vec<Element> = elements(&filter_nodes).collect();
    let filters = filter_elements
        .iter()
        .map(|el| {
            let label = el.text_content().unwrap_or_default();
            Filter::from_label(&label)
                .with_disabled(el.class_list().contains(&config.disabled_class))
        })
        .collect();

    let row_nodes = document
        .query_selector_all(&config.row_selector)
        .map_err(|e| DomError::query(&config.row_selector, e))?;
    let row_elements: Vec<HtmlElement> = elements(&row_nodes)
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect();

    let mut rows = Vec::with_capacity(row_elements.len());
    for el in &row_elements {
        let tag_nodes = el
            .query_selector_all(&config.tag_selector)
            .map_err(|e| DomError::query(&config.tag_selector, e))?;
        let tags: Vec<SmolStr> = elements(&tag_nodes)
            .map(|tag| SmolStr::new(tag.text_content().unwrap_or_default().trim()))
            .collect();

        let display = el.style().get_property_value("display").unwrap_or_default();
        let mut row = Row::new(tags);
        row.visible = display != config.hidden_display;
        rows.push(row);
    }

    tracing::trace!(
        filters = filter_elements.len(),
        rows = row_elements.len(),
        "snapshot listing"
    );

    Ok(DomSnapshot {
        state: FilterState::new(filters, rows),
        filter_elements,
        row_elements,
    })
}

impl DomSnapshot {
    /// Position of `element` among the snapshot's filters.
    pub fn position_of(&self, element: &Element) -> Option<FilterId> {
        let node: &Node = element;
        self.filter_elements
            .iter()
            .position(|el| el.is_same_node(Some(node)))
            .map(FilterId)
    }

    /// Resolve a click target to a filter: the element itself, or the
    /// closest ancestor matching the filter selector.
    pub fn locate(&self, target: &Element, config: &MarkupConfig) -> Option<FilterId> {
        self.position_of(target).or_else(|| {
            let ancestor = target.closest(&config.filter_selector).ok().flatten()?;
            self.position_of(&ancestor)
        })
    }

    /// Write the current state to the DOM.
    ///
    /// Every filter gets its disabled class set or cleared and every row gets
    /// its `display` style written, visible or not.
    pub fn apply(&self, config: &MarkupConfig) -> Result<(), DomError> {
        for (el, filter) in self.filter_elements.iter().zip(&self.state.filters) {
            el.class_list()
                .toggle_with_force(&config.disabled_class, filter.disabled)
                .map_err(|e| DomError::query(&config.disabled_class, e))?;
        }

        for (el, row) in self.row_elements.iter().zip(&self.state.rows) {
            el.style()
                .set_property("display", config.display_for(row.visible))
                .map_err(|e| DomError::query(&config.row_selector, e))?;
        }

        Ok(())
    }
}

/// Handle a click on a filter element: snapshot, toggle, write back.
pub fn toggle_filter(
    document: &Document,
    clicked: &Element,
    config: &MarkupConfig,
) -> Result<ToggleOutcome, DomError> {
    let mut snap = snapshot(document, config)?;
    let id = snap.locate(clicked, config).ok_or(DomError::NotAFilter)?;
    let outcome = snap.state.toggle(id)?;
    snap.apply(config)?;

    tracing::debug!(
        transition = ?outcome.transition,
        visible = outcome.visible_rows,
        total = snap.state.rows.len(),
        "applied filter toggle"
    );
    Ok(outcome)
}

fn elements(nodes: &NodeList) -> impl Iterator<Item = Element> + '_ {
    (0..nodes.length())
        .filter_map(move |i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
}
