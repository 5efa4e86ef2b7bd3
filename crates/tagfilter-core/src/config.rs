//! Markup configuration: which selectors and classes the listing page uses.

use serde::Deserialize;

/// Selectors, classes and display values describing the listing markup.
///
/// Every field has a default matching the stock page, so a partial object
/// (or none at all) is enough:
///
/// ```
/// use tagfilter_core::MarkupConfig;
///
/// let config = MarkupConfig::default();
/// assert_eq!(config.filter_selector, ".filter");
/// assert_eq!(config.disabled_class, "disabled");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarkupConfig {
    /// Element holding the filter labels.
    pub filters_selector: String,
    /// Filter labels, queried inside the filters container.
    pub filter_selector: String,
    /// Listing rows, queried on the whole document.
    pub row_selector: String,
    /// Tag elements, queried inside each row.
    pub tag_selector: String,
    /// Class marking a filter as excluded.
    pub disabled_class: String,
    /// `display` value for a shown row.
    pub shown_display: String,
    /// `display` value for a hidden row.
    pub hidden_display: String,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            filters_selector: ".filters".to_owned(),
            filter_selector: ".filter".to_owned(),
            row_selector: ".row".to_owned(),
            tag_selector: ".tag".to_owned(),
            disabled_class: "disabled".to_owned(),
            shown_display: "flex".to_owned(),
            hidden_display: "none".to_owned(),
        }
    }
}

impl MarkupConfig {
    /// The `display` value for a row with the given visibility.
    pub fn display_for(&self, visible: bool) -> &str {
        if visible {
            &self.shown_display
        } else {
            &self.hidden_display
        }
    }
}
