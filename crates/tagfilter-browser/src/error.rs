//! Errors from reading or writing the listing DOM.

use tagfilter_core::FilterError;
use wasm_bindgen::JsValue;

#[derive(thiserror::Error, Debug)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    /// The filters container selector matched nothing.
    #[error("no element matches filters selector `{0}`")]
    MissingContainer(String),

    /// A selector was rejected or a DOM call threw.
    #[error("DOM call failed for `{selector}`: {message}")]
    Query { selector: String, message: String },

    /// The clicked element is not one of the listing's filters.
    #[error("clicked element is not a filter")]
    NotAFilter,

    #[error(transparent)]
    Filter(#[from] FilterError),
}

impl DomError {
    pub(crate) fn query(selector: &str, err: JsValue) -> Self {
        let message = err
            .as_string()
            .unwrap_or_else(|| format!("{:?}", err));
        Self::Query {
            selector: selector.to_owned(),
            message,
        }
    }
}
