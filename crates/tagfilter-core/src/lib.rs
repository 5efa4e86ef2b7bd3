//! tagfilter-core: filter/row model for tagged listings, without browser dependencies.
//!
//! This crate provides:
//! - `Filter`, `Row` - the rendered entities, with structured tag names
//! - `FilterState` - explicit listing state and the toggle state machine
//! - `MarkupConfig` - selectors and classes of the listing markup

pub mod config;
pub mod error;
pub mod state;
pub mod types;

pub use config::MarkupConfig;
pub use error::FilterError;
pub use smol_str::SmolStr;
pub use state::{Classification, FilterState, ToggleOutcome, Transition};
pub use types::{Filter, FilterId, Row, parse_label};
