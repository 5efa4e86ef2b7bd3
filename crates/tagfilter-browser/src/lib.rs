//! Browser DOM layer for tagfilter listings.
//!
//! This crate reads the rendered listing into the core model, applies toggle
//! results back to the DOM and wires click handling. It assumes a
//! `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `dom`: snapshot of filters/rows and writing state back
//! - `events`: click listeners on the filter labels
//!
//! # Re-exports
//!
//! This crate re-exports `tagfilter-core` for convenience, so consumers
//! only need to depend on `tagfilter-browser`.

// Re-export core crate
pub use tagfilter_core;
pub use tagfilter_core::*;

pub mod dom;
pub mod error;
pub mod events;

pub use dom::{DomSnapshot, document, snapshot, toggle_filter};
pub use error::DomError;
pub use events::{FilterListeners, install};
