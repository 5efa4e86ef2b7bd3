//! Error types for filter state transitions.

use miette::Diagnostic;

/// Errors raised by [`FilterState`](crate::FilterState) operations.
#[derive(thiserror::Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// The clicked filter id does not point into the filter collection.
    #[error("unknown filter #{index} (listing has {len} filters)")]
    #[diagnostic(
        code(tagfilter::unknown_filter),
        help("filter ids are positions in the filter collection of the same snapshot")
    )]
    UnknownFilter { index: usize, len: usize },
}
