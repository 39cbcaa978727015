//! Error types for statewatch.
//!
//! Errors are strongly typed using thiserror. They only occur while a
//! selector is being built or a predicate constructed; notification and
//! matching are infallible by design.

use thiserror::Error;

/// Validation errors raised while constructing a selector.
#[derive(Debug, Error)]
pub enum SelectorError {
    /// A selector field name was empty or whitespace-only.
    #[error("Selector field name cannot be empty")]
    EmptyField,

    /// A selector field was declared with no predicates.
    #[error("Selector field '{field}' has no predicates")]
    NoPredicates {
        /// The offending field name.
        field: String,
    },

    /// A regex predicate was given an invalid pattern.
    #[error("Invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),
}
