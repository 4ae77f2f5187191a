//! Error types for the domain layer.

use thiserror::Error;

/// Errors raised while reading identities back from their wire form.
///
/// Building and mutating facets never fails; these only surface when a
/// fragment produced elsewhere is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The `@type` of a fragment does not name the facet being decoded
    #[error("Unexpected type tag: expected '{expected}', found '{found}'")]
    UnexpectedType {
        /// Type tag the decoder requires
        expected: String,
        /// Type tag present in the input
        found: String,
    },

    /// The `@id` is not a UUID or a `_:`-prefixed UUID blank node label
    #[error("Invalid object id: {0}")]
    InvalidId(String),
}
