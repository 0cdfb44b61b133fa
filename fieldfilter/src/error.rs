//! Error types for filtering and selector parsing.

use thiserror::Error;

use crate::walk::Category;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while filtering a value or parsing selectors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    // -------------------------------------------------------------------------
    // Traversal errors
    // -------------------------------------------------------------------------
    /// The root is not a record, a pointer to one, or a sequence/mapping of them.
    #[error("unsupported root: expected a record, a pointer to a record, or a sequence or mapping of them, got {category} `{type_name}`")]
    UnsupportedRootCategory {
        type_name: &'static str,
        category: Category,
    },

    /// A pointer that must lead to a record is null.
    #[error("null reference: `{type_name}` does not point to a value")]
    NullReferencedElement { type_name: &'static str },

    /// A pointer leads to something other than a record.
    #[error("expected a record behind the pointer, got `{type_name}`")]
    NonRecordTarget { type_name: &'static str },

    /// Records are nested deeper than the configured limit.
    ///
    /// Filtering stops where the limit was hit. Fields reset before that
    /// point stay reset, so the value is only partly filtered.
    #[error("object graph exceeds the maximum depth of {limit}")]
    DepthLimitExceeded { limit: usize },

    /// One or more sequence or mapping elements could not be filtered.
    #[error("{} element(s) could not be filtered: {}", .errors.len(), summarize(.errors))]
    Elements { errors: Vec<Error> },

    // -------------------------------------------------------------------------
    // Selector parse errors
    // -------------------------------------------------------------------------
    /// The selector text has unbalanced parentheses.
    #[error("parenthesis count mismatch: {open} opening, {close} closing")]
    ParenthesisMismatch { open: usize, close: usize },

    /// The scanner was asked to resume past the end of the input.
    #[error("offset {offset} out of bounds for input of length {len}")]
    OffsetOutOfBounds { offset: usize, len: usize },
}

fn summarize(errors: &[Error]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
