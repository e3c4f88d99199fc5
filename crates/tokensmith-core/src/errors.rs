//! Error types shared across the tokensmith crates.

use thiserror::Error;

/// Errors during component generation against a host document.
///
/// Any of these aborts the generation run. Nodes created before the failure
/// are left in the document; there is no rollback.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Font loading failed: {family} {style}")]
    FontLoadFailed { family: String, style: String },

    #[error("Node creation failed: {reason}")]
    NodeCreationFailed { reason: String },

    #[error("Variant grouping failed: {reason}")]
    GroupingFailed { reason: String },

    #[error("Component property '{name}' could not be bound: {reason}")]
    PropertyBindingFailed { name: String, reason: String },
}
