//! Core error types for croissant.validate.
//!
//! These cover malformed input terms only. Problems with the dataset
//! description itself are never errors of this kind: they are recorded as
//! [`Issue`](crate::Issue)s and validation carries on.

/// Core result type
pub type CoreResult<T> = Result<T, CoreError>;

/// Core error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// Invalid blank node label
    #[error("Invalid blank node id {label:?}: {reason}")]
    InvalidBlankId {
        /// Offending label
        label: String,
        /// Why it was rejected
        reason: String,
    },

    /// Invalid IRI
    #[error("Invalid IRI {iri:?}: {reason}")]
    InvalidIri {
        /// Offending IRI
        iri: String,
        /// Why it was rejected
        reason: String,
    },

    /// Triple subject is not a blank node
    #[error("Triple subject must be a blank node, got {subject}")]
    SubjectNotBlank {
        /// Rendered subject term
        subject: String,
    },
}
