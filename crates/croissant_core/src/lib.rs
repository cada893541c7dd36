//! croissant.validate Core Types
//!
//! This crate contains pure types and logic with no I/O: RDF terms, the
//! recognized vocabulary, and the contextual diagnostics collector shared by
//! every validation stage.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod issues;
pub mod term;
pub mod vocab;

// Re-exports
pub use error::{CoreError, CoreResult};
pub use issues::{Context, ContextGuard, Issue, Issues, Scope, Severity};
pub use term::{BlankId, Iri, Term};
