//! croissant.validate Graph
//!
//! Immutable view over a parsed triple graph: in-degrees, child lookup by
//! predicate, and terminal properties, all in document insertion order.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod entry;
pub mod graph;

pub use entry::find_entry;
pub use graph::{Triple, TripleGraph};
