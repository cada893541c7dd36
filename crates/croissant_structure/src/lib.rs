//! croissant.validate Structure
//!
//! Turns a triple graph into the typed dataset hierarchy: one metadata node,
//! its distributions, its record sets, their fields and sub-fields. Every
//! node kind carries a property contract; violations are collected as
//! diagnostics and never stop the walk.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contract;
pub mod materialize;
pub mod node;
pub mod options;
pub mod walker;

pub use contract::{Contract, Property, Requirement};
pub use materialize::materialize;
pub use node::{Distribution, Field, Metadata, Node, NodeKind, RecordSet, SubField};
pub use options::ValidatorOptions;
pub use walker::{check_graph, HierarchyWalker, Validation};
