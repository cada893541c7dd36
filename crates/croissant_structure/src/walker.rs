//! Hierarchy walk from the dataset root down to sub-fields.
//!
//! The walk order is fixed: metadata, its distributions, its record sets,
//! then for each record set its fields followed by each field's sub-fields.
//! Siblings come in document order.

use crate::contract::Contract;
use crate::materialize::materialize;
use crate::node::{Distribution, Field, Metadata, Node, RecordSet, SubField};
use crate::options::ValidatorOptions;
use croissant_core::{vocab, BlankId, Issues, Scope};
use croissant_graph::{find_entry, TripleGraph};

/// Error recorded for a record set without any field
pub const NO_FIELD: &str = "The node doesn't define any field.";

/// Outcome of a validation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    /// Materialized nodes, in walk order
    pub nodes: Vec<Node>,
    /// Everything that was reported along the way
    pub issues: Issues,
}

impl Validation {
    /// Check whether the dataset is valid (no errors; warnings allowed)
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.issues.has_errors()
    }
}

/// Walker over one triple graph
pub struct HierarchyWalker<'g> {
    graph: &'g TripleGraph,
    options: ValidatorOptions,
}

impl<'g> HierarchyWalker<'g> {
    /// Create a walker with default options
    #[must_use]
    pub fn new(graph: &'g TripleGraph) -> Self {
        Self {
            graph,
            options: ValidatorOptions::new(),
        }
    }

    /// Set validation options
    #[must_use]
    pub fn with_options(mut self, options: ValidatorOptions) -> Self {
        self.options = options;
        self
    }

    /// Walk the graph with a fresh collector
    #[must_use]
    pub fn walk(&self) -> Validation {
        let mut issues = Issues::new();
        let nodes = self.walk_into(&mut issues);
        Validation { nodes, issues }
    }

    /// Walk the graph, reporting into an existing collector
    ///
    /// Returns an empty list when no entry point can be found; that is the
    /// only case where the walk stops early.
    pub fn walk_into(&self, issues: &mut Issues) -> Vec<Node> {
        let Some(entry) = find_entry(self.graph, issues) else {
            return Vec::new();
        };

        let metadata: Metadata = materialize(self.graph, &entry, issues, &self.options);
        let mut dataset = issues.enter([(Scope::Dataset, metadata.name.clone())]);
        let mut nodes = vec![Node::from(metadata)];

        let distributions: Vec<Distribution> =
            self.children(&entry, vocab::SCHEMA_ORG_DISTRIBUTION, &mut dataset);
        nodes.extend(distributions.into_iter().map(Node::from));

        let record_sets: Vec<RecordSet> =
            self.children(&entry, vocab::ML_COMMONS_RECORD_SET, &mut dataset);
        nodes.extend(record_sets.iter().cloned().map(Node::from));

        for record_set in &record_sets {
            let mut scope = dataset.enter([
                (Scope::RecordSet, record_set.name.clone()),
                (Scope::Field, String::new()),
            ]);

            let fields: Vec<Field> =
                self.children(&record_set.id, vocab::ML_COMMONS_FIELD, &mut scope);
            if fields.is_empty() {
                tracing::warn!(record_set = %record_set.id, name = %record_set.name, "record set without fields");
                scope.add_error(NO_FIELD);
            }
            nodes.extend(fields.iter().cloned().map(Node::from));

            for field in &fields {
                let mut scope = scope.enter([(Scope::Field, field.name.clone())]);
                let sub_fields: Vec<SubField> =
                    self.children(&field.id, vocab::ML_COMMONS_SUB_FIELD, &mut scope);
                nodes.extend(sub_fields.into_iter().map(Node::from));
            }
        }

        drop(dataset);
        tracing::debug!(
            nodes = nodes.len(),
            errors = issues.errors().len(),
            warnings = issues.warnings().len(),
            "walk complete"
        );
        nodes
    }

    fn children<N: Contract>(&self, parent: &BlankId, predicate: &str, issues: &mut Issues) -> Vec<N> {
        self.graph
            .children(parent, predicate)
            .iter()
            .map(|child| materialize(self.graph, child, issues, &self.options))
            .collect()
    }
}

/// Validate a graph with default options
#[must_use]
pub fn check_graph(graph: &TripleGraph) -> Validation {
    HierarchyWalker::new(graph).walk()
}
