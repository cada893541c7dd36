//! Triple graph and its read-only adapter.
//!
//! The graph is a directed multigraph: subjects are blank nodes, objects are
//! blank nodes or terminal values, and every edge carries its predicate.
//! Adjacency is kept in insertion order so traversal output is stable.

use croissant_core::{BlankId, CoreError, CoreResult, Iri, Term};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// A (subject, predicate, object) statement
///
/// Deserialized subjects are plain strings and go through
/// [`Triple::try_new`], so an IRI subject is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TripleRecord")]
pub struct Triple {
    /// Subject, always a blank node
    pub subject: BlankId,
    /// Predicate IRI
    pub predicate: Iri,
    /// Object
    pub object: Term,
}

impl Triple {
    /// Create a new triple
    #[must_use]
    pub fn new(subject: BlankId, predicate: Iri, object: impl Into<Term>) -> Self {
        Self {
            subject,
            predicate,
            object: object.into(),
        }
    }

    /// Create a triple from a subject of any term kind
    ///
    /// # Errors
    ///
    /// Returns error if the subject is not a blank node
    pub fn try_new(subject: Term, predicate: Iri, object: Term) -> CoreResult<Self> {
        match subject {
            Term::Blank(id) => Ok(Self::new(id, predicate, object)),
            other => Err(CoreError::SubjectNotBlank {
                subject: other.to_string(),
            }),
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TripleRecord {
    subject: String,
    predicate: Iri,
    object: Term,
}

impl TryFrom<TripleRecord> for Triple {
    type Error = CoreError;

    fn try_from(record: TripleRecord) -> CoreResult<Self> {
        let subject = Term::parse_node(&record.subject)?;
        Self::try_new(subject, record.predicate, record.object)
    }
}

/// An immutable triple graph
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripleGraph {
    /// All nodes, in first-seen order
    nodes: IndexSet<Term>,
    /// All edges, deduplicated, in insertion order
    triples: IndexSet<Triple>,
    /// Outgoing edge indices per subject
    outgoing: IndexMap<BlankId, Vec<usize>>,
    /// Incoming edge count per node
    in_degree: IndexMap<Term, usize>,
}

impl TripleGraph {
    /// Create a new empty graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from triples, in order
    pub fn from_triples(triples: impl IntoIterator<Item = Triple>) -> Self {
        let mut graph = Self::new();
        for triple in triples {
            graph.insert(triple);
        }
        graph
    }

    /// Add a triple
    ///
    /// Returns `false` if the exact same statement was already present, in
    /// which case the graph is unchanged.
    pub fn insert(&mut self, triple: Triple) -> bool {
        if self.triples.contains(&triple) {
            return false;
        }

        let subject = Term::Blank(triple.subject.clone());
        self.nodes.insert(subject.clone());
        self.nodes.insert(triple.object.clone());
        self.in_degree.entry(subject).or_insert(0);
        *self.in_degree.entry(triple.object.clone()).or_insert(0) += 1;

        let (index, _) = self.triples.insert_full(triple);
        let subject = &self.triples[index].subject;
        self.outgoing.entry(subject.clone()).or_default().push(index);
        true
    }

    /// Number of incoming edges of a node, counted per edge
    ///
    /// Unknown nodes have in-degree 0.
    #[must_use]
    pub fn in_degree(&self, node: &Term) -> usize {
        self.in_degree.get(node).copied().unwrap_or(0)
    }

    /// Distinct blank-node targets of `node`'s edges labeled `predicate`
    ///
    /// Targets come back in edge-insertion order. Terminal objects are
    /// skipped: they cannot be materialized as nodes.
    #[must_use]
    pub fn children(&self, node: &BlankId, predicate: &str) -> Vec<BlankId> {
        let mut children = IndexSet::new();
        for triple in self.outgoing_triples(node) {
            if triple.predicate.as_str() != predicate {
                continue;
            }
            if let Term::Blank(child) = &triple.object {
                children.insert(child.clone());
            }
        }
        children.into_iter().collect()
    }

    /// Terminal-valued outgoing edges of `node`, grouped by predicate
    ///
    /// Values keep their multiplicity and order.
    #[must_use]
    pub fn properties(&self, node: &BlankId) -> IndexMap<Iri, Vec<Term>> {
        let mut properties: IndexMap<Iri, Vec<Term>> = IndexMap::new();
        for triple in self.outgoing_triples(node) {
            if triple.object.is_blank() {
                continue;
            }
            properties
                .entry(triple.predicate.clone())
                .or_default()
                .push(triple.object.clone());
        }
        properties
    }

    fn outgoing_triples<'a>(&'a self, node: &BlankId) -> impl Iterator<Item = &'a Triple> + 'a {
        self.outgoing
            .get(node)
            .into_iter()
            .flatten()
            .map(|&index| &self.triples[index])
    }

    /// Blank nodes only, in first-seen order
    pub fn blank_nodes(&self) -> impl Iterator<Item = &BlankId> {
        self.nodes.iter().filter_map(Term::as_blank)
    }

    /// Get total node count
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get total triple count
    #[must_use]
    pub fn triple_count(&self) -> usize {
        self.triples.len()
    }

    /// Check if graph is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }
}

impl FromIterator<Triple> for TripleGraph {
    fn from_iter<T: IntoIterator<Item = Triple>>(iter: T) -> Self {
        Self::from_triples(iter)
    }
}
