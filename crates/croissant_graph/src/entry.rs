//! Dataset entry point resolution.

use crate::graph::TripleGraph;
use croissant_core::{BlankId, Issues, Term};

/// Error recorded when several blank nodes have no parent
pub const MULTIPLE_ENTRIES: &str = "Trying to define more than one dataset in the file.";
/// Error recorded when every blank node has a parent (or there are none)
pub const NO_ENTRY: &str = "No dataset is defined in the file.";

/// Find the dataset root: the only blank node without incoming edges
///
/// With several candidates an error is recorded and the first one (in
/// document order) is returned so validation can keep going; nothing
/// guarantees it is the intended dataset. With no candidate an error is
/// recorded and `None` is returned.
pub fn find_entry(graph: &TripleGraph, issues: &mut Issues) -> Option<BlankId> {
    let mut sources = graph
        .blank_nodes()
        .filter(|id| graph.in_degree(&Term::Blank((*id).clone())) == 0);

    let first = sources.next().cloned();
    let extra = sources.count();

    match (first, extra) {
        (Some(entry), 0) => Some(entry),
        (Some(entry), extra) => {
            tracing::warn!(candidates = extra + 1, fallback = %entry, "ambiguous dataset entry point");
            issues.add_error(MULTIPLE_ENTRIES);
            Some(entry)
        }
        (None, _) => {
            tracing::warn!("no dataset entry point");
            issues.add_error(NO_ENTRY);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Triple;
    use croissant_core::{vocab, Iri};

    fn blank(label: &str) -> BlankId {
        BlankId::parse(label).unwrap()
    }

    fn edge(from: &str, predicate: &'static str, to: &str) -> Triple {
        Triple::new(blank(from), Iri::from_static(predicate), blank(to))
    }

    fn name(of: &str, value: &str) -> Triple {
        Triple::new(blank(of), Iri::from_static(vocab::SCHEMA_ORG_NAME), Term::literal(value))
    }

    #[test]
    fn test_single_entry() {
        let graph = TripleGraph::from_triples([
            name("m", "Titanic"),
            edge("m", vocab::ML_COMMONS_RECORD_SET, "r"),
            edge("r", vocab::ML_COMMONS_FIELD, "a"),
        ]);
        let mut issues = Issues::new();
        assert_eq!(find_entry(&graph, &mut issues), Some(blank("m")));
        assert!(issues.is_empty());
    }

    #[test]
    fn test_entry_not_first_in_document() {
        let graph = TripleGraph::from_triples([
            name("r", "passengers"),
            edge("m", vocab::ML_COMMONS_RECORD_SET, "r"),
        ]);
        let mut issues = Issues::new();
        assert_eq!(find_entry(&graph, &mut issues), Some(blank("m")));
        assert!(issues.is_empty());
    }

    #[test]
    fn test_multiple_entries() {
        let graph = TripleGraph::from_triples([name("m1", "one"), name("m2", "two")]);
        let mut issues = Issues::new();
        assert_eq!(find_entry(&graph, &mut issues), Some(blank("m1")));
        assert_eq!(issues.errors().len(), 1);
        assert_eq!(issues.errors()[0].message, MULTIPLE_ENTRIES);
    }

    #[test]
    fn test_no_entry_in_cycle() {
        let graph = TripleGraph::from_triples([
            edge("a", vocab::ML_COMMONS_FIELD, "b"),
            edge("b", vocab::ML_COMMONS_FIELD, "a"),
        ]);
        let mut issues = Issues::new();
        assert_eq!(find_entry(&graph, &mut issues), None);
        assert_eq!(issues.errors().len(), 1);
        assert_eq!(issues.errors()[0].message, NO_ENTRY);
    }

    #[test]
    fn test_no_entry_in_empty_graph() {
        let mut issues = Issues::new();
        assert_eq!(find_entry(&TripleGraph::new(), &mut issues), None);
        assert_eq!(issues.errors().len(), 1);
    }
}
