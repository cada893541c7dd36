//! Node materialization from graph properties.

use crate::contract::{Contract, Requirement};
use crate::options::ValidatorOptions;
use croissant_core::{BlankId, Issues, Severity, Term};
use croissant_graph::TripleGraph;

/// Message recorded for a missing or empty mandatory property
#[must_use]
pub fn mandatory_message(predicate: &str) -> String {
    format!("Property \"{}\" is mandatory, but does not exist.", predicate)
}

/// Message recorded for a missing recommended property
#[must_use]
pub fn recommended_message(predicate: &str) -> String {
    format!("Property \"{}\" is recommended, but does not exist.", predicate)
}

/// Message recorded for a single-valued property given several values
#[must_use]
pub fn multiple_values_message(predicate: &str, count: usize) -> String {
    format!(
        "Property \"{}\" has {} values, only the first non-empty one is kept.",
        predicate, count
    )
}

/// Build a typed node from the terminal properties of `id`
///
/// The node is always returned. Missing mandatory properties leave their
/// slot empty and are recorded as errors, so the caller can keep walking
/// the node's children. Issues are raised with the node's own scope (if its
/// kind has one) bound to the resolved name. Predicates absent from the
/// kind's contract are ignored.
pub fn materialize<N: Contract>(
    graph: &TripleGraph,
    id: &BlankId,
    issues: &mut Issues,
    options: &ValidatorOptions,
) -> N {
    let properties = graph.properties(id);
    let mut node = N::empty(id.clone());
    let mut findings = Vec::new();

    for property in N::PROPERTIES {
        let values: &[Term] = properties
            .get(property.predicate)
            .map(Vec::as_slice)
            .unwrap_or_default();

        match values.iter().filter_map(Term::lexical).find(|v| !v.is_empty()) {
            Some(value) => node.assign(property.slot, value.to_string()),
            None => match property.requirement {
                Requirement::Mandatory => {
                    findings.push((Severity::Error, mandatory_message(property.predicate)));
                }
                Requirement::Recommended if options.warn_recommended => {
                    findings.push((Severity::Warning, recommended_message(property.predicate)));
                }
                Requirement::Recommended | Requirement::Optional => {}
            },
        }

        if values.len() > 1 && options.warn_multiple_values {
            findings.push((
                Severity::Warning,
                multiple_values_message(property.predicate, values.len()),
            ));
        }
    }

    let mut scope = issues.enter(N::SCOPE.map(|scope| (scope, node.name().to_string())));
    for (severity, message) in findings {
        match severity {
            Severity::Error => scope.add_error(message),
            Severity::Warning => scope.add_warning(message),
        }
    }

    tracing::debug!(kind = %N::KIND, id = %id, name = node.name(), "materialized node");
    node
}
