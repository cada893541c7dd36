//! RDF terms: blank nodes, IRIs, and literals.
//!
//! Blank nodes are the structured objects of a dataset description. IRIs and
//! literals are terminal values: they never have outgoing edges.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::sync::Arc;

/// Blank node identifier
///
/// Stable within one parsed document, meaningless outside of it. The label is
/// stored without the `_:` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BlankId(Arc<str>);

impl BlankId {
    /// Parse a blank node label, with or without the `_:` prefix
    ///
    /// # Errors
    ///
    /// Returns error if the label is empty, contains whitespace, or contains
    /// `:` (which would make it an IRI)
    pub fn parse(label: &str) -> CoreResult<Self> {
        let label = label.strip_prefix("_:").unwrap_or(label);
        if label.is_empty() {
            return Err(CoreError::InvalidBlankId {
                label: label.to_string(),
                reason: "label is empty".to_string(),
            });
        }
        if label.chars().any(char::is_whitespace) {
            return Err(CoreError::InvalidBlankId {
                label: label.to_string(),
                reason: "label contains whitespace".to_string(),
            });
        }
        if label.contains(':') {
            return Err(CoreError::InvalidBlankId {
                label: label.to_string(),
                reason: "label contains ':'".to_string(),
            });
        }
        Ok(Self(Arc::from(label)))
    }

    /// Get the label (without `_:` prefix)
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for BlankId {
    type Error = CoreError;

    fn try_from(value: String) -> CoreResult<Self> {
        Self::parse(&value)
    }
}

impl From<BlankId> for String {
    fn from(id: BlankId) -> Self {
        id.0.to_string()
    }
}

impl std::fmt::Display for BlankId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

/// Absolute IRI, always expanded
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Iri(Arc<str>);

impl Iri {
    /// Parse an absolute IRI
    ///
    /// Only the shape is checked: a non-empty scheme followed by `:` and no
    /// whitespace. Compact forms such as `schema:name` pass, which is fine
    /// since matching against the vocabulary is exact anyway.
    ///
    /// # Errors
    ///
    /// Returns error if the IRI has no scheme or contains whitespace
    pub fn parse(iri: &str) -> CoreResult<Self> {
        let scheme_ok = iri
            .split_once(':')
            .is_some_and(|(scheme, _)| {
                scheme.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
                    && scheme
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
            });
        if !scheme_ok {
            return Err(CoreError::InvalidIri {
                iri: iri.to_string(),
                reason: "missing scheme".to_string(),
            });
        }
        if iri.chars().any(char::is_whitespace) {
            return Err(CoreError::InvalidIri {
                iri: iri.to_string(),
                reason: "contains whitespace".to_string(),
            });
        }
        Ok(Self(Arc::from(iri)))
    }

    /// Build an IRI from a vocabulary constant
    ///
    /// Vocabulary constants are known-good, so no validation happens here.
    #[must_use]
    pub fn from_static(iri: &'static str) -> Self {
        Self(Arc::from(iri))
    }

    /// Get the IRI string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Iri {
    type Error = CoreError;

    fn try_from(value: String) -> CoreResult<Self> {
        Self::parse(&value)
    }
}

impl From<Iri> for String {
    fn from(iri: Iri) -> Self {
        iri.0.to_string()
    }
}

impl Borrow<str> for Iri {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Iri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

/// A node of the triple graph
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Term {
    /// Structured object
    Blank(BlankId),
    /// IRI used as a value
    Iri(Iri),
    /// Literal value, lexical form only
    Literal(Arc<str>),
}

impl Term {
    /// Parse a node written as a plain string
    ///
    /// `_:label` and bare labels are blank nodes; anything with a scheme is
    /// an IRI.
    ///
    /// # Errors
    ///
    /// Returns error if the string is neither a valid blank label nor a
    /// valid IRI
    pub fn parse_node(node: &str) -> CoreResult<Self> {
        if node.starts_with("_:") || !node.contains(':') {
            BlankId::parse(node).map(Self::Blank)
        } else {
            Iri::parse(node).map(Self::Iri)
        }
    }

    /// Create a literal term
    pub fn literal(value: impl AsRef<str>) -> Self {
        Self::Literal(Arc::from(value.as_ref()))
    }

    /// Check if this is a blank node
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank(_))
    }

    /// Try to get as blank node
    #[must_use]
    pub fn as_blank(&self) -> Option<&BlankId> {
        match self {
            Self::Blank(id) => Some(id),
            _ => None,
        }
    }

    /// Lexical value of a terminal term, `None` for blank nodes
    #[must_use]
    pub fn lexical(&self) -> Option<&str> {
        match self {
            Self::Blank(_) => None,
            Self::Iri(iri) => Some(iri.as_str()),
            Self::Literal(value) => Some(value),
        }
    }
}

impl From<BlankId> for Term {
    fn from(id: BlankId) -> Self {
        Self::Blank(id)
    }
}

impl From<Iri> for Term {
    fn from(iri: Iri) -> Self {
        Self::Iri(iri)
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank(id) => write!(f, "{}", id),
            Self::Iri(iri) => write!(f, "{}", iri),
            Self::Literal(value) => write!(f, "{:?}", value),
        }
    }
}
