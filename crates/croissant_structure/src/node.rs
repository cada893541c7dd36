//! Typed nodes of a dataset description.
//!
//! Every node remembers the blank node it was materialized from so its
//! children can be looked up. Mandatory properties are plain strings (empty
//! when the graph did not provide them), the rest are `Option`s.

use croissant_core::BlankId;
use serde::{Deserialize, Serialize};

/// Node kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Root dataset metadata
    Metadata,
    /// File object the dataset is distributed as
    Distribution,
    /// Set of records sharing a structure
    RecordSet,
    /// Field of a record set
    Field,
    /// Nested field of a field
    SubField,
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Metadata => "metadata",
            Self::Distribution => "distribution",
            Self::RecordSet => "record set",
            Self::Field => "field",
            Self::SubField => "sub-field",
        };
        write!(f, "{}", label)
    }
}

/// Dataset metadata, the root of the hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Source blank node
    pub id: BlankId,
    /// Dataset name
    pub name: String,
    /// Dataset landing page
    pub url: String,
    /// How to cite the dataset
    pub citation: Option<String>,
    /// License
    pub license: Option<String>,
    /// Free-text description
    pub description: Option<String>,
}

/// A file the dataset is distributed as
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    /// Source blank node
    pub id: BlankId,
    /// File name
    pub name: String,
    /// Where to download it
    pub content_url: String,
    /// MIME type
    pub encoding_format: String,
    /// Free-text description
    pub description: Option<String>,
    /// SHA-256 checksum
    pub sha256: Option<String>,
    /// MD5 checksum
    pub md5: Option<String>,
    /// Size, as written in the document
    pub content_size: Option<String>,
    /// Name of the enclosing archive or file set
    pub contained_in: Option<String>,
}

/// A set of records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSet {
    /// Source blank node
    pub id: BlankId,
    /// Record set name
    pub name: String,
    /// Free-text description
    pub description: Option<String>,
    /// Name of the field acting as primary key
    pub key: Option<String>,
}

/// A field of a record set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Source blank node
    pub id: BlankId,
    /// Field name
    pub name: String,
    /// Free-text description
    pub description: Option<String>,
    /// Data type IRI
    pub data_type: Option<String>,
    /// Field this one is a foreign key to
    pub references: Option<String>,
    /// Where the values are extracted from
    pub source: Option<String>,
}

/// A nested field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubField {
    /// Source blank node
    pub id: BlankId,
    /// Sub-field name
    pub name: String,
    /// Free-text description
    pub description: Option<String>,
    /// Data type IRI
    pub data_type: Option<String>,
    /// Field this one is a foreign key to
    pub references: Option<String>,
    /// Where the values are extracted from
    pub source: Option<String>,
}

/// Any node of the hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// Root metadata
    Metadata(Metadata),
    /// Distribution
    Distribution(Distribution),
    /// Record set
    RecordSet(RecordSet),
    /// Field
    Field(Field),
    /// Sub-field
    SubField(SubField),
}

impl Node {
    /// Node kind
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Metadata(_) => NodeKind::Metadata,
            Self::Distribution(_) => NodeKind::Distribution,
            Self::RecordSet(_) => NodeKind::RecordSet,
            Self::Field(_) => NodeKind::Field,
            Self::SubField(_) => NodeKind::SubField,
        }
    }

    /// Node name, empty if the graph did not provide one
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Metadata(n) => &n.name,
            Self::Distribution(n) => &n.name,
            Self::RecordSet(n) => &n.name,
            Self::Field(n) => &n.name,
            Self::SubField(n) => &n.name,
        }
    }

    /// Source blank node
    #[must_use]
    pub fn id(&self) -> &BlankId {
        match self {
            Self::Metadata(n) => &n.id,
            Self::Distribution(n) => &n.id,
            Self::RecordSet(n) => &n.id,
            Self::Field(n) => &n.id,
            Self::SubField(n) => &n.id,
        }
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?} ({})", self.kind(), self.name(), self.id())
    }
}

impl From<Metadata> for Node {
    fn from(node: Metadata) -> Self {
        Self::Metadata(node)
    }
}

impl From<Distribution> for Node {
    fn from(node: Distribution) -> Self {
        Self::Distribution(node)
    }
}

impl From<RecordSet> for Node {
    fn from(node: RecordSet) -> Self {
        Self::RecordSet(node)
    }
}

impl From<Field> for Node {
    fn from(node: Field) -> Self {
        Self::Field(node)
    }
}

impl From<SubField> for Node {
    fn from(node: SubField) -> Self {
        Self::SubField(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_set() -> RecordSet {
        RecordSet {
            id: BlankId::parse("r").unwrap(),
            name: "passengers".to_string(),
            description: None,
            key: Some("id".to_string()),
        }
    }

    #[test]
    fn test_node_accessors() {
        let node = Node::from(record_set());
        assert_eq!(node.kind(), NodeKind::RecordSet);
        assert_eq!(node.name(), "passengers");
        assert_eq!(node.id().as_str(), "r");
    }

    #[test]
    fn test_node_display() {
        let node = Node::from(record_set());
        assert_eq!(node.to_string(), "record set \"passengers\" (_:r)");
    }

    #[test]
    fn test_node_serialize_tagged() {
        let json = serde_json::to_value(Node::from(record_set())).unwrap();
        assert_eq!(json["kind"], "record_set");
        assert_eq!(json["id"], "r");
        assert_eq!(json["key"], "id");
    }
}
