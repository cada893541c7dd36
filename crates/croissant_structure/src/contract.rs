//! Property contracts of each node kind.
//!
//! A contract maps predicate IRIs to slots of the typed node and says
//! whether each property is mandatory, recommended or optional. Slots are
//! per-kind enums assigned through an exhaustive `match`, so a table entry
//! can never point at a field the node does not have.

use crate::node::{Distribution, Field, Metadata, Node, NodeKind, RecordSet, SubField};
use croissant_core::{vocab, BlankId, Scope};

/// How strongly a property is required
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    /// Absent or empty is an error
    Mandatory,
    /// Absent may be reported as a warning
    Recommended,
    /// Absent is fine
    Optional,
}

/// One entry of a contract table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Property<S> {
    /// Predicate IRI
    pub predicate: &'static str,
    /// Slot the value lands in
    pub slot: S,
    /// Requirement level
    pub requirement: Requirement,
}

const fn mandatory<S>(predicate: &'static str, slot: S) -> Property<S> {
    Property {
        predicate,
        slot,
        requirement: Requirement::Mandatory,
    }
}

const fn recommended<S>(predicate: &'static str, slot: S) -> Property<S> {
    Property {
        predicate,
        slot,
        requirement: Requirement::Recommended,
    }
}

const fn optional<S>(predicate: &'static str, slot: S) -> Property<S> {
    Property {
        predicate,
        slot,
        requirement: Requirement::Optional,
    }
}

/// A node kind that can be materialized from a blank node
pub trait Contract: Into<Node> {
    /// Slot enum of this kind
    type Slot: Copy + 'static;

    /// Node kind
    const KIND: NodeKind;

    /// Context scope bound to the node's name while its contract is checked
    const SCOPE: Option<Scope>;

    /// Recognized properties
    const PROPERTIES: &'static [Property<Self::Slot>];

    /// Node with every property unset
    fn empty(id: BlankId) -> Self;

    /// Store a property value
    fn assign(&mut self, slot: Self::Slot, value: String);

    /// Node name, empty if unset
    fn name(&self) -> &str;
}

/// Slots of [`Metadata`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataSlot {
    /// `name`
    Name,
    /// `url`
    Url,
    /// `citation`
    Citation,
    /// `license`
    License,
    /// `description`
    Description,
}

impl Contract for Metadata {
    type Slot = MetadataSlot;

    const KIND: NodeKind = NodeKind::Metadata;
    const SCOPE: Option<Scope> = Some(Scope::Dataset);
    const PROPERTIES: &'static [Property<MetadataSlot>] = &[
        mandatory(vocab::SCHEMA_ORG_NAME, MetadataSlot::Name),
        mandatory(vocab::SCHEMA_ORG_URL, MetadataSlot::Url),
        recommended(vocab::SCHEMA_ORG_CITATION, MetadataSlot::Citation),
        recommended(vocab::SCHEMA_ORG_LICENSE, MetadataSlot::License),
        optional(vocab::SCHEMA_ORG_DESCRIPTION, MetadataSlot::Description),
    ];

    fn empty(id: BlankId) -> Self {
        Self {
            id,
            name: String::new(),
            url: String::new(),
            citation: None,
            license: None,
            description: None,
        }
    }

    fn assign(&mut self, slot: MetadataSlot, value: String) {
        match slot {
            MetadataSlot::Name => self.name = value,
            MetadataSlot::Url => self.url = value,
            MetadataSlot::Citation => self.citation = Some(value),
            MetadataSlot::License => self.license = Some(value),
            MetadataSlot::Description => self.description = Some(value),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Slots of [`Distribution`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistributionSlot {
    /// `name`
    Name,
    /// `content_url`
    ContentUrl,
    /// `encoding_format`
    EncodingFormat,
    /// `description`
    Description,
    /// `sha256`
    Sha256,
    /// `md5`
    Md5,
    /// `content_size`
    ContentSize,
    /// `contained_in`
    ContainedIn,
}

impl Contract for Distribution {
    type Slot = DistributionSlot;

    const KIND: NodeKind = NodeKind::Distribution;
    const SCOPE: Option<Scope> = Some(Scope::Distribution);
    const PROPERTIES: &'static [Property<DistributionSlot>] = &[
        mandatory(vocab::SCHEMA_ORG_NAME, DistributionSlot::Name),
        mandatory(vocab::SCHEMA_ORG_CONTENT_URL, DistributionSlot::ContentUrl),
        mandatory(vocab::SCHEMA_ORG_ENCODING_FORMAT, DistributionSlot::EncodingFormat),
        optional(vocab::SCHEMA_ORG_DESCRIPTION, DistributionSlot::Description),
        optional(vocab::SCHEMA_ORG_SHA256, DistributionSlot::Sha256),
        optional(vocab::SCHEMA_ORG_MD5, DistributionSlot::Md5),
        optional(vocab::SCHEMA_ORG_CONTENT_SIZE, DistributionSlot::ContentSize),
        optional(vocab::ML_COMMONS_CONTAINED_IN, DistributionSlot::ContainedIn),
    ];

    fn empty(id: BlankId) -> Self {
        Self {
            id,
            name: String::new(),
            content_url: String::new(),
            encoding_format: String::new(),
            description: None,
            sha256: None,
            md5: None,
            content_size: None,
            contained_in: None,
        }
    }

    fn assign(&mut self, slot: DistributionSlot, value: String) {
        match slot {
            DistributionSlot::Name => self.name = value,
            DistributionSlot::ContentUrl => self.content_url = value,
            DistributionSlot::EncodingFormat => self.encoding_format = value,
            DistributionSlot::Description => self.description = Some(value),
            DistributionSlot::Sha256 => self.sha256 = Some(value),
            DistributionSlot::Md5 => self.md5 = Some(value),
            DistributionSlot::ContentSize => self.content_size = Some(value),
            DistributionSlot::ContainedIn => self.contained_in = Some(value),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Slots of [`RecordSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordSetSlot {
    /// `name`
    Name,
    /// `description`
    Description,
    /// `key`
    Key,
}

impl Contract for RecordSet {
    type Slot = RecordSetSlot;

    const KIND: NodeKind = NodeKind::RecordSet;
    const SCOPE: Option<Scope> = Some(Scope::RecordSet);
    const PROPERTIES: &'static [Property<RecordSetSlot>] = &[
        mandatory(vocab::SCHEMA_ORG_NAME, RecordSetSlot::Name),
        optional(vocab::SCHEMA_ORG_DESCRIPTION, RecordSetSlot::Description),
        optional(vocab::ML_COMMONS_KEY, RecordSetSlot::Key),
    ];

    fn empty(id: BlankId) -> Self {
        Self {
            id,
            name: String::new(),
            description: None,
            key: None,
        }
    }

    fn assign(&mut self, slot: RecordSetSlot, value: String) {
        match slot {
            RecordSetSlot::Name => self.name = value,
            RecordSetSlot::Description => self.description = Some(value),
            RecordSetSlot::Key => self.key = Some(value),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Slots shared by [`Field`] and [`SubField`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSlot {
    /// `name`
    Name,
    /// `description`
    Description,
    /// `data_type`
    DataType,
    /// `references`
    References,
    /// `source`
    Source,
}

const FIELD_PROPERTIES: &[Property<FieldSlot>] = &[
    mandatory(vocab::SCHEMA_ORG_NAME, FieldSlot::Name),
    optional(vocab::SCHEMA_ORG_DESCRIPTION, FieldSlot::Description),
    optional(vocab::ML_COMMONS_DATA_TYPE, FieldSlot::DataType),
    optional(vocab::ML_COMMONS_REFERENCES, FieldSlot::References),
    optional(vocab::ML_COMMONS_SOURCE, FieldSlot::Source),
];

impl Contract for Field {
    type Slot = FieldSlot;

    const KIND: NodeKind = NodeKind::Field;
    const SCOPE: Option<Scope> = Some(Scope::Field);
    const PROPERTIES: &'static [Property<FieldSlot>] = FIELD_PROPERTIES;

    fn empty(id: BlankId) -> Self {
        Self {
            id,
            name: String::new(),
            description: None,
            data_type: None,
            references: None,
            source: None,
        }
    }

    fn assign(&mut self, slot: FieldSlot, value: String) {
        match slot {
            FieldSlot::Name => self.name = value,
            FieldSlot::Description => self.description = Some(value),
            FieldSlot::DataType => self.data_type = Some(value),
            FieldSlot::References => self.references = Some(value),
            FieldSlot::Source => self.source = Some(value),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Contract for SubField {
    type Slot = FieldSlot;

    const KIND: NodeKind = NodeKind::SubField;
    // Sub-fields report under their parent field's scope
    const SCOPE: Option<Scope> = None;
    const PROPERTIES: &'static [Property<FieldSlot>] = FIELD_PROPERTIES;

    fn empty(id: BlankId) -> Self {
        Self {
            id,
            name: String::new(),
            description: None,
            data_type: None,
            references: None,
            source: None,
        }
    }

    fn assign(&mut self, slot: FieldSlot, value: String) {
        match slot {
            FieldSlot::Name => self.name = value,
            FieldSlot::Description => self.description = Some(value),
            FieldSlot::DataType => self.data_type = Some(value),
            FieldSlot::References => self.references = Some(value),
            FieldSlot::Source => self.source = Some(value),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
