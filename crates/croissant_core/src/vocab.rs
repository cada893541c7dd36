//! Recognized vocabulary.
//!
//! Predicates are matched by exact, fully expanded IRI.

/// schema.org namespace
pub const SCHEMA_ORG: &str = "https://schema.org/";
/// MLCommons Croissant namespace
pub const ML_COMMONS: &str = "http://mlcommons.org/schema/";

/// `schema:name`
pub const SCHEMA_ORG_NAME: &str = "https://schema.org/name";
/// `schema:url`
pub const SCHEMA_ORG_URL: &str = "https://schema.org/url";
/// `schema:description`
pub const SCHEMA_ORG_DESCRIPTION: &str = "https://schema.org/description";
/// `schema:citation`
pub const SCHEMA_ORG_CITATION: &str = "https://schema.org/citation";
/// `schema:license`
pub const SCHEMA_ORG_LICENSE: &str = "https://schema.org/license";
/// `schema:contentUrl`
pub const SCHEMA_ORG_CONTENT_URL: &str = "https://schema.org/contentUrl";
/// `schema:encodingFormat`
pub const SCHEMA_ORG_ENCODING_FORMAT: &str = "https://schema.org/encodingFormat";
/// `schema:sha256`
pub const SCHEMA_ORG_SHA256: &str = "https://schema.org/sha256";
/// `schema:md5`
pub const SCHEMA_ORG_MD5: &str = "https://schema.org/md5";
/// `schema:contentSize`
pub const SCHEMA_ORG_CONTENT_SIZE: &str = "https://schema.org/contentSize";

/// `ml:containedIn`
pub const ML_COMMONS_CONTAINED_IN: &str = "http://mlcommons.org/schema/containedIn";
/// `ml:key`
pub const ML_COMMONS_KEY: &str = "http://mlcommons.org/schema/key";
/// `ml:dataType`
pub const ML_COMMONS_DATA_TYPE: &str = "http://mlcommons.org/schema/dataType";
/// `ml:references`
pub const ML_COMMONS_REFERENCES: &str = "http://mlcommons.org/schema/references";
/// `ml:source`
pub const ML_COMMONS_SOURCE: &str = "http://mlcommons.org/schema/source";

/// Edge from the dataset to each distribution
pub const SCHEMA_ORG_DISTRIBUTION: &str = "https://schema.org/distribution";
/// Edge from the dataset to each record set
pub const ML_COMMONS_RECORD_SET: &str = "http://mlcommons.org/schema/recordSet";
/// Edge from a record set to each field
pub const ML_COMMONS_FIELD: &str = "http://mlcommons.org/schema/field";
/// Edge from a field to each sub-field
pub const ML_COMMONS_SUB_FIELD: &str = "http://mlcommons.org/schema/subField";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_live_in_their_namespace() {
        for iri in [
            SCHEMA_ORG_NAME,
            SCHEMA_ORG_URL,
            SCHEMA_ORG_CONTENT_URL,
            SCHEMA_ORG_DISTRIBUTION,
        ] {
            assert!(iri.starts_with(SCHEMA_ORG));
        }
        for iri in [
            ML_COMMONS_RECORD_SET,
            ML_COMMONS_FIELD,
            ML_COMMONS_SUB_FIELD,
            ML_COMMONS_DATA_TYPE,
        ] {
            assert!(iri.starts_with(ML_COMMONS));
        }
    }
}
