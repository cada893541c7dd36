//! Loading triples documents from disk.

use croissant_graph::{Triple, TripleGraph};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Input loading error
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// File could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        /// File path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// File is not a valid triples document
    #[error("Invalid triples document {path}: {source}")]
    Json {
        /// File path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },
}

/// A serialized triple graph, as produced by an RDF front end
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TriplesDocument {
    triples: Vec<Triple>,
}

/// Parse a triples document
///
/// # Errors
///
/// Returns error if the text is not a valid triples document
pub fn parse_graph(text: &str) -> Result<TripleGraph, serde_json::Error> {
    let document: TriplesDocument = serde_json::from_str(text)?;
    Ok(TripleGraph::from_triples(document.triples))
}

/// Load a triples document from a file
///
/// # Errors
///
/// Returns error if the file cannot be read or parsed
pub fn load_graph(path: &Path) -> Result<TripleGraph, InputError> {
    let text = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = parse_graph(&text).map_err(|source| InputError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(
        path = %path.display(),
        triples = graph.triple_count(),
        nodes = graph.node_count(),
        "loaded graph"
    );
    Ok(graph)
}
