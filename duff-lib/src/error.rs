use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Unsupported collection schema: {0}")]
    UnsupportedSchema(String),
}

/// A folder without children or a request carrying children, found while browsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Inconsistent collection entry '{node}' at {}: {reason}", .path.join(" > "))]
pub struct StructuralInconsistency {
    pub node: String,
    pub path: Vec<String>,
    pub reason: String,
}
