//! Error type used by the crate.

use std::path::PathBuf;

use thiserror::Error;

/// Error of reading a GeoJSON document or importing its features.
///
/// Every error is fatal for the import it happened in: once an error is returned, no more
/// features of the document are produced.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The file cannot be opened or read. Files that are not valid UTF-8 end up here too.
    #[error("failed to read file {path:?}: {source}")]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Reading the document from a reader failed.
    #[error("failed to read document")]
    Read(#[source] std::io::Error),
    /// The document or a geometry fragment is not valid JSON.
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    /// The root of the document is not a JSON object.
    #[error("document root is not an object")]
    NotAnObject,
    /// The document has no features key.
    #[error("document has no '{0}' key")]
    MissingKey(String),
    /// The features key of the document does not contain an array.
    #[error("'{0}' is not an array")]
    NotAnArray(String),
    /// The `type` of the document is not the expected one.
    #[error("expected document of type '{expected}', got {found:?}")]
    UnexpectedType {
        /// Type set in [`ReadOptions`](crate::ReadOptions).
        expected: String,
        /// Type found in the document, if any.
        found: Option<String>,
    },
    /// An element of the features array is not an object.
    #[error("feature {index} is not an object")]
    InvalidMember {
        /// Position of the element in the features array.
        index: usize,
    },
    /// A geometry (or feature) cannot be constructed from its GeoJSON representation.
    #[error("invalid geojson object: {0}")]
    Geometry(#[from] geojson::Error),
    /// Error raised by an importer - details are inside.
    #[error("{0}")]
    Generic(String),
}

impl ImportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
