use std::path::PathBuf;

use thiserror::Error;

/// The common error type used by this crate
#[derive(Error, Debug)]
pub enum DriftCatalogError {
    /// A catalog document could not be read from disk
    #[error("Could not read catalog from {path}: {source}")]
    Io {
        /// The path that was being read
        path: PathBuf,
        /// The underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A catalog document was not valid JSON, or did not have the expected shape
    #[error("Malformed catalog document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A concept was declared with an empty identifier
    #[error("Concept at position {0} has an empty identifier")]
    EmptyConceptId(usize),

    /// Two concepts in the same catalog share an identifier
    #[error("Concept identifier '{0}' is declared more than once")]
    DuplicateConcept(String),

    /// A concept maps an empty service name to its versions
    #[error("Concept '{0}' declares a service with an empty name")]
    EmptyServiceName(String),
}
