//! Unified error types for scorm-core.
//!
//! The four package-level failures (archive, manifest entry, XML, root
//! element) are distinct variants so hosts can map them to their own
//! responses without inspecting messages.
use thiserror::Error;

/// Main error type for SCORM package operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The buffer is not a readable ZIP container
    #[error("Malformed archive: {0}")]
    MalformedArchive(String),

    /// The archive lacks the manifest entry
    #[error("SCORM package is missing {0}")]
    MissingManifest(String),

    /// The manifest entry is not well-formed XML
    #[error("Malformed XML: {0}")]
    MalformedXml(String),

    /// No recognizable manifest root element
    #[error("Invalid manifest structure: no manifest root element")]
    InvalidManifestStructure,
}

/// Result type for scorm-core operations.
pub type Result<T> = std::result::Result<T, Error>;
