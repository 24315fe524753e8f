//! Error types for the docx2pdf library.

use std::io;
use thiserror::Error;

/// Result type alias for docx2pdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during conversion.
///
/// Malformed markup inside the document (missing runs, bad alignment or
/// color values) never produces one of these — it degrades to defaults
/// during extraction and layout. Only package-level and I/O failures are
/// fatal.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file is not recognized as a ZIP-packaged document.
    #[error("Unknown file format: not a ZIP-packaged document")]
    UnknownFormat,

    /// The package could not be opened or read.
    #[error("Package error: {0}")]
    Package(String),

    /// A required part is missing from the package.
    #[error("Missing package part: {0}")]
    MissingPart(String),

    /// The document part contains unparseable XML.
    #[error("XML parsing error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// The output file could not be persisted.
    #[error("Failed to persist output: {0}")]
    Persist(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            zip::result::ZipError::FileNotFound => {
                Error::MissingPart("file not found in archive".to_string())
            }
            _ => Error::Package(err.to_string()),
        }
    }
}
