use thiserror::Error;

use crate::models::DocumentType;

/// Errors produced while loading a plugin configuration or translating it
/// into an SDK configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// A document type outside the selectable subset appeared in
    /// `allowedDocumentTypes`.
    #[error("Unsupported document type: {0}")]
    UnsupportedDocumentType(DocumentType),

    /// Co-branding was requested but one of its logos could not be resolved.
    #[error("Cobrand logos were not found: {name}")]
    MissingCoBrandAssets { name: String },

    #[error("Failed to parse {format} config: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn parse(format: &'static str, err: impl std::fmt::Display) -> Self {
        Error::Parse {
            format,
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
