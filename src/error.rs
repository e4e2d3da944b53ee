//! Error types for linch-wml-rs

use thiserror::Error;

/// Main error type
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Cannot decode attribute '{attr}' on element '{element}' from \"{raw}\"")]
    ScalarDecode {
        element: String,
        attr: String,
        raw: String,
    },

    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

impl Error {
    /// Attach parse context to a failed scalar conversion
    pub(crate) fn scalar(element: &str, attr: &str, raw: &str) -> Self {
        Error::ScalarDecode {
            element: element.to_string(),
            attr: attr.to_string(),
            raw: raw.to_string(),
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
