//! Error handling for the routedoc library.
//!
//! This module defines the main error type `Error` used throughout the library,
//! along with a convenient `Result` type alias. It uses `thiserror` for easy
//! error handling and implements conversions from common error types.
//!
//! The pure transformations only ever fail with [`Error::UnsupportedConverter`]
//! or [`Error::MalformedPlaceholder`]; the remaining variants come from loading
//! manifests and configuration files.
//!
//! # Examples
//!
//! ```
//! use routedoc_core::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     Err(Error::manifest("no routes"))
//! }
//!
//! assert!(might_fail().is_err());
//! ```

use thiserror::Error;

/// Result type for routedoc operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for routedoc operations
#[derive(Debug, Error)]
pub enum Error {
    /// A placeholder descriptor is neither a known type nor a registered converter
    #[error("Unsupported type converter '{converter}' in '{path}'")]
    UnsupportedConverter {
        /// The descriptor that failed to resolve
        converter: String,
        /// The URL template being extracted
        path: String,
    },

    /// A placeholder could not be split into a descriptor and a name
    #[error("Malformed placeholder '<{placeholder}>' in '{path}'")]
    MalformedPlaceholder {
        /// The raw placeholder content between the angle brackets
        placeholder: String,
        /// The URL template being extracted
        path: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Route manifest error
    #[error("Manifest error: {0}")]
    Manifest(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new manifest error
    pub fn manifest<S: Into<String>>(msg: S) -> Self {
        Self::Manifest(msg.into())
    }

    pub(crate) fn unsupported_converter(converter: &str, path: &str) -> Self {
        Self::UnsupportedConverter {
            converter: converter.to_string(),
            path: path.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_converter_message() {
        let err = Error::unsupported_converter("uuid", "/items/<uuid:id>");
        assert_eq!(
            err.to_string(),
            "Unsupported type converter 'uuid' in '/items/<uuid:id>'"
        );
    }

    #[test]
    fn test_helper_constructors() {
        assert!(matches!(Error::config("bad"), Error::Config(m) if m == "bad"));
        assert!(matches!(Error::manifest("bad"), Error::Manifest(m) if m == "bad"));
    }
}
