//! Route manifest format.
//!
//! A manifest describes the routes of a host application: each URL template,
//! the request parser arguments it reads and the fields of its response
//! model. It can be written in YAML or JSON.
//!
//! ```yaml
//! converters: slug
//! routes:
//!   - path: /pets/<int:id>
//!     arguments:
//!       - name: fields
//!         location: args
//!         action: append
//!     fields:
//!       id: Integer
//!       born: DateTime
//! ```

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_value::Value as SerdeValue;
use tokio::fs;

use crate::fields::FieldKind;
use crate::reqparse::RequestParser;

/// The root manifest structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteManifest {
    /// Converter names the application registers on top of the built-in ones
    #[serde(default, deserialize_with = "deserialize_names")]
    pub converters: Vec<String>,

    /// Routes to document, in output order
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

/// A single route of the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// URL template, e.g. `/pets/<int:id>`
    pub path: String,

    /// Request parser arguments read by the route
    #[serde(default)]
    pub arguments: RequestParser,

    /// Response model fields, by name
    #[serde(default)]
    pub fields: IndexMap<String, FieldKind>,
}

impl RouteEntry {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            arguments: RequestParser::default(),
            fields: IndexMap::new(),
        }
    }
}

impl RouteManifest {
    /// Load a route manifest from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be read or is neither valid JSON nor YAML.
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        log::debug!("Reading route manifest from: {}", path.display());

        let content = fs::read_to_string(path).await.map_err(|e| {
            crate::Error::manifest(format!(
                "Failed to read route manifest at {}: {}",
                path.display(),
                e
            ))
        })?;

        let manifest = Self::parse_content(&content).map_err(|e| {
            crate::Error::manifest(format!(
                "Invalid route manifest at {}: {}",
                path.display(),
                e
            ))
        })?;
        log::debug!(
            "Loaded {} route(s) and {} converter(s) from {}",
            manifest.routes.len(),
            manifest.converters.len(),
            path.display()
        );
        Ok(manifest)
    }

    /// Parse content as either JSON or YAML
    pub fn parse_content(content: &str) -> Result<Self, String> {
        // Try to parse as JSON first
        if let Ok(manifest) = serde_json::from_str(content) {
            return Ok(manifest);
        }

        // JSON is a subset of YAML, so the YAML error is the useful one
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }
}

/// Helper function to deserialize either a single name or a list of names
fn deserialize_names<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = SerdeValue::deserialize(deserializer)?;

    match value {
        SerdeValue::String(s) => Ok(vec![s]),
        SerdeValue::Seq(seq) => {
            let mut result = Vec::new();
            for item in seq {
                if let SerdeValue::String(s) = item {
                    result.push(s);
                } else {
                    return Err(serde::de::Error::custom(
                        "Expected string or array of strings",
                    ));
                }
            }
            Ok(result)
        }
        SerdeValue::Unit | SerdeValue::Option(None) => Ok(Vec::new()),
        _ => Err(serde::de::Error::custom(
            "Expected string or array of strings",
        )),
    }
}
