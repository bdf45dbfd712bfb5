//! Configuration management for routedoc.
//!
//! This module defines the `Config` struct and related functionality for managing
//! render settings. The configuration can be loaded from a YAML or JSON file,
//! created programmatically, or assembled from command-line arguments.
//!
//! # Examples
//!
//! ```no_run
//! use routedoc_core::config::Config;
//!
//! # #[tokio::main]
//! # async fn main() -> routedoc_core::Result<()> {
//! // Create a new config programmatically
//! let mut config = Config::new("routes.yaml");
//! config.converters.push("slug".to_string());
//!
//! // Or load from a config file
//! let config = Config::from_file("routedoc.yaml").await?;
//! # Ok(())
//! # }
//! ```

// Internal imports (std, crate)
use std::path::Path;

use crate::converters::ConverterRegistry;

// External imports (alphabetized)
use serde::{Deserialize, Serialize};
use tokio::fs;

/// Configuration for rendering route fragments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Path to the route manifest
    pub manifest_path: String,

    /// Output file for the rendered fragments (stdout when absent)
    #[serde(default)]
    pub output: Option<String>,

    /// Whether the Werkzeug built-in converters are registered
    #[serde(default = "default_true")]
    pub builtin_converters: bool,

    /// Additional converter names registered by the application
    #[serde(default)]
    pub converters: Vec<String>,

    /// Whether the JSON output is pretty-printed
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Config {
    /// Create a new Config with default values
    pub fn new(manifest_path: impl Into<String>) -> Self {
        Self {
            manifest_path: manifest_path.into(),
            output: None,
            builtin_converters: true,
            converters: Vec::new(),
            pretty: true,
        }
    }

    /// Load configuration from a file; `.json` files are read as JSON, anything else as YAML
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await?;
        let config = if is_json(path) {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a file
    pub async fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let path = path.as_ref();
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            serde_yaml::to_string(self)?
        };
        fs::write(path, content).await?;
        Ok(())
    }

    /// The converter registry described by this configuration
    pub fn registry(&self) -> ConverterRegistry {
        let mut registry = if self.builtin_converters {
            ConverterRegistry::with_builtins()
        } else {
            ConverterRegistry::new()
        };
        registry.extend(self.converters.iter().cloned());
        registry
    }
}

fn default_true() -> bool {
    true
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}
