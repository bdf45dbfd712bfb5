//! Registry of URL converter names known to the host routing system.
//!
//! A route placeholder such as `<path:filename>` names a converter. Converters
//! without a dedicated Swagger type are documented as strings, but only when
//! the host application actually registers them. The registry is handed to
//! [`crate::path::extract_path_params`] explicitly.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Converters every Werkzeug URL map registers out of the box
pub const BUILTIN_CONVERTERS: &[&str] = &["default", "string", "any", "path", "int", "float", "uuid"];

/// Set of converter names recognized by the routing system
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConverterRegistry {
    names: BTreeSet<String>,
}

impl ConverterRegistry {
    /// An empty registry; only the static type table applies
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry seeded with [`BUILTIN_CONVERTERS`]
    pub fn with_builtins() -> Self {
        BUILTIN_CONVERTERS.iter().copied().collect()
    }

    /// Register a converter name
    pub fn register(&mut self, name: impl Into<String>) -> &mut Self {
        self.names.insert(name.into());
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Registered names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ConverterRegistry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for ConverterRegistry {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.names.extend(iter.into_iter().map(Into::into));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins() {
        let registry = ConverterRegistry::with_builtins();
        assert_eq!(registry.len(), BUILTIN_CONVERTERS.len());
        assert!(registry.contains("path"));
        assert!(registry.contains("uuid"));
        assert!(!registry.contains("slug"));
    }

    #[test]
    fn test_register_and_extend() {
        let mut registry = ConverterRegistry::new();
        assert!(registry.is_empty());

        registry.register("slug").register("slug");
        registry.extend(["hex", "date"]);
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, vec!["date", "hex", "slug"]);
    }
}
