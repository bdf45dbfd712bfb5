//! Per-route Swagger fragments.
//!
//! A fragment puts the outputs of the path, parser and field converters for
//! one manifest route side by side. Assembling fragments into an API
//! declaration is left to the caller.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::converters::ConverterRegistry;
use crate::fields::{field_to_property, Property};
use crate::manifest::RouteEntry;
use crate::path::{extract_path, extract_path_params, PathParameter};
use crate::reqparse::{parser_to_params, SwaggerParameter};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteFragment {
    /// Swagger path, e.g. `/pets/{id}`
    pub path: String,
    pub path_parameters: Vec<PathParameter>,
    pub parameters: IndexMap<String, SwaggerParameter>,
    pub properties: IndexMap<String, Property>,
}

impl RouteFragment {
    /// Build the fragment for a single route.
    ///
    /// Fails only when a path placeholder names a converter that is neither
    /// typed nor present in `converters`.
    pub fn build(route: &RouteEntry, converters: &ConverterRegistry) -> crate::Result<Self> {
        let fragment = Self {
            path: extract_path(&route.path),
            path_parameters: extract_path_params(&route.path, converters)?,
            parameters: parser_to_params(&route.arguments),
            properties: route
                .fields
                .iter()
                .map(|(name, kind)| (name.clone(), field_to_property(kind)))
                .collect(),
        };
        log::debug!(
            "Built fragment for {} with {} path, {} request and {} response parameter(s)",
            fragment.path,
            fragment.path_parameters.len(),
            fragment.parameters.len(),
            fragment.properties.len()
        );
        Ok(fragment)
    }

    /// Build fragments for every route, stopping at the first failure
    pub fn build_all<'a, I>(routes: I, converters: &ConverterRegistry) -> crate::Result<Vec<Self>>
    where
        I: IntoIterator<Item = &'a RouteEntry>,
    {
        routes
            .into_iter()
            .map(|route| Self::build(route, converters))
            .collect()
    }
}
