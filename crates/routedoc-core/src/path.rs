//! Route template handling.
//!
//! Werkzeug route templates mark variables as `<converter:name>` or `<name>`.
//! Swagger 1.2 expects `{name}` in the path and one `paramType: path`
//! parameter per variable.
//!
//! # Examples
//!
//! ```
//! use routedoc_core::converters::ConverterRegistry;
//! use routedoc_core::path::{extract_path, extract_path_params};
//! use routedoc_core::swagger::SwaggerType;
//!
//! assert_eq!(extract_path("/pets/<int:id>"), "/pets/{id}");
//!
//! let params = extract_path_params("/pets/<int:id>", &ConverterRegistry::new()).unwrap();
//! assert_eq!(params[0].name, "id");
//! assert_eq!(params[0].type_, SwaggerType::Integer);
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::converters::ConverterRegistry;
use crate::swagger::{ParamType, SwaggerType};
use crate::{Error, Result};

static RE_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<(?:[^:<>]+:)?([^<>]+)>").expect("Failed to compile URL regex"));

static RE_PARAMS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<((?:[^:<>]+:)?[^<>]+)>").expect("Failed to compile placeholder regex")
});

/// A `paramType: path` parameter derived from a route placeholder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathParameter {
    pub name: String,
    pub param_type: ParamType,
    pub required: bool,
    #[serde(rename = "type")]
    pub type_: SwaggerType,
}

impl PathParameter {
    fn new(name: &str, type_: SwaggerType) -> Self {
        Self {
            name: name.to_string(),
            param_type: ParamType::Path,
            required: true,
            type_,
        }
    }
}

/// Transform a Werkzeug URL pattern into a Swagger one.
///
/// Converter descriptors are dropped whether or not they are recognized.
pub fn extract_path(path: &str) -> String {
    RE_URL.replace_all(path, "{${1}}").into_owned()
}

/// Swagger type for a converter descriptor with a dedicated mapping.
///
/// `None` stands for a placeholder without a descriptor.
pub fn converter_type(descriptor: Option<&str>) -> Option<SwaggerType> {
    match descriptor {
        Some("int") => Some(SwaggerType::Integer),
        Some("float") => Some(SwaggerType::Number),
        Some("string") | None => Some(SwaggerType::String),
        Some(_) => None,
    }
}

/// Extract the placeholders of a URL pattern as Swagger path parameters.
///
/// Parameters come back in the order they appear in `path`. A descriptor
/// missing from both the type table and `converters` fails the whole
/// template.
pub fn extract_path_params(path: &str, converters: &ConverterRegistry) -> Result<Vec<PathParameter>> {
    RE_PARAMS
        .captures_iter(path)
        .map(|caps| {
            let placeholder = &caps[1];
            let (descriptor, name) = split_placeholder(placeholder).ok_or_else(|| {
                Error::MalformedPlaceholder {
                    placeholder: placeholder.to_string(),
                    path: path.to_string(),
                }
            })?;

            let type_ = match converter_type(descriptor) {
                Some(type_) => type_,
                None => match descriptor {
                    Some(converter) if converters.contains(converter) => SwaggerType::String,
                    _ => {
                        return Err(Error::unsupported_converter(
                            descriptor.unwrap_or_default(),
                            path,
                        ))
                    }
                },
            };

            Ok(PathParameter::new(name, type_))
        })
        .collect()
}

fn split_placeholder(placeholder: &str) -> Option<(Option<&str>, &str)> {
    match placeholder.split_once(':') {
        None => Some((None, placeholder)),
        Some((_, name)) if name.contains(':') => None,
        Some((descriptor, name)) => Some((Some(descriptor), name)),
    }
}
