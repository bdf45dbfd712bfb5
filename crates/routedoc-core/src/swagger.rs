//! Swagger 1.2 vocabulary shared by the path, field and parser converters

use serde::{Deserialize, Serialize};

/// Swagger primitive type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwaggerType {
    /// String type
    String,
    /// Number type (float/decimal)
    Number,
    /// Integer type
    Integer,
    /// Boolean type
    Boolean,
}

impl SwaggerType {
    /// The type name as written in a Swagger document
    pub fn as_str(&self) -> &'static str {
        match self {
            SwaggerType::String => "string",
            SwaggerType::Number => "number",
            SwaggerType::Integer => "integer",
            SwaggerType::Boolean => "boolean",
        }
    }
}

/// Formats refining a primitive type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataFormat {
    /// Date-time format (e.g., 2025-05-29T20:07:42-04:00)
    DateTime,
}

/// Where a parameter is read from, using the 1.2 `paramType` vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    Path,
    Query,
    Form,
    Header,
}
