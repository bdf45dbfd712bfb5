//! Response field markers and their Swagger property declarations

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::swagger::{DataFormat, SwaggerType};

/// Marker for the wire type of a response field
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldKind {
    Raw,
    String,
    FormattedString,
    Url,
    Integer,
    Boolean,
    Float,
    /// Arbitrary-precision decimal
    Arbitrary,
    /// Fixed-precision decimal
    Fixed,
    DateTime,
    Nested,
    List,
    /// Any marker outside the built-in set, kept by name
    Custom(String),
}

impl FieldKind {
    pub fn as_str(&self) -> &str {
        match self {
            FieldKind::Raw => "Raw",
            FieldKind::String => "String",
            FieldKind::FormattedString => "FormattedString",
            FieldKind::Url => "Url",
            FieldKind::Integer => "Integer",
            FieldKind::Boolean => "Boolean",
            FieldKind::Float => "Float",
            FieldKind::Arbitrary => "Arbitrary",
            FieldKind::Fixed => "Fixed",
            FieldKind::DateTime => "DateTime",
            FieldKind::Nested => "Nested",
            FieldKind::List => "List",
            FieldKind::Custom(name) => name,
        }
    }
}

impl FromStr for FieldKind {
    type Err = std::convert::Infallible;

    /// Marker names are matched ignoring case, `-` and `_`, so `date_time`
    /// and `DateTime` are the same marker.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Ok(match normalized.as_str() {
            "raw" => FieldKind::Raw,
            "string" => FieldKind::String,
            "formattedstring" => FieldKind::FormattedString,
            "url" => FieldKind::Url,
            "integer" => FieldKind::Integer,
            "boolean" => FieldKind::Boolean,
            "float" => FieldKind::Float,
            "arbitrary" => FieldKind::Arbitrary,
            "fixed" => FieldKind::Fixed,
            "datetime" => FieldKind::DateTime,
            "nested" => FieldKind::Nested,
            "list" => FieldKind::List,
            _ => FieldKind::Custom(s.to_string()),
        })
    }
}

impl From<String> for FieldKind {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Swagger property declaration for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    #[serde(rename = "type")]
    pub type_: SwaggerType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<DataFormat>,
}

impl Property {
    pub const fn of(type_: SwaggerType) -> Self {
        Self { type_, format: None }
    }

    pub const fn with_format(type_: SwaggerType, format: DataFormat) -> Self {
        Self {
            type_,
            format: Some(format),
        }
    }
}

/// Convert a field marker into a Swagger property declaration.
///
/// Markers without a dedicated mapping are declared as plain strings. A
/// `Custom` marker carrying a built-in name maps like that built-in.
pub fn field_to_property(field: &FieldKind) -> Property {
    match field {
        FieldKind::Custom(name) => match FieldKind::from(name.clone()) {
            FieldKind::Custom(_) => Property::of(SwaggerType::String),
            builtin => field_to_property(&builtin),
        },
        FieldKind::String => Property::of(SwaggerType::String),
        FieldKind::Integer => Property::of(SwaggerType::Integer),
        FieldKind::Boolean => Property::of(SwaggerType::Boolean),
        FieldKind::Float | FieldKind::Arbitrary => Property::of(SwaggerType::Number),
        FieldKind::DateTime => Property::with_format(SwaggerType::String, DataFormat::DateTime),
        _ => Property::of(SwaggerType::String),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_known_fields() {
        let cases = [
            (FieldKind::String, json!({"type": "string"})),
            (FieldKind::Integer, json!({"type": "integer"})),
            (FieldKind::Boolean, json!({"type": "boolean"})),
            (FieldKind::Float, json!({"type": "number"})),
            (FieldKind::Arbitrary, json!({"type": "number"})),
            (FieldKind::DateTime, json!({"type": "string", "format": "date-time"})),
        ];
        for (kind, expected) in cases {
            let property = field_to_property(&kind);
            assert_eq!(serde_json::to_value(property).unwrap(), expected, "{kind}");
        }
    }

    #[test]
    fn test_unknown_fields_default_to_string() {
        for kind in [
            FieldKind::Raw,
            FieldKind::Fixed,
            FieldKind::Nested,
            FieldKind::List,
            FieldKind::Url,
            FieldKind::FormattedString,
            FieldKind::Custom("Geometry".into()),
        ] {
            assert_eq!(field_to_property(&kind), Property::of(SwaggerType::String));
        }
    }

    #[test]
    fn test_custom_with_builtin_name_matches_builtin() {
        let custom = FieldKind::Custom("Integer".into());
        assert_eq!(field_to_property(&custom), Property::of(SwaggerType::Integer));

        let reloaded: FieldKind =
            serde_json::from_value(serde_json::to_value(&custom).unwrap()).unwrap();
        assert_eq!(field_to_property(&reloaded), field_to_property(&custom));
        assert_eq!(
            field_to_property(&FieldKind::Custom("date-time".into())),
            Property::with_format(SwaggerType::String, DataFormat::DateTime)
        );
    }

    #[test]
    fn test_parse_field_kind() {
        assert_eq!("DateTime".parse::<FieldKind>().unwrap(), FieldKind::DateTime);
        assert_eq!("date_time".parse::<FieldKind>().unwrap(), FieldKind::DateTime);
        assert_eq!("INTEGER".parse::<FieldKind>().unwrap(), FieldKind::Integer);
        assert_eq!(
            "Geometry".parse::<FieldKind>().unwrap(),
            FieldKind::Custom("Geometry".into())
        );
    }

    #[test]
    fn test_field_kind_serde() {
        let kinds: Vec<FieldKind> = serde_json::from_value(json!(["Boolean", "Money"])).unwrap();
        assert_eq!(kinds, vec![FieldKind::Boolean, FieldKind::Custom("Money".into())]);
        assert_eq!(serde_json::to_value(&kinds).unwrap(), json!(["Boolean", "Money"]));
    }
}
