//! Request parser arguments and their Swagger parameter declarations.
//!
//! A [`RequestParser`] is the list of arguments a resource reads from the
//! incoming request, in the order they were added. [`parser_to_params`]
//! documents every argument a Swagger 1.2 client can send.
//!
//! # Examples
//!
//! ```
//! use routedoc_core::reqparse::{parser_to_params, Action, ArgType, Argument, Location, RequestParser};
//!
//! let mut parser = RequestParser::new();
//! parser
//!     .add_argument(Argument::new("limit").location(Location::Args).arg_type(ArgType::Integer))
//!     .add_argument(Argument::new("tag").location(Location::Args).action(Action::Append));
//!
//! let params = parser_to_params(&parser);
//! assert!(params["tag"].allow_multiple);
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_value::Value as SerdeValue;

use crate::swagger::{ParamType, SwaggerType};

/// Where in the request an argument is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// The query string
    Args,
    Form,
    Headers,
    Cookie,
    /// Any other single source (`json`, `values`, `files`, ...)
    Other(String),
    /// Several sources searched in order
    Multiple(Vec<String>),
}

impl Location {
    pub fn parse(location: &str) -> Self {
        match location {
            "args" => Location::Args,
            "form" => Location::Form,
            "headers" => Location::Headers,
            "cookie" => Location::Cookie,
            other => Location::Other(other.to_string()),
        }
    }

    /// Build a location from a list of sources; a single source collapses to itself
    pub fn from_sources<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut sources: Vec<String> = sources.into_iter().map(Into::into).collect();
        if sources.len() == 1 {
            if let Some(source) = sources.pop() {
                return Self::parse(&source);
            }
        }
        Location::Multiple(sources)
    }

    /// The single source this location names, however it was built
    fn single_source(&self) -> Option<&str> {
        match self {
            Location::Args => Some("args"),
            Location::Form => Some("form"),
            Location::Headers => Some("headers"),
            Location::Cookie => Some("cookie"),
            Location::Other(other) => Some(other.as_str()),
            Location::Multiple(sources) => match sources.as_slice() {
                [source] => Some(source.as_str()),
                _ => None,
            },
        }
    }

    pub fn is_cookie(&self) -> bool {
        self.single_source() == Some("cookie")
    }

    /// The Swagger `paramType` for this location, `query` when there is no direct match
    pub fn param_type(&self) -> ParamType {
        match self.single_source() {
            Some("form") => ParamType::Form,
            Some("headers") => ParamType::Header,
            _ => ParamType::Query,
        }
    }
}

impl Default for Location {
    /// Request parsers look in the JSON body and then the merged form/query values
    fn default() -> Self {
        Location::Multiple(vec!["json".to_string(), "values".to_string()])
    }
}

impl Serialize for Location {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Location::Args => serializer.serialize_str("args"),
            Location::Form => serializer.serialize_str("form"),
            Location::Headers => serializer.serialize_str("headers"),
            Location::Cookie => serializer.serialize_str("cookie"),
            Location::Other(other) => serializer.serialize_str(other),
            Location::Multiple(sources) => sources.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = SerdeValue::deserialize(deserializer)?;

        match value {
            SerdeValue::String(s) => Ok(Location::parse(&s)),
            SerdeValue::Seq(seq) => {
                let mut sources = Vec::new();
                for item in seq {
                    if let SerdeValue::String(s) = item {
                        sources.push(s);
                    } else {
                        return Err(serde::de::Error::custom(
                            "Expected string or array of strings",
                        ));
                    }
                }
                Ok(Location::from_sources(sources))
            }
            _ => Err(serde::de::Error::custom(
                "Expected string or array of strings",
            )),
        }
    }
}

/// Value type an argument is converted to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ArgType {
    Integer,
    #[default]
    String,
    Float,
    Boolean,
    /// A custom conversion callable, known only by name
    Custom(String),
}

impl ArgType {
    /// Only integers get their own Swagger type; everything else is sent as text
    pub fn swagger_type(&self) -> SwaggerType {
        match self {
            ArgType::Integer => SwaggerType::Integer,
            _ => SwaggerType::String,
        }
    }

    fn as_str(&self) -> &str {
        match self {
            ArgType::Integer => "int",
            ArgType::String => "str",
            ArgType::Float => "float",
            ArgType::Boolean => "bool",
            ArgType::Custom(name) => name,
        }
    }
}

impl From<String> for ArgType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "int" | "integer" => ArgType::Integer,
            "str" | "string" | "text" | "unicode" => ArgType::String,
            "float" | "number" => ArgType::Float,
            "bool" | "boolean" => ArgType::Boolean,
            _ => ArgType::Custom(s),
        }
    }
}

impl From<ArgType> for String {
    fn from(arg_type: ArgType) -> Self {
        arg_type.as_str().to_string()
    }
}

/// What the parser does with the value(s) of an argument
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Action {
    /// Keep a single value
    #[default]
    Store,
    /// Collect every occurrence into a list
    Append,
    Other(String),
}

impl From<String> for Action {
    fn from(s: String) -> Self {
        match s.as_str() {
            "store" => Action::Store,
            "append" => Action::Append,
            _ => Action::Other(s),
        }
    }
}

impl From<Action> for String {
    fn from(action: Action) -> Self {
        match action {
            Action::Store => "store".to_string(),
            Action::Append => "append".to_string(),
            Action::Other(other) => other,
        }
    }
}

/// A single request argument declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    pub name: String,
    #[serde(default)]
    pub location: Location,
    #[serde(default, rename = "type")]
    pub arg_type: ArgType,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    #[serde(default)]
    pub action: Action,
}

impl Argument {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: Location::default(),
            arg_type: ArgType::default(),
            required: false,
            help: None,
            action: Action::default(),
        }
    }

    pub fn location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    pub fn arg_type(mut self, arg_type: ArgType) -> Self {
        self.arg_type = arg_type;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn action(mut self, action: Action) -> Self {
        self.action = action;
        self
    }
}

/// Ordered collection of request arguments
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestParser {
    pub args: Vec<Argument>,
}

impl RequestParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_argument(&mut self, argument: Argument) -> &mut Self {
        self.args.push(argument);
        self
    }
}

impl From<Vec<Argument>> for RequestParser {
    fn from(args: Vec<Argument>) -> Self {
        Self { args }
    }
}

/// Swagger 1.2 declaration of a non-path parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwaggerParameter {
    pub param_type: ParamType,
    #[serde(rename = "type")]
    pub type_: SwaggerType,
    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub allow_multiple: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl From<&Argument> for SwaggerParameter {
    fn from(arg: &Argument) -> Self {
        Self {
            param_type: arg.location.param_type(),
            type_: arg.arg_type.swagger_type(),
            required: arg.required,
            description: arg.help.clone().filter(|help| !help.is_empty()),
            allow_multiple: arg.action == Action::Append,
        }
    }
}

/// Extract Swagger parameters from a request parser.
///
/// Cookie arguments have no Swagger 1.2 representation and are skipped. When
/// two arguments share a name the later declaration wins.
pub fn parser_to_params(parser: &RequestParser) -> IndexMap<String, SwaggerParameter> {
    let mut params = IndexMap::new();
    for arg in &parser.args {
        if arg.location.is_cookie() {
            continue;
        }
        let param = SwaggerParameter::from(arg);
        if params.insert(arg.name.clone(), param).is_some() {
            log::warn!(
                "Request argument '{}' is declared more than once; keeping the last declaration",
                arg.name
            );
        }
    }
    params
}
