//! routedoc Core Library
//!
//! This library translates Werkzeug-style route templates, request parser
//! arguments and response field markers into Swagger 1.2 parameter and
//! property fragments.

pub mod config;
pub mod converters;
pub mod error;
pub mod fields;
pub mod fragment;
pub mod generate;
pub mod manifest;
pub mod path;
pub mod reqparse;
pub mod swagger;

pub use crate::{
    config::Config,
    converters::ConverterRegistry,
    error::{Error, Result},
    fields::{field_to_property, FieldKind, Property},
    fragment::RouteFragment,
    generate::generate,
    manifest::{RouteEntry, RouteManifest},
    path::{extract_path, extract_path_params, PathParameter},
    reqparse::{parser_to_params, Argument, RequestParser, SwaggerParameter},
};
