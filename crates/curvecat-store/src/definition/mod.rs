//! Curve definition documents
//!
//! A definition document describes curves, their helpers and helper
//! configs in YAML (JSON is accepted too). Documents are fully validated
//! before any curve is written.

pub mod format_v0;
pub mod parser;

pub use format_v0::{ConfigDefinition, CurveDefinition, DefinitionV0, HelperDefinition};
pub use parser::{parse_definition_file, parse_definition_str};
