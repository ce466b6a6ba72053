//! Definition parser with validation
//!
//! Checks the schema version, curve name uniqueness and every curve's helper
//! list before the document is handed to the importer.

use crate::definition::format_v0::DefinitionV0;
use crate::errors::{definition_error, io_error, serialization_error, Result};
use curvecat_core::errors::CatalogError;
use curvecat_core::rules::validate_curve_creation;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Parse a definition file from a path
pub fn parse_definition_file(path: &Path) -> Result<DefinitionV0> {
    let content = fs::read_to_string(path).map_err(|e| io_error("definition_read", e))?;
    parse_definition_str(&content)
}

/// Parse a definition from a string (YAML or JSON)
pub fn parse_definition_str(content: &str) -> Result<DefinitionV0> {
    let definition: DefinitionV0 = serde_yaml::from_str(content).map_err(|e| {
        serialization_error("definition_parse", format!("YAML parse error: {}", e))
    })?;

    validate_definition(&definition).map_err(definition_error)?;

    Ok(definition)
}

fn validate_definition(definition: &DefinitionV0) -> std::result::Result<(), CatalogError> {
    if definition.schema_version != 0 {
        return Err(CatalogError::UnsupportedSchemaVersion {
            found: definition.schema_version,
            expected: 0,
        });
    }

    let mut names = HashSet::new();
    for curve in &definition.curves {
        if !names.insert(curve.curve_name.as_str()) {
            return Err(CatalogError::DuplicateCurveName {
                curve_name: curve.curve_name.clone(),
            });
        }
        validate_curve_creation(&curve.curve_spec(), &curve.helper_specs())?;
    }

    Ok(())
}
