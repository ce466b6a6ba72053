//! Input validation for the curve write path
//!
//! Validation runs before a transaction is opened, so a rejected request
//! never touches the store.

use std::collections::HashSet;

use crate::errors::{CatalogError, Result};
use crate::model::{CurveSpec, HelperSpec};

/// Key the exported helper uses for its kind tag
pub const HELPER_TYPE_KEY: &str = "TYPE";

/// Validate a curve and the helpers that will be created with it
///
/// # Errors
/// - `EmptyCurveName` if the curve name is blank
/// - `EmptyHelperName` if any helper name is blank
/// - `DuplicateHelperName` if two helpers share a name
/// - `EmptyConfigField` / `DuplicateConfigField` for malformed configs
pub fn validate_curve_creation(curve: &CurveSpec, helpers: &[HelperSpec]) -> Result<()> {
    if curve.curve_name.trim().is_empty() {
        return Err(CatalogError::EmptyCurveName);
    }

    let mut names = HashSet::new();
    for (index, helper) in helpers.iter().enumerate() {
        validate_helper_spec(index, helper)?;
        if !names.insert(helper.helper_name.as_str()) {
            return Err(CatalogError::DuplicateHelperName {
                curve_name: curve.curve_name.clone(),
                helper_name: helper.helper_name.clone(),
            });
        }
    }

    Ok(())
}

/// Validate a single helper at position `index`
///
/// Config fields are exported as upper-cased keys next to `TYPE`, so they
/// must stay distinct after upper-casing and must not spell `type`.
pub fn validate_helper_spec(index: usize, helper: &HelperSpec) -> Result<()> {
    if helper.helper_name.trim().is_empty() {
        return Err(CatalogError::EmptyHelperName { index });
    }

    let mut fields = HashSet::new();
    for entry in &helper.configs {
        if entry.field.trim().is_empty() {
            return Err(CatalogError::EmptyConfigField {
                helper_name: helper.helper_name.clone(),
            });
        }
        let key = entry.field.to_uppercase();
        if key == HELPER_TYPE_KEY {
            return Err(CatalogError::ReservedConfigField {
                helper_name: helper.helper_name.clone(),
                field: entry.field.clone(),
            });
        }
        if !fields.insert(key) {
            return Err(CatalogError::DuplicateConfigField {
                helper_name: helper.helper_name.clone(),
                field: entry.field.clone(),
            });
        }
    }

    Ok(())
}
