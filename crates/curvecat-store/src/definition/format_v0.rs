//! Definition format v0 schema

use chrono::NaiveDate;
use curvecat_core::model::{ConfigEntry, CurveSpec, DayCounter, HelperKind, HelperSpec};
use serde::{Deserialize, Serialize};

/// Top-level definition document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefinitionV0 {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    pub curves: Vec<CurveDefinition>,
}

/// Curve entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveDefinition {
    pub curve_name: String,

    pub day_counter: DayCounter,

    #[serde(default)]
    pub enable_extrapolation: bool,

    pub config_date: NaiveDate,

    #[serde(default)]
    pub helpers: Vec<HelperDefinition>,
}

/// Helper entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelperDefinition {
    pub helper_name: String,

    #[serde(rename = "type")]
    pub helper_type: HelperKind,

    /// Ordered parameters
    #[serde(default)]
    pub configs: Vec<ConfigDefinition>,
}

/// Helper parameter entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigDefinition {
    pub field: String,

    /// Stored as text. Plain YAML scalars are read as written, so `0.10`,
    /// `1.0` and `true` keep their spelling
    pub value: String,
}

impl CurveDefinition {
    pub fn curve_spec(&self) -> CurveSpec {
        CurveSpec::new(
            self.curve_name.clone(),
            self.day_counter,
            self.enable_extrapolation,
            self.config_date,
        )
    }

    pub fn helper_specs(&self) -> Vec<HelperSpec> {
        self.helpers.iter().map(HelperDefinition::helper_spec).collect()
    }
}

impl HelperDefinition {
    pub fn helper_spec(&self) -> HelperSpec {
        HelperSpec {
            helper_name: self.helper_name.clone(),
            helper_type: self.helper_type,
            configs: self
                .configs
                .iter()
                .map(|c| ConfigEntry::new(c.field.clone(), c.value.clone()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_values(doc: &str) -> Vec<String> {
        let helper: HelperDefinition = serde_yaml::from_str(doc).unwrap();
        helper.configs.into_iter().map(|c| c.value).collect()
    }

    #[test]
    fn test_numeric_config_values_keep_their_spelling() {
        let values = config_values(
            r#"
helper_name: H1
type: DEPOSIT
configs:
  - { field: rate, value: 0.10 }
  - { field: notional, value: 1.0 }
  - { field: settle, value: 007 }
  - { field: fixingDays, value: 2 }
  - { field: spread, value: -1.50e-3 }
"#,
        );
        assert_eq!(values, vec!["0.10", "1.0", "007", "2", "-1.50e-3"]);
    }

    #[test]
    fn test_bool_and_quoted_config_values_are_verbatim() {
        let values = config_values(
            r#"
helper_name: H1
type: DEPOSIT
configs:
  - { field: endOfMonth, value: True }
  - { field: tenor, value: "0.10" }
  - { field: calendar, value: 'TARGET' }
"#,
        );
        assert_eq!(values, vec!["True", "0.10", "TARGET"]);
    }

    #[test]
    fn test_non_scalar_config_value_rejected() {
        let result: Result<HelperDefinition, _> = serde_yaml::from_str(
            r#"
helper_name: H1
type: DEPOSIT
configs:
  - { field: rate, value: [0.05] }
"#,
        );
        assert!(result.is_err());
    }
}
