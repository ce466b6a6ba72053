use serde::{Deserialize, Serialize};

use super::conventions::HelperKind;
use super::curve::CurveId;

/// Store-assigned helper identifier
pub type HelperId = i64;

/// One `(field, value)` parameter of a helper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigEntry {
    pub field: String,
    pub value: String,
}

impl ConfigEntry {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// A helper to be created together with its configs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelperSpec {
    pub helper_name: String,

    #[serde(rename = "type")]
    pub helper_type: HelperKind,

    /// Ordered parameter list
    #[serde(default)]
    pub configs: Vec<ConfigEntry>,
}

impl HelperSpec {
    pub fn new(helper_name: impl Into<String>, helper_type: HelperKind) -> Self {
        Self {
            helper_name: helper_name.into(),
            helper_type,
            configs: Vec::new(),
        }
    }

    /// Append a config entry, keeping insertion order
    pub fn with_config(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.configs.push(ConfigEntry::new(field, value));
        self
    }
}

/// A persisted helper row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Helper {
    pub helper_id: HelperId,
    pub curve_id: CurveId,
    pub helper_name: String,
    pub helper_type: HelperKind,
}

/// A persisted helper config row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelperConfig {
    pub helper_id: HelperId,
    pub field: String,
    pub value: String,
}

/// A helper with its configs in insertion order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelperRecord {
    pub helper: Helper,
    pub configs: Vec<HelperConfig>,
}

impl HelperRecord {
    /// Value of a config field, if present
    pub fn config_value(&self, field: &str) -> Option<&str> {
        self.configs
            .iter()
            .find(|c| c.field == field)
            .map(|c| c.value.as_str())
    }
}
