use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::conventions::DayCounter;
use super::helper::HelperRecord;

/// Store-assigned curve identifier
pub type CurveId = i64;

/// Attributes supplied when creating a curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSpec {
    /// Unique human key used for lookups
    pub curve_name: String,

    pub day_counter: DayCounter,

    #[serde(default)]
    pub enable_extrapolation: bool,

    /// Date the configuration applies from
    pub config_date: NaiveDate,
}

impl CurveSpec {
    pub fn new(
        curve_name: impl Into<String>,
        day_counter: DayCounter,
        enable_extrapolation: bool,
        config_date: NaiveDate,
    ) -> Self {
        Self {
            curve_name: curve_name.into(),
            day_counter,
            enable_extrapolation,
            config_date,
        }
    }
}

/// A persisted curve row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub curve_id: CurveId,
    pub curve_name: String,
    pub day_counter: DayCounter,
    pub enable_extrapolation: bool,
    pub config_date: NaiveDate,
}

impl Curve {
    /// The attributes this curve was created from
    pub fn spec(&self) -> CurveSpec {
        CurveSpec::new(
            self.curve_name.clone(),
            self.day_counter,
            self.enable_extrapolation,
            self.config_date,
        )
    }
}

/// A curve together with its helpers and their configs
///
/// Helpers are ordered by creation; configs keep the order they were
/// supplied in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveRecord {
    pub curve: Curve,
    pub helpers: Vec<HelperRecord>,
}

/// One line of a catalog listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSummary {
    pub curve_id: CurveId,
    pub curve_name: String,
    pub day_counter: DayCounter,
    pub config_date: NaiveDate,
    pub helper_count: usize,
}

/// Row counts removed by a cascading delete
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletionReport {
    pub curves: usize,
    pub helpers: usize,
    pub configs: usize,
}

impl DeletionReport {
    /// True when the delete matched no rows at all
    pub fn is_empty(&self) -> bool {
        self.curves == 0 && self.helpers == 0 && self.configs == 0
    }

    /// Fold another report into this one
    pub fn absorb(&mut self, other: DeletionReport) {
        self.curves += other.curves;
        self.helpers += other.helpers;
        self.configs += other.configs;
    }
}
