//! Enumerated conventions stored as text columns
//!
//! Parsing accepts the spellings used by the curve builder configuration
//! (`"DEPOSIT"`, `"ACTUAL360"`) as well as the canonical display form.

use crate::errors::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | '/' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Day count convention of a curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DayCounter {
    Actual360,
    Actual365Fixed,
    Thirty360,
    ActualActual,
}

impl DayCounter {
    pub const ALL: [DayCounter; 4] = [
        DayCounter::Actual360,
        DayCounter::Actual365Fixed,
        DayCounter::Thirty360,
        DayCounter::ActualActual,
    ];

    /// Canonical stored form
    pub fn as_str(&self) -> &'static str {
        match self {
            DayCounter::Actual360 => "Actual360",
            DayCounter::Actual365Fixed => "Actual365Fixed",
            DayCounter::Thirty360 => "Thirty360",
            DayCounter::ActualActual => "ActualActual",
        }
    }

    /// Spelling used by the curve builder's `DAYCOUNTER` key
    pub fn builder_tag(&self) -> &'static str {
        match self {
            DayCounter::Actual360 => "ACT360",
            DayCounter::Actual365Fixed => "ACT365FIXED",
            DayCounter::Thirty360 => "30360",
            DayCounter::ActualActual => "ACTACT",
        }
    }
}

impl FromStr for DayCounter {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "actual360" | "act360" => Ok(DayCounter::Actual360),
            "actual365fixed" | "act365fixed" | "actual365" | "act365" => {
                Ok(DayCounter::Actual365Fixed)
            }
            "thirty360" | "30360" => Ok(DayCounter::Thirty360),
            "actualactual" | "actact" => Ok(DayCounter::ActualActual),
            _ => Err(CatalogError::UnknownDayCounter {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for DayCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for DayCounter {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DayCounter> for String {
    fn from(value: DayCounter) -> Self {
        value.as_str().to_string()
    }
}

/// Calibration instrument kind of a helper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HelperKind {
    Deposit,
    FxSwap,
    Bond,
    Swap,
    Ois,
    Xccy,
    XccyBasis,
    TenorBasis,
}

impl HelperKind {
    pub const ALL: [HelperKind; 8] = [
        HelperKind::Deposit,
        HelperKind::FxSwap,
        HelperKind::Bond,
        HelperKind::Swap,
        HelperKind::Ois,
        HelperKind::Xccy,
        HelperKind::XccyBasis,
        HelperKind::TenorBasis,
    ];

    /// Canonical stored form
    pub fn as_str(&self) -> &'static str {
        match self {
            HelperKind::Deposit => "Deposit",
            HelperKind::FxSwap => "FxSwap",
            HelperKind::Bond => "Bond",
            HelperKind::Swap => "Swap",
            HelperKind::Ois => "Ois",
            HelperKind::Xccy => "Xccy",
            HelperKind::XccyBasis => "XccyBasis",
            HelperKind::TenorBasis => "TenorBasis",
        }
    }

    /// Tag used by the curve builder's `RATEHELPERS` entries
    pub fn builder_tag(&self) -> &'static str {
        match self {
            HelperKind::Deposit => "DEPOSIT",
            HelperKind::FxSwap => "FXSWAP",
            HelperKind::Bond => "BOND",
            HelperKind::Swap => "SWAP",
            HelperKind::Ois => "OIS",
            HelperKind::Xccy => "XCCY",
            HelperKind::XccyBasis => "XCCYBASIS",
            HelperKind::TenorBasis => "TENORBASIS",
        }
    }
}

impl FromStr for HelperKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        HelperKind::ALL
            .into_iter()
            .find(|kind| normalize(kind.as_str()) == normalized)
            .ok_or_else(|| CatalogError::UnknownHelperKind {
                value: s.to_string(),
            })
    }
}

impl fmt::Display for HelperKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for HelperKind {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HelperKind> for String {
    fn from(value: HelperKind) -> Self {
        value.as_str().to_string()
    }
}
