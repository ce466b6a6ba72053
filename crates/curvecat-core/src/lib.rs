//! curvecat Core - domain model and facilities for the curve catalog
//!
//! This crate provides the pieces shared by the store and engine layers:
//! - Curve, Helper and HelperConfig models plus the write-side specs
//! - Day counter and helper kind enumerations
//! - Input validation for curve creation
//! - The structured error facility (`CcError`, `CcErrorKind`)
//! - The structured logging facility and boundary macros

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod rules;

// Re-export commonly used types
pub use errors::{CatalogError, CcError, CcErrorKind};
pub use model::{
    ConfigEntry, Curve, CurveId, CurveRecord, CurveSpec, CurveSummary, DayCounter,
    DeletionReport, Helper, HelperConfig, HelperId, HelperKind, HelperRecord, HelperSpec,
};
