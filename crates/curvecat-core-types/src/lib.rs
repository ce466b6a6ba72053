//! Core types shared across curvecat facilities
//!
//! Canonical field keys and event names used by both the error facility
//! and the logging facility, so emitted events and test assertions agree.

pub mod schema;
