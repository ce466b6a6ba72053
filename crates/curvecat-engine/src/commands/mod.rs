//! Command orchestration layer.
//!
//! Provides the catalog operations that coordinate between core domain
//! logic and the persistence layer.

pub mod curve;
pub mod engine_command;
pub mod engine_query;
pub mod export;
pub mod import;
pub mod ticker;
