//! curvecat Engine - Operation boundary
//!
//! Coordinates validation in `curvecat-core` with the row-level repository in
//! `curvecat-store`. Every public write here is one SQLite transaction, and
//! every public operation emits start/end lifecycle events.

pub mod commands;
