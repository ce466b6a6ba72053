//! Error handling for curvecat-store
//!
//! Converts `rusqlite` failures into `CcError` at the repository boundary so
//! callers never see raw driver errors.

use curvecat_core::errors::{CatalogError, CcError, CcErrorKind};
use rusqlite::ErrorCode;

/// Result type alias using CcError
pub type Result<T> = std::result::Result<T, CcError>;

/// True when the failure means the connection cannot execute statements at
/// all, as opposed to this particular statement being rejected
pub fn is_store_unavailable(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(e, _) => matches!(
            e.code,
            ErrorCode::DatabaseBusy
                | ErrorCode::DatabaseLocked
                | ErrorCode::CannotOpen
                | ErrorCode::NotADatabase
                | ErrorCode::DatabaseCorrupt
                | ErrorCode::SystemIoFailure
                | ErrorCode::ReadOnly
                | ErrorCode::PermissionDenied
                | ErrorCode::DiskFull
        ),
        _ => false,
    }
}

/// Classify a rusqlite error as `kind` unless the store itself is unavailable
pub fn store_error(kind: CcErrorKind, op: &str, err: rusqlite::Error) -> CcError {
    let kind = if is_store_unavailable(&err) {
        CcErrorKind::StoreUnavailable
    } else {
        kind
    };
    CcError::new(kind)
        .with_op(op.to_string())
        .with_message(err.to_string())
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> CcError {
    store_error(CcErrorKind::Persistence, "sqlite", err)
}

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> CcError {
    CcError::new(CcErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> CcError {
    CcError::new(CcErrorKind::Persistence)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

/// Create a definition validation error
pub fn definition_error(err: CatalogError) -> CcError {
    CcError::from(err).with_op("definition_parse")
}

/// Create a serialization error for documents the store reads
pub fn serialization_error(op: &str, reason: impl Into<String>) -> CcError {
    CcError::new(CcErrorKind::Serialization)
        .with_op(op.to_string())
        .with_message(reason.into())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> CcError {
    CcError::new(CcErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sqlite_failure(code: i32) -> rusqlite::Error {
        rusqlite::Error::SqliteFailure(rusqlite::ffi::Error::new(code), None)
    }

    #[test]
    fn test_busy_is_unavailable() {
        let err = store_error(
            CcErrorKind::CreateFailed,
            "insert_curve",
            sqlite_failure(rusqlite::ffi::SQLITE_BUSY),
        );
        assert_eq!(err.kind(), CcErrorKind::StoreUnavailable);
        assert_eq!(err.op(), Some("insert_curve"));
    }

    #[test]
    fn test_constraint_keeps_requested_kind() {
        let err = store_error(
            CcErrorKind::ConfigWriteFailed,
            "insert_helper_config",
            sqlite_failure(rusqlite::ffi::SQLITE_CONSTRAINT),
        );
        assert_eq!(err.kind(), CcErrorKind::ConfigWriteFailed);
    }
}
