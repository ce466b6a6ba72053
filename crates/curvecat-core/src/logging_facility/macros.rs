//! Canonical logging macros

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use curvecat_core::log_op_start;
/// log_op_start!("create_curve");
/// log_op_start!("create_curve", curve_name = "USD-OIS");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = curvecat_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = curvecat_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use curvecat_core::log_op_end;
/// log_op_end!("create_curve", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = curvecat_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = curvecat_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// The error is converted into `CcError` to report its kind and code.
///
/// ```
/// # use curvecat_core::{log_op_error, CcError, CcErrorKind};
/// let err = CcError::new(CcErrorKind::DeleteFailed);
/// log_op_error!("delete_curve", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::CcError;
        let cc_err: CcError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = curvecat_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?cc_err.kind(),
            err.code = cc_err.code(),
            err.message = %cc_err,
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::CcError;
        let cc_err: CcError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = curvecat_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?cc_err.kind(),
            err.code = cc_err.code(),
            err.message = %cc_err,
            $($field)*
        );
    }};
}
