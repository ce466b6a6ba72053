//! Canonical schema constants for structured logging and events

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity identifiers
pub const FIELD_CURVE_ID: &str = "curve_id";
pub const FIELD_CURVE_NAME: &str = "curve_name";
pub const FIELD_HELPER_ID: &str = "helper_id";
pub const FIELD_HELPER_NAME: &str = "helper_name";

// Collection sizes
pub const FIELD_HELPER_COUNT: &str = "helper_count";
pub const FIELD_TICKER_COUNT: &str = "ticker_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
