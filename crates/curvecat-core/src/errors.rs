use thiserror::Error;

/// Result type alias using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure that leaves a public catalog operation is classified by one
/// of these kinds. Each kind maps to a stable code usable by callers and
/// tests without matching on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CcErrorKind {
    // Validation
    InvalidInput,

    // Lookup
    /// Name or id resolution found no row
    NotFound,

    // Write path
    /// Insertion of a Curve or Helper row failed
    CreateFailed,
    /// A helper (row, id or config) failed while creating a curve; the whole
    /// curve was rolled back
    HelperCreationFailed,
    /// A HelperConfig insertion failed
    ConfigWriteFailed,
    /// A deletion statement failed
    DeleteFailed,

    // Store
    /// The connection cannot execute statements (locked, unopenable, corrupt)
    StoreUnavailable,
    Persistence,

    // Integration/IO
    Io,
    Serialization,
}

impl CcErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            CcErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            CcErrorKind::NotFound => "ERR_NOT_FOUND",
            CcErrorKind::CreateFailed => "ERR_CREATE_FAILED",
            CcErrorKind::HelperCreationFailed => "ERR_HELPER_CREATION_FAILED",
            CcErrorKind::ConfigWriteFailed => "ERR_CONFIG_WRITE_FAILED",
            CcErrorKind::DeleteFailed => "ERR_DELETE_FAILED",
            CcErrorKind::StoreUnavailable => "ERR_STORE_UNAVAILABLE",
            CcErrorKind::Persistence => "ERR_PERSISTENCE",
            CcErrorKind::Io => "ERR_IO",
            CcErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification used for programmatic handling plus the
/// context (operation, entity, helper position) needed when debugging a
/// failed write.
#[derive(Debug, Clone)]
pub struct CcError {
    kind: CcErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    helper_index: Option<usize>,
    message: String,
    source: Option<Box<CcError>>,
}

impl CcError {
    /// Create a new error with the specified kind
    pub fn new(kind: CcErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            helper_index: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity context (curve name, helper name, or numeric id)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add the position of the failing helper within the create call
    pub fn with_helper_index(mut self, index: usize) -> Self {
        self.helper_index = Some(index);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: CcError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> CcErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the failing helper position, if any
    pub fn helper_index(&self) -> Option<usize> {
        self.helper_index
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&CcError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for CcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity: {})", entity_id)?;
        }
        if let Some(index) = self.helper_index {
            write!(f, " (helper index: {})", index)?;
        }
        if let Some(source) = &self.source {
            write!(f, "; caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for CcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain errors raised before anything touches the store
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Curve name is empty or whitespace-only
    #[error("Curve name must not be empty")]
    EmptyCurveName,

    /// Helper name is empty or whitespace-only
    #[error("Helper name at index {index} must not be empty")]
    EmptyHelperName { index: usize },

    /// Two helpers in one curve share a name
    #[error("Duplicate helper name {helper_name} in curve {curve_name}")]
    DuplicateHelperName {
        curve_name: String,
        helper_name: String,
    },

    /// A config field name is empty
    #[error("Helper {helper_name} has an empty config field name")]
    EmptyConfigField { helper_name: String },

    /// Two config entries of one helper share a field name, ignoring case
    #[error("Duplicate config field {field} in helper {helper_name}")]
    DuplicateConfigField { helper_name: String, field: String },

    /// Config field collides with the helper's own `TYPE` key on export
    #[error("Config field {field} of helper {helper_name} is reserved")]
    ReservedConfigField { helper_name: String, field: String },

    /// Two curves in one definition document share a name
    #[error("Duplicate curve name in definition: {curve_name}")]
    DuplicateCurveName { curve_name: String },

    /// Day counter string is not a known convention
    #[error("Unknown day counter: {value}")]
    UnknownDayCounter { value: String },

    /// Helper type string is not a known instrument kind
    #[error("Unknown helper type: {value}")]
    UnknownHelperKind { value: String },

    /// No curve with this name
    #[error("Curve not found: {curve_name}")]
    CurveNotFound { curve_name: String },

    /// No curve with this id
    #[error("Curve id not found: {curve_id}")]
    CurveIdNotFound { curve_id: i64 },

    /// No helper with this name
    #[error("Helper not found: {helper_name}")]
    HelperNotFound { helper_name: String },

    /// Unsupported definition document version
    #[error("Unsupported schema_version: {found}. Expected {expected}")]
    UnsupportedSchemaVersion { found: u32, expected: u32 },
}

/// Conversion from CatalogError to CcError
impl From<CatalogError> for CcError {
    fn from(err: CatalogError) -> Self {
        let message = err.to_string();
        match err {
            CatalogError::EmptyCurveName => {
                CcError::new(CcErrorKind::InvalidInput).with_message(message)
            }
            CatalogError::EmptyHelperName { index } => CcError::new(CcErrorKind::InvalidInput)
                .with_helper_index(index)
                .with_message(message),
            CatalogError::DuplicateHelperName { helper_name, .. }
            | CatalogError::EmptyConfigField { helper_name }
            | CatalogError::DuplicateConfigField { helper_name, .. }
            | CatalogError::ReservedConfigField { helper_name, .. } => {
                CcError::new(CcErrorKind::InvalidInput)
                    .with_entity_id(helper_name)
                    .with_message(message)
            }
            CatalogError::DuplicateCurveName { curve_name } => {
                CcError::new(CcErrorKind::InvalidInput)
                    .with_entity_id(curve_name)
                    .with_message(message)
            }
            CatalogError::UnknownDayCounter { .. }
            | CatalogError::UnknownHelperKind { .. }
            | CatalogError::UnsupportedSchemaVersion { .. } => {
                CcError::new(CcErrorKind::InvalidInput).with_message(message)
            }
            CatalogError::CurveNotFound { curve_name } => CcError::new(CcErrorKind::NotFound)
                .with_entity_id(curve_name)
                .with_message(message),
            CatalogError::CurveIdNotFound { curve_id } => CcError::new(CcErrorKind::NotFound)
                .with_entity_id(curve_id.to_string())
                .with_message(message),
            CatalogError::HelperNotFound { helper_name } => CcError::new(CcErrorKind::NotFound)
                .with_entity_id(helper_name)
                .with_message(message),
        }
    }
}
