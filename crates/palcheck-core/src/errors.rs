use palcheck_core_types::{RequestId, TraceId};
use thiserror::Error;

/// Result type alias using PalcheckError
pub type Result<T> = std::result::Result<T, PalcheckError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// The Evaluator itself never fails; these kinds classify failures of the
/// layers around it (input gating, session state, profile loading, I/O).
/// Each kind maps to a stable code usable by tests and by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input gating
    EmptyInput,
    InputTooShort,

    // Session
    SessionEnded,

    // Configuration
    InvalidProfile,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::EmptyInput => "ERR_EMPTY_INPUT",
            ExErrorKind::InputTooShort => "ERR_INPUT_TOO_SHORT",
            ExErrorKind::SessionEnded => "ERR_SESSION_ENDED",
            ExErrorKind::InvalidProfile => "ERR_INVALID_PROFILE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Whether this kind is a rejection of user input rather than a fault
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            ExErrorKind::EmptyInput | ExErrorKind::InputTooShort | ExErrorKind::SessionEnded
        )
    }
}

/// Canonical structured error type
///
/// Carries the classification plus optional context for debugging and for
/// correlating a rejection with the submission's log events.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add trace ID context
    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    /// The human-facing message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for the layers around the Evaluator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PalcheckError {
    /// Input was empty after trimming
    #[error("Please enter some text first. (Input was empty.)")]
    EmptyInput,

    /// Input was shorter than the validation policy allows
    #[error("Please enter at least {min_length} characters to evaluate.")]
    InputTooShort { min_length: usize, actual: usize },

    /// A submission arrived after the session was ended
    #[error("Session ended. Start a new session to evaluate more text.")]
    SessionEnded,

    /// Profile file failed to parse or validate
    #[error("Invalid profile: {reason}")]
    InvalidProfile { reason: String },

    /// Reading or writing failed
    #[error("I/O error: {message}")]
    Io { message: String },

    /// Serializing a result failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<PalcheckError> for ExError {
    fn from(err: PalcheckError) -> Self {
        let message = err.to_string();
        let kind = match err {
            PalcheckError::EmptyInput => ExErrorKind::EmptyInput,
            PalcheckError::InputTooShort { .. } => ExErrorKind::InputTooShort,
            PalcheckError::SessionEnded => ExErrorKind::SessionEnded,
            PalcheckError::InvalidProfile { .. } => ExErrorKind::InvalidProfile,
            PalcheckError::Io { .. } => ExErrorKind::Io,
            PalcheckError::Serialization { .. } => ExErrorKind::Serialization,
        };
        ExError::new(kind).with_message(message)
    }
}

/// Conversion from serde_json::Error to PalcheckError
impl From<serde_json::Error> for PalcheckError {
    fn from(err: serde_json::Error) -> Self {
        PalcheckError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for PalcheckError {
    fn from(err: std::io::Error) -> Self {
        PalcheckError::Io {
            message: err.to_string(),
        }
    }
}
