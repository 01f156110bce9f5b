//! Error handling for palcheck-engine
//!
//! Wraps palcheck-core ExError with engine-specific helpers

use palcheck_core::errors::{ExError, PalcheckError};
use palcheck_core_types::schema::OP_LOAD_PROFILE;
use palcheck_core_types::{RequestId, TraceId};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a profile validation error
pub fn invalid_profile(reason: impl Into<String>) -> ExError {
    ExError::from(PalcheckError::InvalidProfile {
        reason: reason.into(),
    })
    .with_op(OP_LOAD_PROFILE)
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::from(PalcheckError::from(err)).with_op(operation)
}

/// Create a serialization error
pub fn serialization_error(operation: &str, err: serde_json::Error) -> ExError {
    ExError::from(PalcheckError::from(err)).with_op(operation)
}

/// Attach submission context to a rejection
pub fn rejection(
    operation: &str,
    err: PalcheckError,
    request_id: RequestId,
    trace_id: TraceId,
) -> ExError {
    ExError::from(err)
        .with_op(operation)
        .with_request_id(request_id)
        .with_trace_id(trace_id)
}

/// Whether `err` means "show the message and let the user try again"
pub fn is_user_rejection(err: &ExError) -> bool {
    err.kind().is_rejection()
}
