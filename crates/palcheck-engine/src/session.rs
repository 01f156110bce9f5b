//! Form controller session
//!
//! A `Session` is the explicitly scoped owner of the "session active" flag
//! that gates submissions. It holds no reference to any output surface:
//! every method takes plain input and returns plain data for a renderer.

use std::time::Instant;

use palcheck_core::errors::{PalcheckError, Result as CoreResult};
use palcheck_core::{analyze, quick_check, EvaluationResult, NormalizationOptions};
use palcheck_core::{log_op_end, log_op_error, log_op_start};
use palcheck_core_types::schema::{OP_END_SESSION, OP_SUBMIT, OP_SUBMIT_QUICK};
use palcheck_core_types::{RequestId, TraceId};
use serde::Serialize;

use crate::errors::{rejection, Result};
use crate::profile::Profile;
use crate::validation::{validate_input, ValidationPolicy, ACCEPTED_NOTICE};

/// An accepted submission of the full form and its evaluation
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub request_id: RequestId,
    pub raw: String,
    pub notice: String,
    pub result: EvaluationResult,
}

/// An accepted submission of the simplified form
#[derive(Debug, Clone, Serialize)]
pub struct QuickSubmission {
    pub request_id: RequestId,
    pub raw: String,
    pub is_palindrome: bool,
    pub reversed: String,
}

#[derive(Debug)]
pub struct Session {
    trace_id: TraceId,
    policy: ValidationPolicy,
    active: bool,
    accepted: usize,
}

impl Session {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self {
            trace_id: TraceId::new(),
            policy,
            active: true,
            accepted: 0,
        }
    }

    pub fn from_profile(profile: &Profile) -> Self {
        Self::new(profile.validation)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn trace_id(&self) -> &TraceId {
        &self.trace_id
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    /// Number of submissions accepted so far
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    /// Validate and evaluate one submission of the full form
    ///
    /// # Errors
    /// * `SessionEnded` - the session was ended before this call
    /// * `EmptyInput` / `InputTooShort` - the session's policy rejected `raw`
    pub fn submit(&mut self, raw: &str, opts: NormalizationOptions) -> Result<Submission> {
        let request_id = RequestId::new();
        log_op_start!(
            OP_SUBMIT,
            request_id = request_id.as_str(),
            trace_id = self.trace_id.as_str(),
            raw_len = raw.chars().count()
        );
        let start = Instant::now();

        let result = self.submit_impl(raw, opts).map_err(|e| {
            log_op_error!(
                OP_SUBMIT,
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                request_id = request_id.as_str()
            );
            rejection(OP_SUBMIT, e, request_id.clone(), self.trace_id.clone())
        })?;

        self.accepted += 1;
        log_op_end!(
            OP_SUBMIT,
            duration_ms = start.elapsed().as_millis() as u64,
            request_id = request_id.as_str(),
            is_palindrome = result.is_palindrome(),
            cleaned_len = result.stats().cleaned_length
        );

        Ok(Submission {
            request_id,
            raw: raw.to_string(),
            notice: ACCEPTED_NOTICE.to_string(),
            result,
        })
    }

    fn submit_impl(&self, raw: &str, opts: NormalizationOptions) -> CoreResult<EvaluationResult> {
        self.ensure_active()?;
        validate_input(raw, &self.policy)?;
        tracing::debug!(?opts, "input accepted");
        Ok(analyze(raw, opts))
    }

    /// Evaluate one submission of the simplified form
    ///
    /// Only blank input is rejected, whatever the session's policy says;
    /// every normalization step is applied.
    ///
    /// # Errors
    /// * `SessionEnded` - the session was ended before this call
    /// * `EmptyInput` - `raw` is blank
    pub fn submit_quick(&mut self, raw: &str) -> Result<QuickSubmission> {
        let request_id = RequestId::new();
        log_op_start!(
            OP_SUBMIT_QUICK,
            request_id = request_id.as_str(),
            trace_id = self.trace_id.as_str()
        );
        let start = Instant::now();

        let (is_palindrome, reversed) = self
            .ensure_active()
            .and_then(|()| validate_input(raw, &ValidationPolicy::non_empty()))
            .map(|()| quick_check(raw))
            .map_err(|e| {
                log_op_error!(
                    OP_SUBMIT_QUICK,
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    request_id = request_id.as_str()
                );
                rejection(OP_SUBMIT_QUICK, e, request_id.clone(), self.trace_id.clone())
            })?;

        self.accepted += 1;
        log_op_end!(
            OP_SUBMIT_QUICK,
            duration_ms = start.elapsed().as_millis() as u64,
            request_id = request_id.as_str(),
            is_palindrome = is_palindrome
        );

        Ok(QuickSubmission {
            request_id,
            raw: raw.to_string(),
            is_palindrome,
            reversed,
        })
    }

    /// Stop accepting submissions. Calling it again has no further effect.
    pub fn end_session(&mut self) {
        if !self.active {
            tracing::debug!(trace_id = self.trace_id.as_str(), "session already ended");
            return;
        }

        log_op_start!(OP_END_SESSION, trace_id = self.trace_id.as_str());
        self.active = false;
        log_op_end!(
            OP_END_SESSION,
            duration_ms = 0u64,
            trace_id = self.trace_id.as_str(),
            accepted = self.accepted
        );
    }

    fn ensure_active(&self) -> CoreResult<()> {
        if self.active {
            Ok(())
        } else {
            Err(PalcheckError::SessionEnded)
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ValidationPolicy::default())
    }
}
