//! palcheck Core - Palindrome Evaluator
//!
//! This crate provides the stateless evaluation kernel for palcheck:
//! - Normalization options and evaluation result models
//! - Cleaning, reversal, verdict and statistics operations
//! - The structured error facility shared with the outer layers
//! - The structured logging facility (init, macros, test capture)
//!
//! Every evaluation operation is a pure function of its inputs. Nothing in
//! `ops` holds state, logs, or fails; lifecycle logging and input gating
//! belong to the engine layer that calls into this crate.

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, PalcheckError, Result};
pub use model::{EvaluationResult, NormalizationOptions, Stats, Verdict};
pub use ops::{analyze, clean, evaluate, is_palindrome, quick_check, reverse, stats};
