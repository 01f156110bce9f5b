//! palcheck Engine - form controller layer
//!
//! Sits between a front end and the pure Evaluator in `palcheck-core`:
//! - input validation before anything is evaluated
//! - an explicitly scoped `Session` holding the session-active flag
//! - YAML profiles carrying default options, policy and output format
//! - rendering of results as text, escaped HTML, or JSON
//!
//! ## Logging Ownership
//!
//! The engine owns lifecycle logging for submissions:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on rejection or failure
//!
//! The core emits no events at all.

pub mod errors;
pub mod profile;
pub mod render;
pub mod session;
pub mod validation;

pub use errors::Result;
pub use profile::{OutputFormat, Profile};
pub use session::{QuickSubmission, Session, Submission};
pub use validation::ValidationPolicy;
