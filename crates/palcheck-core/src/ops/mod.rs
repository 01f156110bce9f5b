//! Evaluation operations
//!
//! All functions here are total and pure: any `&str` and any flag
//! combination produce a value, and the input is never modified.

pub mod evaluate;
pub mod normalize;
pub mod reverse;

pub use evaluate::{analyze, evaluate, is_palindrome, quick_check, stats, EMPTY_AFTER_CLEANING};
pub use normalize::clean;
pub use reverse::reverse;
