//! Input gating applied before the Evaluator runs
//!
//! The Evaluator accepts any string. These checks exist so that a form
//! front end can refuse empty or trivially short input with a friendly
//! message; a rejected input never reaches `analyze`.

use palcheck_core::errors::{PalcheckError, Result};
use serde::{Deserialize, Serialize};

/// Feedback shown when input passes validation
pub const ACCEPTED_NOTICE: &str = "Looks good! Submitting for palindrome check…";

/// Minimum trimmed length, in chars, the full form accepts
pub const DEFAULT_MIN_LENGTH: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationPolicy {
    pub min_length: usize,
}

impl ValidationPolicy {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    /// Policy of the simplified form: anything non-empty after trimming
    pub fn non_empty() -> Self {
        Self { min_length: 1 }
    }
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
        }
    }
}

/// Check raw input against `policy`
///
/// Leading and trailing whitespace does not count towards the length; the
/// raw string itself is left untouched for evaluation.
///
/// # Errors
/// * `EmptyInput` - nothing but whitespace
/// * `InputTooShort` - fewer than `policy.min_length` chars after trimming
pub fn validate_input(raw: &str, policy: &ValidationPolicy) -> Result<()> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(PalcheckError::EmptyInput);
    }

    let actual = trimmed.chars().count();
    if actual < policy.min_length {
        return Err(PalcheckError::InputTooShort {
            min_length: policy.min_length,
            actual,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_blank_rejected() {
        let policy = ValidationPolicy::default();
        assert_eq!(validate_input("", &policy), Err(PalcheckError::EmptyInput));
        assert_eq!(
            validate_input(" \t\n", &policy),
            Err(PalcheckError::EmptyInput)
        );
    }

    #[test]
    fn test_single_char_rejected_by_default() {
        let err = validate_input("  a  ", &ValidationPolicy::default()).unwrap_err();
        assert_eq!(
            err,
            PalcheckError::InputTooShort {
                min_length: 2,
                actual: 1
            }
        );
        assert_eq!(
            err.to_string(),
            "Please enter at least 2 characters to evaluate."
        );
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        assert!(validate_input("é", &ValidationPolicy::default()).is_err());
        assert!(validate_input("éé", &ValidationPolicy::default()).is_ok());
    }

    #[test]
    fn test_non_empty_policy_accepts_single_char() {
        assert!(validate_input("a", &ValidationPolicy::non_empty()).is_ok());
        assert!(validate_input(" ", &ValidationPolicy::non_empty()).is_err());
    }

    #[test]
    fn test_punctuation_only_input_passes_validation() {
        // Passing validation does not mean anything survives cleaning
        assert!(validate_input("!!!", &ValidationPolicy::default()).is_ok());
    }
}
