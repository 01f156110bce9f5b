use super::normalize::clean;
use super::reverse::reverse;
use crate::model::{EvaluationResult, NormalizationOptions, Stats, Verdict};

/// Reason attached to the verdict when cleaning left nothing to compare
pub const EMPTY_AFTER_CLEANING: &str = "Nothing to evaluate after cleaning.";

/// Compare a cleaned string against its reversal
///
/// An empty string is reported as not a palindrome, with
/// [`EMPTY_AFTER_CLEANING`] as the reason. Any other negative verdict carries
/// no reason.
pub fn evaluate(cleaned: &str) -> Verdict {
    let reversed = reverse(cleaned);

    if cleaned.is_empty() {
        Verdict::new(false, reversed, Some(EMPTY_AFTER_CLEANING.to_string()))
    } else if cleaned == reversed {
        Verdict::new(true, reversed, None)
    } else {
        Verdict::new(false, reversed, None)
    }
}

/// Character counts for the raw, cleaned and reversed strings
pub fn stats(raw: &str, cleaned: &str, reversed: &str) -> Stats {
    Stats {
        raw_length: raw.chars().count(),
        cleaned_length: cleaned.chars().count(),
        reversed_length: reversed.chars().count(),
    }
}

/// Clean, evaluate and measure `raw` in one call
pub fn analyze(raw: &str, opts: NormalizationOptions) -> EvaluationResult {
    let cleaned = clean(raw, opts);
    let verdict = evaluate(&cleaned);
    let stats = stats(raw, &cleaned, verdict.reversed());
    EvaluationResult::new(cleaned, verdict, stats)
}

/// Simplified check: every normalization step on, reason and stats dropped
///
/// Returns the verdict together with the reversed cleaned string.
pub fn quick_check(text: &str) -> (bool, String) {
    evaluate(&clean(text, NormalizationOptions::all())).into_parts()
}

/// Simplified check returning only the boolean verdict
pub fn is_palindrome(text: &str) -> bool {
    quick_check(text).0
}
