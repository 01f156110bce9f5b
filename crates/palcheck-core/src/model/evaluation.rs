use serde::Serialize;

/// Character counts of the three strings involved in one evaluation
///
/// Lengths are counted in `char`s, the same unit `reverse` operates on, so
/// `cleaned_length == reversed_length` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub raw_length: usize,
    pub cleaned_length: usize,
    pub reversed_length: usize,
}

/// Outcome of comparing a cleaned string against its reversal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    is_palindrome: bool,
    reversed: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

impl Verdict {
    pub(crate) fn new(is_palindrome: bool, reversed: String, reason: Option<String>) -> Self {
        Self {
            is_palindrome,
            reversed,
            reason,
        }
    }

    pub fn is_palindrome(&self) -> bool {
        self.is_palindrome
    }

    pub fn reversed(&self) -> &str {
        &self.reversed
    }

    /// Explanation attached to edge-case negative verdicts
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// Consume the verdict, keeping only the boolean and the reversed string
    pub fn into_parts(self) -> (bool, String) {
        (self.is_palindrome, self.reversed)
    }
}

/// Full result of evaluating one raw input under one set of options
///
/// A value object: built once by `analyze`, read through accessors, and
/// dropped by the caller after rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationResult {
    cleaned: String,
    reversed: String,
    is_palindrome: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    stats: Stats,
}

impl EvaluationResult {
    pub(crate) fn new(cleaned: String, verdict: Verdict, stats: Stats) -> Self {
        Self {
            cleaned,
            reversed: verdict.reversed,
            is_palindrome: verdict.is_palindrome,
            reason: verdict.reason,
            stats,
        }
    }

    pub fn cleaned(&self) -> &str {
        &self.cleaned
    }

    pub fn reversed(&self) -> &str {
        &self.reversed
    }

    pub fn is_palindrome(&self) -> bool {
        self.is_palindrome
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }
}
