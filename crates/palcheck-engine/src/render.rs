//! Presentation of submissions
//!
//! The Evaluator hands back plain data; turning it into text or markup is
//! done here and only here. HTML output passes every user-derived string
//! through [`escape_html`].

use palcheck_core::errors::ExError;
use palcheck_core::EvaluationResult;

use crate::errors::{serialization_error, Result};
use crate::profile::OutputFormat;
use crate::session::{QuickSubmission, Submission};

pub const PALINDROME_YES: &str = "Yes! That’s a palindrome.";
pub const PALINDROME_NO: &str = "Not a palindrome.";
pub const QUICK_YES: &str = "Palindrome";
pub const QUICK_NO: &str = "Not a Palindrome";
pub const SESSION_ENDED_NOTICE: &str = "Session ended.";

/// Replace the characters that are special in HTML text content
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// One-line verdict, with the reason in parentheses when there is one
pub fn verdict_line(result: &EvaluationResult) -> String {
    if result.is_palindrome() {
        PALINDROME_YES.to_string()
    } else {
        match result.reason() {
            Some(reason) => format!("{} ({})", PALINDROME_NO, reason),
            None => PALINDROME_NO.to_string(),
        }
    }
}

pub fn render_text(sub: &Submission) -> String {
    let result = &sub.result;
    let stats = result.stats();
    format!(
        "{}\nRaw: {}\nCleaned: {}\nReversed (of cleaned): {}\nLengths: raw {}, cleaned {}, reversed {}",
        verdict_line(result),
        sub.raw,
        result.cleaned(),
        result.reversed(),
        stats.raw_length,
        stats.cleaned_length,
        stats.reversed_length,
    )
}

pub fn render_html(sub: &Submission) -> String {
    let result = &sub.result;
    let stats = result.stats();

    let verdict = if result.is_palindrome() {
        format!("<p class=\"ok\">{}</p>", PALINDROME_YES)
    } else {
        let extra = result
            .reason()
            .map(|r| format!(" <em>({})</em>", escape_html(r)))
            .unwrap_or_default();
        format!("<p class=\"no\">{}{}</p>", PALINDROME_NO, extra)
    };

    let mut out = String::new();
    out.push_str(&format!(
        "<p class=\"ok\">{}</p>\n",
        escape_html(&sub.notice)
    ));
    out.push_str(&verdict);
    out.push('\n');
    out.push_str(&format!(
        "<div><strong>Raw:</strong> {}</div>\n",
        escape_html(&sub.raw)
    ));
    out.push_str(&format!(
        "<div><strong>Cleaned:</strong> {}</div>\n",
        escape_html(result.cleaned())
    ));
    out.push_str(&format!(
        "<div><strong>Reversed (of cleaned):</strong> {}</div>\n",
        escape_html(result.reversed())
    ));
    out.push_str(&format!(
        "<div><strong>Lengths</strong> raw: {}, cleaned: {}, reversed: {}</div>",
        stats.raw_length, stats.cleaned_length, stats.reversed_length
    ));
    out
}

/// # Errors
/// `Serialization` if the submission cannot be encoded
pub fn render_json(sub: &Submission) -> Result<String> {
    serde_json::to_string_pretty(sub).map_err(|e| serialization_error("render_json", e))
}

/// Render a full-form submission in `format`
///
/// # Errors
/// `Serialization` when JSON encoding fails
pub fn render(sub: &Submission, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(sub)),
        OutputFormat::Html => Ok(render_html(sub)),
        OutputFormat::Json => render_json(sub),
    }
}

/// Render a simplified-form submission in `format`
///
/// # Errors
/// `Serialization` when JSON encoding fails
pub fn render_quick(sub: &QuickSubmission, format: OutputFormat) -> Result<String> {
    let verdict = if sub.is_palindrome { QUICK_YES } else { QUICK_NO };
    match format {
        OutputFormat::Text => Ok(format!("Input: {}\nResult: {}", sub.raw, verdict)),
        OutputFormat::Html => {
            let class = if sub.is_palindrome { "ok" } else { "no" };
            Ok(format!(
                "<p><strong>Input:</strong> {}</p><p><strong>Result:</strong> <span class=\"{}\">{}</span></p>",
                escape_html(&sub.raw),
                class,
                verdict
            ))
        }
        OutputFormat::Json => serde_json::to_string_pretty(sub)
            .map_err(|e| serialization_error("render_quick", e)),
    }
}

/// Feedback for a rejected submission
pub fn render_rejection(err: &ExError, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => err.message().to_string(),
        OutputFormat::Html => format!("<p class=\"no\">{}</p>", escape_html(err.message())),
        OutputFormat::Json => serde_json::json!({
            "error": {
                "code": err.code(),
                "message": err.message(),
                "request_id": err.request_id().map(|id| id.as_str()),
            }
        })
        .to_string(),
    }
}

pub fn render_session_ended(format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => SESSION_ENDED_NOTICE.to_string(),
        OutputFormat::Html => format!("<p>{}</p>", SESSION_ENDED_NOTICE),
        OutputFormat::Json => serde_json::json!({ "session": "ended" }).to_string(),
    }
}
