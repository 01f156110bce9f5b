//! Form-controller flows: validation, evaluation, session gating, rendering

use palcheck_core::errors::ExErrorKind;
use palcheck_core::ops::EMPTY_AFTER_CLEANING;
use palcheck_core::NormalizationOptions;
use palcheck_engine::render::{
    self, escape_html, render_quick, render_rejection, render_session_ended, PALINDROME_NO,
    PALINDROME_YES, QUICK_NO, QUICK_YES, SESSION_ENDED_NOTICE,
};
use palcheck_engine::validation::ACCEPTED_NOTICE;
use palcheck_engine::{OutputFormat, Session, ValidationPolicy};

#[test]
fn test_full_form_palindrome_text() {
    let mut session = Session::default();
    let sub = session
        .submit("A man, a plan, a canal: Panama", NormalizationOptions::all())
        .unwrap();

    let text = render::render_text(&sub);
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], PALINDROME_YES);
    assert_eq!(lines[1], "Raw: A man, a plan, a canal: Panama");
    assert_eq!(lines[2], "Cleaned: amanaplanacanalpanama");
    assert_eq!(lines[3], "Reversed (of cleaned): amanaplanacanalpanama");
    assert_eq!(lines[4], "Lengths: raw 30, cleaned 21, reversed 21");
}

#[test]
fn test_not_a_palindrome_without_reason() {
    let mut session = Session::default();
    let sub = session
        .submit("Hello, World!", NormalizationOptions::all())
        .unwrap();
    assert_eq!(render::verdict_line(&sub.result), PALINDROME_NO);
}

#[test]
fn test_punctuation_only_passes_validation_but_has_reason() {
    let mut session = Session::default();
    let sub = session
        .submit("!!!", NormalizationOptions::new(false, true, false))
        .unwrap();

    assert!(!sub.result.is_palindrome());
    assert_eq!(
        render::verdict_line(&sub.result),
        format!("{} ({})", PALINDROME_NO, EMPTY_AFTER_CLEANING)
    );
}

#[test]
fn test_html_escapes_user_text() {
    let mut session = Session::default();
    let sub = session
        .submit("<b>&</b>", NormalizationOptions::none())
        .unwrap();

    let html = render::render_html(&sub);
    assert!(html.contains("<div><strong>Raw:</strong> &lt;b&gt;&amp;&lt;/b&gt;</div>"));
    assert!(html.contains("<div><strong>Reversed (of cleaned):</strong> &gt;b/&lt;&amp;&gt;b&lt;</div>"));
    assert!(!html.contains("<b>&</b>"));
    assert!(html.contains(ACCEPTED_NOTICE));
    assert!(html.contains("<p class=\"no\">Not a palindrome.</p>"));
}

#[test]
fn test_html_reason_in_emphasis() {
    let mut session = Session::default();
    let sub = session
        .submit("?!", NormalizationOptions::all())
        .unwrap();
    let html = render::render_html(&sub);
    assert!(html.contains(&format!("<em>({})</em>", EMPTY_AFTER_CLEANING)));
}

#[test]
fn test_json_rendering() {
    let mut session = Session::default();
    let sub = session.submit("Noon", NormalizationOptions::all()).unwrap();

    let json = render::render(&sub, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["raw"], "Noon");
    assert_eq!(value["request_id"], sub.request_id.as_str());
    assert_eq!(value["result"]["cleaned"], "noon");
    assert_eq!(value["result"]["is_palindrome"], true);
    assert_eq!(value["result"]["stats"]["raw_length"], 4);
}

#[test]
fn test_rejections_render_original_messages() {
    let mut session = Session::default();

    let empty = session.submit("  ", NormalizationOptions::all()).unwrap_err();
    assert_eq!(
        render_rejection(&empty, OutputFormat::Text),
        "Please enter some text first. (Input was empty.)"
    );

    let short = session.submit(" a ", NormalizationOptions::all()).unwrap_err();
    assert_eq!(
        render_rejection(&short, OutputFormat::Html),
        "<p class=\"no\">Please enter at least 2 characters to evaluate.</p>"
    );

    let json: serde_json::Value =
        serde_json::from_str(&render_rejection(&short, OutputFormat::Json)).unwrap();
    assert_eq!(json["error"]["code"], "ERR_INPUT_TOO_SHORT");
}

#[test]
fn test_custom_policy_from_caller() {
    let mut session = Session::new(ValidationPolicy::new(4));
    let err = session
        .submit("abc", NormalizationOptions::all())
        .unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InputTooShort);
    assert_eq!(
        err.message(),
        "Please enter at least 4 characters to evaluate."
    );
    assert!(session.submit("abba", NormalizationOptions::all()).is_ok());
}

#[test]
fn test_simplified_flow() {
    let mut session = Session::default();

    let yes = session.submit_quick("Was it a rat I saw?").unwrap();
    assert_eq!(
        render_quick(&yes, OutputFormat::Text).unwrap(),
        format!("Input: Was it a rat I saw?\nResult: {}", QUICK_YES)
    );

    let no = session.submit_quick("<script>").unwrap();
    let html = render_quick(&no, OutputFormat::Html).unwrap();
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains(QUICK_NO));

    let blank = session.submit_quick("   ").unwrap_err();
    assert_eq!(blank.kind(), ExErrorKind::EmptyInput);
}

#[test]
fn test_session_end_flow() {
    let mut session = Session::default();
    assert!(session.submit("level", NormalizationOptions::all()).is_ok());

    session.end_session();
    assert_eq!(render_session_ended(OutputFormat::Text), SESSION_ENDED_NOTICE);

    let err = session
        .submit("level", NormalizationOptions::all())
        .unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::SessionEnded);
    assert_eq!(session.accepted(), 1);
}

#[test]
fn test_escape_html_is_not_applied_to_text_output() {
    let mut session = Session::default();
    let sub = session.submit("a<>a", NormalizationOptions::none()).unwrap();
    assert!(render::render_text(&sub).contains("Raw: a<>a"));
    assert_eq!(escape_html("a<>a"), "a&lt;&gt;a");
}
