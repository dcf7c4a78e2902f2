//! Tests for the Response Formatter
//!
//! These tests verify:
//! - Structured (JSON object) results are pretty-printed with 2-space indent
//! - Non-JSON and non-object results are shown verbatim
//! - Error responses show status and raw result
//! - Color only changes styling, never content

use fleare::format::{parse_document, Formatter};
use fleare::protocol::Response;
use serde_json::json;

fn plain() -> Formatter {
    Formatter::new(false)
}

// =============================================================================
// Success Rendering Tests
// =============================================================================

#[test]
fn test_json_object_is_indented() {
    let resp = Response::ok(br#"{"a":1}"#.to_vec());
    assert_eq!(plain().format(&resp), "Ok {\n  \"a\": 1\n}");
}

#[test]
fn test_plain_text_is_verbatim() {
    let resp = Response::ok(b"not-json".to_vec());
    assert_eq!(plain().format(&resp), "Ok not-json");
}

#[test]
fn test_empty_result() {
    let resp = Response::ok(Vec::<u8>::new());
    assert_eq!(plain().format(&resp), "Ok ");
}

#[test]
fn test_scalar_json_is_verbatim() {
    // Only key/value documents are restructured
    assert_eq!(plain().format(&Response::ok(b"42".to_vec())), "Ok 42");
    assert_eq!(plain().format(&Response::ok(b"[1, 2]".to_vec())), "Ok [1, 2]");
    assert_eq!(plain().format(&Response::ok(br#""text""#.to_vec())), "Ok \"text\"");
}

#[test]
fn test_nested_document_keeps_key_order() {
    let resp = Response::ok(
        br#"{"zeta":{"list":[1,"two",null,true],"empty":{}},"alpha":[],"pi":3.5}"#.to_vec(),
    );
    let expected = "\
Ok {
  \"zeta\": {
    \"list\": [
      1,
      \"two\",
      null,
      true
    ],
    \"empty\": {}
  },
  \"alpha\": [],
  \"pi\": 3.5
}";
    assert_eq!(plain().format(&resp), expected);
}

#[test]
fn test_string_values_are_escaped() {
    let resp = Response::ok(br#"{"quote":"say \"hi\"\n"}"#.to_vec());
    assert_eq!(plain().format(&resp), "Ok {\n  \"quote\": \"say \\\"hi\\\"\\n\"\n}");
}

#[test]
fn test_malformed_json_degrades_to_text() {
    let resp = Response::ok(br#"{"a": 1"#.to_vec());
    assert_eq!(plain().format(&resp), "Ok {\"a\": 1");
}

#[test]
fn test_invalid_utf8_does_not_panic() {
    let resp = Response::ok(vec![0xFF, 0xFE, b'x']);
    let rendered = plain().format(&resp);
    assert!(rendered.starts_with("Ok "));
    assert!(rendered.ends_with('x'));
}

// =============================================================================
// Error Rendering Tests
// =============================================================================

#[test]
fn test_error_shows_raw_result() {
    let resp = Response::error("Error", b"key not found".to_vec());
    assert_eq!(plain().format(&resp), "Error key not found");
}

#[test]
fn test_error_json_is_not_restructured() {
    let resp = Response::error("Error", br#"{"a":1}"#.to_vec());
    assert_eq!(plain().format(&resp), "Error {\"a\":1}");
}

#[test]
fn test_status_is_case_sensitive() {
    let resp = Response::error("ok", br#"{"a":1}"#.to_vec());
    assert_eq!(plain().format(&resp), "ok {\"a\":1}");
}

// =============================================================================
// Color Tests
// =============================================================================

#[test]
fn test_color_adds_escape_sequences() {
    // crossterm honors NO_COLOR globally
    if std::env::var_os("NO_COLOR").is_some() {
        return;
    }
    let resp = Response::ok(br#"{"a":1}"#.to_vec());
    let colored = Formatter::new(true).format(&resp);

    assert!(colored.contains('\u{1b}'));
    assert!(colored.contains("Ok"));
    assert!(colored.contains("\"a\""));
}

#[test]
fn test_color_keeps_error_body_verbatim() {
    let rendered = Formatter::new(true).format(&Response::error("Error", b"key not found".to_vec()));
    assert!(rendered.contains("Error"));
    assert!(rendered.ends_with(" key not found"));
}

// =============================================================================
// Document Parsing Tests
// =============================================================================

#[test]
fn test_parse_document() {
    assert_eq!(parse_document(br#"{"a":1}"#), Some(json!({"a": 1})));
    assert_eq!(parse_document(b"[1]"), None);
    assert_eq!(parse_document(b"not-json"), None);
    assert_eq!(parse_document(b""), None);
}

#[test]
fn test_render_document_directly() {
    let doc = json!({"k": [true, {"n": null}]});
    let rendered = plain().render_document(&doc);
    assert_eq!(
        rendered,
        "{\n  \"k\": [\n    true,\n    {\n      \"n\": null\n    }\n  ]\n}"
    );
}
