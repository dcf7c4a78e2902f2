//! Response Formatter
//!
//! Renders server responses for a terminal.
//!
//! A successful response whose result is a JSON object is pretty-printed with
//! two-space indentation; any other payload is shown as text. Formatting
//! never fails: a payload that does not parse falls back to raw display.

use crossterm::style::{Color, Stylize};
use serde_json::Value;

use crate::protocol::Response;

const INDENT: &str = "  ";

/// Renders responses, optionally with ANSI styling
#[derive(Debug, Clone, Copy)]
pub struct Formatter {
    color: bool,
}

impl Formatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Render a response as `<status> <body>`
    pub fn format(&self, response: &Response) -> String {
        if response.is_ok() {
            let body = match parse_document(&response.result) {
                Some(document) => self.render_document(&document),
                None => response.result_text().into_owned(),
            };
            format!("{} {}", self.paint(&response.status, Color::Green), body)
        } else {
            format!(
                "{} {}",
                self.paint(&response.status, Color::Red),
                response.result_text()
            )
        }
    }

    /// Pretty-print a structured document
    pub fn render_document(&self, value: &Value) -> String {
        let mut out = String::new();
        self.write_value(&mut out, value, 0);
        out
    }

    fn write_value(&self, out: &mut String, value: &Value, depth: usize) {
        match value {
            Value::Null => out.push_str(&self.paint("null", Color::DarkGrey)),
            Value::Bool(_) => out.push_str(&self.paint(&value.to_string(), Color::Yellow)),
            Value::Number(_) => out.push_str(&self.paint(&value.to_string(), Color::Cyan)),
            Value::String(_) => out.push_str(&self.paint(&value.to_string(), Color::Green)),
            Value::Array(items) if items.is_empty() => out.push_str("[]"),
            Value::Array(items) => {
                out.push_str("[\n");
                for (i, item) in items.iter().enumerate() {
                    push_indent(out, depth + 1);
                    self.write_value(out, item, depth + 1);
                    if i + 1 < items.len() {
                        out.push(',');
                    }
                    out.push('\n');
                }
                push_indent(out, depth);
                out.push(']');
            }
            Value::Object(map) if map.is_empty() => out.push_str("{}"),
            Value::Object(map) => {
                out.push_str("{\n");
                for (i, (key, item)) in map.iter().enumerate() {
                    push_indent(out, depth + 1);
                    let key = Value::from(key.as_str()).to_string();
                    out.push_str(&self.paint(&key, Color::Blue));
                    out.push_str(": ");
                    self.write_value(out, item, depth + 1);
                    if i + 1 < map.len() {
                        out.push(',');
                    }
                    out.push('\n');
                }
                push_indent(out, depth);
                out.push('}');
            }
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Parse a result payload as a key/value document
///
/// Only JSON objects qualify; scalars, arrays and malformed input return
/// `None` so the caller shows the raw text.
pub fn parse_document(bytes: &[u8]) -> Option<Value> {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(value @ Value::Object(_)) => Some(value),
        Ok(_) => None,
        Err(e) => {
            tracing::trace!("Result is not a structured document: {}", e);
            None
        }
    }
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}
