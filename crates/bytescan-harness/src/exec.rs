//! Fixture case execution against `bytescan-core`.
//!
//! Results are rendered as strings so they can be compared with
//! `expected_output`: `Some(n)` / `None` for searches, a plain integer for
//! `trimmed_len`, and `Err(<message>)` when the core rejects a declared length.

use serde_json::Value;
use thiserror::Error;

use bytescan_core::{ScanError, find_first, find_first_n, find_last_byte, trimmed_len};

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("unsupported function '{0}'")]
    UnknownFunction(String),
    #[error("missing input '{0}'")]
    MissingInput(&'static str),
    #[error("input '{field}' is malformed: {reason}")]
    BadInput { field: &'static str, reason: String },
}

/// Executes one fixture case and renders its result.
pub fn execute_case(function: &str, inputs: &Value) -> Result<String, ExecError> {
    match function {
        "find_first" => {
            let source = bytes_input(inputs, "source")?;
            let pattern = bytes_input(inputs, "pattern")?;
            Ok(render_option(find_first(&source, &pattern)))
        }
        "find_first_n" => {
            let source = bytes_input(inputs, "source")?;
            let pattern = bytes_input(inputs, "pattern")?;
            let source_len = opt_len_input(inputs, "source_len")?.unwrap_or(source.len());
            let pattern_len = opt_len_input(inputs, "pattern_len")?.unwrap_or(pattern.len());
            Ok(render_result(find_first_n(
                &source,
                source_len,
                &pattern,
                pattern_len,
            )))
        }
        "trimmed_len" => {
            let buf = bytes_input(inputs, "buf")?;
            Ok(trimmed_len(&buf).to_string())
        }
        "find_last_byte" => {
            let buf = bytes_input(inputs, "buf")?;
            let needle = byte_input(inputs, "needle")?;
            let n = opt_len_input(inputs, "n")?.unwrap_or(buf.len());
            Ok(render_result(find_last_byte(&buf, needle, n)))
        }
        other => Err(ExecError::UnknownFunction(other.to_string())),
    }
}

fn render_option(found: Option<usize>) -> String {
    match found {
        Some(offset) => format!("Some({offset})"),
        None => String::from("None"),
    }
}

fn render_result(result: Result<Option<usize>, ScanError>) -> String {
    match result {
        Ok(found) => render_option(found),
        Err(err) => format!("Err({err})"),
    }
}

/// Reads a byte buffer given as an integer array, a UTF-8 string, or
/// `{"text": "...", "pad_to": N}` (zero-padded to `N` bytes).
fn bytes_input(inputs: &Value, field: &'static str) -> Result<Vec<u8>, ExecError> {
    let value = inputs.get(field).ok_or(ExecError::MissingInput(field))?;
    bytes_from_value(value, field)
}

fn bytes_from_value(value: &Value, field: &'static str) -> Result<Vec<u8>, ExecError> {
    match value {
        Value::String(s) => Ok(s.as_bytes().to_vec()),
        Value::Array(items) => items
            .iter()
            .map(|item| {
                item.as_u64()
                    .and_then(|n| u8::try_from(n).ok())
                    .ok_or_else(|| ExecError::BadInput {
                        field,
                        reason: format!("{item} is not a byte"),
                    })
            })
            .collect(),
        Value::Object(obj) => {
            let text = obj
                .get("text")
                .and_then(Value::as_str)
                .ok_or_else(|| ExecError::BadInput {
                    field,
                    reason: String::from("object form needs a string 'text'"),
                })?;
            let mut bytes = unescape_text(text);
            if let Some(pad_to) = obj.get("pad_to") {
                let pad_to = pad_to
                    .as_u64()
                    .and_then(|n| usize::try_from(n).ok())
                    .ok_or_else(|| ExecError::BadInput {
                        field,
                        reason: format!("pad_to {pad_to} is not a length"),
                    })?;
                if pad_to < bytes.len() {
                    return Err(ExecError::BadInput {
                        field,
                        reason: format!("pad_to {pad_to} is shorter than text ({})", bytes.len()),
                    });
                }
                bytes.resize(pad_to, 0);
            }
            Ok(bytes)
        }
        other => Err(ExecError::BadInput {
            field,
            reason: format!("expected byte array or string, got {other}"),
        }),
    }
}

// JSON has no NUL-friendly byte literal; inside `text`, `\0` stands for 0x00 and
// `\\` for a literal backslash. Any other backslash is kept verbatim.
fn unescape_text(text: &str) -> Vec<u8> {
    let raw = text.as_bytes();
    let mut out = Vec::with_capacity(raw.len());
    let mut i = 0;
    while i < raw.len() {
        match (raw[i], raw.get(i + 1)) {
            (b'\\', Some(&b'0')) => {
                out.push(0);
                i += 2;
            }
            (b'\\', Some(&b'\\')) => {
                out.push(b'\\');
                i += 2;
            }
            (byte, _) => {
                out.push(byte);
                i += 1;
            }
        }
    }
    out
}

fn opt_len_input(inputs: &Value, field: &'static str) -> Result<Option<usize>, ExecError> {
    match inputs.get(field) {
        None => Ok(None),
        Some(value) => value
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| ExecError::BadInput {
                field,
                reason: format!("{value} is not a length"),
            }),
    }
}

/// A single byte given as an integer or a one-character string.
fn byte_input(inputs: &Value, field: &'static str) -> Result<u8, ExecError> {
    let value = inputs.get(field).ok_or(ExecError::MissingInput(field))?;
    let byte = match value {
        Value::String(s) if s.len() == 1 => Some(s.as_bytes()[0]),
        other => other.as_u64().and_then(|n| u8::try_from(n).ok()),
    };
    byte.ok_or_else(|| ExecError::BadInput {
        field,
        reason: format!("{value} is not a single byte"),
    })
}
