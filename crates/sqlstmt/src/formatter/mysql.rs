use super::{Formatter, append_hex, append_int, append_quoted};
use crate::error::{StmtError, StmtResult};
use crate::value::Value;

/// MySQL formatter.
///
/// Identifiers are quoted with backticks. String literals escape `\` as well
/// as `'`, since MySQL treats backslash as an escape character by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlFormatter;

impl MySqlFormatter {
    /// Create a new MySQL formatter.
    pub fn new() -> Self {
        Self
    }

    fn append_text(buf: &mut Vec<u8>, s: &str) {
        buf.reserve(s.len() + 2);
        buf.push(b'\'');
        for &b in s.as_bytes() {
            match b {
                b'\'' => buf.extend_from_slice(b"''"),
                b'\\' => buf.extend_from_slice(b"\\\\"),
                0 => buf.extend_from_slice(b"\\0"),
                _ => buf.push(b),
            }
        }
        buf.push(b'\'');
    }
}

impl Formatter for MySqlFormatter {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn append_ident(&self, buf: &mut Vec<u8>, segment: &str) {
        append_quoted(buf, segment, b'`');
    }

    fn append_value(&self, buf: &mut Vec<u8>, value: &Value) -> StmtResult<()> {
        match value {
            Value::Null => buf.extend_from_slice(b"NULL"),
            Value::Bool(true) => buf.extend_from_slice(b"TRUE"),
            Value::Bool(false) => buf.extend_from_slice(b"FALSE"),
            Value::Int(n) => append_int(buf, *n),
            Value::Float(f) if !f.is_finite() => {
                return Err(StmtError::render(format!(
                    "MySQL has no literal for float value {f}"
                )));
            }
            Value::Float(f) => buf.extend_from_slice(f.to_string().as_bytes()),
            Value::Text(s) => Self::append_text(buf, s),
            Value::Bytes(bytes) => {
                buf.extend_from_slice(b"X'");
                append_hex(buf, bytes);
                buf.push(b'\'');
            }
            Value::Json(json) => Self::append_text(buf, &json.to_string()),
            Value::Ident(ident) => self.append_ident_path(buf, ident)?,
            Value::Safe(sql) => buf.extend_from_slice(sql.as_bytes()),
        }
        Ok(())
    }
}
