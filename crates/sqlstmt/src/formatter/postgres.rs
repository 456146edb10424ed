use super::{Feature, Formatter, append_hex, append_int, append_quoted};
use crate::error::{StmtError, StmtResult};
use crate::value::Value;

/// PostgreSQL formatter.
///
/// - identifiers: `"name"`, embedded `"` doubled
/// - strings: `'text'`, embedded `'` doubled, NUL rejected
/// - bytes: `'\x0a1b'`
/// - non-finite floats: `'NaN'`, `'Infinity'`, `'-Infinity'`
#[derive(Debug, Clone, Copy, Default)]
pub struct PgFormatter;

impl PgFormatter {
    /// Create a new PostgreSQL formatter.
    pub fn new() -> Self {
        Self
    }

    fn append_text(buf: &mut Vec<u8>, s: &str) -> StmtResult<()> {
        if s.contains('\0') {
            return Err(StmtError::render(
                "PostgreSQL string literals cannot contain NUL",
            ));
        }
        append_quoted(buf, s, b'\'');
        Ok(())
    }
}

impl Formatter for PgFormatter {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn supports(&self, feature: Feature) -> bool {
        matches!(feature, Feature::TableCascade | Feature::TableIdentity)
    }

    fn append_ident(&self, buf: &mut Vec<u8>, segment: &str) {
        append_quoted(buf, segment, b'"');
    }

    fn append_value(&self, buf: &mut Vec<u8>, value: &Value) -> StmtResult<()> {
        match value {
            Value::Null => buf.extend_from_slice(b"NULL"),
            Value::Bool(true) => buf.extend_from_slice(b"TRUE"),
            Value::Bool(false) => buf.extend_from_slice(b"FALSE"),
            Value::Int(n) => append_int(buf, *n),
            Value::Float(f) if f.is_nan() => buf.extend_from_slice(b"'NaN'"),
            Value::Float(f) if f.is_infinite() => {
                if f.is_sign_positive() {
                    buf.extend_from_slice(b"'Infinity'");
                } else {
                    buf.extend_from_slice(b"'-Infinity'");
                }
            }
            Value::Float(f) => buf.extend_from_slice(f.to_string().as_bytes()),
            Value::Text(s) => Self::append_text(buf, s)?,
            Value::Bytes(bytes) => {
                buf.extend_from_slice(b"'\\x");
                append_hex(buf, bytes);
                buf.push(b'\'');
            }
            Value::Json(json) => Self::append_text(buf, &json.to_string())?,
            Value::Ident(ident) => self.append_ident_path(buf, ident)?,
            Value::Safe(sql) => buf.extend_from_slice(sql.as_bytes()),
        }
        Ok(())
    }
}
