//! SQL identifier handling.
//!
//! [`Ident`] is an ordered list of name segments (`schema.table.column`). The
//! formatter quotes every segment with the dialect's quote character when the
//! identifier is rendered, so segments are stored unquoted.
//!
//! - [`Ident::parse`] validates its input: bare segments must match
//!   `[A-Za-z_][A-Za-z0-9_$]*`, double-quoted segments (`""` escapes `"`)
//!   accept anything but NUL.
//! - [`Ident::unchecked`] trusts the caller and only splits on `.`.
//!
//! # Example
//! ```
//! use sqlstmt::Ident;
//!
//! let t = Ident::parse(r#"public."UserTable""#)?;
//! assert_eq!(t.segments(), ["public", "UserTable"]);
//! # Ok::<(), sqlstmt::StmtError>(())
//! ```

use crate::error::{StmtError, StmtResult};

/// A SQL identifier (column, table, or schema name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    segments: Vec<String>,
}

impl Ident {
    /// Create an identifier from caller-supplied text without validation.
    ///
    /// The name is split on `.` so `"public.users"` renders as `"public"."users"`.
    pub fn unchecked(name: &str) -> Self {
        Self {
            segments: name.split('.').map(str::to_string).collect(),
        }
    }

    /// Parse and validate an identifier.
    ///
    /// Accepts `column`, `schema.table`, `"CamelCase"` and mixed forms such as
    /// `public."UserTable".id`. Errors are [`StmtError::Configuration`].
    pub fn parse(s: &str) -> StmtResult<Self> {
        if s.is_empty() {
            return Err(invalid(s, "identifier is empty"));
        }

        let bytes = s.as_bytes();
        let mut segments = Vec::new();
        let mut pos = 0;
        loop {
            let (segment, end) = if bytes[pos] == b'"' {
                parse_quoted(s, pos)?
            } else {
                parse_bare(s, pos)?
            };
            segments.push(segment);

            match bytes.get(end) {
                None => break,
                Some(b'.') if end + 1 < bytes.len() => pos = end + 1,
                Some(b'.') => return Err(invalid(s, "trailing '.'")),
                Some(_) => return Err(invalid(s, "expected '.' after quoted segment")),
            }
        }

        Ok(Self { segments })
    }

    /// Name segments in order, without quotes.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

fn invalid(s: &str, reason: &str) -> StmtError {
    StmtError::configuration(format!("invalid identifier {s:?}: {reason}"))
}

/// Bare segment starting at `start`; returns it and the index after it.
fn parse_bare(s: &str, start: usize) -> StmtResult<(String, usize)> {
    let rest = &s[start..];
    let end = rest.find('.').unwrap_or(rest.len());
    let segment = &rest[..end];

    let mut chars = segment.chars();
    match chars.next() {
        None => return Err(invalid(s, "empty segment")),
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        Some(c) => return Err(invalid(s, &format!("segment cannot start with {c:?}"))),
    }
    if let Some(c) = chars.find(|&c| !(c == '_' || c == '$' || c.is_ascii_alphanumeric())) {
        return Err(invalid(s, &format!("unexpected character {c:?}")));
    }

    Ok((segment.to_string(), start + end))
}

/// Double-quoted segment whose opening quote is at `start`.
fn parse_quoted(s: &str, start: usize) -> StmtResult<(String, usize)> {
    let mut name = String::new();
    let mut chars = s[start + 1..].char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        match c {
            '\0' => return Err(invalid(s, "NUL character")),
            '"' if chars.peek().is_some_and(|&(_, next)| next == '"') => {
                chars.next();
                name.push('"');
            }
            '"' => {
                if name.is_empty() {
                    return Err(invalid(s, "empty quoted segment"));
                }
                return Ok((name, start + 1 + i + 1));
            }
            c => name.push(c),
        }
    }
    Err(invalid(s, "unclosed quote"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bare_and_dotted() {
        assert_eq!(Ident::parse("users").unwrap().segments(), ["users"]);
        assert_eq!(
            Ident::parse("public.users").unwrap().segments(),
            ["public", "users"]
        );
        assert_eq!(Ident::parse("my_var$1").unwrap().segments(), ["my_var$1"]);
    }

    #[test]
    fn parse_quoted_segments() {
        let ident = Ident::parse(r#"public."User.Table".id"#).unwrap();
        assert_eq!(ident.segments(), ["public", "User.Table", "id"]);

        let ident = Ident::parse(r#""has""quote""#).unwrap();
        assert_eq!(ident.segments(), [r#"has"quote"#]);
    }

    #[test]
    fn parse_rejects_bad_input() {
        for bad in [
            "",
            "1table",
            "my table",
            "schema..table",
            "schema.",
            ".table",
            r#""unclosed"#,
            r#""""#,
            r#""a"b"#,
            "a\0b",
        ] {
            let err = Ident::parse(bad).unwrap_err();
            assert!(err.is_configuration(), "{bad:?}: {err}");
        }
    }

    #[test]
    fn parse_error_names_the_input() {
        let err = Ident::parse("users; drop table users").unwrap_err();
        assert!(err.to_string().contains("users; drop table users"));
    }

    #[test]
    fn unchecked_splits_without_validation() {
        let ident = Ident::unchecked("my schema.my table");
        assert_eq!(ident.segments(), ["my schema", "my table"]);
        assert_eq!(Ident::unchecked("").segments(), [""]);
    }
}
