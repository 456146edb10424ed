//! Dialect-aware rendering of expressions.
//!
//! A [`Formatter`] appends expressions to a byte buffer: identifiers are quoted
//! with the dialect's quote character, raw templates have their placeholders
//! replaced by escaped literals. Statement builders never quote anything
//! themselves.
//!
//! ```
//! use sqlstmt::{args, Expr, Formatter, PgFormatter};
//!
//! let expr = Expr::raw("? || ?", args![sqlstmt::Value::ident("users.name"), "it's"])?;
//! let mut buf = Vec::new();
//! PgFormatter.append(&mut buf, &expr)?;
//! assert_eq!(buf, br#""users"."name" || 'it''s'"#);
//! # Ok::<(), sqlstmt::StmtError>(())
//! ```

mod mysql;
mod postgres;


pub use mysql::MySqlFormatter;
pub use postgres::PgFormatter;

use crate::error::{StmtError, StmtResult};
use crate::expr::{Expr, RawExpr, RawPart};
use crate::ident::Ident;
use crate::value::Value;

/// Optional dialect capabilities that change rendered syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Feature {
    /// `DROP TABLE ... CASCADE | RESTRICT`, `TRUNCATE ... CASCADE`
    TableCascade,
    /// `TRUNCATE ... RESTART IDENTITY | CONTINUE IDENTITY`
    TableIdentity,
}

/// Renders expressions for one SQL dialect.
///
/// Implementations must be deterministic and must not touch anything but the
/// buffer they are given.
pub trait Formatter: Send + Sync {
    /// Dialect name, used in logs.
    fn name(&self) -> &'static str;

    /// Whether the dialect supports `feature`.
    fn supports(&self, feature: Feature) -> bool {
        let _ = feature;
        false
    }

    /// Append one identifier segment, quoted.
    fn append_ident(&self, buf: &mut Vec<u8>, segment: &str);

    /// Append an argument value as a SQL literal.
    fn append_value(&self, buf: &mut Vec<u8>, value: &Value) -> StmtResult<()>;

    /// Append an expression.
    fn append(&self, buf: &mut Vec<u8>, expr: &Expr) -> StmtResult<()> {
        match expr {
            Expr::Ident(ident) => self.append_ident_path(buf, ident),
            Expr::Raw(raw) => self.append_raw(buf, raw),
        }
    }

    /// Append a dotted identifier. A `*` segment is emitted unquoted; empty
    /// segments and NUL characters are render errors.
    fn append_ident_path(&self, buf: &mut Vec<u8>, ident: &Ident) -> StmtResult<()> {
        for (i, segment) in ident.segments().iter().enumerate() {
            if i > 0 {
                buf.push(b'.');
            }
            if segment.is_empty() {
                return Err(StmtError::render(format!(
                    "empty identifier segment in {:?}",
                    ident.segments().join(".")
                )));
            }
            if segment.contains('\0') {
                return Err(StmtError::render(format!(
                    "identifier segment {segment:?} contains NUL"
                )));
            }
            if segment == "*" {
                buf.push(b'*');
            } else {
                self.append_ident(buf, segment);
            }
        }
        Ok(())
    }

    /// Append a raw template with its arguments substituted.
    fn append_raw(&self, buf: &mut Vec<u8>, raw: &RawExpr) -> StmtResult<()> {
        let template = raw.template().as_bytes();
        for part in raw.parts() {
            match *part {
                RawPart::Text { start, end } => buf.extend_from_slice(&template[start..end]),
                RawPart::QuestionMark => buf.push(b'?'),
                RawPart::Arg(index) => match raw.args().get(index) {
                    Some(value) => self.append_value(buf, value)?,
                    None => {
                        return Err(StmtError::render(format!(
                            "template {:?} has no argument {index}",
                            raw.template()
                        )));
                    }
                },
            }
        }
        Ok(())
    }
}

/// Append `s` wrapped in `quote`, doubling any embedded quote character.
pub(crate) fn append_quoted(buf: &mut Vec<u8>, s: &str, quote: u8) {
    buf.reserve(s.len() + 2);
    buf.push(quote);
    for &b in s.as_bytes() {
        if b == quote {
            buf.push(quote);
        }
        buf.push(b);
    }
    buf.push(quote);
}

/// Append a signed integer in decimal without going through `fmt`.
pub(crate) fn append_int(buf: &mut Vec<u8>, n: i64) {
    if n < 0 {
        buf.push(b'-');
    }
    let mut n = n.unsigned_abs();
    if n < 10 {
        buf.push(b'0' + n as u8);
        return;
    }
    // Stack buffer for up to 20 digits (u64::MAX).
    let mut digits = [0u8; 20];
    let mut pos = digits.len();
    while n > 0 {
        pos -= 1;
        digits[pos] = b'0' + (n % 10) as u8;
        n /= 10;
    }
    buf.extend_from_slice(&digits[pos..]);
}

/// Append bytes as lowercase hex digits.
pub(crate) fn append_hex(buf: &mut Vec<u8>, bytes: &[u8]) {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    buf.reserve(bytes.len() * 2);
    for &b in bytes {
        buf.push(HEX[usize::from(b >> 4)]);
        buf.push(HEX[usize::from(b & 0x0f)]);
    }
}
