//! Table and column expressions.
//!
//! An [`Expr`] is either a quoted identifier or a raw template with arguments.
//! Both are immutable once built; rendering goes through a
//! [`Formatter`](crate::Formatter).
//!
//! Raw template placeholders:
//! - `?` takes the next sequential argument
//! - `?N` takes argument `N` (0-based) and leaves the sequence alone
//! - `\?` is a literal `?`

use crate::error::{StmtError, StmtResult};
use crate::ident::Ident;
use crate::value::Value;

/// A table or column expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Identifier, quoted by the formatter.
    Ident(Ident),
    /// Template with placeholders, rendered by substitution.
    Raw(RawExpr),
}

impl Expr {
    /// Identifier from caller-supplied text (split on `.`, not validated).
    pub fn ident(name: &str) -> Self {
        Self::Ident(Ident::unchecked(name))
    }

    /// Raw template with arguments.
    pub fn raw(template: &str, args: impl IntoIterator<Item = Value>) -> StmtResult<Self> {
        RawExpr::new(template, args).map(Self::Raw)
    }
}

impl From<Ident> for Expr {
    fn from(ident: Ident) -> Self {
        Self::Ident(ident)
    }
}

impl From<RawExpr> for Expr {
    fn from(raw: RawExpr) -> Self {
        Self::Raw(raw)
    }
}

/// A piece of a parsed template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawPart {
    /// Byte range of the template copied verbatim.
    Text { start: usize, end: usize },
    /// A single literal `?` (from `\?`).
    QuestionMark,
    /// Index into the argument list.
    Arg(usize),
}

/// A raw SQL template plus its arguments.
///
/// The template is parsed when the expression is built, so a malformed
/// template fails at configuration time.
#[derive(Debug, Clone, PartialEq)]
pub struct RawExpr {
    template: String,
    parts: Vec<RawPart>,
    args: Vec<Value>,
}

impl RawExpr {
    /// Parse `template` and bind `args` to its placeholders.
    ///
    /// Fails if a placeholder references a missing argument or if an argument
    /// is never referenced.
    pub fn new(template: &str, args: impl IntoIterator<Item = Value>) -> StmtResult<Self> {
        let args: Vec<Value> = args.into_iter().collect();
        let parts = parse_template(template, args.len())?;

        let mut used = vec![false; args.len()];
        for part in &parts {
            if let RawPart::Arg(i) = part {
                used[*i] = true;
            }
        }
        if let Some(unused) = used.iter().position(|u| !u) {
            return Err(StmtError::configuration(format!(
                "template {template:?} does not use argument {unused} ({} given)",
                args.len()
            )));
        }

        Ok(Self {
            template: template.to_string(),
            parts,
            args,
        })
    }

    /// Template text as written.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Bound arguments in order.
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    pub(crate) fn parts(&self) -> &[RawPart] {
        &self.parts
    }
}

fn parse_template(template: &str, arg_count: usize) -> StmtResult<Vec<RawPart>> {
    let bytes = template.as_bytes();
    let mut parts = Vec::new();
    let mut next_arg = 0usize;
    let mut text_start = 0usize;
    let mut i = 0usize;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' if bytes.get(i + 1) == Some(&b'?') => {
                flush(&mut parts, text_start, i);
                parts.push(RawPart::QuestionMark);
                i += 2;
                text_start = i;
            }
            b'?' => {
                flush(&mut parts, text_start, i);
                let digits_start = i + 1;
                let mut j = digits_start;
                while j < bytes.len() && bytes[j].is_ascii_digit() {
                    j += 1;
                }

                let index = if j > digits_start {
                    template[digits_start..j].parse::<usize>().map_err(|_| {
                        StmtError::configuration(format!(
                            "template {template:?}: placeholder index out of range"
                        ))
                    })?
                } else {
                    let index = next_arg;
                    next_arg += 1;
                    index
                };

                if index >= arg_count {
                    return Err(StmtError::configuration(format!(
                        "template {template:?} references argument {index} but only {arg_count} given"
                    )));
                }
                parts.push(RawPart::Arg(index));
                i = j;
                text_start = i;
            }
            _ => i += 1,
        }
    }
    flush(&mut parts, text_start, bytes.len());
    Ok(parts)
}

fn flush(parts: &mut Vec<RawPart>, start: usize, end: usize) {
    if end > start {
        parts.push(RawPart::Text { start, end });
    }
}
