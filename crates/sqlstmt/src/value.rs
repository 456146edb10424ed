//! Argument values substituted into raw templates.

use crate::ident::Ident;

/// A value bound to a `?` placeholder of a raw template.
///
/// Values are rendered inline by the [`Formatter`](crate::Formatter) as
/// escaped SQL literals. DDL statements cannot take server-side parameters,
/// so there is no separate parameter list.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `NULL`
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    /// String literal, escaped by the formatter.
    Text(String),
    /// Binary literal.
    Bytes(Vec<u8>),
    /// JSON document, rendered as a string literal.
    Json(serde_json::Value),
    /// Identifier, quoted by the formatter.
    Ident(Ident),
    /// Trusted SQL emitted verbatim.
    Safe(String),
}

impl Value {
    /// An identifier argument built from caller-supplied text.
    pub fn ident(name: &str) -> Self {
        Self::Ident(Ident::unchecked(name))
    }

    /// A trusted SQL fragment argument.
    pub fn safe(sql: impl Into<String>) -> Self {
        Self::Safe(sql.into())
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<Ident> for Value {
    fn from(v: Ident) -> Self {
        Value::Ident(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::Json(v)
    }
}

impl From<uuid::Uuid> for Value {
    fn from(v: uuid::Uuid) -> Self {
        Value::Text(v.hyphenated().to_string())
    }
}

impl From<chrono::NaiveDate> for Value {
    fn from(v: chrono::NaiveDate) -> Self {
        Value::Text(v.format("%Y-%m-%d").to_string())
    }
}

impl From<chrono::NaiveDateTime> for Value {
    fn from(v: chrono::NaiveDateTime) -> Self {
        Value::Text(v.format("%Y-%m-%d %H:%M:%S%.f").to_string())
    }
}

impl From<chrono::DateTime<chrono::Utc>> for Value {
    fn from(v: chrono::DateTime<chrono::Utc>) -> Self {
        Value::Text(v.to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// Build an argument array for raw templates.
///
/// ```
/// use sqlstmt::{args, Value};
///
/// let a = args![1, "x", None::<i32>];
/// assert_eq!(a[2], Value::Null);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        {
            let empty: [$crate::Value; 0] = [];
            empty
        }
    };
    ($($arg:expr),+ $(,)?) => {
        [$($crate::Value::from($arg)),+]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_maps_to_null() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(5_i32)), Value::Int(5));
    }

    #[test]
    fn chrono_values_render_as_text() {
        let d = chrono::NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(Value::from(d), Value::Text("2024-02-29".to_string()));

        let ts = d.and_hms_opt(13, 5, 0).unwrap();
        assert_eq!(Value::from(ts), Value::Text("2024-02-29 13:05:00".to_string()));
    }

    #[test]
    fn uuid_is_hyphenated_text() {
        let id = uuid::Uuid::nil();
        assert_eq!(
            Value::from(id),
            Value::Text("00000000-0000-0000-0000-000000000000".to_string())
        );
    }

    #[test]
    fn args_macro_converts_each_item() {
        let a = args![1_i64, true, "x"];
        assert_eq!(a, [Value::Int(1), Value::Bool(true), Value::Text("x".into())]);
        assert!(args![].is_empty());
    }
}
