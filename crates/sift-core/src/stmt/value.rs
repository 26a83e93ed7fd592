use super::Type;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::{cmp::Ordering, fmt};
use uuid::Uuid;

/// A dynamically typed value read from a model or captured by a predicate.
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 8-bit integer
    I8(i8),

    /// Signed 16-bit integer
    I16(i16),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// Unsigned 8-bit integer
    U8(u8),

    /// Unsigned 16-bit integer
    U16(u16),

    /// Unsigned 32-bit integer
    U32(u32),

    /// Unsigned 64-bit integer
    U64(u64),

    /// 64-bit floating point number
    F64(f64),

    /// Fixed-precision decimal number
    Decimal(Decimal),

    /// String value
    String(String),

    /// A universally unique identifier
    Uuid(Uuid),

    /// A UTC timestamp
    DateTime(DateTime<Utc>),

    /// An arbitrary JSON document
    Json(serde_json::Value),

    /// A list of values
    List(Vec<Value>),

    /// Null value
    #[default]
    Null,
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub const fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    /// Returns `true` for integer, float and decimal values.
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::I8(_)
                | Self::I16(_)
                | Self::I32(_)
                | Self::I64(_)
                | Self::U8(_)
                | Self::U16(_)
                | Self::U32(_)
                | Self::U64(_)
                | Self::F64(_)
                | Self::Decimal(_)
        )
    }

    /// Returns `true` unless the value is a list or a JSON document.
    pub const fn is_scalar(&self) -> bool {
        !matches!(self, Self::List(_) | Self::Json(_))
    }

    pub fn list_from_vec(items: Vec<Self>) -> Self {
        Self::List(items)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the value as an `i128` if it is an integer of any width.
    pub fn as_i128(&self) -> Option<i128> {
        Some(match *self {
            Self::I8(v) => v.into(),
            Self::I16(v) => v.into(),
            Self::I32(v) => v.into(),
            Self::I64(v) => v.into(),
            Self::U8(v) => v.into(),
            Self::U16(v) => v.into(),
            Self::U32(v) => v.into(),
            Self::U64(v) => v.into(),
            _ => return None,
        })
    }

    #[track_caller]
    pub fn expect_string(&self) -> &str {
        match self {
            Self::String(v) => v,
            _ => panic!("expected Value::String; actual={self:#?}"),
        }
    }

    /// Returns the type of the value. Lists infer their item type from the
    /// first item.
    pub fn infer_ty(&self) -> Type {
        match self {
            Self::Bool(_) => Type::Bool,
            Self::I8(_) => Type::I8,
            Self::I16(_) => Type::I16,
            Self::I32(_) => Type::I32,
            Self::I64(_) => Type::I64,
            Self::U8(_) => Type::U8,
            Self::U16(_) => Type::U16,
            Self::U32(_) => Type::U32,
            Self::U64(_) => Type::U64,
            Self::F64(_) => Type::F64,
            Self::Decimal(_) => Type::Decimal,
            Self::String(_) => Type::String,
            Self::Uuid(_) => Type::Uuid,
            Self::DateTime(_) => Type::DateTime,
            Self::Json(_) => Type::Json,
            Self::List(items) => Type::list(
                items
                    .first()
                    .map(Value::infer_ty)
                    .unwrap_or(Type::Unknown),
            ),
            Self::Null => Type::Null,
        }
    }

    /// Compares two values of compatible types. Integers of different widths,
    /// floats and decimals compare numerically.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        use rust_decimal::prelude::ToPrimitive;

        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.partial_cmp(b),
            (Self::String(a), Self::String(b)) => a.partial_cmp(b),
            (Self::Uuid(a), Self::Uuid(b)) => a.partial_cmp(b),
            (Self::DateTime(a), Self::DateTime(b)) => a.partial_cmp(b),
            (Self::Decimal(a), Self::Decimal(b)) => a.partial_cmp(b),
            (Self::F64(a), Self::F64(b)) => a.partial_cmp(b),
            (Self::Decimal(a), Self::F64(b)) => a.to_f64()?.partial_cmp(b),
            (Self::F64(a), Self::Decimal(b)) => a.partial_cmp(&b.to_f64()?),
            (Self::Decimal(a), b) => {
                a.partial_cmp(&Decimal::try_from_i128_with_scale(b.as_i128()?, 0).ok()?)
            }
            (a, Self::Decimal(b)) => Decimal::try_from_i128_with_scale(a.as_i128()?, 0)
                .ok()?
                .partial_cmp(b),
            (Self::F64(a), b) => a.partial_cmp(&(b.as_i128()? as f64)),
            (a, Self::F64(b)) => (a.as_i128()? as f64).partial_cmp(b),
            (a, b) => a.as_i128()?.partial_cmp(&b.as_i128()?),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => fmt::Display::fmt(v, f),
            Self::I8(v) => fmt::Display::fmt(v, f),
            Self::I16(v) => fmt::Display::fmt(v, f),
            Self::I32(v) => fmt::Display::fmt(v, f),
            Self::I64(v) => fmt::Display::fmt(v, f),
            Self::U8(v) => fmt::Display::fmt(v, f),
            Self::U16(v) => fmt::Display::fmt(v, f),
            Self::U32(v) => fmt::Display::fmt(v, f),
            Self::U64(v) => fmt::Display::fmt(v, f),
            Self::F64(v) => fmt::Display::fmt(v, f),
            Self::Decimal(v) => fmt::Display::fmt(v, f),
            Self::String(v) => f.write_str(v),
            Self::Uuid(v) => fmt::Display::fmt(v, f),
            Self::DateTime(v) => f.write_str(&v.to_rfc3339()),
            Self::Json(v) => fmt::Display::fmt(v, f),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Display::fmt(item, f)?;
                }
                f.write_str("]")
            }
            Self::Null => f.write_str("null"),
        }
    }
}

// === Conversions ===

macro_rules! impl_from {
    ( $( $ty:ty => $variant:ident, )* ) => {
        $(
            impl From<$ty> for Value {
                fn from(src: $ty) -> Self {
                    Self::$variant(src)
                }
            }
        )*
    };
}

impl_from! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f64 => F64,
    Decimal => Decimal,
    String => String,
    Uuid => Uuid,
    DateTime<Utc> => DateTime,
    serde_json::Value => Json,
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(src: Option<T>) -> Self {
        match src {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(src: Vec<T>) -> Self {
        Self::List(src.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_compare_across_widths() {
        assert_eq!(
            Value::I32(100).compare(&Value::I64(100)),
            Some(Ordering::Equal)
        );
        assert_eq!(
            Value::Decimal(Decimal::new(1005, 1)).compare(&Value::I32(100)),
            Some(Ordering::Greater)
        );
        assert_eq!(Value::String("a".into()).compare(&Value::I32(1)), None);
    }

    #[test]
    fn display_list() {
        let value = Value::from(vec![1, 2, 3]);
        assert_eq!(value.to_string(), "[1, 2, 3]");
    }

    #[test]
    fn serializes_untagged() {
        let value = Value::from(vec![Value::from("a"), Value::Null]);
        assert_eq!(serde_json::to_string(&value).unwrap(), r#"["a",null]"#);
    }
}
