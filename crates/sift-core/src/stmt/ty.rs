use super::Value;
use crate::{Error, Result};

use chrono::{DateTime, Utc};
use rust_decimal::{prelude::ToPrimitive, Decimal};
use uuid::Uuid;

/// The declared type of a field or expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// Boolean value
    Bool,

    /// Signed 8-bit integer
    I8,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// Unsigned 8-bit integer
    U8,

    /// Unsigned 16-bit integer
    U16,

    /// Unsigned 32-bit integer
    U32,

    /// Unsigned 64-bit integer
    U64,

    /// 64-bit floating point number
    F64,

    /// Fixed-precision decimal number
    Decimal,

    /// String type
    String,

    /// A universally unique identifier
    Uuid,

    /// A UTC timestamp
    DateTime,

    /// An arbitrary JSON document
    Json,

    /// A list of a single type
    List(Box<Type>),

    /// The null type can be cast to any type.
    Null,

    /// A type that could not be inferred (e.g., empty list)
    Unknown,
}

impl Type {
    pub fn list(ty: impl Into<Self>) -> Self {
        Self::List(Box::new(ty.into()))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::String)
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Integer types whose identity values are drawn at random rather than
    /// from the serial generator.
    pub fn is_small_integer(&self) -> bool {
        matches!(
            self,
            Self::I8 | Self::I16 | Self::I32 | Self::U8 | Self::U16 | Self::U32
        )
    }

    pub fn is_integer(&self) -> bool {
        self.is_small_integer() || matches!(self, Self::I64 | Self::U64)
    }

    pub fn is_numeric(&self) -> bool {
        self.is_integer() || matches!(self, Self::F64 | Self::Decimal)
    }

    /// Inclusive range of an integer type, as `i128`.
    pub fn integer_bounds(&self) -> Option<(i128, i128)> {
        Some(match self {
            Self::I8 => (i8::MIN.into(), i8::MAX.into()),
            Self::I16 => (i16::MIN.into(), i16::MAX.into()),
            Self::I32 => (i32::MIN.into(), i32::MAX.into()),
            Self::I64 => (i64::MIN.into(), i64::MAX.into()),
            Self::U8 => (0, u8::MAX.into()),
            Self::U16 => (0, u16::MAX.into()),
            Self::U32 => (0, u32::MAX.into()),
            Self::U64 => (0, u64::MAX.into()),
            _ => return None,
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::F64 => "f64",
            Self::Decimal => "decimal",
            Self::String => "string",
            Self::Uuid => "uuid",
            Self::DateTime => "datetime",
            Self::Json => "json",
            Self::List(_) => "list",
            Self::Null => "null",
            Self::Unknown => "unknown",
        }
    }

    /// Converts `value` to this type, widening or narrowing as needed.
    ///
    /// Null casts to every type. Narrowing conversions are range checked.
    pub fn cast(&self, value: Value) -> Result<Value> {
        if value.is_null() {
            return Ok(value);
        }

        if value.infer_ty() == *self {
            return Ok(value);
        }

        if let Some(int) = value.as_i128() {
            return self.cast_integer(int, value);
        }

        Ok(match (self, value) {
            (Self::Unknown, value) => value,
            (Self::List(item), Value::List(items)) => Value::List(
                items
                    .into_iter()
                    .map(|value| item.cast(value))
                    .collect::<Result<_>>()?,
            ),
            (Self::F64, Value::Decimal(v)) => match v.to_f64() {
                Some(v) => Value::F64(v),
                None => return Err(Error::type_conversion(Value::Decimal(v), "f64")),
            },
            (Self::Decimal, Value::F64(v)) => match Decimal::from_f64_retain(v) {
                Some(v) => Value::Decimal(v),
                None => return Err(Error::type_conversion(Value::F64(v), "decimal")),
            },
            (ty, Value::Decimal(v)) if ty.is_integer() => {
                if !v.fract().is_zero() {
                    return Err(Error::type_conversion(Value::Decimal(v), ty.name()));
                }
                match v.to_i128() {
                    Some(int) => ty.cast_integer(int, Value::Decimal(v))?,
                    None => return Err(Error::type_conversion(Value::Decimal(v), ty.name())),
                }
            }
            (Self::String, Value::Decimal(v)) => Value::String(v.to_string()),
            (Self::String, Value::F64(v)) => Value::String(v.to_string()),
            (Self::String, Value::Uuid(v)) => Value::String(v.to_string()),
            (Self::String, Value::DateTime(v)) => Value::String(v.to_rfc3339()),
            (Self::String, Value::Bool(v)) => Value::String(v.to_string()),
            (ty, Value::String(v)) => ty.parse(v)?,
            (Self::Json, value) => match serde_json::to_value(&value) {
                Ok(json) => Value::Json(json),
                Err(_) => return Err(Error::type_conversion(value, "json")),
            },
            (ty, value) => return Err(Error::type_conversion(value, ty.name())),
        })
    }

    fn cast_integer(&self, int: i128, original: Value) -> Result<Value> {
        if let Some((min, max)) = self.integer_bounds() {
            if int < min || int > max {
                return Err(Error::type_conversion(original, self.name()));
            }
        }

        // Bounds were checked above, the `as` conversions cannot truncate.
        Ok(match self {
            Self::I8 => Value::I8(int as i8),
            Self::I16 => Value::I16(int as i16),
            Self::I32 => Value::I32(int as i32),
            Self::I64 => Value::I64(int as i64),
            Self::U8 => Value::U8(int as u8),
            Self::U16 => Value::U16(int as u16),
            Self::U32 => Value::U32(int as u32),
            Self::U64 => Value::U64(int as u64),
            Self::F64 => Value::F64(int as f64),
            Self::Decimal => match Decimal::try_from_i128_with_scale(int, 0) {
                Ok(v) => Value::Decimal(v),
                Err(_) => return Err(Error::type_conversion(original, "decimal")),
            },
            Self::String => Value::String(int.to_string()),
            Self::Unknown => original,
            _ => return Err(Error::type_conversion(original, self.name())),
        })
    }

    fn parse(&self, src: String) -> Result<Value> {
        let parsed = match self {
            ty if ty.is_integer() => match src.trim().parse::<i128>() {
                Ok(int) => return ty.cast_integer(int, Value::String(src)),
                Err(_) => None,
            },
            Self::Bool => src.trim().parse::<bool>().ok().map(Value::Bool),
            Self::F64 => src.trim().parse::<f64>().ok().map(Value::F64),
            Self::Decimal => src.trim().parse::<Decimal>().ok().map(Value::Decimal),
            Self::Uuid => Uuid::parse_str(src.trim()).ok().map(Value::Uuid),
            Self::DateTime => DateTime::parse_from_rfc3339(src.trim())
                .ok()
                .map(|v| Value::DateTime(v.with_timezone(&Utc))),
            Self::Json => serde_json::from_str(&src).ok().map(Value::Json),
            _ => None,
        };

        parsed.ok_or_else(|| Error::type_conversion(Value::String(src), self.name()))
    }
}
