use super::{Type, Value};
use crate::{Error, Result};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// A Rust type that can be stored in a model field.
pub trait Primitive: Sized {
    const NULLABLE: bool = false;

    fn ty() -> Type;

    fn to_value(&self) -> Value;

    /// Loads the value, which has already been cast to [`Primitive::ty`].
    fn load(value: Value) -> Result<Self>;
}

macro_rules! impl_primitive {
    ( $( $ty:ty => $variant:ident, )* ) => {
        $(
            impl Primitive for $ty {
                fn ty() -> Type {
                    Type::$variant
                }

                fn to_value(&self) -> Value {
                    Value::$variant(self.clone())
                }

                fn load(value: Value) -> Result<Self> {
                    match Type::$variant.cast(value)? {
                        Value::$variant(v) => Ok(v),
                        value => Err(Error::type_conversion(value, Type::$variant.name())),
                    }
                }
            }
        )*
    };
}

impl_primitive! {
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

impl<T: Primitive> Primitive for Option<T> {
    const NULLABLE: bool = true;

    fn ty() -> Type {
        T::ty()
    }

    fn to_value(&self) -> Value {
        match self {
            Some(value) => value.to_value(),
            None => Value::Null,
        }
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => T::load(value).map(Some),
        }
    }
}

impl<T: Primitive> Primitive for Vec<T> {
    fn ty() -> Type {
        Type::list(T::ty())
    }

    fn to_value(&self) -> Value {
        Value::List(self.iter().map(Primitive::to_value).collect())
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::List(items) => items.into_iter().map(T::load).collect(),
            value => Err(Error::type_conversion(value, "list")),
        }
    }
}
