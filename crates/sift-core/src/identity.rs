//! Identity synthesis, presence tests, identity keys and dirty tracking.
//!
//! Every operation goes through the model's compiled accessors, so it
//! works on any [`Entity`].

mod config;
pub use config::IdentityConfig;

mod dirty;
pub use dirty::{fields_assignment, snapshot};

mod generator;
pub use generator::{install, IdentityGenerator};

mod serial;
pub use serial::SerialGenerator;

use crate::{
    schema::{Entity, Field},
    stmt::Value,
    Error, Result,
};

use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use uuid::Uuid;

/// Fills every unset primary-key field of `model` with a synthesized value.
///
/// Values are written through the setters, so a memoized identity value
/// is dropped.
pub fn init_identity_value<M: Entity>(model: &mut M) -> Result<()> {
    let metadata = M::metadata()?;
    let generator = IdentityGenerator::global();

    // Reject the model before writing any key
    for field in metadata.primary_keys() {
        if !IdentityGenerator::supports(&field.ty) {
            return Err(unsupported_key(metadata.name, field));
        }
    }

    for field in metadata.primary_keys() {
        if !is_unset(&field.accessor.get(model)?) {
            continue;
        }

        let Some(value) = generator.value_for(&field.ty) else {
            return Err(unsupported_key(metadata.name, field));
        };

        tracing::trace!(
            model = metadata.name,
            field = field.name(),
            value = %value,
            "initialized identity value"
        );
        metadata.set_value(model, field.name(), value)?;
    }

    Ok(())
}

/// Returns `true` if `model` has no primary key or any primary-key field is
/// unset.
pub fn identity_value_is_null<M: Entity>(model: &M) -> Result<bool> {
    let metadata = M::metadata()?;
    let primary_keys = metadata.primary_keys();

    if primary_keys.is_empty() {
        return Ok(true);
    }

    for field in primary_keys {
        if is_unset(&field.accessor.get(model)?) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// The identity key of `model`: its primary-key values as strings, sorted
/// and joined with `_`.
///
/// Memoized in the model's [`EntityState`](crate::schema::EntityState)
/// until a primary key is written through
/// [`Model::set_value`](crate::schema::Model::set_value). A model without
/// primary keys gets a fresh random key on every call.
pub fn identity_value<M: Entity>(model: &M) -> Result<String> {
    let metadata = M::metadata()?;
    let primary_keys = metadata.primary_keys();

    if primary_keys.is_empty() {
        return Ok(Uuid::new_v4().simple().to_string());
    }

    let compute = || -> Result<String> {
        let mut parts = primary_keys
            .iter()
            .map(|field| Ok(field.accessor.get(model)?.to_string()))
            .collect::<Result<Vec<_>>>()?;
        parts.sort();
        Ok(parts.join("_"))
    };

    match model.state() {
        Some(state) => state.identity_or_init(compute).map(str::to_string),
        None => compute(),
    }
}

fn unsupported_key(model: &str, field: &Field) -> Error {
    Error::configuration(
        model,
        format!(
            "cannot synthesize a `{}` value for primary key `{}`",
            field.ty.name(),
            field.name()
        ),
    )
}

/// Type-directed presence test for a key value.
fn is_unset(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::DateTime(v) => *v <= DateTime::<Utc>::MIN_UTC,
        Value::Uuid(v) => v.is_nil(),
        Value::List(items) => items.is_empty(),
        Value::Json(json) => json.is_null(),
        value if value.is_numeric() => value.compare(&Value::I64(1)) == Some(Ordering::Less),
        _ => false,
    }
}
