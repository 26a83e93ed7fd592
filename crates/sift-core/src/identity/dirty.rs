use crate::{
    query::{FieldRef, FieldsAssignment, Snapshot},
    schema::Entity,
    stmt::Value,
    Result,
};

/// The current value of every field of `model`, in field order.
pub fn snapshot<M: Entity>(model: &M) -> Result<Snapshot> {
    M::metadata()?.values(model)
}

/// The fields of `model` that differ from `old_values`.
///
/// A field missing from the snapshot counts as changed, so `None` yields
/// every field. The snapshot is kept on the result as given.
pub fn fields_assignment<M: Entity>(
    model: &M,
    old_values: Option<Snapshot>,
) -> Result<FieldsAssignment> {
    let metadata = M::metadata()?;
    let mut assignment = FieldsAssignment::default();

    for field in metadata.fields() {
        let current = field.accessor.get(model)?;
        let changed = match old_values.as_ref().and_then(|old| old.get(field.name())) {
            Some(old) => !same(old, &current),
            None => true,
        };

        if changed {
            assignment
                .fields
                .insert(field.name().to_string(), FieldRef::constant(current));
        }
    }

    tracing::trace!(
        model = metadata.name,
        changed = assignment.len(),
        "computed fields assignment"
    );

    assignment.old_values = old_values;
    Ok(assignment)
}

/// Scalars compare by equality. Lists and documents fall back to their
/// serialized form.
fn same(old: &Value, new: &Value) -> bool {
    if old == new {
        return true;
    }

    if old.is_scalar() && new.is_scalar() {
        return false;
    }

    match (serde_json::to_value(old), serde_json::to_value(new)) {
        (Ok(old), Ok(new)) => old == new,
        _ => false,
    }
}
