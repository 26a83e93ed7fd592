use super::{CacheRole, Entity, Field, ModelRef, Relation, Role};
use crate::{query::Snapshot, stmt::Value, Error, Result};

use indexmap::IndexMap;
use std::{any::TypeId, collections::HashMap};

/// Field metadata of one model type. Built once by the
/// [`Registry`](super::Registry) and shared behind an `Arc`.
#[derive(Debug)]
pub struct Model {
    pub model_ref: ModelRef,

    pub name: &'static str,

    /// Primary-key fields, then cache-key fields, then the rest, each group
    /// in declaration order.
    fields: Vec<Field>,

    by_name: HashMap<String, usize>,

    /// Single role bit to the fields carrying it, in field order.
    by_role: HashMap<Role, Vec<usize>>,

    queryable: Vec<usize>,

    editable: Vec<usize>,

    updatable: Vec<usize>,

    /// Related model to local field to relation.
    relations: IndexMap<TypeId, IndexMap<String, Relation>>,
}

impl Model {
    pub(crate) fn new(model_ref: ModelRef, name: &'static str, mut fields: Vec<Field>) -> Self {
        // Stable, so each group keeps declaration order
        fields.sort_by_key(|field| {
            if field.is_primary_key() {
                0
            } else if field.cache_roles.contains(CacheRole::CACHE_KEY) {
                1
            } else {
                2
            }
        });

        let mut by_name = HashMap::new();
        let mut by_role: HashMap<Role, Vec<usize>> = HashMap::new();
        let mut queryable = vec![];
        let mut editable = vec![];
        let mut updatable = vec![];
        let mut relations: IndexMap<TypeId, IndexMap<String, Relation>> = IndexMap::new();

        for (i, field) in fields.iter().enumerate() {
            by_name.insert(field.name().to_string(), i);

            for role in field.roles.iter() {
                by_role.entry(role).or_default().push(i);
            }

            if field.is_queryable() {
                queryable.push(i);
            }

            if field.is_editable() {
                editable.push(i);
            }

            if field.is_updatable() {
                updatable.push(i);
            }

            if let Some((target, references)) = &field.relation {
                relations.entry(target.type_id()).or_default().insert(
                    field.name().to_string(),
                    Relation {
                        target: *target,
                        local: field.name().to_string(),
                        references: references.clone(),
                    },
                );
            }
        }

        Self {
            model_ref,
            name,
            fields,
            by_name,
            by_role,
            queryable,
            editable,
            updatable,
            relations,
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.by_name.get(name).map(|i| &self.fields[*i])
    }

    /// Gets the named field, or a resolution error naming the model.
    pub fn expect_field(&self, name: &str) -> Result<&Field> {
        self.field(name).ok_or_else(|| {
            Error::resolution(
                "Member",
                format!("`{}` has no field `{name}`", self.name),
            )
        })
    }

    /// Fields carrying every role bit of `mask`, in field order.
    pub fn role_fields(&self, mask: Role) -> Vec<&Field> {
        if mask.is_empty() {
            return self.fields.iter().collect();
        }

        // Start from the rarest bit, then check the whole mask
        let Some(candidates) = mask
            .iter()
            .map(|role| self.by_role.get(&role).map(Vec::as_slice).unwrap_or(&[]))
            .min_by_key(|indices| indices.len())
        else {
            return vec![];
        };

        candidates
            .iter()
            .map(|i| &self.fields[*i])
            .filter(|field| field.in_role(mask))
            .collect()
    }

    pub fn primary_keys(&self) -> Vec<&Field> {
        self.role_fields(Role::PRIMARY_KEY)
    }

    pub fn primary_key_names(&self) -> Vec<&str> {
        self.primary_keys().into_iter().map(Field::name).collect()
    }

    pub fn queryable_fields(&self) -> impl Iterator<Item = &Field> + '_ {
        self.queryable.iter().map(|i| &self.fields[*i])
    }

    pub fn editable_fields(&self) -> impl Iterator<Item = &Field> + '_ {
        self.editable.iter().map(|i| &self.fields[*i])
    }

    pub fn updatable_fields(&self) -> impl Iterator<Item = &Field> + '_ {
        self.updatable.iter().map(|i| &self.fields[*i])
    }

    /// Relations declared on this model toward `target`.
    pub fn relations(&self, target: ModelRef) -> Option<&IndexMap<String, Relation>> {
        self.relations.get(&target.type_id())
    }

    pub(crate) fn all_relations(&self) -> impl Iterator<Item = &Relation> + '_ {
        self.relations.values().flat_map(IndexMap::values)
    }

    /// Reads the named field of `model`.
    pub fn get_value<M: Entity>(&self, model: &M, name: &str) -> Result<Value> {
        self.check_type::<M>()?;
        self.expect_field(name)?.accessor.get(model)
    }

    /// Writes the named field of `model` through its setter.
    ///
    /// Writing a primary-key field drops the model's memoized identity.
    pub fn set_value<M: Entity>(&self, model: &mut M, name: &str, value: Value) -> Result<()> {
        self.check_type::<M>()?;
        let field = self.expect_field(name)?;
        field
            .accessor
            .set(model, value)
            .map_err(|err| err.context(format!("setting `{}.{name}`", self.name)))?;

        if field.is_primary_key() {
            if let Some(state) = model.state_mut() {
                state.invalidate();
            }
        }
        Ok(())
    }

    /// Reads every field of `model`, in field order.
    pub fn values<M: Entity>(&self, model: &M) -> Result<Snapshot> {
        self.check_type::<M>()?;
        self.fields
            .iter()
            .map(|field| Ok((field.name().to_string(), field.accessor.get(model)?)))
            .collect()
    }

    fn check_type<M: Entity>(&self) -> Result<()> {
        if self.model_ref.is::<M>() {
            Ok(())
        } else {
            Err(Error::configuration(
                self.name,
                format!("metadata used with a `{}` instance", M::name()),
            ))
        }
    }
}
