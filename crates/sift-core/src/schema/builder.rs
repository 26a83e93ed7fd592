use super::{Accessor, Behavior, CacheRole, DbFeature, Entity, Field, FieldName, ModelRef, Role};
use crate::{
    query::Format,
    stmt::{Primitive, Type, Value},
    Result,
};

use std::marker::PhantomData;

/// Collects the field declarations of `M`.
///
/// Passed to [`Entity::describe`]. Validation happens when the registry
/// builds the [`Model`](super::Model), not here.
pub struct ModelBuilder<M> {
    pub(crate) fields: Vec<FieldDecl>,
    _model: PhantomData<fn() -> M>,
}

/// A field being declared. Methods chain.
#[derive(Debug)]
pub struct FieldDecl {
    field: Field,
}

impl<M: Entity> ModelBuilder<M> {
    pub(crate) fn new() -> Self {
        Self {
            fields: vec![],
            _model: PhantomData,
        }
    }

    /// Declares a read/write field from a pair of projections.
    pub fn field<T>(
        &mut self,
        name: &str,
        get: fn(&M) -> &T,
        set: fn(&mut M) -> &mut T,
    ) -> &mut FieldDecl
    where
        T: Primitive + 'static,
    {
        self.push::<T>(name, Accessor::build(get, Some(set)))
    }

    /// Declares a field without a setter. Unless it is also marked
    /// [`Behavior::NOT_UPDATE`], configuration fails.
    pub fn field_readonly<T>(&mut self, name: &str, get: fn(&M) -> &T) -> &mut FieldDecl
    where
        T: Primitive + 'static,
    {
        self.push::<T>(name, Accessor::build(get, None))
    }

    /// Declares a field backed by arbitrary closures. Values reach `set`
    /// already cast to `ty`.
    pub fn field_with<G, S>(&mut self, name: &str, ty: Type, get: G, set: S) -> &mut FieldDecl
    where
        G: Fn(&M) -> Value + Send + Sync + 'static,
        S: Fn(&mut M, Value) -> Result<()> + Send + Sync + 'static,
    {
        let accessor = Accessor::from_fns(ty.clone(), get, Some(set));
        self.push_decl(name, ty, false, accessor)
    }

    /// Declares a computed field with no setter.
    pub fn field_computed<G>(&mut self, name: &str, ty: Type, get: G) -> &mut FieldDecl
    where
        G: Fn(&M) -> Value + Send + Sync + 'static,
    {
        let accessor = Accessor::from_fns::<M, G, fn(&mut M, Value) -> Result<()>>(
            ty.clone(),
            get,
            None,
        );
        self.push_decl(name, ty, false, accessor)
    }

    fn push<T: Primitive>(&mut self, name: &str, accessor: Accessor) -> &mut FieldDecl {
        self.push_decl(name, T::ty(), T::NULLABLE, accessor)
    }

    fn push_decl(&mut self, name: &str, ty: Type, nullable: bool, accessor: Accessor) -> &mut FieldDecl {
        let index = self.fields.len();
        self.fields.push(FieldDecl {
            field: Field {
                name: FieldName {
                    app_name: name.to_string(),
                    storage_name: None,
                },
                index,
                roles: Role::empty(),
                cache_roles: CacheRole::empty(),
                db: DbFeature::empty(),
                behavior: Behavior::empty(),
                ty,
                nullable,
                format: None,
                relation: None,
                accessor,
            },
        });
        &mut self.fields[index]
    }

    pub(crate) fn into_fields(self) -> Vec<Field> {
        self.fields.into_iter().map(|decl| decl.field).collect()
    }
}

impl FieldDecl {
    /// Marks the field as (part of) the primary key.
    pub fn key(&mut self) -> &mut Self {
        self.role(Role::PRIMARY_KEY)
    }

    pub fn role(&mut self, role: Role) -> &mut Self {
        self.field.roles.insert(role);
        self
    }

    pub fn cache(&mut self, role: CacheRole) -> &mut Self {
        self.field.cache_roles.insert(role);
        self
    }

    pub fn db(&mut self, feature: DbFeature) -> &mut Self {
        self.field.db.insert(feature);
        self
    }

    pub fn behavior(&mut self, behavior: Behavior) -> &mut Self {
        self.field.behavior.insert(behavior);
        self
    }

    /// Overrides the storage name, which defaults to the property name.
    pub fn column(&mut self, storage_name: &str) -> &mut Self {
        self.field.name.storage_name = Some(storage_name.to_string());
        self
    }

    /// Applies `format` every time the field is resolved in a predicate.
    pub fn format(&mut self, format: Format) -> &mut Self {
        self.field.format = Some(format);
        self
    }

    /// Declares that this field references `references` on `target`.
    pub fn relation(&mut self, target: ModelRef, references: &str) -> &mut Self {
        self.field.relation = Some((target, references.to_string()));
        self
    }

    pub fn nullable(&mut self, nullable: bool) -> &mut Self {
        self.field.nullable = nullable;
        self
    }

    pub fn get(&self) -> &Field {
        &self.field
    }
}
