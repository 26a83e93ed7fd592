use super::{Entity, Field, Model, ModelBuilder, ModelRef, Relation, Role};
use crate::{stmt::Type, Error, Result};

use indexmap::IndexMap;
use once_cell::sync::{Lazy, OnceCell};
use parking_lot::RwLock;
use std::{
    any::TypeId,
    collections::{HashMap, HashSet},
    sync::Arc,
};

/// Process-wide table of model metadata, populated on first use.
///
/// Each type gets its own initialization cell. Concurrent first uses of
/// the same type run `describe` once and every caller gets the same
/// `Arc<Model>`. A failed configuration leaves the cell empty, so the
/// error is reported again on the next attempt.
#[derive(Default)]
pub struct Registry {
    models: RwLock<HashMap<TypeId, Arc<OnceCell<Arc<Model>>>>>,

    /// Reverse relation entries keyed by `(source, target)`. Append only.
    reverse: RwLock<HashMap<(TypeId, TypeId), IndexMap<String, Relation>>>,
}

static GLOBAL: Lazy<Registry> = Lazy::new(Registry::new);

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Returns the metadata of `M`, building it on the first call.
    pub fn configure<M: Entity>(&self) -> Result<Arc<Model>> {
        let cell = self.cell(TypeId::of::<M>());
        cell.get_or_try_init(|| self.build::<M>()).cloned()
    }

    /// Returns the metadata of the referenced model, building it if needed.
    pub fn model(&self, model: ModelRef) -> Result<Arc<Model>> {
        model.configure(self)
    }

    pub fn is_configured<M: Entity>(&self) -> bool {
        self.models
            .read()
            .get(&TypeId::of::<M>())
            .is_some_and(|cell| cell.get().is_some())
    }

    pub fn get_field<M: Entity>(&self, name: &str) -> Result<Option<Field>> {
        Ok(self.configure::<M>()?.field(name).cloned())
    }

    pub fn role_fields<M: Entity>(&self, mask: Role) -> Result<Vec<Field>> {
        Ok(self
            .configure::<M>()?
            .role_fields(mask)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn primary_key_names<M: Entity>(&self) -> Result<Vec<String>> {
        Ok(self
            .configure::<M>()?
            .primary_key_names()
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    /// Maps each local field of `source` to the field of `target` it joins
    /// on.
    ///
    /// Relations declared on `source` come first. Reverse entries recorded
    /// from relations declared on `target` follow, and never replace a key
    /// already present.
    pub fn relation_field_names(
        &self,
        source: ModelRef,
        target: ModelRef,
    ) -> Result<IndexMap<String, String>> {
        let source_model = self.model(source)?;
        // Configuring the target records its reverse entries
        self.model(target)?;

        let mut names = IndexMap::new();

        if let Some(forward) = source_model.relations(target) {
            for relation in forward.values() {
                names.insert(relation.local.clone(), relation.references.clone());
            }
        }

        if let Some(reverse) = self.reverse.read().get(&(source.type_id(), target.type_id())) {
            for relation in reverse.values() {
                names
                    .entry(relation.local.clone())
                    .or_insert_with(|| relation.references.clone());
            }
        }

        Ok(names)
    }

    fn cell(&self, type_id: TypeId) -> Arc<OnceCell<Arc<Model>>> {
        if let Some(cell) = self.models.read().get(&type_id) {
            return cell.clone();
        }
        self.models.write().entry(type_id).or_default().clone()
    }

    /// Runs inside the type's init cell. Must not configure other models:
    /// two models related both ways would wait on each other.
    fn build<M: Entity>(&self) -> Result<Arc<Model>> {
        let name = M::name();

        let mut builder = ModelBuilder::<M>::new();
        M::describe(&mut builder);
        let fields = builder.into_fields();

        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.name()) {
                return Err(Error::configuration(
                    name,
                    format!("duplicate field `{}`", field.name()),
                ));
            }

            if matches!(field.ty, Type::Unknown | Type::Null) {
                return Err(Error::configuration(
                    name,
                    format!(
                        "field `{}` has unsupported type `{}`",
                        field.name(),
                        field.ty.name()
                    ),
                ));
            }

            if field.is_updatable() && !field.accessor.has_setter() {
                return Err(Error::configuration(
                    name,
                    format!(
                        "field `{}` has no setter and is not marked `NOT_UPDATE`",
                        field.name()
                    ),
                ));
            }
        }

        let model_ref = ModelRef::of::<M>();
        let model = Model::new(model_ref, name, fields);

        {
            let mut reverse = self.reverse.write();
            for relation in model.all_relations() {
                reverse
                    .entry((relation.target.type_id(), model_ref.type_id()))
                    .or_default()
                    .entry(relation.references.clone())
                    .or_insert_with(|| relation.reverse(model_ref));
            }
        }

        tracing::debug!(
            model = name,
            fields = model.fields().len(),
            primary_keys = ?model.primary_key_names(),
            "configured model"
        );

        Ok(Arc::new(model))
    }
}
