mod accessor;
pub use accessor::Accessor;

mod builder;
pub use builder::{FieldDecl, ModelBuilder};

mod entity;
pub use entity::{Entity, EntityState};

mod field;
pub use field::{Field, FieldName};

mod flags;
pub use flags::{Behavior, CacheRole, DbFeature, Role};

mod model;
pub use model::Model;

mod model_ref;
pub use model_ref::ModelRef;

mod registry;
pub use registry::Registry;

mod relation;
pub use relation::Relation;

use crate::Result;
use std::sync::Arc;

/// Configures `M` in the global registry. See [`Registry::configure`].
pub fn configure<M: Entity>() -> Result<Arc<Model>> {
    Registry::global().configure::<M>()
}

/// Metadata of the referenced model, configured in the global registry.
pub fn model_of(model: ModelRef) -> Result<Arc<Model>> {
    Registry::global().model(model)
}
