use super::{Entity, Model, Registry};
use crate::Result;

use std::{
    any::TypeId,
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

/// A copyable handle to a model type.
///
/// Holds the type's identity and how to configure it, so query values can
/// name a model without being generic over it.
#[derive(Clone, Copy)]
pub struct ModelRef {
    type_id: TypeId,
    name: fn() -> &'static str,
    configure: fn(&Registry) -> Result<Arc<Model>>,
}

impl ModelRef {
    pub fn of<M: Entity>() -> Self {
        fn configure<M: Entity>(registry: &Registry) -> Result<Arc<Model>> {
            registry.configure::<M>()
        }

        Self {
            type_id: TypeId::of::<M>(),
            name: M::name,
            configure: configure::<M>,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn name(&self) -> &'static str {
        (self.name)()
    }

    pub fn is<M: Entity>(&self) -> bool {
        self.type_id == TypeId::of::<M>()
    }

    /// Configures the model in `registry`, or returns the cached metadata.
    pub fn configure(&self, registry: &Registry) -> Result<Arc<Model>> {
        (self.configure)(registry)
    }
}

impl PartialEq for ModelRef {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ModelRef {}

impl Hash for ModelRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for ModelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModelRef({})", self.name())
    }
}
