use crate::{
    stmt::{Primitive, Type, Value},
    Error, Result,
};

use std::{any::Any, fmt, sync::Arc};

type Getter = dyn Fn(&dyn Any) -> Result<Value> + Send + Sync;
type Setter = dyn Fn(&mut dyn Any, Value) -> Result<()> + Send + Sync;

/// A compiled getter/setter pair bound to one field of one model type.
///
/// Built once when the model is configured. Calls go straight to the field
/// projection, with no lookup by name.
#[derive(Clone)]
pub struct Accessor {
    model: &'static str,
    get: Arc<Getter>,
    set: Option<Arc<Setter>>,
}

impl Accessor {
    /// Builds an accessor from field projections.
    ///
    /// The setter casts the incoming value to `T`'s declared type before
    /// storing it, so an `I64` can be written to an `i32` field when it fits.
    pub fn build<M, T>(get: fn(&M) -> &T, set: Option<fn(&mut M) -> &mut T>) -> Self
    where
        M: Any,
        T: Primitive + 'static,
    {
        let model = std::any::type_name::<M>();

        let getter = move |model: &dyn Any| -> Result<Value> {
            let model = downcast_ref::<M>(model)?;
            Ok(get(model).to_value())
        };

        let setter = set.map(|set| {
            Arc::new(move |model: &mut dyn Any, value: Value| -> Result<()> {
                let model = downcast_mut::<M>(model)?;
                *set(model) = T::load(T::ty().cast(value)?)?;
                Ok(())
            }) as Arc<Setter>
        });

        Self {
            model,
            get: Arc::new(getter),
            set: setter,
        }
    }

    /// Builds an accessor from arbitrary closures over a declared type.
    ///
    /// Values reach `set` already cast to `ty`.
    pub fn from_fns<M, G, S>(ty: Type, get: G, set: Option<S>) -> Self
    where
        M: Any,
        G: Fn(&M) -> Value + Send + Sync + 'static,
        S: Fn(&mut M, Value) -> Result<()> + Send + Sync + 'static,
    {
        let model = std::any::type_name::<M>();

        let getter = move |model: &dyn Any| -> Result<Value> {
            let model = downcast_ref::<M>(model)?;
            Ok(get(model))
        };

        let setter = set.map(|set| {
            Arc::new(move |model: &mut dyn Any, value: Value| -> Result<()> {
                let model = downcast_mut::<M>(model)?;
                set(model, ty.cast(value)?)
            }) as Arc<Setter>
        });

        Self {
            model,
            get: Arc::new(getter),
            set: setter,
        }
    }

    pub fn get(&self, model: &dyn Any) -> Result<Value> {
        (self.get)(model)
    }

    pub fn set(&self, model: &mut dyn Any, value: Value) -> Result<()> {
        match &self.set {
            Some(set) => set(model, value),
            None => Err(Error::configuration(self.model, "field has no setter")),
        }
    }

    pub fn has_setter(&self) -> bool {
        self.set.is_some()
    }
}

fn downcast_ref<M: Any>(model: &dyn Any) -> Result<&M> {
    model.downcast_ref::<M>().ok_or_else(|| {
        Error::configuration(
            std::any::type_name::<M>(),
            "accessor called with a different model type",
        )
    })
}

fn downcast_mut<M: Any>(model: &mut dyn Any) -> Result<&mut M> {
    model.downcast_mut::<M>().ok_or_else(|| {
        Error::configuration(
            std::any::type_name::<M>(),
            "accessor called with a different model type",
        )
    })
}

impl fmt::Debug for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor")
            .field("model", &self.model)
            .field("setter", &self.has_setter())
            .finish()
    }
}
