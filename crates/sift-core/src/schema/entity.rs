use super::{Model, ModelBuilder, Registry};
use crate::Result;

use once_cell::sync::OnceCell;
use std::sync::Arc;

/// A model type whose fields can be queried, identified and diffed.
///
/// Usually implemented with `#[derive(Entity)]`.
pub trait Entity: Sized + 'static {
    /// The model name used in errors and logs. Defaults to the type name
    /// without its module path.
    fn name() -> &'static str {
        let full = std::any::type_name::<Self>();
        let base = full.split('<').next().unwrap_or(full);
        base.rsplit("::").next().unwrap_or(base)
    }

    /// Declares the model's fields.
    fn describe(model: &mut ModelBuilder<Self>);

    /// The per-instance state holding the memoized identity value, if the
    /// model carries one.
    fn state(&self) -> Option<&EntityState> {
        None
    }

    fn state_mut(&mut self) -> Option<&mut EntityState> {
        None
    }

    /// Metadata from the global registry, configured on first use.
    fn metadata() -> Result<Arc<Model>> {
        Registry::global().configure::<Self>()
    }
}

/// Per-instance bookkeeping owned by a model.
///
/// Compares equal to every other state so it never affects a model's
/// derived `PartialEq`.
#[derive(Debug, Clone, Default)]
pub struct EntityState {
    identity: OnceCell<String>,
}

impl EntityState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn identity(&self) -> Option<&str> {
        self.identity.get().map(String::as_str)
    }

    pub(crate) fn identity_or_init(&self, f: impl FnOnce() -> Result<String>) -> Result<&str> {
        self.identity.get_or_try_init(f).map(String::as_str)
    }

    /// Drops the memoized identity so the next read recomputes it.
    pub fn invalidate(&mut self) {
        self.identity.take();
    }
}

impl PartialEq for EntityState {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl Eq for EntityState {}
