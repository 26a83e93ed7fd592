//! Predicate translation.
//!
//! A [`Lambda`] body is walked once. Field-position sub-expressions go
//! through the [`Resolver`]; everything in predicate position becomes a
//! [`Criterion`](crate::query::Criterion) or a nested group.

mod predicate;
pub use predicate::Translator;

mod resolve;
pub use resolve::Resolver;

use crate::{
    query::{ConditionGroup, Connector},
    schema::Registry,
    stmt::Lambda,
    Result,
};

/// Translates `lambda` against the global registry, attached with `And`.
pub fn translate(lambda: &Lambda) -> Result<ConditionGroup> {
    translate_with(lambda, Connector::And)
}

/// Translates `lambda` against the global registry, attached with
/// `connector`.
pub fn translate_with(lambda: &Lambda, connector: Connector) -> Result<ConditionGroup> {
    Translator::new(Registry::global()).translate(lambda, connector)
}
