pub mod models;

use sift::{
    query::{ConditionGroup, Connector},
    stmt::{Expr, Lambda, Param},
    Entity, Result,
};

/// Translates the predicate built by `body` over a single `M` parameter.
pub fn filter<M: Entity>(body: impl FnOnce(&Param) -> Expr) -> Result<ConditionGroup> {
    filter_with::<M>(Connector::And, body)
}

pub fn filter_with<M: Entity>(
    connector: Connector,
    body: impl FnOnce(&Param) -> Expr,
) -> Result<ConditionGroup> {
    let param = Param::of::<M>("m");
    let lambda = Lambda::new([param.clone()], body(&param));
    sift::translate_with(&lambda, connector)
}
