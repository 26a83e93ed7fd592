use super::Expr;
use crate::schema::{Entity, ModelRef};

/// A typed predicate parameter, e.g. the `o` in `|o: Order| ...`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Param {
    pub name: String,
    pub model: ModelRef,
}

impl Param {
    pub fn of<M: Entity>(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: ModelRef::of::<M>(),
        }
    }

    /// Reads the property `name` of this parameter.
    pub fn member(&self, name: impl Into<String>) -> Expr {
        Expr::Param(self.clone()).member(name)
    }
}

/// A predicate body together with the parameters it is written against.
///
/// Parameter positions are their index in `params`; they distinguish
/// repeated appearances of the same model in a multi-entity predicate.
#[derive(Debug, Clone, PartialEq)]
pub struct Lambda {
    pub params: Vec<Param>,
    pub body: Expr,
}

impl Lambda {
    pub fn new(params: impl IntoIterator<Item = Param>, body: impl Into<Expr>) -> Self {
        Self {
            params: params.into_iter().collect(),
            body: body.into(),
        }
    }

    /// Position of `param` within the parameter list.
    pub fn position(&self, param: &Param) -> Option<usize> {
        self.params.iter().position(|p| p == param)
    }
}
