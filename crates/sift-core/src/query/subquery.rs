use super::ConditionGroup;
use crate::{
    schema::{Entity, ModelRef},
    stmt::Expr,
};

/// A nested query selecting one field of another model.
///
/// The translator treats it as opaque: it becomes the right side of a
/// membership or comparison criterion.
#[derive(Debug, Clone, PartialEq)]
pub struct Subquery {
    pub model: ModelRef,
    pub select: String,
    pub filter: Option<ConditionGroup>,
}

impl Subquery {
    pub fn new<M: Entity>(select: impl Into<String>) -> Self {
        Self {
            model: ModelRef::of::<M>(),
            select: select.into(),
            filter: None,
        }
    }

    pub fn filter(mut self, filter: ConditionGroup) -> Self {
        self.filter = Some(filter);
        self
    }

    /// `item IN (subquery)`
    pub fn contains(self, item: impl Into<Expr>) -> Expr {
        Expr::from(self).contains(item)
    }

    /// `item NOT IN (subquery)`
    pub fn not_contains(self, item: impl Into<Expr>) -> Expr {
        Expr::from(self).not_contains(item)
    }

    /// `item = (subquery)`
    pub fn equals(self, item: impl Into<Expr>) -> Expr {
        Expr::from(self).equals(item)
    }

    /// `item <> (subquery)`
    pub fn not_equals(self, item: impl Into<Expr>) -> Expr {
        Expr::from(self).not_equals(item)
    }

    /// `item < (subquery)`
    pub fn less_than(self, item: impl Into<Expr>) -> Expr {
        Expr::from(self).less_than(item)
    }

    /// `item <= (subquery)`
    pub fn less_than_or_equal(self, item: impl Into<Expr>) -> Expr {
        Expr::from(self).less_than_or_equal(item)
    }

    /// `item > (subquery)`
    pub fn greater_than(self, item: impl Into<Expr>) -> Expr {
        Expr::from(self).greater_than(item)
    }

    /// `item >= (subquery)`
    pub fn greater_than_or_equal(self, item: impl Into<Expr>) -> Expr {
        Expr::from(self).greater_than_or_equal(item)
    }
}
