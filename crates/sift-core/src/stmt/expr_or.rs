use super::Expr;

/// Logical OR of two boolean expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprOr {
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
}

impl Expr {
    pub fn or(self, rhs: impl Into<Self>) -> Self {
        ExprOr {
            lhs: Box::new(self),
            rhs: Box::new(rhs.into()),
        }
        .into()
    }

    /// Folds `operands` left to right with OR. An empty set is `false`.
    pub fn or_from_vec(operands: Vec<Self>) -> Self {
        operands
            .into_iter()
            .reduce(Expr::or)
            .unwrap_or_else(|| false.into())
    }

    pub fn is_or(&self) -> bool {
        matches!(self, Self::Or(_))
    }
}

impl From<ExprOr> for Expr {
    fn from(value: ExprOr) -> Self {
        Self::Or(value)
    }
}
