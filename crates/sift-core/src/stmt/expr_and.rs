use super::Expr;

/// Logical AND of two boolean expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprAnd {
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
}

impl Expr {
    pub fn and(self, rhs: impl Into<Self>) -> Self {
        ExprAnd {
            lhs: Box::new(self),
            rhs: Box::new(rhs.into()),
        }
        .into()
    }

    /// Folds `operands` left to right with AND. An empty set is `true`.
    pub fn and_from_vec(operands: Vec<Self>) -> Self {
        operands
            .into_iter()
            .reduce(Expr::and)
            .unwrap_or_else(|| true.into())
    }

    pub fn is_and(&self) -> bool {
        matches!(self, Self::And(_))
    }
}

impl From<ExprAnd> for Expr {
    fn from(value: ExprAnd) -> Self {
        Self::And(value)
    }
}
