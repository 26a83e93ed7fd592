use super::{BinaryOp, Expr};

/// A binary operation between two expressions.
///
/// Comparisons translate to criteria. Arithmetic and bitwise operators only
/// appear in field position, where they resolve to format settings.
///
/// # Examples
///
/// ```text
/// eq(a, b)   // a == b
/// ne(a, b)   // a != b
/// lt(a, b)   // a < b
/// add(a, b)  // a + b
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExprBinaryOp {
    /// The left-hand side expression.
    pub lhs: Box<Expr>,

    /// The operator to apply.
    pub op: BinaryOp,

    /// The right-hand side expression.
    pub rhs: Box<Expr>,
}

impl Expr {
    pub fn binary_op(lhs: impl Into<Self>, op: BinaryOp, rhs: impl Into<Self>) -> Self {
        ExprBinaryOp {
            op,
            lhs: Box::new(lhs.into()),
            rhs: Box::new(rhs.into()),
        }
        .into()
    }

    #[allow(clippy::should_implement_trait)]
    pub fn eq(self, rhs: impl Into<Self>) -> Self {
        Expr::binary_op(self, BinaryOp::Eq, rhs)
    }

    /// Returns true if the expression is a binary expression with the equality operator
    pub fn is_eq(&self) -> bool {
        matches!(
            self,
            Self::BinaryOp(ExprBinaryOp {
                op: BinaryOp::Eq,
                ..
            })
        )
    }

    pub fn ge(self, rhs: impl Into<Self>) -> Self {
        Expr::binary_op(self, BinaryOp::Ge, rhs)
    }

    pub fn gt(self, rhs: impl Into<Self>) -> Self {
        Expr::binary_op(self, BinaryOp::Gt, rhs)
    }

    pub fn le(self, rhs: impl Into<Self>) -> Self {
        Expr::binary_op(self, BinaryOp::Le, rhs)
    }

    pub fn lt(self, rhs: impl Into<Self>) -> Self {
        Expr::binary_op(self, BinaryOp::Lt, rhs)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn ne(self, rhs: impl Into<Self>) -> Self {
        Expr::binary_op(self, BinaryOp::Ne, rhs)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add(self, rhs: impl Into<Self>) -> Self {
        Expr::binary_op(self, BinaryOp::Add, rhs)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn sub(self, rhs: impl Into<Self>) -> Self {
        Expr::binary_op(self, BinaryOp::Sub, rhs)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn mul(self, rhs: impl Into<Self>) -> Self {
        Expr::binary_op(self, BinaryOp::Mul, rhs)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn div(self, rhs: impl Into<Self>) -> Self {
        Expr::binary_op(self, BinaryOp::Div, rhs)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn rem(self, rhs: impl Into<Self>) -> Self {
        Expr::binary_op(self, BinaryOp::Rem, rhs)
    }

    pub fn bit_and(self, rhs: impl Into<Self>) -> Self {
        Expr::binary_op(self, BinaryOp::BitAnd, rhs)
    }

    pub fn bit_or(self, rhs: impl Into<Self>) -> Self {
        Expr::binary_op(self, BinaryOp::BitOr, rhs)
    }

    pub fn bit_xor(self, rhs: impl Into<Self>) -> Self {
        Expr::binary_op(self, BinaryOp::BitXor, rhs)
    }
}

impl From<ExprBinaryOp> for Expr {
    fn from(value: ExprBinaryOp) -> Self {
        Self::BinaryOp(value)
    }
}
