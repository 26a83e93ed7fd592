use super::Expr;

/// Negates a boolean expression.
///
/// The translator never keeps this node: the translated operand is negated
/// in place instead.
///
/// # Examples
///
/// ```text
/// not(true)   // returns `false`
/// not(false)  // returns `true`
/// not(null)   // returns `null`
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExprNot {
    /// The expression to negate.
    pub expr: Box<Expr>,
}

impl Expr {
    /// Creates a `Not` expression that negates this expression.
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        ExprNot {
            expr: Box::new(self),
        }
        .into()
    }

    /// Returns true if this is a `Not` expression.
    pub fn is_not(&self) -> bool {
        matches!(self, Self::Not(_))
    }
}

impl From<ExprNot> for Expr {
    fn from(value: ExprNot) -> Self {
        Self::Not(value)
    }
}
