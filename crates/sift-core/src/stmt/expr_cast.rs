use super::{Expr, Type};

/// Converts an expression to another type.
///
/// Over a constant the cast is applied when the predicate is translated.
/// Over a field it is transparent: the storage layer owns conversions.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprCast {
    /// The expression to cast.
    pub expr: Box<Expr>,

    /// The target type.
    pub ty: Type,
}

impl Expr {
    pub fn cast(self, ty: Type) -> Self {
        ExprCast {
            expr: Box::new(self),
            ty,
        }
        .into()
    }

    pub fn is_cast(&self) -> bool {
        matches!(self, Self::Cast(_))
    }
}

impl From<ExprCast> for Expr {
    fn from(value: ExprCast) -> Self {
        Self::Cast(value)
    }
}
