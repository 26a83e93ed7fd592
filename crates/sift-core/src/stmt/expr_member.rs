use super::Expr;

/// Reads a named property of the base expression.
///
/// Only a [`Param`](super::Param) base resolves to a property field. Any
/// other base is rejected by the resolver.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprMember {
    pub base: Box<Expr>,
    pub name: String,
}

impl Expr {
    pub fn member(self, name: impl Into<String>) -> Self {
        ExprMember {
            base: Box::new(self),
            name: name.into(),
        }
        .into()
    }

    pub fn is_member(&self) -> bool {
        matches!(self, Self::Member(_))
    }
}

impl From<ExprMember> for Expr {
    fn from(value: ExprMember) -> Self {
        Self::Member(value)
    }
}
