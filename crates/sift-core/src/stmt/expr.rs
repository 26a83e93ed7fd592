use super::*;
use crate::query::Subquery;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// AND two boolean expressions
    And(ExprAnd),

    /// Binary expression
    BinaryOp(ExprBinaryOp),

    /// An intrinsic call on an optional receiver
    Call(ExprCall),

    /// A value computed by host code when the predicate is translated
    Captured(ExprCaptured),

    /// Cast an expression to a different type
    Cast(ExprCast),

    /// A list of expressions of the same type
    List(ExprList),

    /// Member access on a parameter
    Member(ExprMember),

    /// Negates a boolean expression
    Not(ExprNot),

    /// OR two boolean expressions
    Or(ExprOr),

    /// A typed lambda parameter
    Param(Param),

    /// A nested query
    Subquery(Subquery),

    /// Evaluates to a constant value
    Value(Value),
}

impl Expr {
    pub fn null() -> Self {
        Self::Value(Value::Null)
    }

    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    /// Is a value that evaluates to null
    pub fn is_value_null(&self) -> bool {
        matches!(self, Self::Value(Value::Null))
    }

    /// Returns true if the expression is the `true` boolean expression
    pub fn is_true(&self) -> bool {
        matches!(self, Self::Value(Value::Bool(true)))
    }

    /// Returns `true` if the expression is the `false` boolean expression
    pub fn is_false(&self) -> bool {
        matches!(self, Self::Value(Value::Bool(false)))
    }

    pub fn is_subquery(&self) -> bool {
        matches!(self, Self::Subquery(_))
    }

    /// Returns `true` if the expression references no parameter and no
    /// subquery, so it can be evaluated when the predicate is translated.
    pub fn is_const(&self) -> bool {
        match self {
            Self::And(e) => e.lhs.is_const() && e.rhs.is_const(),
            Self::Or(e) => e.lhs.is_const() && e.rhs.is_const(),
            Self::BinaryOp(e) => e.lhs.is_const() && e.rhs.is_const(),
            Self::Call(e) => {
                e.receiver.as_deref().map_or(true, Expr::is_const)
                    && e.args.iter().all(Expr::is_const)
            }
            Self::Cast(e) => e.expr.is_const(),
            Self::List(e) => e.items.iter().all(Expr::is_const),
            Self::Member(e) => e.base.is_const(),
            Self::Not(e) => e.expr.is_const(),
            Self::Captured(_) | Self::Value(_) => true,
            Self::Param(_) | Self::Subquery(_) => false,
        }
    }

    /// Node kind, used in error messages and trace output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::And(_) => "And",
            Self::BinaryOp(_) => "BinaryOp",
            Self::Call(_) => "Call",
            Self::Captured(_) => "Captured",
            Self::Cast(_) => "Cast",
            Self::List(_) => "List",
            Self::Member(_) => "Member",
            Self::Not(_) => "Not",
            Self::Or(_) => "Or",
            Self::Param(_) => "Param",
            Self::Subquery(_) => "Subquery",
            Self::Value(_) => "Value",
        }
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<Param> for Expr {
    fn from(value: Param) -> Self {
        Self::Param(value)
    }
}

impl From<Subquery> for Expr {
    fn from(value: Subquery) -> Self {
        Self::Subquery(value)
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Self::Value(value.into())
    }
}

macro_rules! impl_from_primitive {
    ( $( $ty:ty, )* ) => {
        $(
            impl From<$ty> for Expr {
                fn from(value: $ty) -> Self {
                    Self::Value(value.into())
                }
            }
        )*
    };
}

impl_from_primitive! {
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    u64,
    f64,
    String,
    rust_decimal::Decimal,
    uuid::Uuid,
    chrono::DateTime<chrono::Utc>,
    serde_json::Value,
}
