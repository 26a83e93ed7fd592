use crate::stmt::BinaryOp;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    Like,
    NotLike,
    BeginLike,
    NotBeginLike,
    EndLike,
    NotEndLike,
    In,
    NotIn,
    IsNull,
    NotNull,
    AlwaysTrue,
    AlwaysFalse,
}

impl Operator {
    /// The operator matching exactly the rows this one rejects.
    ///
    /// `complement` is an involution.
    pub fn complement(self) -> Self {
        use Operator::*;

        match self {
            Equal => NotEqual,
            NotEqual => Equal,
            LessThan => GreaterThanOrEqual,
            GreaterThanOrEqual => LessThan,
            LessThanOrEqual => GreaterThan,
            GreaterThan => LessThanOrEqual,
            Like => NotLike,
            NotLike => Like,
            BeginLike => NotBeginLike,
            NotBeginLike => BeginLike,
            EndLike => NotEndLike,
            NotEndLike => EndLike,
            In => NotIn,
            NotIn => In,
            IsNull => NotNull,
            NotNull => IsNull,
            AlwaysTrue => AlwaysFalse,
            AlwaysFalse => AlwaysTrue,
        }
    }

    /// Unary operators have no right field.
    pub fn is_unary(self) -> bool {
        matches!(
            self,
            Self::IsNull | Self::NotNull | Self::AlwaysTrue | Self::AlwaysFalse
        )
    }

    /// Maps a comparison operator. Arithmetic operators have no counterpart.
    pub fn from_comparison(op: BinaryOp) -> Option<Self> {
        Some(match op {
            BinaryOp::Eq => Self::Equal,
            BinaryOp::Ne => Self::NotEqual,
            BinaryOp::Lt => Self::LessThan,
            BinaryOp::Le => Self::LessThanOrEqual,
            BinaryOp::Gt => Self::GreaterThan,
            BinaryOp::Ge => Self::GreaterThanOrEqual,
            _ => return None,
        })
    }

    pub const ALL: [Operator; 18] = [
        Self::Equal,
        Self::NotEqual,
        Self::LessThan,
        Self::LessThanOrEqual,
        Self::GreaterThan,
        Self::GreaterThanOrEqual,
        Self::Like,
        Self::NotLike,
        Self::BeginLike,
        Self::NotBeginLike,
        Self::EndLike,
        Self::NotEndLike,
        Self::In,
        Self::NotIn,
        Self::IsNull,
        Self::NotNull,
        Self::AlwaysTrue,
        Self::AlwaysFalse,
    ];
}
