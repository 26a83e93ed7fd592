use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Eq,
    Ne,
    Ge,
    Gt,
    Le,
    Lt,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    BitAnd,
    BitOr,
    BitXor,
}

impl BinaryOp {
    pub fn is_eq(self) -> bool {
        matches!(self, Self::Eq)
    }

    pub fn is_ne(self) -> bool {
        matches!(self, Self::Ne)
    }

    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            Self::Eq | Self::Ne | Self::Ge | Self::Gt | Self::Le | Self::Lt
        )
    }

    /// Ordering operators have no null-aware rewrite.
    pub fn is_ordering(self) -> bool {
        matches!(self, Self::Ge | Self::Gt | Self::Le | Self::Lt)
    }

    /// Arithmetic and bitwise operators, which resolve to format settings.
    pub fn is_arithmetic(self) -> bool {
        !self.is_comparison()
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOp::*;

        match self {
            Eq => "=".fmt(f),
            Ne => "!=".fmt(f),
            Ge => ">=".fmt(f),
            Gt => ">".fmt(f),
            Le => "<=".fmt(f),
            Lt => "<".fmt(f),
            Add => "+".fmt(f),
            Sub => "-".fmt(f),
            Mul => "*".fmt(f),
            Div => "/".fmt(f),
            Rem => "%".fmt(f),
            BitAnd => "&".fmt(f),
            BitOr => "|".fmt(f),
            BitXor => "^".fmt(f),
        }
    }
}

impl fmt::Debug for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
