use std::fmt;

/// How an entry combines with the entry before it.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum Connector {
    #[default]
    And,
    Or,
}

impl Connector {
    /// The De Morgan dual.
    pub fn flip(self) -> Self {
        match self {
            Self::And => Self::Or,
            Self::Or => Self::And,
        }
    }

    pub fn is_and(self) -> bool {
        matches!(self, Self::And)
    }

    pub fn is_or(self) -> bool {
        matches!(self, Self::Or)
    }
}

impl fmt::Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => "And".fmt(f),
            Self::Or => "Or".fmt(f),
        }
    }
}

impl fmt::Debug for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
