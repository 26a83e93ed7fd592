use crate::query::Format;

use std::fmt;

/// An intrinsic call recognized by the resolver and the predicate translator.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    // Membership and pattern predicates
    Contains,
    NotContains,
    StartsWith,
    EndsWith,

    // Comparison calls, mostly used against subqueries
    Equals,
    NotEquals,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,

    // Helper predicates
    IsNull,
    NotNull,
    IsNullOrEmpty,
    IsNullOrWhiteSpace,

    // Formatting
    Trim,
    TrimStart,
    TrimEnd,
    CharLength,
    ToUpper,
    ToLower,
    Concat,
    JsonExtract,

    // Aggregates
    Max,
    Min,
    Avg,
    Sum,
    Count,
}

impl Method {
    pub fn name(self) -> &'static str {
        use Method::*;

        match self {
            Contains => "contains",
            NotContains => "not_contains",
            StartsWith => "starts_with",
            EndsWith => "ends_with",
            Equals => "equals",
            NotEquals => "not_equals",
            LessThan => "less_than",
            LessThanOrEqual => "less_than_or_equal",
            GreaterThan => "greater_than",
            GreaterThanOrEqual => "greater_than_or_equal",
            IsNull => "is_null",
            NotNull => "not_null",
            IsNullOrEmpty => "is_null_or_empty",
            IsNullOrWhiteSpace => "is_null_or_white_space",
            Trim => "trim",
            TrimStart => "trim_start",
            TrimEnd => "trim_end",
            CharLength => "char_length",
            ToUpper => "to_upper",
            ToLower => "to_lower",
            Concat => "concat",
            JsonExtract => "json_extract",
            Max => "max",
            Min => "min",
            Avg => "avg",
            Sum => "sum",
            Count => "count",
        }
    }

    /// The format setting a formatting or aggregate call resolves to.
    pub fn format(self) -> Option<Format> {
        Some(match self {
            Self::Trim => Format::Trim,
            Self::TrimStart => Format::TrimStart,
            Self::TrimEnd => Format::TrimEnd,
            Self::CharLength => Format::CharLength,
            Self::ToUpper => Format::Upper,
            Self::ToLower => Format::Lower,
            Self::Concat => Format::Concat,
            Self::JsonExtract => Format::JsonExtract,
            Self::Max => Format::Max,
            Self::Min => Format::Min,
            Self::Avg => Format::Avg,
            Self::Sum => Format::Sum,
            Self::Count => Format::Count,
            _ => return None,
        })
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name().fmt(f)
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
