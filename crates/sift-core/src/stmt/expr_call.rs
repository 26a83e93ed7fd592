use super::{Expr, Method};

/// An intrinsic call.
///
/// Instance calls (`name.trim()`, `names.contains(x)`) carry a receiver.
/// Helper calls (`is_null(x)`, `max(x)`) have no receiver and take their
/// subject as the first argument.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprCall {
    pub method: Method,
    pub receiver: Option<Box<Expr>>,
    pub args: Vec<Expr>,
}

impl ExprCall {
    /// The expression the call applies to.
    pub fn subject(&self) -> Option<&Expr> {
        match &self.receiver {
            Some(receiver) => Some(receiver),
            None => self.args.first(),
        }
    }

    /// Arguments other than the subject.
    pub fn operands(&self) -> &[Expr] {
        match self.receiver {
            Some(_) => &self.args,
            None => self.args.get(1..).unwrap_or_default(),
        }
    }
}

impl Expr {
    pub fn method_call(self, method: Method, args: Vec<Expr>) -> Self {
        ExprCall {
            method,
            receiver: Some(Box::new(self)),
            args,
        }
        .into()
    }

    pub fn helper_call(method: Method, args: Vec<Expr>) -> Self {
        ExprCall {
            method,
            receiver: None,
            args,
        }
        .into()
    }

    /// Substring test on a string receiver, membership test on a list or
    /// subquery receiver.
    pub fn contains(self, item: impl Into<Self>) -> Self {
        self.method_call(Method::Contains, vec![item.into()])
    }

    pub fn not_contains(self, item: impl Into<Self>) -> Self {
        self.method_call(Method::NotContains, vec![item.into()])
    }

    pub fn starts_with(self, prefix: impl Into<Self>) -> Self {
        self.method_call(Method::StartsWith, vec![prefix.into()])
    }

    pub fn ends_with(self, suffix: impl Into<Self>) -> Self {
        self.method_call(Method::EndsWith, vec![suffix.into()])
    }

    pub fn equals(self, other: impl Into<Self>) -> Self {
        self.method_call(Method::Equals, vec![other.into()])
    }

    pub fn not_equals(self, other: impl Into<Self>) -> Self {
        self.method_call(Method::NotEquals, vec![other.into()])
    }

    pub fn less_than(self, other: impl Into<Self>) -> Self {
        self.method_call(Method::LessThan, vec![other.into()])
    }

    pub fn less_than_or_equal(self, other: impl Into<Self>) -> Self {
        self.method_call(Method::LessThanOrEqual, vec![other.into()])
    }

    pub fn greater_than(self, other: impl Into<Self>) -> Self {
        self.method_call(Method::GreaterThan, vec![other.into()])
    }

    pub fn greater_than_or_equal(self, other: impl Into<Self>) -> Self {
        self.method_call(Method::GreaterThanOrEqual, vec![other.into()])
    }

    pub fn trim(self) -> Self {
        self.method_call(Method::Trim, vec![])
    }

    pub fn trim_start(self) -> Self {
        self.method_call(Method::TrimStart, vec![])
    }

    pub fn trim_end(self) -> Self {
        self.method_call(Method::TrimEnd, vec![])
    }

    pub fn char_length(self) -> Self {
        self.method_call(Method::CharLength, vec![])
    }

    pub fn to_upper(self) -> Self {
        self.method_call(Method::ToUpper, vec![])
    }

    pub fn to_lower(self) -> Self {
        self.method_call(Method::ToLower, vec![])
    }

    pub fn concat(self, other: impl Into<Self>) -> Self {
        self.method_call(Method::Concat, vec![other.into()])
    }

    /// Extracts the value at `path` from a JSON document. Paths are either
    /// JSON pointers (`/a/0`) or dotted (`$.a.b`).
    pub fn json_extract(self, path: impl Into<Self>) -> Self {
        self.method_call(Method::JsonExtract, vec![path.into()])
    }

    pub fn is_null(expr: impl Into<Self>) -> Self {
        Expr::helper_call(Method::IsNull, vec![expr.into()])
    }

    pub fn is_not_null(expr: impl Into<Self>) -> Self {
        Expr::helper_call(Method::NotNull, vec![expr.into()])
    }

    pub fn is_null_or_empty(expr: impl Into<Self>) -> Self {
        Expr::helper_call(Method::IsNullOrEmpty, vec![expr.into()])
    }

    pub fn is_null_or_white_space(expr: impl Into<Self>) -> Self {
        Expr::helper_call(Method::IsNullOrWhiteSpace, vec![expr.into()])
    }

    pub fn max(expr: impl Into<Self>) -> Self {
        Expr::helper_call(Method::Max, vec![expr.into()])
    }

    pub fn min(expr: impl Into<Self>) -> Self {
        Expr::helper_call(Method::Min, vec![expr.into()])
    }

    pub fn avg(expr: impl Into<Self>) -> Self {
        Expr::helper_call(Method::Avg, vec![expr.into()])
    }

    pub fn sum(expr: impl Into<Self>) -> Self {
        Expr::helper_call(Method::Sum, vec![expr.into()])
    }

    pub fn count(expr: impl Into<Self>) -> Self {
        Expr::helper_call(Method::Count, vec![expr.into()])
    }

    pub fn is_call(&self) -> bool {
        matches!(self, Self::Call(_))
    }
}

impl From<ExprCall> for Expr {
    fn from(value: ExprCall) -> Self {
        Self::Call(value)
    }
}
