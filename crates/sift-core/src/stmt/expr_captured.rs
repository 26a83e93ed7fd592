use super::{Expr, Value};
use crate::Result;

use std::{fmt, sync::Arc};

/// A value closed over from the caller's scope.
///
/// The closure runs each time the predicate is translated. Two captured
/// nodes are equal only when they share the same closure.
#[derive(Clone)]
pub struct ExprCaptured {
    pub(crate) f: Arc<dyn Fn() -> Result<Value> + Send + Sync>,
}

impl ExprCaptured {
    pub fn eval(&self) -> Result<Value> {
        (self.f)()
    }
}

impl Expr {
    pub fn captured<F, T>(f: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
        T: Into<Value>,
    {
        Self::Captured(ExprCaptured {
            f: Arc::new(move || Ok(f().into())),
        })
    }

    /// Like [`Expr::captured`] for closures that can fail.
    pub fn try_captured<F>(f: F) -> Self
    where
        F: Fn() -> Result<Value> + Send + Sync + 'static,
    {
        Self::Captured(ExprCaptured { f: Arc::new(f) })
    }
}

impl PartialEq for ExprCaptured {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.f, &other.f)
    }
}

impl fmt::Debug for ExprCaptured {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ExprCaptured(..)")
    }
}
