use super::Error;
use crate::stmt::BinaryOp;

/// Error when null is compared with an ordering operator. Only equality and
/// inequality have a null-aware rewrite.
#[derive(Debug)]
pub(super) struct NullOrderingError {
    op: BinaryOp,
}

impl std::error::Error for NullOrderingError {}

impl core::fmt::Display for NullOrderingError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot compare null with the ordering operator `{}`",
            self.op
        )
    }
}

impl Error {
    /// Creates a null-operand ordering error.
    pub fn null_ordering(op: BinaryOp) -> Error {
        Error::from(super::ErrorKind::NullOrdering(NullOrderingError { op }))
    }

    /// Returns `true` if this error is a null-operand ordering error.
    pub fn is_null_ordering(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NullOrdering(_))
    }
}
