use super::Error;

/// Error when an operand expression resolves to neither a property, a
/// constant, a subquery nor a recognized formatting intrinsic.
#[derive(Debug)]
pub(super) struct ResolutionError {
    node: &'static str,
    message: Box<str>,
}

impl std::error::Error for ResolutionError {}

impl core::fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot resolve field: {}: {}", self.node, self.message)
    }
}

impl Error {
    /// Creates a field resolution error for the given node kind.
    pub fn resolution(node: &'static str, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Resolution(ResolutionError {
            node,
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a field resolution error.
    pub fn is_resolution(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Resolution(_))
    }
}
