use super::Error;

/// Error when a predicate contains a node the translator does not recognize.
///
/// Translation is strict: a condition that cannot be represented is reported
/// instead of being dropped from the query.
#[derive(Debug)]
pub(super) struct UnsupportedPredicateError {
    node: &'static str,
    message: Box<str>,
}

impl std::error::Error for UnsupportedPredicateError {}

impl core::fmt::Display for UnsupportedPredicateError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported predicate: {}: {}", self.node, self.message)
    }
}

impl Error {
    /// Creates an unsupported predicate error for the given node kind.
    pub fn unsupported_predicate(node: &'static str, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedPredicate(
            UnsupportedPredicateError {
                node,
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an unsupported predicate error.
    pub fn is_unsupported_predicate(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedPredicate(_))
    }
}
