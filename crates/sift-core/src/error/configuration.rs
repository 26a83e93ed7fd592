use super::Error;

/// Error when a model is declared in a way the registry cannot support.
///
/// This occurs when:
/// - A field that may be updated has no setter
/// - A field declares a value type with no mapping
/// - Two fields of the same model share a name
/// - An identity value cannot be synthesized for a primary key's type
///
/// Configuration errors are defects in the model declaration. They are never
/// retried.
#[derive(Debug)]
pub(super) struct ConfigurationError {
    model: Box<str>,
    message: Box<str>,
}

impl std::error::Error for ConfigurationError {}

impl core::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "configuration error: {}: {}", self.model, self.message)
    }
}

impl Error {
    /// Creates a configuration error for the named model.
    pub fn configuration(model: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Configuration(ConfigurationError {
            model: model.into().into(),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a configuration error.
    pub fn is_configuration(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Configuration(_))
    }
}
