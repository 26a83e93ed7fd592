mod adhoc;
mod configuration;
mod null_ordering;
mod resolution;
mod type_conversion;
mod unsupported_predicate;

use adhoc::AdhocError;
use configuration::ConfigurationError;
use null_ordering::NullOrderingError;
use resolution::ResolutionError;
use std::sync::Arc;
use type_conversion::TypeConversionError;
use unsupported_predicate::UnsupportedPredicateError;

/// Returns early with an ad hoc [`Error`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an ad hoc [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur while configuring models, resolving fields or
/// translating predicates.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context
    /// is shown first, followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }
        if let Some(inner) = err.inner.as_mut().and_then(Arc::get_mut) {
            if inner.cause.is_none() {
                inner.cause = Some(self);
                return err;
            }
        }

        // Shared or already chained consequent; re-wrap its message.
        let mut wrapped = Error::from_args(format_args!("{err}"));
        if let Some(inner) = wrapped.inner.as_mut().and_then(Arc::get_mut) {
            inner.cause = Some(self);
        }
        wrapped
    }

    /// Returns the innermost error of the context chain.
    pub fn root(&self) -> &Error {
        self.chain().last().unwrap_or(self)
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }

    /// Creates an ad hoc error from format arguments. Prefer the [`err!`] and
    /// [`bail!`] macros.
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        Error::from(anyhow::anyhow!("{args}"))
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Adhoc(err) => Some(err),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Adhoc(AdhocError),
    Configuration(ConfigurationError),
    NullOrdering(NullOrderingError),
    Resolution(ResolutionError),
    TypeConversion(TypeConversionError),
    UnsupportedPredicate(UnsupportedPredicateError),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            Configuration(err) => core::fmt::Display::fmt(err, f),
            NullOrdering(err) => core::fmt::Display::fmt(err, f),
            Resolution(err) => core::fmt::Display::fmt(err, f),
            TypeConversion(err) => core::fmt::Display::fmt(err, f),
            UnsupportedPredicate(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown sift error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(err)))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

impl IntoError for &str {
    fn into_error(self) -> Error {
        Error::from_args(format_args!("{self}"))
    }
}

impl IntoError for String {
    fn into_error(self) -> Error {
        Error::from_args(format_args!("{self}"))
    }
}
