/// An unstructured error carrying a message, bridged from `anyhow`.
#[derive(Debug)]
pub(super) struct AdhocError {
    inner: anyhow::Error,
}

impl AdhocError {
    pub(super) fn new(inner: anyhow::Error) -> AdhocError {
        AdhocError { inner }
    }
}

impl std::error::Error for AdhocError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner.source()
    }
}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.inner, f)
    }
}
