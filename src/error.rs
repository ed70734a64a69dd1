/// An error occurred when validating percent-encoded octets.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ValidateError {
    pub(crate) index: usize,
}

impl ValidateError {
    /// Returns the index of the `'%'` of the malformed octet in the
    /// input string.
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }
}

#[cfg(feature = "impl-error")]
impl std::error::Error for ValidateError {}
