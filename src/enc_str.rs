//! Checked percent-encoded string slices.

use crate::{component::Component, error::ValidateError, norm, table};
use alloc::string::String;
use core::hash;
use ref_cast::{ref_cast_custom, RefCastCustom};

/// Checks that every `'%'` in the string is followed by two hexadecimal
/// digits.
///
/// [`normalize`](crate::normalize) itself tolerates malformed escapes by
/// passing them through; callers that must reject them outright run this
/// pass first, or keep the guarantee in the type with [`EncStr`].
///
/// # Examples
///
/// ```
/// use iri_pct::validate;
///
/// assert!(validate("%C2%A0").is_ok());
/// assert_eq!(validate("a%zz").unwrap_err().index(), 1);
/// assert_eq!(validate("%2d%").unwrap_err().index(), 3);
/// ```
pub fn validate(s: &str) -> Result<(), ValidateError> {
    match first_invalid_octet(s.as_bytes()) {
        None => Ok(()),
        Some(index) => Err(ValidateError { index }),
    }
}

const fn first_invalid_octet(s: &[u8]) -> Option<usize> {
    let mut i = 0;
    while i < s.len() {
        if s[i] == b'%' {
            if i + 2 >= s.len() {
                return Some(i);
            }
            if !(table::HEXDIG.allows(s[i + 1]) && table::HEXDIG.allows(s[i + 2])) {
                return Some(i);
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    None
}

/// A string slice whose percent-encoded octets are all well-formed.
///
/// An `EncStr` is a `str` in which every `'%'` is followed by two
/// hexadecimal digits. It carries no further guarantee: the octets may
/// still decode to arbitrary bytes. Construction runs the strict
/// [`validate`] pass.
///
/// # Examples
///
/// ```
/// use iri_pct::{Component, EncStr};
///
/// let s = EncStr::new("caf%C3%A9")?;
/// assert_eq!(s.normalize(Component::Path), "café");
///
/// assert!(EncStr::new("50%").is_err());
/// # Ok::<_, iri_pct::ValidateError>(())
/// ```
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct EncStr {
    inner: str,
}

impl EncStr {
    #[ref_cast_custom]
    const fn new_validated(s: &str) -> &Self;

    /// An empty `EncStr` slice.
    pub const EMPTY: &'static Self = Self::new_validated("");

    /// Converts a string slice to an `EncStr` slice.
    ///
    /// An error is returned if the string contains a malformed
    /// percent-encoded octet.
    pub fn new(s: &str) -> Result<&Self, ValidateError> {
        validate(s)?;
        Ok(Self::new_validated(s))
    }

    /// Converts a string slice to an `EncStr` slice.
    ///
    /// # Panics
    ///
    /// Panics if the string contains a malformed percent-encoded octet.
    /// For a non-panicking variant, use [`new`](Self::new).
    #[must_use]
    pub const fn new_or_panic(s: &str) -> &Self {
        match first_invalid_octet(s.as_bytes()) {
            None => Self::new_validated(s),
            Some(_) => panic!("malformed percent-encoded octet"),
        }
    }

    /// Yields the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Returns the length of the `EncStr` slice in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Checks whether the `EncStr` slice is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Normalizes the slice as text of the given component.
    ///
    /// Equivalent to [`normalize`](crate::normalize) on the underlying
    /// string slice.
    #[must_use]
    pub fn normalize(&self, component: Component) -> String {
        norm::normalize(&self.inner, component)
    }
}

impl AsRef<str> for EncStr {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl PartialEq for EncStr {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl PartialEq<str> for EncStr {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        &self.inner == other
    }
}

impl PartialEq<EncStr> for str {
    #[inline]
    fn eq(&self, other: &EncStr) -> bool {
        self == &other.inner
    }
}

impl Eq for EncStr {}

impl hash::Hash for EncStr {
    #[inline]
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.inner.hash(state)
    }
}

impl Default for &EncStr {
    #[inline]
    fn default() -> Self {
        EncStr::EMPTY
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for EncStr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de: 'a, 'a> serde::Deserialize<'de> for &'a EncStr {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <&str>::deserialize(deserializer)?;
        EncStr::new(s).map_err(serde::de::Error::custom)
    }
}
