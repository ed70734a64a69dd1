//! Unicode scalar ranges from RFC 3987.

/// Checks whether a scalar value matches the [`ucschar`] ABNF rule.
///
/// These are the code points that RFC 3987 permits unescaped in any
/// IRI component.
///
/// [`ucschar`]: https://datatracker.ietf.org/doc/html/rfc3987#section-2.2
#[must_use]
pub const fn is_ucschar(x: u32) -> bool {
    matches!(x, 0xa0..=0xd7ff | 0xf900..=0xfdcf | 0xfdf0..=0xffef)
        || (x >= 0x10000 && x <= 0xdffff && (x & 0xffff) <= 0xfffd)
        || (x >= 0xe1000 && x <= 0xefffd)
}

/// Checks whether a scalar value matches the [`iprivate`] ABNF rule.
///
/// These are the private-use code points that RFC 3987 permits unescaped
/// only within the query component.
///
/// [`iprivate`]: https://datatracker.ietf.org/doc/html/rfc3987#section-2.2
#[must_use]
pub const fn is_iprivate(x: u32) -> bool {
    matches!(x, 0xe000..=0xf8ff) || (x >= 0xf0000 && x <= 0x10fffd && (x & 0xffff) <= 0xfffd)
}

/// Checks whether a scalar value may be left unescaped in a component.
pub(crate) const fn is_allowed_unescaped(x: u32, is_query: bool) -> bool {
    is_ucschar(x) || (is_query && is_iprivate(x))
}
