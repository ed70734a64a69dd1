//! URI/IRI component tags.

use crate::table;

/// Identifies the URI/IRI component a piece of text belongs to.
///
/// The tag decides which delimiters must stay percent-encoded during
/// normalization and whether private-use characters are allowed unescaped
/// (they are in the [query] only).
///
/// [query]: Component::Query
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Component {
    /// The [scheme] component.
    ///
    /// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.1
    Scheme,
    /// The [userinfo] subcomponent of the authority.
    ///
    /// [userinfo]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.1
    Userinfo,
    /// The [host] subcomponent of the authority.
    ///
    /// [host]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.2
    Host,
    /// The [port] subcomponent of the authority.
    ///
    /// [port]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.3
    Port,
    /// The [path] component.
    ///
    /// [path]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.3
    Path,
    /// The [query] component.
    ///
    /// [query]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.4
    Query,
    /// The [fragment] component.
    ///
    /// [fragment]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.5
    Fragment,
    /// Text not attributed to any particular component.
    ///
    /// Only the gen-delims are treated as reserved; everything else
    /// follows the common rules.
    None,
}

impl Component {
    /// Returns `true` if the `iprivate` ranges apply to this component.
    #[inline]
    pub(crate) fn is_query(self) -> bool {
        matches!(self, Component::Query)
    }

    /// Checks whether an octet is a reserved delimiter for this component,
    /// which a normalizer must never unescape.
    pub(crate) fn reserves(self, x: u8) -> bool {
        match self {
            Component::None => table::GEN_DELIMS.allows(x),
            _ => table::RESERVED.allows(x),
        }
    }
}
