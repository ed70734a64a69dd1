#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![cfg_attr(not(feature = "std"), no_std)]

//! Component-sensitive percent-encoding normalization for IRIs,
//! compliant with IETF [RFC 3987].
//!
//! [RFC 3987]: https://datatracker.ietf.org/doc/html/rfc3987/
//!
//! Given a piece of URI/IRI text and the [`Component`] it belongs to,
//! [`normalize`] produces the canonical internationalized form of that text:
//! percent-encoded octets that spell out characters allowed unescaped in the
//! component are decoded, while characters outside the allowed ranges are
//! percent-encoded. Reserved delimiters and unsafe octets are never
//! unescaped, so normalization cannot change how the surrounding IRI parses.
//!
//! ```
//! use iri_pct::{normalize, Component};
//!
//! // "é" may appear unescaped in an IRI path; "/" must stay escaped.
//! assert_eq!(normalize("caf%C3%A9%2Fbar", Component::Path), "café%2Fbar");
//!
//! // Private-use characters are allowed only in the query.
//! assert_eq!(normalize("\u{e000}", Component::Path), "%EE%80%80");
//! assert_eq!(normalize("\u{e000}", Component::Query), "\u{e000}");
//! ```
//!
//! Malformed percent-encoding never causes an error: a truncated or
//! non-hexadecimal escape is passed through unchanged, and escaped octet
//! sequences that do not form valid UTF-8 are kept escaped. Use [`validate`]
//! or [`EncStr`] to reject malformed input outright.
//!
//! # Feature flags
//!
//! All features except `std` are disabled by default.
//!
//! - `std`: Enables `std` support. Currently this only implies `impl-error`.
//!
//! - `impl-error`: Enables the [`Error`](std::error::Error) implementation
//!   for [`ValidateError`].
//!
//! - `serde`: Enables `serde` support for [`EncStr`].

extern crate alloc;
#[cfg(feature = "impl-error")]
extern crate std;

pub mod component;
pub mod range;

mod enc_str;
mod error;
mod fmt;
mod norm;
mod table;
mod utf8;

pub use component::Component;
pub use enc_str::{validate, EncStr};
pub use error::ValidateError;
pub use norm::{normalize, normalize_range};
