//! The escape/unescape normalization engine.

use crate::{
    component::Component,
    range, table,
    utf8::{self, Utf8Chunks},
};
use alloc::{string::String, vec::Vec};
use core::ops::Range;

const fn gen_octet_table(hi: bool) -> [u8; 256] {
    let mut out = [0xff; 256];
    let shift = (hi as u8) * 4;

    let mut i = 0;
    while i < 10 {
        out[(i + b'0') as usize] = i << shift;
        i += 1;
    }
    while i < 16 {
        out[(i - 10 + b'A') as usize] = i << shift;
        out[(i - 10 + b'a') as usize] = i << shift;
        i += 1;
    }
    out
}

static OCTET_TABLE_HI: &[u8; 256] = &gen_octet_table(true);
static OCTET_TABLE_LO: &[u8; 256] = &gen_octet_table(false);

/// Decodes a percent-encoded octet from its two hex digits.
fn decode_octet(mut hi: u8, mut lo: u8) -> Option<u8> {
    hi = OCTET_TABLE_HI[hi as usize];
    lo = OCTET_TABLE_LO[lo as usize];
    if hi & 1 == 0 && lo & 0x80 == 0 {
        Some(hi | lo)
    } else {
        None
    }
}

/// Normalizes the percent-encoding of `s` as text of the given component.
///
/// Equivalent to [`normalize_range`] over the whole string.
///
/// # Examples
///
/// ```
/// use iri_pct::{normalize, Component};
///
/// // Allowed characters are unescaped; "/" is reserved in a path.
/// assert_eq!(normalize("caf%C3%A9%2Fbar", Component::Path), "café%2Fbar");
///
/// // Characters outside the IRI ranges are escaped.
/// assert_eq!(normalize("a\u{ffff}b", Component::Path), "a%EF%BF%BFb");
///
/// // Malformed escapes are passed through unchanged.
/// assert_eq!(normalize("100%", Component::Query), "100%");
/// ```
#[must_use]
pub fn normalize(s: &str, component: Component) -> String {
    normalize_range(s, 0..s.len(), component)
}

/// Normalizes the percent-encoding of `s[range]` as text of the given component.
///
/// The engine makes a single left-to-right pass:
///
/// - A percent-encoded octet is kept verbatim if its hex digits are invalid
///   or if it decodes to a reserved delimiter of `component` or to an octet
///   that is unsafe to unescape; it is decoded if it spells out another
///   ASCII character; otherwise it starts a run of escaped octets that is
///   decoded as UTF-8, each resulting character being unescaped exactly when
///   RFC 3987 allows it in `component`. Escaped octets that do not form
///   valid UTF-8 stay escaped.
/// - An unencoded character outside the ranges allowed in `component` is
///   percent-encoded from its UTF-8 bytes.
/// - Everything else is copied through unchanged.
///
/// The function never fails on malformed input; see the crate-level
/// documentation.
///
/// # Panics
///
/// Panics if the range is out of bounds or does not lie on character
/// boundaries.
#[must_use]
pub fn normalize_range(s: &str, range: Range<usize>, component: Component) -> String {
    let span = &s[range];
    let bytes = span.as_bytes();
    let is_query = component.is_query();

    let mut out = String::with_capacity(bytes.len());
    let mut scratch = Vec::new();

    let mut i = 0;
    while i < bytes.len() {
        let x = bytes[i];
        if x == b'%' {
            if i + 2 >= bytes.len() {
                // Truncated escape at the end of the span.
                out.push('%');
                i += 1;
                continue;
            }
            match decode_octet(bytes[i + 1], bytes[i + 2]) {
                Some(v) if v == b'%'
                    || component.reserves(v)
                    || table::UNSAFE_TO_UNESCAPE.allows(v) =>
                {
                    out.push_str(&span[i..i + 3]);
                    i += 3;
                }
                Some(v) if v < 0x80 => {
                    out.push(v as char);
                    i += 3;
                }
                Some(v) => {
                    // The first octet of a possible UTF-8 sequence.
                    let start = i;
                    if scratch.capacity() == 0 {
                        scratch.reserve(bytes.len() - i);
                    }
                    scratch.clear();
                    scratch.push(v);
                    i += 3;
                    while i + 2 < bytes.len() && bytes[i] == b'%' {
                        match decode_octet(bytes[i + 1], bytes[i + 2]) {
                            Some(c) if c >= 0x80 => {
                                scratch.push(c);
                                i += 3;
                            }
                            _ => break,
                        }
                    }
                    flush_run(&scratch, &span[start..i], is_query, &mut out);
                }
                None => {
                    out.push_str(&span[i..i + 3]);
                    i += 3;
                }
            }
        } else if x >= 0x80 {
            let (cp, len) = utf8::next_code_point(bytes, i);
            if range::is_allowed_unescaped(cp, is_query) {
                out.push_str(&span[i..i + len]);
            } else {
                for &b in &bytes[i..i + len] {
                    table::escape_byte(b, &mut out);
                }
            }
            i += len;
        } else {
            out.push(x as char);
            i += 1;
        }
    }
    out
}

/// Flushes a run of escaped octets accumulated in the scratch buffer.
///
/// `src` is the escaped text the run was decoded from, used for verbatim
/// copy when the whole run is malformed.
fn flush_run(run: &[u8], src: &str, is_query: bool, out: &mut String) {
    let decoded_any = Utf8Chunks::new(run).any(|chunk| !chunk.valid().is_empty());
    if !decoded_any {
        out.push_str(src);
        return;
    }

    for chunk in Utf8Chunks::new(run) {
        for ch in chunk.valid().chars() {
            if range::is_allowed_unescaped(ch as u32, is_query) {
                out.push(ch);
            } else {
                let mut buf = [0; 4];
                for &b in ch.encode_utf8(&mut buf).as_bytes() {
                    table::escape_byte(b, out);
                }
            }
        }
        // Bytes the decoder could not attribute to a character stay escaped.
        for &b in chunk.invalid() {
            table::escape_byte(b, out);
        }
    }
}
