//! Byte class tables from RFC 3986, plus the unescape-safety class.
//!
//! The class constants are documented with the ABNF notation of [RFC 5234]
//! where one exists.
//!
//! [RFC 5234]: https://datatracker.ietf.org/doc/html/rfc5234

use alloc::string::String;

const fn gen_hex_table() -> [u8; 512] {
    const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

    let mut i = 0;
    let mut out = [0; 512];
    while i < 256 {
        out[i * 2] = HEX_DIGITS[i >> 4];
        out[i * 2 + 1] = HEX_DIGITS[i & 0b1111];
        i += 1;
    }
    out
}

const HEX_TABLE: &[u8; 512] = &gen_hex_table();

/// Appends the uppercase percent-encoded triple for a byte.
pub(crate) fn escape_byte(x: u8, buf: &mut String) {
    buf.push('%');
    buf.push(HEX_TABLE[x as usize * 2] as char);
    buf.push(HEX_TABLE[x as usize * 2 + 1] as char);
}

/// A table determining which bytes belong to a class.
#[derive(Clone, Copy)]
pub(crate) struct Table {
    arr: [bool; 256],
}

impl Table {
    /// Generates a table containing exactly the given bytes.
    pub(crate) const fn gen(mut bytes: &[u8]) -> Table {
        let mut arr = [false; 256];
        while let [cur, rem @ ..] = bytes {
            arr[*cur as usize] = true;
            bytes = rem;
        }
        Table { arr }
    }

    /// Generates a table containing the inclusive byte range `[lo, hi]`.
    pub(crate) const fn gen_range(lo: u8, hi: u8) -> Table {
        let mut arr = [false; 256];
        let mut i = lo as usize;
        while i <= hi as usize {
            arr[i] = true;
            i += 1;
        }
        Table { arr }
    }

    /// Combines two tables into one.
    ///
    /// Returns a new table containing all the bytes contained
    /// either in `self` or in `other`.
    pub(crate) const fn or(mut self, other: &Table) -> Table {
        let mut i = 0;
        while i < 256 {
            self.arr[i] |= other.arr[i];
            i += 1;
        }
        self
    }

    /// Returns `true` if the given byte belongs to the class.
    #[inline]
    pub(crate) const fn allows(&self, x: u8) -> bool {
        self.arr[x as usize]
    }
}

const fn gen(bytes: &[u8]) -> Table {
    Table::gen(bytes)
}

/// HEXDIG = DIGIT / "A" / "B" / "C" / "D" / "E" / "F"
///                / "a" / "b" / "c" / "d" / "e" / "f"
pub(crate) const HEXDIG: &Table = &gen(b"0123456789ABCDEFabcdef");

/// gen-delims = ":" / "/" / "?" / "#" / "[" / "]" / "@"
pub(crate) const GEN_DELIMS: &Table = &gen(b":/?#[]@");

/// sub-delims = "!" / "$" / "&" / "'" / "(" / ")"
///            / "*" / "+" / "," / ";" / "="
pub(crate) const SUB_DELIMS: &Table = &gen(b"!$&'()*+,;=");

/// reserved = gen-delims / sub-delims
pub(crate) const RESERVED: &Table = &GEN_DELIMS.or(SUB_DELIMS);

/// Octets that are never unescaped: the C0 controls, DEL and the C1 range,
/// the reserved delimiters, "%" and "\\".
///
/// Unescaping any of these could change how the surrounding IRI parses,
/// so a triple decoding to one of them is always kept verbatim.
pub(crate) const UNSAFE_TO_UNESCAPE: &Table = &Table::gen_range(0x00, 0x1f)
    .or(&Table::gen_range(0x7f, 0x9f))
    .or(RESERVED)
    .or(&gen(b"%\\"));
