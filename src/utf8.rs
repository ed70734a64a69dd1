//! UTF-8 utilities.

use core::str;

#[inline]
const fn cont(byte: u8) -> u32 {
    (byte & 0b0011_1111) as u32
}

/// Reads the scalar value starting at byte index `i`.
///
/// Returns the value and its encoded length. The bytes must be valid UTF-8
/// with a character boundary at `i`.
#[inline]
pub(crate) const fn next_code_point(bytes: &[u8], i: usize) -> (u32, usize) {
    let x = bytes[i];
    if x < 0x80 {
        (x as u32, 1)
    } else if x < 0xe0 {
        (((x & 0x1f) as u32) << 6 | cont(bytes[i + 1]), 2)
    } else if x < 0xf0 {
        (
            ((x & 0x0f) as u32) << 12 | cont(bytes[i + 1]) << 6 | cont(bytes[i + 2]),
            3,
        )
    } else {
        (
            ((x & 0x07) as u32) << 18
                | cont(bytes[i + 1]) << 12
                | cont(bytes[i + 2]) << 6
                | cont(bytes[i + 3]),
            4,
        )
    }
}

/// A chunk of a byte slice: a maximal valid UTF-8 run followed by
/// an invalid subsequence.
pub(crate) struct Utf8Chunk<'a> {
    valid: &'a str,
    invalid: &'a [u8],
}

impl<'a> Utf8Chunk<'a> {
    pub(crate) fn valid(&self) -> &'a str {
        self.valid
    }

    pub(crate) fn invalid(&self) -> &'a [u8] {
        self.invalid
    }
}

/// An iterator decoding a byte slice as UTF-8 without replacement:
/// invalid subsequences are yielded as raw bytes, never as U+FFFD.
pub(crate) struct Utf8Chunks<'a> {
    source: &'a [u8],
}

impl<'a> Utf8Chunks<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self { source: bytes }
    }
}

impl<'a> Iterator for Utf8Chunks<'a> {
    type Item = Utf8Chunk<'a>;

    fn next(&mut self) -> Option<Utf8Chunk<'a>> {
        if self.source.is_empty() {
            return None;
        }

        match str::from_utf8(self.source) {
            Ok(valid) => {
                self.source = &[];
                Some(Utf8Chunk { valid, invalid: &[] })
            }
            Err(e) => {
                let (valid, rem) = self.source.split_at(e.valid_up_to());
                let invalid_len = match e.error_len() {
                    Some(len) => len,
                    // Truncated sequence at the end of input.
                    None => rem.len(),
                };
                let (invalid, rem) = rem.split_at(invalid_len);
                self.source = rem;

                Some(Utf8Chunk {
                    // Valid up to the split point.
                    valid: str::from_utf8(valid).unwrap_or(""),
                    invalid,
                })
            }
        }
    }
}
