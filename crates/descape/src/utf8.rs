//! Encoding a Unicode code point into its UTF-8 byte sequence.
//!
//! [`encode`] is the leaf of the decoding pipeline: pure arithmetic, no
//! allocation, called once per valid `\u{...}` escape. The result is held
//! in a fixed four-byte buffer ([`Utf8Bytes`]) together with its length.

/// The UTF-8 encoding of a single code point: one to four bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf8Bytes {
    bytes: [u8; 4],
    len: u8,
}

impl Utf8Bytes {
    /// The encoded bytes.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// Number of bytes in the encoding (1–4).
    #[must_use]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Always `false`; present to satisfy the `len`/`is_empty` pairing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl AsRef<[u8]> for Utf8Bytes {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl IntoIterator for Utf8Bytes {
    type Item = u8;
    type IntoIter = core::iter::Take<core::array::IntoIter<u8, 4>>;

    fn into_iter(self) -> Self::IntoIter {
        self.bytes.into_iter().take(self.len as usize)
    }
}

/// A continuation byte: the low six bits of `value` under a `10` prefix.
#[inline]
fn trailing_byte(value: u32) -> u8 {
    ((value & 0b11_1111) | 0b1000_0000) as u8
}

/// Encodes a Unicode code point as UTF-8.
///
/// The caller must have range-checked the value already; surrogate code
/// points are not rejected and encode to their three-byte pattern.
///
/// # Panics
///
/// Panics if `codepoint` exceeds `0x10FFFF`. Reaching the panic is a caller
/// bug, not an input error: untrusted escape payloads are range-checked by
/// the decoder before they get here.
///
/// ```rust
/// use descape::encode;
///
/// assert_eq!(encode(0x41).as_slice(), b"A");
/// assert_eq!(encode(0x2615).as_slice(), "☕".as_bytes());
/// ```
#[must_use]
pub fn encode(codepoint: u32) -> Utf8Bytes {
    assert!(codepoint <= 0x0010_FFFF, "invalid codepoint {codepoint:#x}");

    let (bytes, len) = if codepoint < 0x80 {
        ([codepoint as u8, 0, 0, 0], 1)
    } else if codepoint < 0x800 {
        (
            [
                ((codepoint >> 6) & 0b1_1111) as u8 | 0b1100_0000,
                trailing_byte(codepoint),
                0,
                0,
            ],
            2,
        )
    } else if codepoint < 0x1_0000 {
        (
            [
                ((codepoint >> 12) & 0b1111) as u8 | 0b1110_0000,
                trailing_byte(codepoint >> 6),
                trailing_byte(codepoint),
                0,
            ],
            3,
        )
    } else {
        (
            [
                ((codepoint >> 18) & 0b111) as u8 | 0b1111_0000,
                trailing_byte(codepoint >> 12),
                trailing_byte(codepoint >> 6),
                trailing_byte(codepoint),
            ],
            4,
        )
    };

    Utf8Bytes { bytes, len }
}
