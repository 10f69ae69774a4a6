//! The escape scanner/decoder.
//!
//! A single left-to-right pass over the input: jump to the next backslash,
//! copy the bytes before it verbatim, classify what follows, and either
//! emit the replacement bytes or copy the unrecognized text through. The
//! cursor strictly advances on every step, so decoding is linear in the
//! input length and never backtracks past a consumed position.
//!
//! Output is accumulated in one growable `Vec<u8>` with the input length as
//! a capacity hint; short escapes shrink the text and a `\u{...}` escape
//! replaces at least four input bytes with at most four output bytes, so
//! the hint rarely reallocates.

use alloc::vec::Vec;

use bstr::ByteSlice;

use crate::{
    error::{EscapeError, EscapeErrorKind},
    options::{DecodeOptions, OnMalformed},
    utf8,
};

/// The highest code point is `U+10FFFF`, six hexadecimal digits, but
/// leading zeroes are allowed up to a total of eight.
const MAX_HEX_DIGITS: usize = 8;

/// The outcome of [`decode_with`]: the decoded bytes plus any diagnostics
/// recorded under [`OnMalformed::Collect`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// The decoded output. Ownership passes to the caller.
    pub bytes: Vec<u8>,
    /// One entry per malformed escape, in input order. Empty unless the
    /// decode ran with [`OnMalformed::Collect`].
    pub diagnostics: Vec<EscapeError>,
}

/// Decodes every escape sequence in `input`, copying malformed escapes and
/// non-escape bytes through unchanged.
///
/// This is the reference behavior: it never fails, and the output is valid
/// UTF-8 whenever the input's non-escape bytes were valid UTF-8 and every
/// escape was well formed. Use [`decode_with`] to surface malformed escapes
/// instead of silently passing them through.
///
/// ```rust
/// use descape::render_escapes;
///
/// assert_eq!(render_escapes(br"a\nb"), b"a\nb");
/// assert_eq!(render_escapes(br"\u{1F600}"), "😀".as_bytes());
/// assert_eq!(render_escapes(br"\u{GG}"), br"\u{GG}");
/// ```
#[must_use]
pub fn render_escapes(input: &[u8]) -> Vec<u8> {
    match decode_with(input, DecodeOptions::default()) {
        Ok(decoded) => decoded.bytes,
        Err(_) => unreachable!("pass-through decoding cannot fail"),
    }
}

/// Decodes every escape sequence in `input` under the given options.
///
/// With [`OnMalformed::Reject`] the first malformed `\u{...}` escape aborts
/// the decode; with [`OnMalformed::Collect`] malformed escapes are copied
/// through and reported in [`Decoded::diagnostics`].
///
/// # Errors
///
/// Returns the first [`EscapeError`] under [`OnMalformed::Reject`]; the
/// other policies always succeed.
///
/// ```rust
/// use descape::{DecodeOptions, EscapeErrorKind, OnMalformed, decode_with};
///
/// let options = DecodeOptions {
///     on_malformed: OnMalformed::Collect,
/// };
/// let decoded = decode_with(br"ok \u{} bad", options).unwrap();
/// assert_eq!(decoded.bytes, br"ok \u{} bad");
/// assert_eq!(decoded.diagnostics[0].kind, EscapeErrorKind::EmptyDigits);
/// assert_eq!(decoded.diagnostics[0].offset, 3);
/// ```
pub fn decode_with(input: &[u8], options: DecodeOptions) -> Result<Decoded, EscapeError> {
    Scanner::new(input, options.on_malformed).run()
}

/// Single-use scan state: one `Scanner` per decode call, consumed by
/// [`Scanner::run`]. The cursor always sits on the first byte not yet
/// copied or consumed.
struct Scanner<'src> {
    input: &'src [u8],
    cursor: usize,
    out: Vec<u8>,
    diagnostics: Vec<EscapeError>,
    on_malformed: OnMalformed,
}

impl<'src> Scanner<'src> {
    fn new(input: &'src [u8], on_malformed: OnMalformed) -> Self {
        Self {
            input,
            cursor: 0,
            out: Vec::with_capacity(input.len()),
            diagnostics: Vec::new(),
            on_malformed,
        }
    }

    fn run(mut self) -> Result<Decoded, EscapeError> {
        while let Some(found) = self.input[self.cursor..].find_byte(b'\\') {
            let slash = self.cursor + found;
            self.out.extend_from_slice(&self.input[self.cursor..slash]);
            self.step(slash)?;
        }
        self.out.extend_from_slice(&self.input[self.cursor..]);
        Ok(Decoded {
            bytes: self.out,
            diagnostics: self.diagnostics,
        })
    }

    /// Classifies and consumes the escape introduced by the backslash at
    /// `slash`. The bytes before `slash` have already been copied.
    fn step(&mut self, slash: usize) -> Result<(), EscapeError> {
        let Some(&next) = self.input.get(slash + 1) else {
            // Backslash at the very end of input: literal.
            self.out.push(b'\\');
            self.cursor = slash + 1;
            return Ok(());
        };

        if let Some(replacement) = simple_escape(next) {
            self.out.push(replacement);
            self.cursor = slash + 2;
            Ok(())
        } else if next == b'u' && self.input.get(slash + 2) == Some(&b'{') {
            self.unicode_escape(slash)
        } else {
            // Not a recognized escape (this includes upper-case `U`): the
            // backslash and the byte after it are both literal.
            self.out.extend_from_slice(&self.input[slash..slash + 2]);
            self.cursor = slash + 2;
            Ok(())
        }
    }

    /// Handles `\u{` at `slash`; the opening brace sits at `slash + 2`.
    fn unicode_escape(&mut self, slash: usize) -> Result<(), EscapeError> {
        let digit_start = slash + 3;
        match parse_braced_hex(&self.input[digit_start..]) {
            Ok((codepoint, digits)) => {
                self.out
                    .extend_from_slice(utf8::encode(codepoint).as_slice());
                self.cursor = digit_start + digits + 1; // past the `}`
                Ok(())
            }
            Err((kind, inspected)) => self.malformed(slash, digit_start + inspected, kind),
        }
    }

    /// Applies the malformed-escape policy to `input[start..end]`, the span
    /// from the backslash through the last byte inspected.
    fn malformed(
        &mut self,
        start: usize,
        end: usize,
        kind: EscapeErrorKind,
    ) -> Result<(), EscapeError> {
        let err = EscapeError {
            kind,
            offset: start,
        };
        match self.on_malformed {
            OnMalformed::Reject => return Err(err),
            OnMalformed::Collect => self.diagnostics.push(err),
            OnMalformed::PassThrough => {}
        }
        self.out.extend_from_slice(&self.input[start..end]);
        self.cursor = end;
        Ok(())
    }
}

/// Parses the digit run and closing brace of a delimited Unicode escape.
///
/// `rest` starts immediately after the opening brace. On success, returns
/// the code point and the number of digit bytes consumed; the closing brace
/// follows them. On failure, returns the error kind and how many bytes past
/// the opening brace were inspected, so the caller can copy the escape
/// through that point verbatim and resume after it.
fn parse_braced_hex(rest: &[u8]) -> Result<(u32, usize), (EscapeErrorKind, usize)> {
    let mut value: u32 = 0;
    let mut digits = 0usize;
    loop {
        match rest.get(digits) {
            None => return Err((EscapeErrorKind::Unterminated, digits)),
            Some(&b'}') if digits == 0 => return Err((EscapeErrorKind::EmptyDigits, 1)),
            Some(&b'}') => {
                if value > 0x0010_FFFF {
                    return Err((EscapeErrorKind::OutOfRange(value), digits + 1));
                }
                return Ok((value, digits));
            }
            Some(&b) => match ascii_hex_digit(b) {
                Some(_) if digits == MAX_HEX_DIGITS => {
                    return Err((EscapeErrorKind::TooManyDigits, digits + 1));
                }
                Some(d) => {
                    value = (value << 4) | u32::from(d);
                    digits += 1;
                }
                None => return Err((EscapeErrorKind::NonHexDigit(b), digits + 1)),
            },
        }
    }
}

/// The replacement byte for a short escape, if `b` introduces one.
#[inline]
fn simple_escape(b: u8) -> Option<u8> {
    match b {
        b'n' => Some(b'\n'),
        b'r' => Some(b'\r'),
        b't' => Some(b'\t'),
        b'"' => Some(b'"'),
        b'\\' => Some(b'\\'),
        _ => None,
    }
}

/// The value of an ASCII hexadecimal digit byte, upper or lower case.
#[inline]
fn ascii_hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
