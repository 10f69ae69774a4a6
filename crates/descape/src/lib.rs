//! Decoding of backslash escape sequences embedded in byte buffers.
//!
//! The input is a byte buffer containing text in which escape sequences may
//! appear. Two families are recognized:
//!
//! - short character escapes `\n`, `\r`, `\t`, `\"`, and `\\`, and
//! - delimited Unicode escapes `\u{HEX}` with one to eight hexadecimal
//!   digits (either case) naming a code point up to `U+10FFFF`.
//!
//! [`render_escapes`] resolves every recognized escape into its literal
//! UTF-8 encoding and copies all other bytes through unchanged. Text that
//! merely looks like an escape (`\u{}`, `\u{GG}`, an unterminated `\u{` at
//! end of input) degrades to literal output rather than failing the whole
//! decode. [`decode_with`] offers stricter policies via [`DecodeOptions`]:
//! malformed escapes can be rejected outright or collected as
//! position-tagged diagnostics alongside the best-effort output.
//!
//! ```rust
//! use descape::render_escapes;
//!
//! let out = render_escapes(br"three\tfour \u{2615}");
//! assert_eq!(out, "three\tfour ☕".as_bytes());
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod decoder;
mod error;
mod options;
mod utf8;

#[cfg(test)]
mod tests;

pub use decoder::{Decoded, decode_with, render_escapes};
pub use error::{EscapeError, EscapeErrorKind};
pub use options::{DecodeOptions, OnMalformed};
pub use utf8::{Utf8Bytes, encode};
