use thiserror::Error;

/// A malformed `\u{...}` escape, tagged with its position in the input.
///
/// Produced only under [`OnMalformed::Reject`] and [`OnMalformed::Collect`];
/// the default pass-through policy copies malformed text to the output
/// without reporting.
///
/// [`OnMalformed::Reject`]: crate::OnMalformed::Reject
/// [`OnMalformed::Collect`]: crate::OnMalformed::Collect
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at byte {offset}")]
pub struct EscapeError {
    /// What went wrong inside the escape.
    pub kind: EscapeErrorKind,
    /// Byte offset of the introducing backslash.
    pub offset: usize,
}

/// The ways a delimited Unicode escape can be malformed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeErrorKind {
    /// `\u{}` — no digits between the braces.
    #[error("empty unicode escape")]
    EmptyDigits,
    /// A byte that is neither a hex digit nor `}` inside the braces.
    #[error("invalid hex digit {0:#04x} in unicode escape")]
    NonHexDigit(u8),
    /// A ninth digit before the closing brace.
    #[error("unicode escape exceeds 8 digits")]
    TooManyDigits,
    /// Input ended before the closing brace.
    #[error("unterminated unicode escape")]
    Unterminated,
    /// The parsed value is above `U+10FFFF`.
    #[error("codepoint {0:#x} out of range")]
    OutOfRange(u32),
}
