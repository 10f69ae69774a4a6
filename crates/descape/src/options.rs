/// Configuration options for the escape decoder.
///
/// The only knob is what to do when a `\u{...}` escape is malformed:
/// text such as `\u{}`, `\u{GG}`, a digit run longer than eight, a value
/// above `U+10FFFF`, or an unterminated `\u{` at end of input.
///
/// # Default
///
/// Malformed escapes pass through to the output verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecodeOptions {
    /// Policy for malformed `\u{...}` escapes.
    ///
    /// A backslash followed by a byte that introduces no escape at all
    /// (for example `\x`) is not governed by this policy: both bytes are
    /// always copied through literally.
    pub on_malformed: OnMalformed,
}

/// What the decoder does with a malformed `\u{...}` escape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OnMalformed {
    /// Copy the malformed text to the output unchanged and keep going.
    ///
    /// This is the reference behavior: decoding always succeeds and the
    /// output is best-effort. Silent pass-through can mask corrupted data,
    /// so production callers validating untrusted input should prefer one
    /// of the stricter policies.
    #[default]
    PassThrough,
    /// Stop at the first malformed escape and return its diagnostic.
    Reject,
    /// Copy the malformed text through like [`OnMalformed::PassThrough`],
    /// but record a diagnostic for each occurrence in
    /// [`Decoded::diagnostics`].
    ///
    /// [`Decoded::diagnostics`]: crate::Decoded::diagnostics
    Collect,
}
