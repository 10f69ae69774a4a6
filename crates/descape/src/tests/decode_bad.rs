use rstest::rstest;

use crate::{
    DecodeOptions, EscapeErrorKind, OnMalformed, decode_with, render_escapes,
};

fn reject() -> DecodeOptions {
    DecodeOptions {
        on_malformed: OnMalformed::Reject,
    }
}

fn collect() -> DecodeOptions {
    DecodeOptions {
        on_malformed: OnMalformed::Collect,
    }
}

#[rstest]
#[case::empty_digits(br"\u{}")]
#[case::non_hex(br"\u{GG}")]
#[case::out_of_range(br"\u{110000}")]
#[case::nine_digits(br"\u{123456789}")]
#[case::unterminated(br"\u{12")]
#[case::unterminated_no_digits(br"\u{")]
#[case::escape_inside_braces(br"\u{\n}")]
fn malformed_escapes_pass_through(#[case] input: &[u8]) {
    assert_eq!(render_escapes(input), input);
}

#[rstest]
#[case(br"ab\u{}", EscapeErrorKind::EmptyDigits, 2)]
#[case(br"\u{12G4}", EscapeErrorKind::NonHexDigit(b'G'), 0)]
#[case(br"x\u{110000}", EscapeErrorKind::OutOfRange(0x0011_0000), 1)]
#[case(br"\u{000000041}", EscapeErrorKind::TooManyDigits, 0)]
#[case(br"tail\u{2615", EscapeErrorKind::Unterminated, 4)]
fn reject_reports_kind_and_offset(
    #[case] input: &[u8],
    #[case] kind: EscapeErrorKind,
    #[case] offset: usize,
) {
    let err = decode_with(input, reject()).unwrap_err();
    assert_eq!(err.kind, kind);
    assert_eq!(err.offset, offset);
}

#[test]
fn reject_stops_at_first_malformed_escape() {
    let err = decode_with(br"\u{} then \u{gg}", reject()).unwrap_err();
    assert_eq!(err.kind, EscapeErrorKind::EmptyDigits);
    assert_eq!(err.offset, 0);
}

#[test]
fn reject_still_decodes_clean_input() {
    let decoded = decode_with(br"a\tb \u{e9}", reject()).unwrap();
    assert_eq!(decoded.bytes, "a\tb \u{e9}".as_bytes());
    assert!(decoded.diagnostics.is_empty());
}

#[test]
fn collect_reports_every_malformed_escape() {
    let decoded = decode_with(br"x \u{} y \u{110000} z", collect()).unwrap();
    assert_eq!(decoded.bytes, br"x \u{} y \u{110000} z");

    let kinds: alloc::vec::Vec<_> = decoded
        .diagnostics
        .iter()
        .map(|err| (err.kind, err.offset))
        .collect();
    assert_eq!(
        kinds,
        [
            (EscapeErrorKind::EmptyDigits, 2),
            (EscapeErrorKind::OutOfRange(0x0011_0000), 9),
        ]
    );
}

#[test]
fn collect_decodes_escapes_around_malformed_ones() {
    let decoded = decode_with(br"\u{41}\u{}\u{42}", collect()).unwrap();
    assert_eq!(decoded.bytes, br"A\u{}B");
    assert_eq!(decoded.diagnostics.len(), 1);
    assert_eq!(decoded.diagnostics[0].offset, 6);
}

#[test]
fn unrecognized_escapes_are_not_diagnosed() {
    // `\x` and a trailing backslash are literal text in every mode, not
    // malformed escapes.
    let decoded = decode_with(br"\x41 and \q and \", collect()).unwrap();
    assert_eq!(decoded.bytes, br"\x41 and \q and \");
    assert!(decoded.diagnostics.is_empty());

    assert!(decode_with(br"\x41 \", reject()).is_ok());
}

#[test]
fn error_displays_position() {
    use alloc::string::ToString;

    let err = decode_with(br"ab\u{}", reject()).unwrap_err();
    assert_eq!(err.to_string(), "empty unicode escape at byte 2");
}

#[test]
fn resumes_after_the_last_inspected_byte() {
    // The inner backslash is the non-hex byte; scanning resumes after it,
    // so the following `n}` is plain literal text.
    let decoded = decode_with(br"\u{\n} ok \u{41}", collect()).unwrap();
    assert_eq!(decoded.bytes, br"\u{\n} ok A");
    assert_eq!(decoded.diagnostics.len(), 1);
    assert_eq!(
        decoded.diagnostics[0].kind,
        EscapeErrorKind::NonHexDigit(b'\\')
    );
}
