use alloc::vec;
use alloc::vec::Vec;

use rstest::rstest;

use super::collect_codes;
use crate::{Decoder, DecoderOptions, Utf8Decoder};

#[rstest]
#[case::empty(b"", vec![])]
#[case::sanity(b"abc123", vec![97, 98, 99, 49, 50, 51])]
#[case::multibyte(
    b"\xE5\x8F\xA4\xE6\xB1\xA0\xE3\x82\x84\xE8\x9B\x99\xE9\xA3\x9B\xE3\x81\xB3\xE8\xBE\xBC\xE3\x82\x80\xE6\xB0\xB4\xE3\x81\xAE\xE9\x9F\xB3",
    vec![21476, 27744, 12420, 34521, 39131, 12403, 36796, 12416, 27700, 12398, 38899],
)]
#[case::mixed(
    b"\x7A\xC2\xA2\xE6\xB0\xB4\xF0\x9D\x84\x9E\xEF\xA3\xBF\xF4\x8F\xBF\xBD\xEF\xBF\xBE",
    vec![122, 162, 27700, 119070, 63743, 1114109, 65534],
)]
#[case::invalid_code(b"\xFF", vec![65533])]
#[case::ends_early(b"\xC0", vec![65533])]
#[case::ends_early_2(b"\xE0", vec![65533])]
#[case::invalid_trail(b"\xC0\x00", vec![65533, 0])]
#[case::invalid_trail_2(b"\xC0\xC0", vec![65533, 65533])]
#[case::invalid_trail_3(b"\xE0\x00", vec![65533, 0])]
#[case::invalid_trail_4(b"\xE0\xC0", vec![65533, 65533])]
#[case::invalid_trail_5(b"\xE0\x80\x00", vec![65533, 65533, 0])]
#[case::invalid_trail_6(b"\xE0\x80\xC0", vec![65533, 65533, 65533])]
#[case::beyond_unicode(b"\xFC\x80\x80\x80\x80\x80", vec![65533; 6])]
#[case::obsolete_lead(b"\xFE\x80\x80\x80\x80\x80", vec![65533; 6])]
#[case::overlong_nul_2(b"\xC0\x80", vec![65533, 65533])]
#[case::overlong_nul_3(b"\xE0\x80\x80", vec![65533; 3])]
#[case::overlong_nul_4(b"\xF0\x80\x80\x80", vec![65533; 4])]
#[case::overlong_del_2(b"\xC1\xBF", vec![65533, 65533])]
#[case::overlong_del_3(b"\xE0\x81\xBF", vec![65533; 3])]
#[case::overlong_del_4(b"\xF0\x80\x81\xBF", vec![65533; 4])]
#[case::overlong_07ff(b"\xE0\x9F\xBF", vec![65533; 3])]
#[case::overlong_ffff(b"\xF0\x8F\xBF\xBF", vec![65533; 4])]
#[case::lead_surrogate(b"\xED\xA0\x80", vec![65533; 3])]
#[case::trail_surrogate(b"\xED\xB0\x80", vec![65533; 3])]
#[case::surrogate_pair(b"\xED\xA0\x80\xED\xB0\x80", vec![65533; 6])]
#[case::trailing_continuation(b"\x0A\x80\x80", vec![10, 65533, 65533])]
#[case::trailing_continuation_2(b"\xE5\x8F\xA4\x80", vec![21476, 65533])]
fn decode(#[case] input: &[u8], #[case] expected: Vec<u32>) {
    let mut decoder = Utf8Decoder::new(input, DecoderOptions::default());
    let mut position = 0;
    let mut out = Vec::new();
    while let Some(code_point) = decoder.next_code().unwrap() {
        position += 1;
        assert_eq!(decoder.pos_char(), position);
        out.push(code_point);
    }
    assert_eq!(out, expected);
    assert_eq!(decoder.pos_byte(), input.len());
}

/// The overlong form of U+0000 must not smuggle a NUL through: only the
/// first byte is consumed per error, per the one-byte-at-a-time recovery.
#[test]
fn overlong_consumes_one_byte() {
    let mut decoder = Utf8Decoder::new(b"\xC0\x80", DecoderOptions::default());
    assert_eq!(decoder.next_code(), Ok(Some(0xFFFD)));
    assert_eq!(decoder.pos_byte(), 1);
    assert_eq!(decoder.next_code(), Ok(Some(0xFFFD)));
    assert_eq!(decoder.pos_byte(), 2);
}

#[test]
fn surrogates_tolerated_on_request() {
    let options = DecoderOptions { allow_surrogates: true, ..Default::default() };
    let mut decoder = Utf8Decoder::new(b"\xED\xA0\x80", options);
    assert_eq!(collect_codes(&mut decoder), vec![0xD800]);
    // but a surrogate is not a char
    decoder.rewind();
    assert_eq!(decoder.next_char(), Ok(Some('\u{FFFD}')));
}

#[test]
fn bom_is_skipped_and_uncounted() {
    let mut decoder = Utf8Decoder::new(b"\xEF\xBB\xBF\x41", DecoderOptions::default());
    assert_eq!(decoder.pos_byte(), 3);
    assert_eq!(collect_codes(&mut decoder), vec![0x41]);
    assert_eq!(decoder.pos_char(), 1);
    decoder.rewind();
    assert_eq!(decoder.pos_byte(), 3);
}

#[test]
fn fatal_mode_reports_offsets() {
    let options = DecoderOptions { fatal: true, ..Default::default() };
    let mut decoder = Utf8Decoder::new(b"ab\xE0\x80z", options);
    assert_eq!(decoder.next_code(), Ok(Some(0x61)));
    assert_eq!(decoder.next_code(), Ok(Some(0x62)));
    let err = decoder.next_code().unwrap_err();
    assert_eq!(err.char_offset, 2);
    assert_eq!(err.byte_offset, 2);
    // the confirmed-invalid lead was consumed; the stray continuation
    // byte errors separately, then decoding resumes
    assert_eq!(decoder.pos_byte(), 3);
    assert!(decoder.next_code().is_err());
    assert_eq!(decoder.next_code(), Ok(Some(0x7A)));
    assert_eq!(decoder.pos_err(), Some(3));
}
