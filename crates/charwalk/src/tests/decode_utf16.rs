use alloc::vec;
use alloc::vec::Vec;

use rstest::rstest;

use super::collect_codes;
use crate::{Decoder, DecoderOptions, Utf16BeDecoder, Utf16LeDecoder};

fn tolerant() -> DecoderOptions {
    DecoderOptions { allow_surrogates: true, ..Default::default() }
}

#[rstest]
#[case::empty(b"", vec![], vec![])]
#[case::sanity(
    b"\x61\x00\x62\x00\x63\x00\x31\x00\x32\x00\x33\x00",
    vec![97, 98, 99, 49, 50, 51],
    vec![97, 98, 99, 49, 50, 51],
)]
#[case::mixed(
    b"\x7A\x00\xA2\x00\x34\x6C\x34\xD8\x1E\xDD\xFF\xF8\xFF\xDB\xFD\xDF\xFE\xFF",
    vec![122, 162, 27700, 119070, 63743, 1114109, 65534],
    vec![122, 162, 27700, 119070, 63743, 1114109, 65534],
)]
#[case::eof_in_bmp(b"\x00\x00\xFF", vec![0, 65533], vec![0, 65533])]
#[case::eof_after_lead(b"\x00\x00\x34\xD8", vec![0, 65533], vec![0, 65533])]
#[case::eof_in_trail(b"\x00\x00\x34\xD8\x1E", vec![0, 65533], vec![0, 65533])]
#[case::lead_without_trail(b"\x34\xD8\x00\x00", vec![65533, 0], vec![0xD834, 0])]
#[case::trail_without_lead(b"\x1E\xDD\x00\x00", vec![65533, 0], vec![0xDD1E, 0])]
#[case::double_lead(
    b"\x34\xD8\x34\xD8\x1E\xDD",
    vec![65533, 119070],
    vec![0xD834, 119070],
)]
#[case::double_trail(
    b"\x34\xD8\x1E\xDD\x1E\xDD",
    vec![119070, 65533],
    vec![119070, 0xDD1E],
)]
fn decode_le(
    #[case] input: &[u8],
    #[case] strict: Vec<u32>,
    #[case] relaxed: Vec<u32>,
) {
    let mut decoder = Utf16LeDecoder::new(input, DecoderOptions::default());
    assert_eq!(collect_codes(&mut decoder), strict);
    assert_eq!(decoder.pos_byte(), input.len());
    let mut decoder = Utf16LeDecoder::new(input, tolerant());
    assert_eq!(collect_codes(&mut decoder), relaxed);
}

#[test]
fn decode_be() {
    let input = b"\x00\x7A\x00\xA2\x6C\x34\xD8\x34\xDD\x1E\xF8\xFF\xDB\xFF\xDF\xFD\xFF\xFE";
    let mut decoder = Utf16BeDecoder::new(input, DecoderOptions::default());
    assert_eq!(
        collect_codes(&mut decoder),
        vec![122, 162, 27700, 119070, 63743, 1114109, 65534],
    );
}

#[test]
fn lone_surrogate_scenario() {
    // D834 0000 big-endian: a lead surrogate with a BMP unit after it
    let input = b"\xD8\x34\x00\x00";
    let mut decoder = Utf16BeDecoder::new(input, DecoderOptions::default());
    assert_eq!(collect_codes(&mut decoder), vec![0xFFFD, 0x0000]);
    let mut decoder = Utf16BeDecoder::new(input, tolerant());
    assert_eq!(collect_codes(&mut decoder), vec![0xD834, 0x0000]);
}

#[rstest]
#[case::be(true)]
#[case::le(false)]
fn matching_bom_is_skipped(#[case] big_endian: bool) {
    let input: &[u8] = if big_endian { b"\xFE\xFF\x00\x41" } else { b"\xFF\xFE\x41\x00" };
    let codes = if big_endian {
        let mut decoder = Utf16BeDecoder::new(input, DecoderOptions::default());
        assert_eq!(decoder.pos_byte(), 2);
        collect_codes(&mut decoder)
    } else {
        let mut decoder = Utf16LeDecoder::new(input, DecoderOptions::default());
        assert_eq!(decoder.pos_byte(), 2);
        collect_codes(&mut decoder)
    };
    assert_eq!(codes, vec![0x41]);
}

#[test]
fn mismatched_bom_decodes_as_character() {
    // a little-endian mark read as big-endian is U+FFFE, not a marker
    let mut decoder = Utf16BeDecoder::new(b"\xFF\xFE\x00\x41", DecoderOptions::default());
    assert_eq!(decoder.pos_byte(), 0);
    assert_eq!(collect_codes(&mut decoder), vec![0xFFFE, 0x41]);
}

#[test]
fn seek_back_over_malformed_units() {
    // FFFD ('A') FFFD ('B') with the errors recorded as marks
    let input = b"\xD8\x34\x00\x41\xDC\x00\x00\x42";
    let mut decoder = Utf16BeDecoder::new(input, DecoderOptions::default());
    assert_eq!(collect_codes(&mut decoder), vec![0xFFFD, 0x41, 0xFFFD, 0x42]);
    assert_eq!(decoder.seek(-1), Ok(0));
    assert_eq!((decoder.pos_char(), decoder.pos_byte()), (3, 6));
    assert_eq!(decoder.seek(-2), Ok(0));
    assert_eq!((decoder.pos_char(), decoder.pos_byte()), (1, 2));
    assert_eq!(decoder.next_code(), Ok(Some(0x41)));
    assert_eq!(decoder.seek(-2), Ok(0));
    assert_eq!((decoder.pos_char(), decoder.pos_byte()), (0, 0));
    assert_eq!(decoder.next_code(), Ok(Some(0xFFFD)));
}

#[test]
fn dirty_eof_is_one_character() {
    let mut decoder = Utf16LeDecoder::new(b"\x41\x00\x34\xD8\x1E", DecoderOptions::default());
    assert_eq!(collect_codes(&mut decoder), vec![0x41, 0xFFFD]);
    assert_eq!(decoder.pos_byte(), 5);
    // stepping back over the three dirty bytes lands on their start
    assert_eq!(decoder.seek(-1), Ok(0));
    assert_eq!((decoder.pos_char(), decoder.pos_byte()), (1, 2));
}
