use alloc::vec;
use alloc::vec::Vec;

use rstest::rstest;

use super::collect_codes;
use crate::{
    Big5Decoder, Decoder, DecoderOptions, EucJpDecoder, EucKrDecoder, Encoding, GbDecoder,
    ReplacementDecoder, ShiftJisDecoder, XUserDefinedDecoder,
};

#[rstest]
#[case::ascii_and_80(b"a\x80", vec![0x61, 0x80])]
#[case::hiragana(b"\x82\xA0\x82\xA2", vec![0x3042, 0x3044])]
#[case::half_width_katakana(b"\xB1\xB2", vec![0xFF71, 0xFF72])]
#[case::wave_dash_mapping(b"\x81\x60", vec![0xFF5E])]
#[case::end_user_defined(b"\xF0\x40", vec![0xE000])]
#[case::truncated_lead(b"\x82", vec![0xFFFD])]
#[case::ascii_trail_reprocessed(b"\x82\x20", vec![0xFFFD, 0x20])]
#[case::unmapped_pointer(b"\x81\xAD", vec![0xFFFD])]
#[case::stray_high_bytes(b"\xFD\xFE\xFF", vec![0xFFFD, 0xFFFD, 0xFFFD])]
fn shift_jis(#[case] input: &[u8], #[case] expected: Vec<u32>) {
    let mut decoder = ShiftJisDecoder::new(input, DecoderOptions::default());
    assert_eq!(collect_codes(&mut decoder), expected);
    assert_eq!(decoder.pos_byte(), input.len());
}

#[rstest]
#[case::hiragana(b"\xA4\xA2", vec![0x3042])]
#[case::half_width_katakana(b"\x8E\xB1", vec![0xFF71])]
#[case::jis0212_plane(b"\x8F\xA2\xAF", vec![0x02D8])]
#[case::truncated_shift(b"\x8E", vec![0xFFFD])]
#[case::ascii_after_lead(b"\xA4\x41", vec![0xFFFD, 0x41])]
#[case::lone_high_byte(b"\x80", vec![0xFFFD])]
fn euc_jp(#[case] input: &[u8], #[case] expected: Vec<u32>) {
    let mut decoder = EucJpDecoder::new(input, DecoderOptions::default());
    assert_eq!(collect_codes(&mut decoder), expected);
}

#[rstest]
#[case::hangul_start(b"\xB0\xA1", vec![0xAC00])]
#[case::ascii(b"ab", vec![0x61, 0x62])]
#[case::first_pointer(b"\x81\x41", vec![0xAC02])]
#[case::unmapped_ascii_trail(b"\xFE\x41", vec![0xFFFD, 0x41])]
#[case::truncated(b"\xB0", vec![0xFFFD])]
fn euc_kr(#[case] input: &[u8], #[case] expected: Vec<u32>) {
    let mut decoder = EucKrDecoder::new(input, DecoderOptions::default());
    assert_eq!(collect_codes(&mut decoder), expected);
}

#[test]
fn big5_basic() {
    let mut decoder = Big5Decoder::new(b"\xA4\x40\xA4\x48", DecoderOptions::default());
    assert_eq!(collect_codes(&mut decoder), vec![0x4E00, 0x4EBA]);
}

#[test]
fn big5_double_scalar_pointers() {
    // one two-byte unit, two characters: the byte cursor stands still
    // while the combining mark comes out
    let mut decoder = Big5Decoder::new(b"\x88\x62\x41", DecoderOptions::default());
    assert_eq!(decoder.next_code(), Ok(Some(0x00CA)));
    assert_eq!((decoder.pos_char(), decoder.pos_byte()), (1, 2));
    assert_eq!(decoder.next_code(), Ok(Some(0x0304)));
    assert_eq!((decoder.pos_char(), decoder.pos_byte()), (2, 2));
    assert_eq!(decoder.next_code(), Ok(Some(0x41)));
    // stepping back re-enters the pair one scalar at a time
    assert_eq!(decoder.seek(-2), Ok(0));
    assert_eq!((decoder.pos_char(), decoder.pos_byte()), (1, 2));
    assert_eq!(decoder.next_code(), Ok(Some(0x0304)));
    assert_eq!(decoder.len_char(), 3);
}

#[rstest]
#[case::two_byte_space(b"\xA1\xA1", vec![0x3000])]
#[case::euro(b"\xA2\xE3", vec![0x20AC])]
#[case::four_byte_origin(b"\x81\x30\x81\x30", vec![0x0080])]
#[case::four_byte_range(b"\x81\x30\x84\x31", vec![0x009F])]
#[case::four_byte_supplementary(b"\x90\x30\x81\x30", vec![0x10000])]
#[case::broken_four_byte(b"\x81\x30\x81\x41", vec![0xFFFD, 0x30, 0x4E04])]
#[case::ascii_second_reprocessed(b"\x81\x2F", vec![0xFFFD, 0x2F])]
#[case::lone_80(b"\x80", vec![0xFFFD])]
fn gb18030(#[case] input: &[u8], #[case] expected: Vec<u32>) {
    let mut decoder = GbDecoder::new(input, DecoderOptions::default());
    assert_eq!(collect_codes(&mut decoder), expected);
}

#[test]
fn gbk_shares_the_decoder() {
    let gbk = Encoding::for_label("gbk").unwrap();
    let mut decoder = gbk.decoder(b"\x81\x30\x84\x31", DecoderOptions::default());
    assert_eq!(collect_codes(&mut decoder), vec![0x009F]);
}

#[rstest]
#[case::ascii(b"d\x8B", vec![0x64, 0xF78B])]
#[case::high(b"\x80\xFF", vec![0xF780, 0xF7FF])]
fn x_user_defined(#[case] input: &[u8], #[case] expected: Vec<u32>) {
    let mut decoder = XUserDefinedDecoder::new(input, DecoderOptions::default());
    assert_eq!(collect_codes(&mut decoder), expected);
}

#[rstest]
#[case::empty(b"", vec![])]
#[case::single(b"\x20", vec![0xFFFD])]
#[case::arbitrary(b"\x64\x8B\x20\x00\xFF\xA5", vec![0xFFFD])]
fn replacement(#[case] input: &[u8], #[case] expected: Vec<u32>) {
    let mut decoder = ReplacementDecoder::new(input, DecoderOptions::default());
    assert_eq!(collect_codes(&mut decoder), expected);
    assert_eq!(decoder.len_char(), usize::from(!input.is_empty()));
    assert!(decoder.eof());
}

#[test]
fn replacement_consumes_once_even_when_fatal() {
    let options = DecoderOptions { fatal: true, ..Default::default() };
    let mut decoder = ReplacementDecoder::new(b"abc", options);
    assert!(decoder.next_code().is_err());
    assert_eq!(decoder.next_code(), Ok(None));
    assert_eq!(decoder.pos_byte(), 3);
    assert_eq!(decoder.pos_err(), Some(0));
}
