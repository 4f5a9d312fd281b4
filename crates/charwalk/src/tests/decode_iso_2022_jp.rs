use alloc::vec;
use alloc::vec::Vec;

use rstest::rstest;

use super::collect_codes;
use crate::{Decoder, DecoderOptions, Iso2022JpDecoder};

#[rstest]
#[case::empty(b"", vec![])]
#[case::implied_ascii(b"\x00\x30\x5C\x7E\x21\x5F", vec![0, 48, 92, 126, 33, 95])]
#[case::explicit_ascii(b"\x1B\x28\x42\x00\x30\x5C\x7E\x21\x5F", vec![0, 48, 92, 126, 33, 95])]
#[case::roman(b"\x1B\x28\x4A\x00\x30\x5C\x7E\x21\x5F", vec![0, 48, 165, 8254, 33, 95])]
#[case::katakana(
    b"\x1B\x28\x49\x00\x30\x5C\x7E\x21\x5F",
    vec![65533, 65392, 65436, 65533, 65377, 65439],
)]
#[case::double_byte_jis0208_1978(
    b"\x1B\x24\x40\x00\x30\x5C\x7E\x21\x5F",
    vec![65533, 31227, 65533, 65533],
)]
#[case::double_byte_jis0208_1983(
    b"\x1B\x24\x42\x00\x30\x5C\x7E\x21\x5F",
    vec![65533, 31227, 65533, 65533],
)]
#[case::multiple_modes(
    b"\x5C\x1B\x28\x49\x21\x1B\x24\x40\x30\x5C\x1B\x28\x4A\x5C\x1B\x28\x42\x5C",
    vec![92, 65377, 31227, 165, 92],
)]
#[case::double_escape(b"\x1B\x28\x49\x1B\x28\x42\x5C", vec![65533, 92])]
#[case::triple_escape(b"\x1B\x28\x49\x1B\x28\x42\x1B\x28\x4A\x5C", vec![65533, 65533, 165])]
#[case::trailing_escape(b"\x20\x1B\x28\x4A\x30\x33\x1B\x28\x49", vec![32, 48, 51])]
#[case::truncated_escape_1(b"\x1B", vec![65533])]
#[case::truncated_escape_2(b"\x1B\x28", vec![65533, 40])]
#[case::truncated_escape_3(b"\x1B\x28\x20", vec![65533, 40, 32])]
#[case::truncated_escape_4(b"\x1B\x20\x20", vec![65533, 32, 32])]
#[case::invalid_escape_1(b"\x1B\x28\x40", vec![65533, 40, 64])]
#[case::invalid_escape_2(b"\x1B\x24\x4A", vec![65533, 36, 74])]
#[case::invalid_bytes(
    b"\x80\xFF\x1B\x28\x49\x00\x20\x7F\x1B\x24\x42\x00\x21\x00\xFF\xFF",
    vec![65533; 9],
)]
fn decode(#[case] input: &[u8], #[case] expected: Vec<u32>) {
    let mut decoder = Iso2022JpDecoder::new(input, DecoderOptions::default());
    assert_eq!(collect_codes(&mut decoder), expected);
    assert_eq!(decoder.pos_byte(), input.len());
}

/*
    The seek string, from the Roman/Katakana/double-byte modes:
    Char 0  U+007A   (1 byte)  Offset 0
    Esc: Katakana    (3 bytes) Offset 1
    Char 1  U+FF9C   (1 byte)  Offset 4
    Char 2  U+FF9F   (1 byte)  Offset 5
    Esc: Double-byte (3 bytes) Offset 6
    Char 3  U+79FB   (2 bytes) Offset 9
    Char 4  U+67B8   (2 bytes) Offset 11
    Char 5  U+9B91   (2 bytes) Offset 13
    Esc: ASCII       (3 bytes) Offset 15
    Char 6  U+007E   (1 byte)  Offset 18
    Esc: Roman       (3 bytes) Offset 19
    End of string at char 7, offset 22
*/
const SEEK: &[u8] =
    b"\x7A\x1B\x28\x49\x5C\x5F\x1B\x24\x40\x30\x5C\x5B\x4E\x72\x3A\x1B\x28\x42\x7E\x1B\x28\x4A";
const OFFSETS: [usize; 8] = [0, 1, 5, 6, 11, 13, 15, 19];
const CODES: [u32; 7] = [0x7A, 0xFF9C, 0xFF9F, 0x79FB, 0x67B8, 0x9B91, 0x7E];

#[test]
fn decodes_across_modes() {
    let mut decoder = Iso2022JpDecoder::new(SEEK, DecoderOptions::default());
    assert_eq!(collect_codes(&mut decoder), CODES);
}

#[test]
fn seeks_across_modes() {
    let mut decoder = Iso2022JpDecoder::new(SEEK, DecoderOptions::default());
    assert_eq!(decoder.seek(0), Ok(0));
    assert_eq!(decoder.seek(-1), Ok(1));
    assert_eq!((decoder.pos_char(), decoder.pos_byte()), (0, 0));

    assert_eq!(decoder.seek(1), Ok(0));
    assert_eq!((decoder.pos_char(), decoder.pos_byte()), (1, OFFSETS[1]));
    assert_eq!(decoder.seek(2), Ok(0));
    assert_eq!((decoder.pos_char(), decoder.pos_byte()), (3, OFFSETS[3]));
    assert_eq!(decoder.seek(4), Ok(0));
    assert_eq!((decoder.pos_char(), decoder.pos_byte()), (7, OFFSETS[7]));
    assert_eq!(decoder.seek(1), Ok(1));

    // backward motion replays from the origin and lands on mode boundaries
    assert_eq!(decoder.seek(-3), Ok(0));
    assert_eq!((decoder.pos_char(), decoder.pos_byte()), (4, OFFSETS[4]));
    assert_eq!(decoder.next_code(), Ok(Some(CODES[4])));
    assert_eq!(decoder.seek(-10), Ok(5));
    assert_eq!((decoder.pos_char(), decoder.pos_byte()), (0, 0));

    decoder.rewind();
    assert_eq!((decoder.pos_char(), decoder.pos_byte()), (0, 0));
}

#[test]
fn peeks_preserve_mode() {
    let mut decoder = Iso2022JpDecoder::new(SEEK, DecoderOptions::default());
    decoder.seek(2).unwrap();
    assert_eq!(decoder.peek_codes(2), Ok(vec![CODES[2], CODES[3]]));
    assert_eq!((decoder.pos_char(), decoder.pos_byte()), (2, OFFSETS[2]));
    // peeking across the mode switch leaves the katakana mode in force
    assert_eq!(decoder.next_code(), Ok(Some(CODES[2])));
}

#[test]
fn span_only_matches_in_ascii_mode() {
    let mut decoder = Iso2022JpDecoder::new(SEEK, DecoderOptions::default());
    assert_eq!(decoder.ascii_span(b"z", None), "z");
    // the cursor now faces the katakana escape; no ASCII to be had
    assert_eq!(decoder.ascii_span(b"\x5C\x5F", None), "");
    assert_eq!((decoder.pos_char(), decoder.pos_byte()), (1, 1));
}
