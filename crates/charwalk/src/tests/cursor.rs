//! Contract tests for the cursor operations, exercised across encodings
//! with different widths and synchronization properties.

use alloc::vec;
use alloc::vec::Vec;

use rstest::rstest;

use super::collect_codes;
use crate::{
    Decoder, DecoderOptions, Encoding, ShiftJisDecoder, Utf8Decoder, Utf16BeDecoder,
    Utf16LeDecoder,
};

/*
    Char 0  U+007A   (1 byte)  Offset 0
    Char 1  U+00A2   (2 bytes) Offset 1
    Char 2  U+6C34   (3 bytes) Offset 3
    Char 3  U+1D11E  (4 bytes) Offset 6
    Char 4  U+F8FF   (3 bytes) Offset 10
    Char 5  U+10FFFD (4 bytes) Offset 13
    Char 6  U+FFFE   (3 bytes) Offset 17
    End of string at char 7, offset 20
*/
const UTF8_SEEK: &[u8] = b"\x7A\xC2\xA2\xE6\xB0\xB4\xF0\x9D\x84\x9E\xEF\xA3\xBF\xF4\x8F\xBF\xBD\xEF\xBF\xBE";
const UTF8_OFFSETS: [usize; 8] = [0, 1, 3, 6, 10, 13, 17, 20];
const SEEK_CODES: [u32; 7] = [0x7A, 0xA2, 0x6C34, 0x1D11E, 0xF8FF, 0x10FFFD, 0xFFFE];

fn seek_contract<D: Decoder>(decoder: &mut D, offsets: &[usize; 8]) {
    assert_eq!(decoder.pos_char(), 0);
    assert_eq!(decoder.pos_byte(), offsets[0]);

    assert_eq!(decoder.seek(0), Ok(0));
    assert_eq!(decoder.seek(-1), Ok(1));
    assert_eq!((decoder.pos_char(), decoder.pos_byte()), (0, offsets[0]));

    assert_eq!(decoder.seek(1), Ok(0));
    assert_eq!((decoder.pos_char(), decoder.pos_byte()), (1, offsets[1]));

    assert_eq!(decoder.seek(2), Ok(0));
    assert_eq!((decoder.pos_char(), decoder.pos_byte()), (3, offsets[3]));

    assert_eq!(decoder.seek(4), Ok(0));
    assert_eq!((decoder.pos_char(), decoder.pos_byte()), (7, offsets[7]));

    assert_eq!(decoder.seek(1), Ok(1));
    assert_eq!((decoder.pos_char(), decoder.pos_byte()), (7, offsets[7]));

    assert_eq!(decoder.seek(-3), Ok(0));
    assert_eq!((decoder.pos_char(), decoder.pos_byte()), (4, offsets[4]));

    assert_eq!(decoder.seek(-10), Ok(6));
    assert_eq!((decoder.pos_char(), decoder.pos_byte()), (0, offsets[0]));

    assert_eq!(decoder.seek(5), Ok(0));
    assert_eq!((decoder.pos_char(), decoder.pos_byte()), (5, offsets[5]));

    decoder.rewind();
    assert_eq!((decoder.pos_char(), decoder.pos_byte()), (0, offsets[0]));
}

#[test]
fn seek_through_utf8() {
    let mut decoder = Utf8Decoder::new(UTF8_SEEK, DecoderOptions::default());
    seek_contract(&mut decoder, &UTF8_OFFSETS);
}

#[test]
fn seek_through_utf16le() {
    let input = b"\x7A\x00\xA2\x00\x34\x6C\x34\xD8\x1E\xDD\xFF\xF8\xFF\xDB\xFD\xDF\xFE\xFF";
    let mut decoder = Utf16LeDecoder::new(input, DecoderOptions::default());
    seek_contract(&mut decoder, &[0, 2, 4, 6, 10, 12, 16, 18]);
}

#[test]
fn seek_through_utf16be_with_bom() {
    let input =
        b"\xFE\xFF\x00\x7A\x00\xA2\x6C\x34\xD8\x34\xDD\x1E\xF8\xFF\xDB\xFF\xDF\xFD\xFF\xFE";
    let mut decoder = Utf16BeDecoder::new(input, DecoderOptions::default());
    seek_contract(&mut decoder, &[2, 4, 6, 8, 12, 14, 18, 20]);
}

#[test]
fn seek_through_shift_jis() {
    // A, あ (2 bytes), ｱ, ideographic space (2 bytes), Z
    let input = b"\x41\x82\xA0\xB1\x81\x40\x5A";
    let mut decoder = ShiftJisDecoder::new(input, DecoderOptions::default());
    assert_eq!(decoder.seek(5), Ok(0));
    assert_eq!((decoder.pos_char(), decoder.pos_byte()), (5, 7));
    assert_eq!(decoder.seek(-2), Ok(0));
    assert_eq!((decoder.pos_char(), decoder.pos_byte()), (3, 4));
    assert_eq!(decoder.next_code(), Ok(Some(0x3000)));
    assert_eq!(decoder.seek(-3), Ok(0));
    assert_eq!((decoder.pos_char(), decoder.pos_byte()), (1, 1));
    assert_eq!(decoder.next_code(), Ok(Some(0x3042)));
}

#[rstest]
#[case::utf8("utf-8", b"a".as_slice())]
#[case::utf16le("utf-16le", b"a\x00".as_slice())]
#[case::windows1252("windows-1252", b"a".as_slice())]
fn traverse_past_the_end(#[case] label: &str, #[case] input: &[u8]) {
    let encoding = Encoding::for_label(label).unwrap();
    let mut decoder = encoding.decoder(input, DecoderOptions::default());
    assert_eq!((decoder.pos_char(), decoder.pos_byte()), (0, 0));
    assert_eq!(decoder.next_char(), Ok(Some('a')));
    assert_eq!((decoder.pos_char(), decoder.pos_byte()), (1, input.len()));
    assert!(decoder.eof());
    assert_eq!(decoder.next_char(), Ok(None));
    assert_eq!(decoder.next_code(), Ok(None));
    assert_eq!((decoder.pos_char(), decoder.pos_byte()), (1, input.len()));
}

#[test]
fn peek_does_not_move_the_cursor() {
    let mut decoder = Utf8Decoder::new(UTF8_SEEK, DecoderOptions::default());
    decoder.seek(2).unwrap();
    let at = (decoder.pos_char(), decoder.pos_byte());

    assert_eq!(decoder.peek_codes(1), Ok(vec![SEEK_CODES[2]]));
    assert_eq!((decoder.pos_char(), decoder.pos_byte()), at);

    assert_eq!(decoder.peek_codes(2), Ok(vec![SEEK_CODES[2], SEEK_CODES[3]]));
    assert_eq!(decoder.peek_codes(2), Ok(vec![SEEK_CODES[2], SEEK_CODES[3]]));
    assert_eq!((decoder.pos_char(), decoder.pos_byte()), at);

    // asking past the end returns what there is
    decoder.seek(3).unwrap();
    assert_eq!(decoder.peek_codes(3), Ok(vec![SEEK_CODES[5], SEEK_CODES[6]]));
    assert_eq!(decoder.peek_codes(0), Ok(vec![]));

    assert_eq!(decoder.peek_chars(2).unwrap(), "\u{10FFFD}\u{FFFE}");
}

#[rstest]
#[case::utf8("utf-8", b"\x00\xFF\x00".as_slice())]
#[case::windows1253("windows-1253", b"\x00\xAA\x00".as_slice())]
fn replacement_and_fatal_modes(#[case] label: &str, #[case] input: &[u8]) {
    let encoding = Encoding::for_label(label).unwrap();

    let mut decoder = encoding.decoder(input, DecoderOptions::default());
    decoder.seek(1).unwrap();
    assert_eq!(decoder.next_code(), Ok(Some(0xFFFD)));
    assert_eq!(decoder.pos_err(), Some(1));

    let options = DecoderOptions { fatal: true, ..Default::default() };
    let mut decoder = encoding.decoder(input, options);
    decoder.seek(1).unwrap();
    let err = decoder.next_code().unwrap_err();
    assert_eq!(err.char_offset, 1);
    assert_eq!(err.byte_offset, 1);
    // the fault consumed the malformed unit; decoding resumes after it
    assert_eq!(decoder.pos_char(), 2);
    assert_eq!(decoder.next_code(), Ok(Some(0x00)));
    assert_eq!(decoder.pos_char(), 3);
    // and seeking back re-exposes the same fault through a peek
    assert_eq!(decoder.seek(-2), Ok(0));
    assert_eq!(decoder.pos_char(), 1);
    let at = (decoder.pos_char(), decoder.pos_byte());
    assert!(decoder.peek_codes(1).is_err());
    assert_eq!((decoder.pos_char(), decoder.pos_byte()), at);
    assert!(decoder.peek_chars(1).is_err());
    assert_eq!((decoder.pos_char(), decoder.pos_byte()), at);
}

#[test]
fn iteration_is_single_pass_until_rewind() {
    let mut decoder = Utf8Decoder::new(UTF8_SEEK, DecoderOptions::default());
    let collected: Vec<(usize, u32)> = decoder.codes().map(Result::unwrap).collect();
    let expected: Vec<(usize, u32)> = SEEK_CODES.iter().copied().enumerate().collect();
    assert_eq!(collected, expected);

    assert_eq!(decoder.codes().count(), 0);
    decoder.rewind();
    assert_eq!(decoder.codes().count(), 7);

    decoder.rewind();
    let chars: Vec<char> = decoder.chars().map(|r| r.unwrap().1).collect();
    assert_eq!(chars, vec!['\u{7A}', '\u{A2}', '\u{6C34}', '\u{1D11E}', '\u{F8FF}', '\u{10FFFD}', '\u{FFFE}']);
}

#[test]
fn len_char_preserves_the_cursor() {
    let mut decoder = Utf8Decoder::new(UTF8_SEEK, DecoderOptions::default());
    decoder.seek(1).unwrap();
    let at = (decoder.pos_char(), decoder.pos_byte());
    assert_eq!(decoder.len_char(), 7);
    assert_eq!((decoder.pos_char(), decoder.pos_byte()), at);
    assert_eq!(decoder.len_byte(), UTF8_SEEK.len());

    // malformed units count one character each, even in fatal mode
    let options = DecoderOptions { fatal: true, ..Default::default() };
    let mut decoder = Utf8Decoder::new(b"\xFF\xFFa", options);
    assert_eq!(decoder.len_char(), 3);
    assert_eq!(decoder.pos_char(), 0);
}

#[test]
fn pos_err_distinguishes_decoded_replacements() {
    // a literal U+FFFD is not an error
    let mut decoder = Utf8Decoder::new(b"\xEF\xBF\xBD", DecoderOptions::default());
    assert_eq!(collect_codes(&mut decoder), vec![0xFFFD]);
    assert_eq!(decoder.pos_err(), None);

    let mut decoder = Utf8Decoder::new(b"a\xFF", DecoderOptions::default());
    assert_eq!(collect_codes(&mut decoder), vec![0x61, 0xFFFD]);
    assert_eq!(decoder.pos_err(), Some(1));
}

#[test]
fn ascii_spans_consume_matching_runs() {
    let mut decoder = Encoding::for_label("windows-1252")
        .unwrap()
        .decoder(b"  \theading\xE9 rest", DecoderOptions::default());
    assert_eq!(decoder.ascii_span(b" \t", None), "  \t");
    assert_eq!(decoder.pos_char(), 3);
    assert_eq!(decoder.ascii_span_not(b" ", None), "heading");
    // the non-ASCII byte stops a span but is not consumed
    assert_eq!((decoder.pos_char(), decoder.pos_byte()), (10, 10));
    assert_eq!(decoder.next_code(), Ok(Some(0xE9)));

    // bounded spans stop at the limit
    decoder.rewind();
    assert_eq!(decoder.ascii_span(b" \t", Some(2)), "  ");
    assert_eq!(decoder.pos_char(), 2);
}

#[test]
fn ascii_spans_work_on_utf16_units() {
    // "AZ" then 水 then "09"
    let input = b"\x00\x41\x00\x5A\x6C\x34\x00\x30\x00\x39";
    let mut decoder = Utf16BeDecoder::new(input, DecoderOptions::default());
    assert_eq!(decoder.ascii_span(b"AZ09", None), "AZ");
    assert_eq!((decoder.pos_char(), decoder.pos_byte()), (2, 4));
    assert_eq!(decoder.ascii_span_not(b"abc", None), "");
    assert_eq!(decoder.next_code(), Ok(Some(0x6C34)));
    assert_eq!(decoder.ascii_span_not(b"9", None), "0");
    assert_eq!((decoder.pos_char(), decoder.pos_byte()), (4, 8));
}

#[test]
fn single_byte_cursors_coincide() {
    let encoding = Encoding::for_label("koi8-r").unwrap();
    let mut decoder = encoding.decoder(b"a\xC0\xC1z", DecoderOptions::default());
    assert_eq!(collect_codes(&mut decoder), vec![0x61, 0x44E, 0x430, 0x7A]);
    assert_eq!((decoder.pos_char(), decoder.pos_byte()), (4, 4));
    assert_eq!(decoder.seek(-3), Ok(0));
    assert_eq!((decoder.pos_char(), decoder.pos_byte()), (1, 1));
}
