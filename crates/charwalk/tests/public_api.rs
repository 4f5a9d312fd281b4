//! Exercises the crate surface the way a consumer would: resolve a label,
//! walk the decoder, and encode back out.

use charwalk::{Decoder, DecoderOptions, Encoding};

#[test]
fn transcode_between_legacy_encodings() {
    // "カタカナ" in Shift_JIS
    let input = b"\x83\x4A\x83\x5E\x83\x4A\x83\x69";
    let mut decoder = Encoding::decoder_for_label("sjis", input, DecoderOptions::default())
        .expect("label is registered");

    let mut encoder = Encoding::for_label("euc-jp").unwrap().encoder(true).unwrap();
    let mut out = Vec::new();
    while let Some(code_point) = decoder.next_code().unwrap() {
        encoder.encode(code_point, &mut out).unwrap();
    }
    encoder.finish(&mut out);
    assert_eq!(out, b"\xA5\xAB\xA5\xBF\xA5\xAB\xA5\xCA");
}

#[test]
fn walk_a_decoder_both_ways() {
    let encoding = Encoding::for_label("utf-8").unwrap();
    let text = "päivä on kaunis";
    let mut decoder = encoding.decoder(text.as_bytes(), DecoderOptions::default());

    assert_eq!(decoder.len_char(), text.chars().count());
    let collected: String = decoder.chars().map(|c| c.unwrap().1).collect();
    assert_eq!(collected, text);

    decoder.rewind();
    // the span stops at the first non-ASCII byte without consuming it
    assert_eq!(decoder.ascii_span_not(b" ", None), "p");
    assert_eq!(decoder.pos_char(), 1);
    assert_eq!(decoder.next_char().unwrap(), Some('ä'));

    let back = decoder.seek(-2).unwrap();
    assert_eq!(back, 0);
    assert_eq!(decoder.pos_char(), 0);
}

#[test]
fn fatal_errors_carry_positions_across_the_enum() {
    let mut decoder = Encoding::decoder_for_label(
        "euc-kr",
        b"ab\xB0\x31",
        DecoderOptions { fatal: true, ..Default::default() },
    )
    .unwrap();
    assert!(decoder.seek(2).is_ok());
    let err = decoder.next_code().unwrap_err();
    assert_eq!((err.char_offset, err.byte_offset), (2, 2));
}
