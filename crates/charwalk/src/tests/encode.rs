use alloc::vec::Vec;

use rstest::rstest;

use crate::{Encoder, Encoding};

fn encode_one(label: &str, fatal: bool, code_point: u32) -> Result<Vec<u8>, crate::EncodeError> {
    let mut encoder = Encoding::for_label(label).unwrap().encoder(fatal).unwrap();
    let mut out = Vec::new();
    encoder.encode(code_point, &mut out)?;
    encoder.finish(&mut out);
    Ok(out)
}

#[rstest]
#[case(0x7A, b"\x7A".as_slice())]
#[case(0xA2, b"\xC2\xA2".as_slice())]
#[case(0x6C34, b"\xE6\xB0\xB4".as_slice())]
#[case(0x1D11E, b"\xF0\x9D\x84\x9E".as_slice())]
#[case(0xF8FF, b"\xEF\xA3\xBF".as_slice())]
#[case(0x10FFFD, b"\xF4\x8F\xBF\xBD".as_slice())]
#[case(0xFFFE, b"\xEF\xBF\xBE".as_slice())]
fn utf8(#[case] code_point: u32, #[case] expected: &[u8]) {
    assert_eq!(encode_one("utf-8", true, code_point).unwrap(), expected);
}

#[test]
#[should_panic(expected = "outside the Unicode range")]
fn out_of_range_is_a_caller_bug() {
    let _ = encode_one("utf-8", false, 0x110000);
}

#[rstest]
#[case::shift_jis("shift_jis", 0x3042, b"\x82\xA0".as_slice())]
#[case::shift_jis_yen("shift_jis", 0xA5, b"\x5C".as_slice())]
#[case::shift_jis_overline("shift_jis", 0x203E, b"\x7E".as_slice())]
#[case::shift_jis_half_katakana("shift_jis", 0xFF71, b"\xB1".as_slice())]
#[case::shift_jis_minus("shift_jis", 0x2212, b"\x81\x7C".as_slice())]
#[case::euc_jp("euc-jp", 0x3042, b"\xA4\xA2".as_slice())]
#[case::euc_jp_katakana("euc-jp", 0xFF71, b"\x8E\xB1".as_slice())]
#[case::euc_kr("euc-kr", 0xAC00, b"\xB0\xA1".as_slice())]
#[case::big5("big5", 0x4E00, b"\xA4\x40".as_slice())]
#[case::gb18030("gb18030", 0x3000, b"\xA1\xA1".as_slice())]
#[case::gb18030_four_byte("gb18030", 0x009F, b"\x81\x30\x84\x31".as_slice())]
#[case::gb18030_supplementary("gb18030", 0x10000, b"\x90\x30\x81\x30".as_slice())]
#[case::windows_1252("windows-1252", 0x20AC, b"\x80".as_slice())]
#[case::koi8_r("koi8-r", 0x44E, b"\xC0".as_slice())]
#[case::x_user_defined("x-user-defined", 0xF78B, b"\x8B".as_slice())]
fn legacy(#[case] label: &str, #[case] code_point: u32, #[case] expected: &[u8]) {
    assert_eq!(encode_one(label, true, code_point).unwrap(), expected);
}

/// Six compatibility code points take the last matching pointer; everything
/// else takes the first.
#[test]
fn big5_prefers_the_last_pointer_for_compatibility() {
    assert_eq!(encode_one("big5", true, 0x5341).unwrap(), b"\xA4\x51");
    assert_eq!(encode_one("big5", true, 0x4E00).unwrap(), b"\xA4\x40");
}

#[test]
fn gbk_encodes_the_euro_as_a_bare_byte() {
    assert_eq!(encode_one("gbk", true, 0x20AC).unwrap(), b"\x80");
    assert_eq!(encode_one("gb18030", true, 0x20AC).unwrap(), b"\xA2\xE3");
}

#[test]
fn gbk_has_no_four_byte_plane() {
    let err = encode_one("gbk", true, 0x009F).unwrap_err();
    assert_eq!(err.code_point, 0x9F);
    assert_eq!(err.encoding, "GBK");
    assert_eq!(encode_one("gbk", false, 0x009F).unwrap(), b"&#159;");
}

#[test]
fn gb18030_never_round_trips_e5e5() {
    assert!(encode_one("gb18030", true, 0xE5E5).is_err());
    assert_eq!(encode_one("gb18030", false, 0xE5E5).unwrap(), b"&#58853;");
}

#[test]
fn unmappable_code_points_substitute_references() {
    let err = encode_one("windows-1252", true, 0x3042).unwrap_err();
    assert_eq!(err.code_point, 0x3042);
    assert_eq!(err.encoding, "windows-1252");
    assert_eq!(encode_one("windows-1252", false, 0x3042).unwrap(), b"&#12354;");
}

#[test]
fn iso_2022_jp_round_trip_scenario() {
    let mut encoder = Encoding::for_label("iso-2022-jp").unwrap().encoder(true).unwrap();
    let mut out = Vec::new();
    encoder.encode(0x3042, &mut out).unwrap();
    encoder.encode(0x41, &mut out).unwrap();
    encoder.finish(&mut out);
    assert_eq!(out, b"\x1B\x24\x42\x24\x22\x1B\x28\x42\x41");

    use crate::{Decoder, DecoderOptions, Iso2022JpDecoder};
    let mut decoder = Iso2022JpDecoder::new(&out, DecoderOptions::default());
    assert_eq!(super::collect_codes(&mut decoder), [0x3042, 0x41]);
}

#[test]
fn iso_2022_jp_finish_is_idempotent() {
    let mut encoder = Encoding::for_label("iso-2022-jp").unwrap().encoder(true).unwrap();
    let mut out = Vec::new();
    encoder.encode(0xA5, &mut out).unwrap();
    assert_eq!(out, b"\x1B\x28\x4A\x5C");
    encoder.finish(&mut out);
    encoder.finish(&mut out);
    assert_eq!(out, b"\x1B\x28\x4A\x5C\x1B\x28\x42");
}

#[test]
fn iso_2022_jp_folds_half_width_katakana() {
    // ｶ folds to カ before the pointer lookup
    let mut encoder = Encoding::for_label("iso-2022-jp").unwrap().encoder(true).unwrap();
    let mut out = Vec::new();
    encoder.encode(0xFF76, &mut out).unwrap();
    encoder.finish(&mut out);
    assert_eq!(out, b"\x1B\x24\x42\x25\x2B\x1B\x28\x42");
}

#[test]
fn iso_2022_jp_rejects_shift_bytes() {
    for code_point in [0x0E, 0x0F, 0x1B] {
        let err = encode_one("iso-2022-jp", true, code_point).unwrap_err();
        assert_eq!(err.code_point, code_point);
        // the substituted reference names U+FFFD, not the input
        assert_eq!(encode_one("iso-2022-jp", false, code_point).unwrap(), b"&#65533;");
    }
}

#[test]
fn iso_2022_jp_substitution_leaves_double_byte_mode() {
    let mut encoder = Encoding::for_label("iso-2022-jp").unwrap().encoder(false).unwrap();
    let mut out = Vec::new();
    encoder.encode(0x3042, &mut out).unwrap();
    encoder.encode(0x2603, &mut out).unwrap(); // snowman: not in jis0208
    encoder.finish(&mut out);
    assert_eq!(out, b"\x1B\x24\x42\x24\x22\x1B\x28\x42&#9731;");
}

#[test]
fn encoder_values_are_reusable_across_calls() {
    let mut encoder: Encoder = Encoding::for_label("euc-jp").unwrap().encoder(false).unwrap();
    let mut out = Vec::new();
    for code_point in [0x61, 0x3042, 0x62] {
        encoder.encode(code_point, &mut out).unwrap();
    }
    encoder.finish(&mut out);
    assert_eq!(out, b"\x61\xA4\xA2\x62");
}
