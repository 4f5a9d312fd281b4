use alloc::vec;

use rstest::rstest;

use super::collect_codes;
use crate::{Decoder, DecoderOptions, Encoding};

#[rstest]
#[case("utf-8", "UTF-8")]
#[case("UTF8", "UTF-8")]
#[case("unicode-1-1-utf-8", "UTF-8")]
#[case("  Latin1 ", "windows-1252")]
#[case("ascii", "windows-1252")]
#[case("iso-8859-1", "windows-1252")]
#[case("\tshift_JIS\n", "Shift_JIS")]
#[case("ms932", "Shift_JIS")]
#[case("iso-8859-9", "windows-1254")]
#[case("tis-620", "windows-874")]
#[case("ucs-2", "UTF-16LE")]
#[case("utf-16", "UTF-16LE")]
#[case("unicodefffe", "UTF-16BE")]
#[case("gb2312", "GBK")]
#[case("iso-2022-kr", "replacement")]
#[case("hz-gb-2312", "replacement")]
#[case("x-user-defined", "x-user-defined")]
#[case("csiso88598i", "ISO-8859-8-I")]
fn labels_resolve(#[case] label: &str, #[case] name: &str) {
    assert_eq!(Encoding::for_label(label).unwrap().name(), name);
}

#[rstest]
#[case("utf-7")]
#[case("")]
#[case("latin-1")]
#[case("utf_8")]
fn unknown_labels_yield_none(#[case] label: &str) {
    assert!(Encoding::for_label(label).is_none());
}

#[test]
fn every_encoding_lists_its_own_name_or_label() {
    for encoding in Encoding::all() {
        for label in encoding.labels() {
            assert_eq!(
                Encoding::for_label(label).unwrap().name(),
                encoding.name(),
                "label {label} resolved elsewhere",
            );
        }
    }
}

#[test]
fn utf16_and_replacement_have_no_encoder() {
    for label in ["utf-16le", "utf-16be", "replacement"] {
        let encoding = Encoding::for_label(label).unwrap();
        assert!(!encoding.has_encoder());
        assert!(encoding.encoder(true).is_none());
    }
    assert!(Encoding::encoder_for_label("utf-16", true).is_none());
    assert!(Encoding::encoder_for_label("sjis", true).is_some());
}

#[test]
fn bom_overrides_the_label() {
    // requested Shift_JIS, but the UTF-8 mark wins and is not counted
    let mut decoder = Encoding::decoder_for_label(
        "shift_jis",
        b"\xEF\xBB\xBF\x41",
        DecoderOptions::default(),
    )
    .unwrap();
    assert_eq!(collect_codes(&mut decoder), vec![0x41]);
    assert_eq!(decoder.pos_char(), 1);

    let mut decoder = Encoding::decoder_for_label(
        "utf-8",
        b"\xFF\xFE\x41\x00",
        DecoderOptions::default(),
    )
    .unwrap();
    assert_eq!(collect_codes(&mut decoder), vec![0x41]);
}

#[test]
fn bom_sniffing_reports_the_mark() {
    assert_eq!(Encoding::sniff_bom(b"\xEF\xBB\xBF").unwrap().name(), "UTF-8");
    assert_eq!(Encoding::sniff_bom(b"\xFE\xFF").unwrap().name(), "UTF-16BE");
    assert_eq!(Encoding::sniff_bom(b"\xFF\xFE").unwrap().name(), "UTF-16LE");
    assert!(Encoding::sniff_bom(b"\xEF\xBB").is_none());
    assert!(Encoding::sniff_bom(b"plain").is_none());
}

#[test]
fn unknown_label_with_bom_still_decodes() {
    let decoder = Encoding::decoder_for_label(
        "not-a-charset",
        b"\xEF\xBB\xBFhi",
        DecoderOptions::default(),
    );
    assert!(decoder.is_some());
    assert!(
        Encoding::decoder_for_label("not-a-charset", b"hi", DecoderOptions::default()).is_none()
    );
}
