//! The encoding registry: canonical names, label resolution, byte-order
//! mark sniffing, and construction of decoders and encoders.

use alloc::string::String;

use crate::{
    big5::Big5Decoder,
    decoder::AnyDecoder,
    encoder::Encoder,
    euc_jp::EucJpDecoder,
    euc_kr::EucKrDecoder,
    gb::GbDecoder,
    iso_2022_jp::Iso2022JpDecoder,
    options::DecoderOptions,
    replacement::ReplacementDecoder,
    shift_jis::ShiftJisDecoder,
    single_byte::SingleByteDecoder,
    tables::single_byte as sb,
    utf_8::Utf8Decoder,
    utf_16::{Utf16BeDecoder, Utf16LeDecoder},
    x_user_defined::XUserDefinedDecoder,
};

/// Which state machine implements an encoding.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Kind {
    SingleByte(&'static [u16; 128]),
    Utf8,
    Utf16Le,
    Utf16Be,
    Gbk,
    Gb18030,
    Big5,
    EucJp,
    EucKr,
    ShiftJis,
    Iso2022Jp,
    Replacement,
    XUserDefined,
}

/// A registered encoding: its canonical name, its labels, and the state
/// machine implementing it. Descriptors are process-wide statics; every
/// lookup returns the same `&'static Encoding`.
///
/// # Examples
///
/// ```rust
/// use charwalk::{Decoder, DecoderOptions, Encoding};
///
/// let encoding = Encoding::for_label("  Latin1 ").unwrap();
/// assert_eq!(encoding.name(), "windows-1252");
///
/// let mut decoder = encoding.decoder(b"caf\xE9", DecoderOptions::default());
/// assert_eq!(decoder.next_char(), Ok(Some('c')));
/// ```
#[derive(Debug)]
pub struct Encoding {
    name: &'static str,
    labels: &'static [&'static str],
    has_encoder: bool,
    pub(crate) kind: Kind,
}

macro_rules! encoding {
    ($const:ident, $name:literal, $kind:expr, $encoder:literal, [$($label:literal),+ $(,)?]) => {
        pub(crate) static $const: Encoding = Encoding {
            name: $name,
            labels: &[$($label),+],
            has_encoder: $encoder,
            kind: $kind,
        };
    };
}

encoding!(BIG5, "Big5", Kind::Big5, true,
    ["big5", "big5-hkscs", "cn-big5", "csbig5", "x-x-big5"]);
encoding!(EUC_JP, "EUC-JP", Kind::EucJp, true,
    ["cseucpkdfmtjapanese", "euc-jp", "x-euc-jp"]);
encoding!(EUC_KR, "EUC-KR", Kind::EucKr, true,
    ["cseuckr", "csksc56011987", "euc-kr", "iso-ir-149", "korean", "ks_c_5601-1987",
     "ks_c_5601-1989", "ksc5601", "ksc_5601", "windows-949"]);
encoding!(GB18030, "gb18030", Kind::Gb18030, true, ["gb18030"]);
encoding!(GBK, "GBK", Kind::Gbk, true,
    ["chinese", "csgb2312", "csiso58gb231280", "gb2312", "gb_2312", "gb_2312-80", "gbk",
     "iso-ir-58", "x-gbk"]);
encoding!(IBM866, "IBM866", Kind::SingleByte(&sb::IBM866), true,
    ["866", "cp866", "csibm866", "ibm866"]);
encoding!(ISO_2022_JP, "ISO-2022-JP", Kind::Iso2022Jp, true,
    ["csiso2022jp", "iso-2022-jp"]);
encoding!(ISO_8859_2, "ISO-8859-2", Kind::SingleByte(&sb::ISO_8859_2), true,
    ["csisolatin2", "iso-8859-2", "iso-ir-101", "iso8859-2", "iso88592", "iso_8859-2",
     "iso_8859-2:1987", "l2", "latin2"]);
encoding!(ISO_8859_3, "ISO-8859-3", Kind::SingleByte(&sb::ISO_8859_3), true,
    ["csisolatin3", "iso-8859-3", "iso-ir-109", "iso8859-3", "iso88593", "iso_8859-3",
     "iso_8859-3:1988", "l3", "latin3"]);
encoding!(ISO_8859_4, "ISO-8859-4", Kind::SingleByte(&sb::ISO_8859_4), true,
    ["csisolatin4", "iso-8859-4", "iso-ir-110", "iso8859-4", "iso88594", "iso_8859-4",
     "iso_8859-4:1988", "l4", "latin4"]);
encoding!(ISO_8859_5, "ISO-8859-5", Kind::SingleByte(&sb::ISO_8859_5), true,
    ["csisolatincyrillic", "cyrillic", "iso-8859-5", "iso-ir-144", "iso8859-5", "iso88595",
     "iso_8859-5", "iso_8859-5:1988"]);
encoding!(ISO_8859_6, "ISO-8859-6", Kind::SingleByte(&sb::ISO_8859_6), true,
    ["arabic", "asmo-708", "csiso88596e", "csiso88596i", "csisolatinarabic", "ecma-114",
     "iso-8859-6", "iso-8859-6-e", "iso-8859-6-i", "iso-ir-127", "iso8859-6", "iso88596",
     "iso_8859-6", "iso_8859-6:1987"]);
encoding!(ISO_8859_7, "ISO-8859-7", Kind::SingleByte(&sb::ISO_8859_7), true,
    ["csisolatingreek", "ecma-118", "elot_928", "greek", "greek8", "iso-8859-7", "iso-ir-126",
     "iso8859-7", "iso88597", "iso_8859-7", "iso_8859-7:1987", "sun_eu_greek"]);
encoding!(ISO_8859_8, "ISO-8859-8", Kind::SingleByte(&sb::ISO_8859_8), true,
    ["csiso88598e", "csisolatinhebrew", "hebrew", "iso-8859-8", "iso-8859-8-e", "iso-ir-138",
     "iso8859-8", "iso88598", "iso_8859-8", "iso_8859-8:1988", "visual"]);
encoding!(ISO_8859_8_I, "ISO-8859-8-I", Kind::SingleByte(&sb::ISO_8859_8), true,
    ["csiso88598i", "iso-8859-8-i", "logical"]);
encoding!(ISO_8859_10, "ISO-8859-10", Kind::SingleByte(&sb::ISO_8859_10), true,
    ["csisolatin6", "iso-8859-10", "iso-ir-157", "iso8859-10", "iso885910", "l6", "latin6"]);
encoding!(ISO_8859_13, "ISO-8859-13", Kind::SingleByte(&sb::ISO_8859_13), true,
    ["iso-8859-13", "iso8859-13", "iso885913"]);
encoding!(ISO_8859_14, "ISO-8859-14", Kind::SingleByte(&sb::ISO_8859_14), true,
    ["iso-8859-14", "iso8859-14", "iso885914"]);
encoding!(ISO_8859_15, "ISO-8859-15", Kind::SingleByte(&sb::ISO_8859_15), true,
    ["csisolatin9", "iso-8859-15", "iso8859-15", "iso885915", "iso_8859-15", "l9"]);
encoding!(ISO_8859_16, "ISO-8859-16", Kind::SingleByte(&sb::ISO_8859_16), true,
    ["iso-8859-16"]);
encoding!(KOI8_R, "KOI8-R", Kind::SingleByte(&sb::KOI8_R), true,
    ["cskoi8r", "koi", "koi8", "koi8-r", "koi8_r"]);
encoding!(KOI8_U, "KOI8-U", Kind::SingleByte(&sb::KOI8_U), true,
    ["koi8-ru", "koi8-u"]);
encoding!(MACINTOSH, "macintosh", Kind::SingleByte(&sb::MACINTOSH), true,
    ["csmacintosh", "mac", "macintosh", "x-mac-roman"]);
encoding!(REPLACEMENT, "replacement", Kind::Replacement, false,
    ["csiso2022kr", "hz-gb-2312", "iso-2022-cn", "iso-2022-cn-ext", "iso-2022-kr",
     "replacement"]);
encoding!(SHIFT_JIS, "Shift_JIS", Kind::ShiftJis, true,
    ["csshiftjis", "ms932", "ms_kanji", "shift-jis", "shift_jis", "sjis", "windows-31j",
     "x-sjis"]);
encoding!(UTF_16BE, "UTF-16BE", Kind::Utf16Be, false, ["unicodefffe", "utf-16be"]);
encoding!(UTF_16LE, "UTF-16LE", Kind::Utf16Le, false,
    ["csunicode", "iso-10646-ucs-2", "ucs-2", "unicode", "unicodefeff", "utf-16", "utf-16le"]);
encoding!(UTF_8, "UTF-8", Kind::Utf8, true,
    ["unicode-1-1-utf-8", "unicode11utf8", "unicode20utf8", "utf-8", "utf8",
     "x-unicode20utf8"]);
encoding!(WINDOWS_874, "windows-874", Kind::SingleByte(&sb::WINDOWS_874), true,
    ["dos-874", "iso-8859-11", "iso8859-11", "iso885911", "tis-620", "windows-874"]);
encoding!(WINDOWS_1250, "windows-1250", Kind::SingleByte(&sb::WINDOWS_1250), true,
    ["cp1250", "windows-1250", "x-cp1250"]);
encoding!(WINDOWS_1251, "windows-1251", Kind::SingleByte(&sb::WINDOWS_1251), true,
    ["cp1251", "windows-1251", "x-cp1251"]);
encoding!(WINDOWS_1252, "windows-1252", Kind::SingleByte(&sb::WINDOWS_1252), true,
    ["ansi_x3.4-1968", "ascii", "cp1252", "cp819", "csisolatin1", "ibm819", "iso-8859-1",
     "iso-ir-100", "iso8859-1", "iso88591", "iso_8859-1", "iso_8859-1:1987", "l1", "latin1",
     "us-ascii", "windows-1252", "x-cp1252"]);
encoding!(WINDOWS_1253, "windows-1253", Kind::SingleByte(&sb::WINDOWS_1253), true,
    ["cp1253", "windows-1253", "x-cp1253"]);
encoding!(WINDOWS_1254, "windows-1254", Kind::SingleByte(&sb::WINDOWS_1254), true,
    ["cp1254", "csisolatin5", "iso-8859-9", "iso-ir-148", "iso8859-9", "iso88599",
     "iso_8859-9", "iso_8859-9:1989", "l5", "latin5", "windows-1254", "x-cp1254"]);
encoding!(WINDOWS_1255, "windows-1255", Kind::SingleByte(&sb::WINDOWS_1255), true,
    ["cp1255", "windows-1255", "x-cp1255"]);
encoding!(WINDOWS_1256, "windows-1256", Kind::SingleByte(&sb::WINDOWS_1256), true,
    ["cp1256", "windows-1256", "x-cp1256"]);
encoding!(WINDOWS_1257, "windows-1257", Kind::SingleByte(&sb::WINDOWS_1257), true,
    ["cp1257", "windows-1257", "x-cp1257"]);
encoding!(WINDOWS_1258, "windows-1258", Kind::SingleByte(&sb::WINDOWS_1258), true,
    ["cp1258", "windows-1258", "x-cp1258"]);
encoding!(X_MAC_CYRILLIC, "x-mac-cyrillic", Kind::SingleByte(&sb::X_MAC_CYRILLIC), true,
    ["x-mac-cyrillic", "x-mac-ukrainian"]);
encoding!(X_USER_DEFINED, "x-user-defined", Kind::XUserDefined, true, ["x-user-defined"]);

static ENCODINGS: &[&Encoding] = &[
    &BIG5, &EUC_JP, &EUC_KR, &GB18030, &GBK, &IBM866, &ISO_2022_JP, &ISO_8859_2, &ISO_8859_3,
    &ISO_8859_4, &ISO_8859_5, &ISO_8859_6, &ISO_8859_7, &ISO_8859_8, &ISO_8859_8_I,
    &ISO_8859_10, &ISO_8859_13, &ISO_8859_14, &ISO_8859_15, &ISO_8859_16, &KOI8_R, &KOI8_U,
    &MACINTOSH, &REPLACEMENT, &SHIFT_JIS, &UTF_16BE, &UTF_16LE, &UTF_8, &WINDOWS_874,
    &WINDOWS_1250, &WINDOWS_1251, &WINDOWS_1252, &WINDOWS_1253, &WINDOWS_1254, &WINDOWS_1255,
    &WINDOWS_1256, &WINDOWS_1257, &WINDOWS_1258, &X_MAC_CYRILLIC, &X_USER_DEFINED,
];

fn is_label_whitespace(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\x0C' | '\r' | ' ')
}

impl Encoding {
    /// The canonical name, e.g. `"windows-1252"`.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The labels resolving to this encoding, lowercased and sorted.
    #[must_use]
    pub fn labels(&self) -> &'static [&'static str] {
        self.labels
    }

    /// Whether [`encoder`](Encoding::encoder) returns one. False only for
    /// the UTF-16 pair and replacement.
    #[must_use]
    pub fn has_encoder(&self) -> bool {
        self.has_encoder
    }

    /// Resolves a label to its encoding: case-insensitive, with ASCII
    /// whitespace trimmed. `None` for unrecognized labels; the registry
    /// never errors on them.
    #[must_use]
    pub fn for_label(label: &str) -> Option<&'static Encoding> {
        let trimmed = label.trim_matches(is_label_whitespace);
        let lowered: String = trimmed.chars().map(|c| c.to_ascii_lowercase()).collect();
        ENCODINGS
            .iter()
            .copied()
            .find(|encoding| encoding.labels.contains(&lowered.as_str()))
    }

    /// Detects a leading byte-order mark, returning the encoding it names.
    #[must_use]
    pub fn sniff_bom(bytes: &[u8]) -> Option<&'static Encoding> {
        if bytes.starts_with(b"\xEF\xBB\xBF") {
            Some(&UTF_8)
        } else if bytes.starts_with(b"\xFE\xFF") {
            Some(&UTF_16BE)
        } else if bytes.starts_with(b"\xFF\xFE") {
            Some(&UTF_16LE)
        } else {
            None
        }
    }

    /// Constructs a decoder for this encoding over `bytes`.
    #[must_use]
    pub fn decoder<'a>(&'static self, bytes: &'a [u8], options: DecoderOptions) -> AnyDecoder<'a> {
        match self.kind {
            Kind::SingleByte(table) => {
                AnyDecoder::SingleByte(SingleByteDecoder::new(table, bytes, options))
            }
            Kind::Utf8 => AnyDecoder::Utf8(Utf8Decoder::new(bytes, options)),
            Kind::Utf16Le => AnyDecoder::Utf16Le(Utf16LeDecoder::new(bytes, options)),
            Kind::Utf16Be => AnyDecoder::Utf16Be(Utf16BeDecoder::new(bytes, options)),
            Kind::Gbk | Kind::Gb18030 => AnyDecoder::Gb(GbDecoder::new(bytes, options)),
            Kind::Big5 => AnyDecoder::Big5(Big5Decoder::new(bytes, options)),
            Kind::EucJp => AnyDecoder::EucJp(EucJpDecoder::new(bytes, options)),
            Kind::EucKr => AnyDecoder::EucKr(EucKrDecoder::new(bytes, options)),
            Kind::ShiftJis => AnyDecoder::ShiftJis(ShiftJisDecoder::new(bytes, options)),
            Kind::Iso2022Jp => AnyDecoder::Iso2022Jp(Iso2022JpDecoder::new(bytes, options)),
            Kind::Replacement => {
                AnyDecoder::Replacement(ReplacementDecoder::new(bytes, options))
            }
            Kind::XUserDefined => {
                AnyDecoder::XUserDefined(XUserDefinedDecoder::new(bytes, options))
            }
        }
    }

    /// Resolves `label`, sniffs `bytes` for a byte-order mark — the mark
    /// wins over the label and is not counted as a character — and
    /// constructs the decoder. `None` when the label is unrecognized.
    #[must_use]
    pub fn decoder_for_label<'a>(
        label: &str,
        bytes: &'a [u8],
        options: DecoderOptions,
    ) -> Option<AnyDecoder<'a>> {
        match Encoding::sniff_bom(bytes) {
            Some(encoding) => Some(encoding.decoder(bytes, options)),
            None => Encoding::for_label(label).map(|e| e.decoder(bytes, options)),
        }
    }

    /// Constructs an encoder targeting this encoding, or `None` when the
    /// encoding has no encoder (the UTF-16 pair and replacement).
    #[must_use]
    pub fn encoder(&'static self, fatal: bool) -> Option<Encoder> {
        self.has_encoder.then(|| Encoder::new(self, fatal))
    }

    /// Resolves `label` and constructs an encoder in one step.
    #[must_use]
    pub fn encoder_for_label(label: &str, fatal: bool) -> Option<Encoder> {
        Encoding::for_label(label)?.encoder(fatal)
    }

    /// All registered encodings.
    #[must_use]
    pub fn all() -> &'static [&'static Encoding] {
        ENCODINGS
    }
}
