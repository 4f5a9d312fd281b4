//! The encoder facade: one value per stream, with the target encoding
//! resolved at construction and the ISO-2022-JP shift state carried inside.

use alloc::vec::Vec;

use crate::{
    big5, codepoint, euc_jp, euc_kr, gb,
    error::EncodeError,
    iso_2022_jp::{self, EncodeMode},
    label::{Encoding, Kind},
    shift_jis, single_byte, x_user_defined,
};

/// An encoder for one registered encoding.
///
/// `encode` translates one scalar at a time, appending bytes to a caller
/// buffer. In fatal mode (the default) unencodable-but-valid code points
/// are reported as [`EncodeError`]; otherwise a decimal HTML numeric
/// character reference (`&#NNNN;`) is substituted — ASCII text injected
/// into the byte stream, as the WHATWG Encoding Standard directs.
///
/// ISO-2022-JP threads a shift state between calls; every stream must end
/// with [`finish`](Encoder::finish), which emits the escape returning to
/// ASCII so the output concatenates cleanly. For the stateless encodings
/// `finish` is a no-op.
///
/// # Examples
///
/// ```rust
/// use charwalk::Encoding;
///
/// let mut encoder = Encoding::for_label("iso-2022-jp").unwrap().encoder(true).unwrap();
/// let mut out = Vec::new();
/// encoder.encode(0x3042, &mut out).unwrap(); // あ
/// encoder.encode(0x41, &mut out).unwrap();
/// encoder.finish(&mut out);
/// assert_eq!(out, b"\x1B\x24\x42\x24\x22\x1B\x28\x42A");
/// ```
///
/// # Panics
///
/// `encode` panics when handed a value above 0x10FFFF; that is a caller
/// contract violation, not a data error, and no error mode excuses it.
#[derive(Debug)]
pub struct Encoder {
    encoding: &'static Encoding,
    fatal: bool,
    mode: EncodeMode,
}

impl Encoder {
    pub(crate) fn new(encoding: &'static Encoding, fatal: bool) -> Self {
        Encoder { encoding, fatal, mode: EncodeMode::Ascii }
    }

    /// The encoding this encoder targets.
    #[must_use]
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Encodes one code point, appending its byte representation to `out`.
    pub fn encode(&mut self, code_point: u32, out: &mut Vec<u8>) -> Result<(), EncodeError> {
        assert!(
            code_point <= 0x10_FFFF,
            "code point {code_point:#X} is outside the Unicode range",
        );
        let encoded = match self.encoding.kind {
            Kind::Utf8 => {
                codepoint::append_utf8(code_point, out);
                true
            }
            Kind::SingleByte(table) => {
                if code_point < 0x80 {
                    out.push(code_point as u8);
                    true
                } else if let Some(byte) = single_byte::encode_byte(table, code_point) {
                    out.push(byte);
                    true
                } else {
                    false
                }
            }
            Kind::Gbk => gb::encode(code_point, true, out),
            Kind::Gb18030 => gb::encode(code_point, false, out),
            Kind::Big5 => big5::encode(code_point, out),
            Kind::EucJp => euc_jp::encode(code_point, out),
            Kind::EucKr => euc_kr::encode(code_point, out),
            Kind::ShiftJis => shift_jis::encode(code_point, out),
            Kind::Iso2022Jp => {
                return iso_2022_jp::encode(
                    code_point,
                    &mut self.mode,
                    self.fatal,
                    self.encoding.name(),
                    out,
                );
            }
            Kind::XUserDefined => {
                if code_point < 0x80 {
                    out.push(code_point as u8);
                    true
                } else if let Some(byte) = x_user_defined::encode(code_point) {
                    out.push(byte);
                    true
                } else {
                    false
                }
            }
            // the registry never hands these out as encoders
            Kind::Utf16Le | Kind::Utf16Be | Kind::Replacement => {
                unreachable!("{} has no encoder", self.encoding.name())
            }
        };
        if encoded {
            return Ok(());
        }
        if self.fatal {
            return Err(EncodeError { code_point, encoding: self.encoding.name() });
        }
        numeric_reference(code_point, out);
        Ok(())
    }

    /// Ends the stream, emitting any closing escape the encoding needs.
    /// Idempotent; only ISO-2022-JP ever emits bytes here.
    pub fn finish(&mut self, out: &mut Vec<u8>) {
        if matches!(self.encoding.kind, Kind::Iso2022Jp) {
            iso_2022_jp::finish(&mut self.mode, out);
        }
    }
}

/// Appends the decimal HTML numeric character reference for a code point.
pub(crate) fn numeric_reference(code_point: u32, out: &mut Vec<u8>) {
    out.extend_from_slice(b"&#");
    let mut digits = [0u8; 7];
    let mut n = code_point;
    let mut i = digits.len();
    loop {
        i -= 1;
        digits[i] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    out.extend_from_slice(&digits[i..]);
    out.push(b';');
}
