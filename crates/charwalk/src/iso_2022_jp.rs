//! ISO-2022-JP: the one modal encoding. Escape sequences switch the
//! decoder between ASCII, Roman, half-width-katakana, and jis0208
//! double-byte interpretations of the same byte range, and the encoder
//! threads the equivalent shift state between calls.

use alloc::vec::Vec;

use crate::{
    error::EncodeError,
    options::DecoderOptions,
    scanner::{Backward, Engine, Raw, RawStep, Scanner, delegate_decoder},
    tables,
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) enum Mode {
    #[default]
    Ascii,
    Roman,
    Katakana,
    DoubleByte,
}

/// Decoder shift state: the active mode, plus a flag that is set by every
/// escape and cleared by every character, so that two escapes in a row are
/// flagged as an error (they would otherwise vanish without trace).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Iso2022JpState {
    mode: Mode,
    escape_run: bool,
}

#[derive(Debug)]
pub(crate) struct Iso2022JpEngine;

impl Engine for Iso2022JpEngine {
    type State = Iso2022JpState;

    const BACKWARD: Backward = Backward::Replay;
    const PUSH_MARKS: bool = true;

    fn next(&self, raw: &mut Raw<'_, Iso2022JpState>) -> RawStep {
        loop {
            let Some(b) = raw.byte(raw.pos) else {
                return RawStep::Eof;
            };
            let start = raw.pos;
            raw.pos += 1;
            if b == 0x1B {
                match self.escape(raw, start) {
                    Some(step) => return step,
                    None => continue,
                }
            }
            let step = self.character(raw, start, b);
            raw.state.escape_run = false;
            return step;
        }
    }

    fn span_allowed(&self, state: &Iso2022JpState, byte: u8) -> bool {
        state.mode == Mode::Ascii && byte < 0x80 && !matches!(byte, 0x0E | 0x0F | 0x1B)
    }
}

impl Iso2022JpEngine {
    /// Processes an escape sequence whose 0x1B byte is already consumed.
    /// `None` means the mode switched cleanly and no character resulted.
    fn escape(&self, raw: &mut Raw<'_, Iso2022JpState>, start: usize) -> Option<RawStep> {
        let mode = match (raw.byte(start + 1), raw.byte(start + 2)) {
            (Some(0x28), Some(0x42)) => Mode::Ascii,
            (Some(0x28), Some(0x4A)) => Mode::Roman,
            (Some(0x28), Some(0x49)) => Mode::Katakana,
            (Some(0x24), Some(0x40 | 0x42)) => Mode::DoubleByte,
            // truncated or unrecognized: only the 0x1B byte is charged, and
            // the bytes after it are reinterpreted in the current mode
            _ => return Some(RawStep::Error { start }),
        };
        raw.pos = start + 3;
        raw.state.mode = mode;
        let doubled = raw.state.escape_run;
        raw.state.escape_run = true;
        if doubled {
            return Some(RawStep::Error { start });
        }
        None
    }

    fn character(&self, raw: &mut Raw<'_, Iso2022JpState>, start: usize, b: u8) -> RawStep {
        match raw.state.mode {
            Mode::Ascii => match b {
                0x0E | 0x0F | 0x80..=0xFF => RawStep::Error { start },
                _ => RawStep::Code(u32::from(b)),
            },
            Mode::Roman => match b {
                0x5C => RawStep::Code(0x00A5),
                0x7E => RawStep::Code(0x203E),
                0x0E | 0x0F | 0x80..=0xFF => RawStep::Error { start },
                _ => RawStep::Code(u32::from(b)),
            },
            Mode::Katakana => match b {
                0x21..=0x5F => RawStep::Code(0xFF61 + u32::from(b) - 0x21),
                _ => RawStep::Error { start },
            },
            Mode::DoubleByte => {
                if !matches!(b, 0x21..=0x7E) {
                    return RawStep::Error { start };
                }
                let Some(trail) = raw.byte(raw.pos) else {
                    return RawStep::Error { start };
                };
                if trail == 0x1B {
                    // the orphaned lead is the error; the escape stands
                    return RawStep::Error { start };
                }
                raw.pos += 1;
                if !matches!(trail, 0x21..=0x7E) {
                    return RawStep::Error { start };
                }
                let pointer = usize::from(b - 0x21) * 94 + usize::from(trail - 0x21);
                match tables::jis0208_decode(pointer) {
                    Some(code_point) => RawStep::Code(code_point),
                    None => RawStep::Error { start },
                }
            }
        }
    }
}

const ESC_ASCII: &[u8] = b"\x1B\x28\x42";
const ESC_ROMAN: &[u8] = b"\x1B\x28\x4A";
const ESC_DOUBLE: &[u8] = b"\x1B\x24\x42";

/// The encoder-side shift state. A stream must be finished with
/// [`finish`] so it ends in ASCII mode and concatenates cleanly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum EncodeMode {
    #[default]
    Ascii,
    Roman,
    DoubleByte,
}

fn shift(mode: &mut EncodeMode, target: EncodeMode, escape: &'static [u8], out: &mut Vec<u8>) {
    if *mode != target {
        out.extend_from_slice(escape);
        *mode = target;
    }
}

/// Encodes one code point as ISO-2022-JP, appending bytes (and any needed
/// mode escape) to `out`.
pub(crate) fn encode(
    code_point: u32,
    mode: &mut EncodeMode,
    fatal: bool,
    encoding: &'static str,
    out: &mut Vec<u8>,
) -> Result<(), EncodeError> {
    match code_point {
        // shift-state control bytes can never appear literally; the
        // substituted reference names U+FFFD rather than the input
        0x0E | 0x0F | 0x1B => substitute(code_point, 0xFFFD, mode, fatal, encoding, out),
        0x5C | 0x7E => {
            shift(mode, EncodeMode::Ascii, ESC_ASCII, out);
            out.push(code_point as u8);
            Ok(())
        }
        0x00..=0x7F => {
            if *mode == EncodeMode::DoubleByte {
                shift(mode, EncodeMode::Ascii, ESC_ASCII, out);
            }
            out.push(code_point as u8);
            Ok(())
        }
        0x00A5 | 0x203E => {
            shift(mode, EncodeMode::Roman, ESC_ROMAN, out);
            out.push(if code_point == 0x00A5 { 0x5C } else { 0x7E });
            Ok(())
        }
        _ => {
            let folded = match code_point {
                0xFF61..=0xFF9F => tables::katakana_fold(code_point),
                0x2212 => 0xFF0D,
                _ => code_point,
            };
            let Some(pointer) = tables::jis0208_encode(folded) else {
                return substitute(code_point, code_point, mode, fatal, encoding, out);
            };
            shift(mode, EncodeMode::DoubleByte, ESC_DOUBLE, out);
            out.push((pointer / 94 + 0x21) as u8);
            out.push((pointer % 94 + 0x21) as u8);
            Ok(())
        }
    }
}

fn substitute(
    code_point: u32,
    reference: u32,
    mode: &mut EncodeMode,
    fatal: bool,
    encoding: &'static str,
    out: &mut Vec<u8>,
) -> Result<(), EncodeError> {
    if fatal {
        return Err(EncodeError { code_point, encoding });
    }
    // the reference is ASCII text, so double-byte mode must end first
    if *mode == EncodeMode::DoubleByte {
        shift(mode, EncodeMode::Ascii, ESC_ASCII, out);
    }
    crate::encoder::numeric_reference(reference, out);
    Ok(())
}

/// Emits the closing escape returning the stream to ASCII, if needed.
pub(crate) fn finish(mode: &mut EncodeMode, out: &mut Vec<u8>) {
    shift(mode, EncodeMode::Ascii, ESC_ASCII, out);
}

/// An ISO-2022-JP decoder.
#[derive(Debug)]
pub struct Iso2022JpDecoder<'a> {
    inner: Scanner<'a, Iso2022JpEngine>,
}

impl<'a> Iso2022JpDecoder<'a> {
    #[must_use]
    pub fn new(bytes: &'a [u8], options: DecoderOptions) -> Self {
        Iso2022JpDecoder { inner: Scanner::new(Iso2022JpEngine, bytes, options) }
    }
}

delegate_decoder!(Iso2022JpDecoder);
