//! EUC-JP: jis0208 in the 94×94 layout, half-width katakana behind the 0x8E
//! single shift, and the decode-only jis0212 plane behind 0x8F.

use alloc::vec::Vec;

use crate::{
    options::DecoderOptions,
    scanner::{Backward, Engine, Raw, RawStep, Scanner, delegate_decoder},
    tables,
};

#[derive(Debug)]
pub(crate) struct EucJpEngine;

impl Engine for EucJpEngine {
    type State = ();

    const BACKWARD: Backward = Backward::Rescan { floor: 0x80 };

    fn next(&self, raw: &mut Raw<'_, ()>) -> RawStep {
        let Some(b) = raw.byte(raw.pos) else {
            return RawStep::Eof;
        };
        let start = raw.pos;
        raw.pos += 1;
        match b {
            0x00..=0x7F => RawStep::Code(u32::from(b)),
            0x8E => {
                let Some(trail) = raw.byte(raw.pos) else {
                    return RawStep::Error { start };
                };
                if let 0xA1..=0xDF = trail {
                    raw.pos += 1;
                    return RawStep::Code(0xFF61 + u32::from(trail) - 0xA1);
                }
                if trail > 0x7F {
                    raw.pos += 1;
                }
                RawStep::Error { start }
            }
            0x8F => {
                let Some(lead) = raw.byte(raw.pos) else {
                    return RawStep::Error { start };
                };
                if !matches!(lead, 0xA1..=0xFE) {
                    if lead > 0x7F {
                        raw.pos += 1;
                    }
                    return RawStep::Error { start };
                }
                raw.pos += 1;
                Self::double(raw, start, lead, true)
            }
            0xA1..=0xFE => Self::double(raw, start, b, false),
            _ => RawStep::Error { start },
        }
    }
}

impl EucJpEngine {
    fn double(raw: &mut Raw<'_, ()>, start: usize, lead: u8, jis0212: bool) -> RawStep {
        let Some(trail) = raw.byte(raw.pos) else {
            return RawStep::Error { start };
        };
        if !matches!(trail, 0xA1..=0xFE) {
            if trail > 0x7F {
                raw.pos += 1;
            }
            return RawStep::Error { start };
        }
        raw.pos += 1;
        let pointer = usize::from(lead - 0xA1) * 94 + usize::from(trail - 0xA1);
        let code_point = if jis0212 {
            tables::jis0212_decode(pointer)
        } else {
            tables::jis0208_decode(pointer)
        };
        match code_point {
            Some(code_point) => RawStep::Code(code_point),
            None => RawStep::Error { start },
        }
    }
}

/// Encodes one code point as EUC-JP, appending to `out`; `false` means the
/// code point has no representation. jis0212 is decode-only.
pub(crate) fn encode(code_point: u32, out: &mut Vec<u8>) -> bool {
    let code_point = match code_point {
        0x00..=0x7F => {
            out.push(code_point as u8);
            return true;
        }
        0x00A5 => {
            out.push(0x5C);
            return true;
        }
        0x203E => {
            out.push(0x7E);
            return true;
        }
        0xFF61..=0xFF9F => {
            out.push(0x8E);
            out.push((code_point - 0xFF61 + 0xA1) as u8);
            return true;
        }
        0x2212 => 0xFF0D,
        _ => code_point,
    };
    let Some(pointer) = tables::jis0208_encode(code_point) else {
        return false;
    };
    out.push((pointer / 94 + 0xA1) as u8);
    out.push((pointer % 94 + 0xA1) as u8);
    true
}

/// An EUC-JP decoder.
#[derive(Debug)]
pub struct EucJpDecoder<'a> {
    inner: Scanner<'a, EucJpEngine>,
}

impl<'a> EucJpDecoder<'a> {
    #[must_use]
    pub fn new(bytes: &'a [u8], options: DecoderOptions) -> Self {
        EucJpDecoder { inner: Scanner::new(EucJpEngine, bytes, options) }
    }
}

delegate_decoder!(EucJpDecoder);
