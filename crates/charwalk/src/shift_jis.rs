//! Shift_JIS: jis0208 through the 188-column pointer layout, half-width
//! katakana singles, and the end-user-defined range at U+E000.

use alloc::vec::Vec;

use crate::{
    options::DecoderOptions,
    scanner::{Backward, Engine, Raw, RawStep, Scanner, delegate_decoder},
    tables,
};

#[derive(Debug)]
pub(crate) struct ShiftJisEngine;

impl Engine for ShiftJisEngine {
    type State = ();

    const BACKWARD: Backward = Backward::Rescan { floor: 0x40 };

    fn next(&self, raw: &mut Raw<'_, ()>) -> RawStep {
        let Some(b) = raw.byte(raw.pos) else {
            return RawStep::Eof;
        };
        let start = raw.pos;
        raw.pos += 1;
        match b {
            0x00..=0x80 => RawStep::Code(u32::from(b)),
            0xA1..=0xDF => RawStep::Code(0xFF61 + u32::from(b) - 0xA1),
            0x81..=0x9F | 0xE0..=0xFC => {
                let Some(trail) = raw.byte(raw.pos) else {
                    return RawStep::Error { start };
                };
                if !matches!(trail, 0x40..=0x7E | 0x80..=0xFC) {
                    // an ASCII byte here decodes on its own next call
                    if trail > 0x7F {
                        raw.pos += 1;
                    }
                    return RawStep::Error { start };
                }
                raw.pos += 1;
                let lead = usize::from(if b < 0xA0 { b - 0x81 } else { b - 0xC1 });
                let offset = usize::from(if trail < 0x7F { 0x40u8 } else { 0x41u8 });
                let pointer = lead * 188 + usize::from(trail) - offset;
                if (8836..=10715).contains(&pointer) {
                    // end-user-defined characters are not in the index
                    return RawStep::Code(0xE000 + pointer as u32 - 8836);
                }
                match tables::jis0208_decode(pointer) {
                    Some(code_point) => RawStep::Code(code_point),
                    None => {
                        if trail < 0x80 {
                            raw.pos -= 1;
                        }
                        RawStep::Error { start }
                    }
                }
            }
            _ => RawStep::Error { start },
        }
    }
}

/// Encodes one code point as Shift_JIS, appending to `out`; `false` means
/// the code point has no representation.
pub(crate) fn encode(code_point: u32, out: &mut Vec<u8>) -> bool {
    let code_point = match code_point {
        0x00..=0x80 => {
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
            out.push((code_point - 0xFF61 + 0xA1) as u8);
            return true;
        }
        0x2212 => 0xFF0D,
        _ => code_point,
    };
    let Some(pointer) = tables::shift_jis_encode(code_point) else {
        return false;
    };
    let lead = pointer / 188;
    let lead_offset = if lead < 0x1F { 0x81 } else { 0xC1 };
    let trail = pointer % 188;
    let offset = if trail < 0x3F { 0x40 } else { 0x41 };
    out.push((lead + lead_offset) as u8);
    out.push((trail + offset) as u8);
    true
}

/// A Shift_JIS decoder.
#[derive(Debug)]
pub struct ShiftJisDecoder<'a> {
    inner: Scanner<'a, ShiftJisEngine>,
}

impl<'a> ShiftJisDecoder<'a> {
    #[must_use]
    pub fn new(bytes: &'a [u8], options: DecoderOptions) -> Self {
        ShiftJisDecoder { inner: Scanner::new(ShiftJisEngine, bytes, options) }
    }
}

delegate_decoder!(ShiftJisDecoder);
