//! Big5 over the big5-hkscs index, including the four pointers that expand
//! to a base scalar followed by a combining mark.

use alloc::vec::Vec;

use crate::{
    options::DecoderOptions,
    scanner::{Backward, Engine, Raw, RawStep, Scanner, delegate_decoder},
    tables,
};

/// A combining scalar still owed from a two-scalar pointer; it is emitted
/// as its own zero-width character on the next step.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Big5State {
    pending: u32,
}

#[derive(Debug)]
pub(crate) struct Big5Engine;

impl Engine for Big5Engine {
    type State = Big5State;

    const BACKWARD: Backward = Backward::Rescan { floor: 0x40 };

    fn next(&self, raw: &mut Raw<'_, Big5State>) -> RawStep {
        if raw.state.pending != 0 {
            let code_point = raw.state.pending;
            raw.state.pending = 0;
            return RawStep::Code(code_point);
        }
        let Some(b) = raw.byte(raw.pos) else {
            return RawStep::Eof;
        };
        let start = raw.pos;
        raw.pos += 1;
        match b {
            0x00..=0x7F => RawStep::Code(u32::from(b)),
            0x81..=0xFE => {
                let Some(trail) = raw.byte(raw.pos) else {
                    return RawStep::Error { start };
                };
                if !matches!(trail, 0x40..=0x7E | 0xA1..=0xFE) {
                    if trail > 0x7F {
                        raw.pos += 1;
                    }
                    return RawStep::Error { start };
                }
                raw.pos += 1;
                let offset = usize::from(if trail < 0x7F { 0x40u8 } else { 0x62u8 });
                let pointer = usize::from(b - 0x81) * 157 + usize::from(trail) - offset;
                if let Some((first, second)) = tables::big5_double(pointer) {
                    raw.state.pending = second;
                    return RawStep::Code(first);
                }
                match tables::big5_decode(pointer) {
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

/// Encodes one code point as Big5, appending to `out`; `false` means the
/// code point has no representation. Only the proper Big5 region is drawn
/// from when encoding.
pub(crate) fn encode(code_point: u32, out: &mut Vec<u8>) -> bool {
    if code_point < 0x80 {
        out.push(code_point as u8);
        return true;
    }
    let Some(pointer) = tables::big5_encode(code_point) else {
        return false;
    };
    let trail = pointer % 157;
    let offset = if trail < 0x3F { 0x40 } else { 0x62 };
    out.push((pointer / 157 + 0x81) as u8);
    out.push((trail + offset) as u8);
    true
}

/// A Big5 decoder.
#[derive(Debug)]
pub struct Big5Decoder<'a> {
    inner: Scanner<'a, Big5Engine>,
}

impl<'a> Big5Decoder<'a> {
    #[must_use]
    pub fn new(bytes: &'a [u8], options: DecoderOptions) -> Self {
        Big5Decoder { inner: Scanner::new(Big5Engine, bytes, options) }
    }
}

delegate_decoder!(Big5Decoder);
