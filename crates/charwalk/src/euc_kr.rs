//! EUC-KR over the windows-949 index: one lead range, one wide trail range,
//! nothing modal.

use alloc::vec::Vec;

use crate::{
    options::DecoderOptions,
    scanner::{Backward, Engine, Raw, RawStep, Scanner, delegate_decoder},
    tables,
};

#[derive(Debug)]
pub(crate) struct EucKrEngine;

impl Engine for EucKrEngine {
    type State = ();

    const BACKWARD: Backward = Backward::Rescan { floor: 0x41 };

    fn next(&self, raw: &mut Raw<'_, ()>) -> RawStep {
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
                if !matches!(trail, 0x41..=0xFE) {
                    if trail > 0x7F {
                        raw.pos += 1;
                    }
                    return RawStep::Error { start };
                }
                raw.pos += 1;
                let pointer = usize::from(b - 0x81) * 190 + usize::from(trail - 0x41);
                match tables::euc_kr_decode(pointer) {
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

/// Encodes one code point as EUC-KR, appending to `out`; `false` means the
/// code point has no representation.
pub(crate) fn encode(code_point: u32, out: &mut Vec<u8>) -> bool {
    if code_point < 0x80 {
        out.push(code_point as u8);
        return true;
    }
    let Some(pointer) = tables::euc_kr_encode(code_point) else {
        return false;
    };
    out.push((pointer / 190 + 0x81) as u8);
    out.push((pointer % 190 + 0x41) as u8);
    true
}

/// An EUC-KR decoder.
#[derive(Debug)]
pub struct EucKrDecoder<'a> {
    inner: Scanner<'a, EucKrEngine>,
}

impl<'a> EucKrDecoder<'a> {
    #[must_use]
    pub fn new(bytes: &'a [u8], options: DecoderOptions) -> Self {
        EucKrDecoder { inner: Scanner::new(EucKrEngine, bytes, options) }
    }
}

delegate_decoder!(EucKrDecoder);
