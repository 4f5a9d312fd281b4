//! gb18030 and GBK. The two share one decoder: the dense two-byte index
//! plus the four-byte machine interpolating over the ranges table. Only the
//! encoders differ, so the GBK restrictions live in [`encode`].

use alloc::vec::Vec;

use crate::{
    options::DecoderOptions,
    scanner::{Backward, Engine, Raw, RawStep, Scanner, delegate_decoder},
    tables,
};

#[derive(Debug)]
pub(crate) struct GbEngine;

impl Engine for GbEngine {
    type State = ();

    const BACKWARD: Backward = Backward::Rescan { floor: 0x30 };

    fn next(&self, raw: &mut Raw<'_, ()>) -> RawStep {
        let Some(b) = raw.byte(raw.pos) else {
            return RawStep::Eof;
        };
        let start = raw.pos;
        raw.pos += 1;
        let lead = match b {
            0x00..=0x7F => return RawStep::Code(u32::from(b)),
            0x81..=0xFE => b,
            _ => return RawStep::Error { start },
        };
        let Some(second) = raw.byte(raw.pos) else {
            return RawStep::Error { start };
        };
        if let 0x30..=0x39 = second {
            // four-byte form; nothing is committed until all four bytes
            // check out, so a mismatch reprocesses from the second byte
            let third = raw.byte(raw.pos + 1);
            let fourth = raw.byte(raw.pos + 2);
            if let (Some(third @ 0x81..=0xFE), Some(fourth @ 0x30..=0x39)) = (third, fourth) {
                raw.pos += 3;
                let pointer = u32::from(lead - 0x81) * 12600
                    + u32::from(second - 0x30) * 1260
                    + u32::from(third - 0x81) * 10
                    + u32::from(fourth - 0x30);
                return match tables::gb18030_ranges_decode(pointer) {
                    Some(code_point) => RawStep::Code(code_point),
                    None => RawStep::Error { start },
                };
            }
            return RawStep::Error { start };
        }
        if !matches!(second, 0x40..=0xFE) || second == 0x7F {
            if second < 0x80 {
                // the ASCII byte decodes on its own next call
                return RawStep::Error { start };
            }
            raw.pos += 1;
            return RawStep::Error { start };
        }
        raw.pos += 1;
        let offset = usize::from(if second < 0x7F { 0x40u8 } else { 0x41u8 });
        let pointer = usize::from(lead - 0x81) * 190 + usize::from(second) - offset;
        match tables::gb18030_decode(pointer) {
            Some(code_point) => RawStep::Code(code_point),
            None => {
                if second < 0x80 {
                    raw.pos -= 1;
                }
                RawStep::Error { start }
            }
        }
    }
}

/// Encodes one code point as gb18030 (or GBK when `gbk` is set), appending
/// to `out`; `false` means the code point has no representation.
///
/// U+E5E5 never encodes. GBK keeps its bare 0x80 euro byte but has no
/// four-byte plane.
pub(crate) fn encode(code_point: u32, gbk: bool, out: &mut Vec<u8>) -> bool {
    if code_point < 0x80 {
        out.push(code_point as u8);
        return true;
    }
    if code_point == 0xE5E5 {
        return false;
    }
    if gbk && code_point == 0x20AC {
        out.push(0x80);
        return true;
    }
    if let Some(pointer) = tables::gb18030_encode(code_point) {
        let trail = pointer % 190;
        let offset = if trail < 0x3F { 0x40 } else { 0x41 };
        out.push((pointer / 190 + 0x81) as u8);
        out.push((trail + offset) as u8);
        return true;
    }
    if gbk {
        return false;
    }
    let pointer = tables::gb18030_ranges_encode(code_point);
    let (rest, fourth) = (pointer / 10, pointer % 10);
    let (rest, third) = (rest / 126, rest % 126);
    let (first, second) = (rest / 10, rest % 10);
    out.push((first + 0x81) as u8);
    out.push((second + 0x30) as u8);
    out.push((third + 0x81) as u8);
    out.push((fourth + 0x30) as u8);
    true
}

/// A gb18030 decoder, also serving GBK: the gbk flag narrows only the
/// encoder, never the decoder.
#[derive(Debug)]
pub struct GbDecoder<'a> {
    inner: Scanner<'a, GbEngine>,
}

impl<'a> GbDecoder<'a> {
    #[must_use]
    pub fn new(bytes: &'a [u8], options: DecoderOptions) -> Self {
        GbDecoder { inner: Scanner::new(GbEngine, bytes, options) }
    }
}

delegate_decoder!(GbDecoder);
