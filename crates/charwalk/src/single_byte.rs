//! The shared engine behind every single-byte encoding: a stateless lookup
//! of high bytes through a 128-entry table.

use crate::{
    options::DecoderOptions,
    scanner::{Backward, Engine, Raw, RawStep, Scanner, delegate_decoder},
};

#[derive(Debug)]
pub(crate) struct SingleByteEngine {
    pub(crate) table: &'static [u16; 128],
}

impl Engine for SingleByteEngine {
    type State = ();

    const BACKWARD: Backward = Backward::Byte;

    fn next(&self, raw: &mut Raw<'_, ()>) -> RawStep {
        let Some(b) = raw.byte(raw.pos) else {
            return RawStep::Eof;
        };
        let start = raw.pos;
        raw.pos += 1;
        if b < 0x80 {
            return RawStep::Code(u32::from(b));
        }
        match self.table[usize::from(b) - 0x80] {
            0 => RawStep::Error { start },
            code_point => RawStep::Code(u32::from(code_point)),
        }
    }
}

/// Looks up the byte encoding a code point, inverting the decode table.
pub(crate) fn encode_byte(table: &'static [u16; 128], code_point: u32) -> Option<u8> {
    let Ok(wanted) = u16::try_from(code_point) else {
        return None;
    };
    table
        .iter()
        .position(|&cp| cp != 0 && cp == wanted)
        .map(|i| 0x80 + i as u8)
}

/// A decoder for one of the single-byte encodings; which one is fixed by
/// the table selected at construction through
/// [`Encoding::decoder`](crate::Encoding::decoder).
#[derive(Debug)]
pub struct SingleByteDecoder<'a> {
    inner: Scanner<'a, SingleByteEngine>,
}

impl<'a> SingleByteDecoder<'a> {
    pub(crate) fn new(
        table: &'static [u16; 128],
        bytes: &'a [u8],
        options: DecoderOptions,
    ) -> Self {
        SingleByteDecoder { inner: Scanner::new(SingleByteEngine { table }, bytes, options) }
    }
}

delegate_decoder!(SingleByteDecoder);
