//! x-user-defined: high bytes map one-to-one into the private use area at
//! U+F780, so decoding can never fail.

use crate::{
    options::DecoderOptions,
    scanner::{Backward, Engine, Raw, RawStep, Scanner, delegate_decoder},
};

#[derive(Debug)]
pub(crate) struct XUserDefinedEngine;

impl Engine for XUserDefinedEngine {
    type State = ();

    const BACKWARD: Backward = Backward::Byte;

    fn next(&self, raw: &mut Raw<'_, ()>) -> RawStep {
        let Some(b) = raw.byte(raw.pos) else {
            return RawStep::Eof;
        };
        raw.pos += 1;
        if b < 0x80 {
            RawStep::Code(u32::from(b))
        } else {
            RawStep::Code(0xF700 + u32::from(b))
        }
    }
}

pub(crate) fn encode(code_point: u32) -> Option<u8> {
    match code_point {
        0xF780..=0xF7FF => Some((code_point - 0xF780 + 0x80) as u8),
        _ => None,
    }
}

/// An x-user-defined decoder.
#[derive(Debug)]
pub struct XUserDefinedDecoder<'a> {
    inner: Scanner<'a, XUserDefinedEngine>,
}

impl<'a> XUserDefinedDecoder<'a> {
    #[must_use]
    pub fn new(bytes: &'a [u8], options: DecoderOptions) -> Self {
        XUserDefinedDecoder { inner: Scanner::new(XUserDefinedEngine, bytes, options) }
    }
}

delegate_decoder!(XUserDefinedDecoder);
