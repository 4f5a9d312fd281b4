//! UTF-8: the classic lead-byte state machine with strict continuation
//! bounds, so overlong forms and (unless tolerated) surrogates never decode.

use crate::{
    options::DecoderOptions,
    scanner::{Backward, Engine, Raw, RawStep, Scanner, delegate_decoder},
};

#[derive(Debug)]
pub(crate) struct Utf8Engine;

impl Engine for Utf8Engine {
    type State = ();

    const BACKWARD: Backward = Backward::Utf8Window;

    fn next(&self, raw: &mut Raw<'_, ()>) -> RawStep {
        let Some(b0) = raw.byte(raw.pos) else {
            return RawStep::Eof;
        };
        let start = raw.pos;
        raw.pos += 1;
        if b0 < 0x80 {
            return RawStep::Code(u32::from(b0));
        }
        let mut lower = 0x80;
        let mut upper = 0xBF;
        let (needed, mut code_point) = match b0 {
            0xC2..=0xDF => (1, u32::from(b0 & 0x1F)),
            0xE0..=0xEF => {
                if b0 == 0xE0 {
                    lower = 0xA0;
                } else if b0 == 0xED && !raw.allow_surrogates {
                    upper = 0x9F;
                }
                (2, u32::from(b0 & 0x0F))
            }
            0xF0..=0xF4 => {
                if b0 == 0xF0 {
                    lower = 0x90;
                } else if b0 == 0xF4 {
                    upper = 0x8F;
                }
                (3, u32::from(b0 & 0x07))
            }
            // invalid lead: C0/C1 overlongs, bare continuations, F5..FF
            _ => return RawStep::Error { start },
        };
        for _ in 0..needed {
            let Some(b) = raw.byte(raw.pos) else {
                return RawStep::Error { start };
            };
            if b < lower || b > upper {
                // the offending byte is left for the next call
                return RawStep::Error { start };
            }
            raw.pos += 1;
            lower = 0x80;
            upper = 0xBF;
            code_point = (code_point << 6) | u32::from(b & 0x3F);
        }
        RawStep::Code(code_point)
    }

    fn strip_bom(&self, bytes: &[u8]) -> usize {
        if bytes.starts_with(b"\xEF\xBB\xBF") { 3 } else { 0 }
    }
}

/// A UTF-8 decoder; skips a leading byte-order mark at construction.
#[derive(Debug)]
pub struct Utf8Decoder<'a> {
    inner: Scanner<'a, Utf8Engine>,
}

impl<'a> Utf8Decoder<'a> {
    #[must_use]
    pub fn new(bytes: &'a [u8], options: DecoderOptions) -> Self {
        Utf8Decoder { inner: Scanner::new(Utf8Engine, bytes, options) }
    }
}

delegate_decoder!(Utf8Decoder);
