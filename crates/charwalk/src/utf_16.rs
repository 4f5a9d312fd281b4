//! UTF-16 in both byte orders: unit pairing, surrogate combination, and
//! dirty-EOF accounting for buffers that end mid-character.
//!
//! UTF-16 is not self-synchronizing, so every malformed unit leaves an
//! error mark that backward seeks pop to land on the right boundary.

use crate::{
    codepoint::{combine_surrogates, is_lead_surrogate, is_trail_surrogate},
    options::DecoderOptions,
    scanner::{Backward, Engine, Raw, RawStep, Scanner, delegate_decoder},
};

#[derive(Debug)]
pub(crate) struct Utf16Engine<const BE: bool>;

impl<const BE: bool> Utf16Engine<BE> {
    fn unit(raw: &Raw<'_, ()>, at: usize) -> Option<u32> {
        let first = raw.byte(at)?;
        let second = raw.byte(at + 1)?;
        Some(if BE {
            (u32::from(first) << 8) | u32::from(second)
        } else {
            (u32::from(second) << 8) | u32::from(first)
        })
    }
}

impl<const BE: bool> Engine for Utf16Engine<BE> {
    type State = ();

    const BACKWARD: Backward = Backward::PairProbe;
    const PUSH_MARKS: bool = true;
    const WIDE_SPAN: Option<bool> = Some(BE);

    fn next(&self, raw: &mut Raw<'_, ()>) -> RawStep {
        let start = raw.pos;
        if start >= raw.bytes.len() {
            return RawStep::Eof;
        }
        let Some(lead) = Self::unit(raw, start) else {
            // a lone trailing byte
            raw.pos = raw.bytes.len();
            return RawStep::Error { start };
        };
        raw.pos += 2;
        if is_trail_surrogate(lead) {
            if raw.allow_surrogates {
                return RawStep::Code(lead);
            }
            return RawStep::Error { start };
        }
        if !is_lead_surrogate(lead) {
            return RawStep::Code(lead);
        }
        let Some(trail) = Self::unit(raw, raw.pos) else {
            // the buffer ends inside the pair: two or three dirty bytes
            raw.pos = raw.bytes.len();
            return RawStep::Error { start };
        };
        if is_trail_surrogate(trail) {
            raw.pos += 2;
            return RawStep::Code(combine_surrogates(lead, trail));
        }
        // unpaired lead; the following unit is reprocessed on its own
        if raw.allow_surrogates {
            return RawStep::Code(lead);
        }
        RawStep::Error { start }
    }

    fn strip_bom(&self, bytes: &[u8]) -> usize {
        let bom: &[u8] = if BE { b"\xFE\xFF" } else { b"\xFF\xFE" };
        if bytes.starts_with(bom) { 2 } else { 0 }
    }
}

/// A UTF-16LE decoder; skips a leading little-endian byte-order mark at
/// construction. Has no encoder counterpart.
#[derive(Debug)]
pub struct Utf16LeDecoder<'a> {
    inner: Scanner<'a, Utf16Engine<false>>,
}

impl<'a> Utf16LeDecoder<'a> {
    #[must_use]
    pub fn new(bytes: &'a [u8], options: DecoderOptions) -> Self {
        Utf16LeDecoder { inner: Scanner::new(Utf16Engine, bytes, options) }
    }
}

delegate_decoder!(Utf16LeDecoder);

/// A UTF-16BE decoder; skips a leading big-endian byte-order mark at
/// construction. Has no encoder counterpart.
#[derive(Debug)]
pub struct Utf16BeDecoder<'a> {
    inner: Scanner<'a, Utf16Engine<true>>,
}

impl<'a> Utf16BeDecoder<'a> {
    #[must_use]
    pub fn new(bytes: &'a [u8], options: DecoderOptions) -> Self {
        Utf16BeDecoder { inner: Scanner::new(Utf16Engine, bytes, options) }
    }
}

delegate_decoder!(Utf16BeDecoder);
