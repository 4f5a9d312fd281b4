//! The shared cursor machinery behind every buffer-walking decoder.
//!
//! A [`Scanner`] owns the borrowed byte buffer, the `(byte, char)` cursor,
//! the error mode, and the error-mark stack; the per-encoding byte→scalar
//! step and backward-resynchronization strategy are supplied by an
//! [`Engine`] implementation. The concrete decoder types wrap a `Scanner`
//! and delegate the public [`Decoder`](crate::Decoder) contract to it.

use alloc::{string::String, vec::Vec};
use core::fmt;

use bstr::BStr;

use crate::{codepoint::REPLACEMENT, error::DecodeError, options::DecoderOptions};

/// Byte-level view handed to an engine's decode step.
pub(crate) struct Raw<'a, S> {
    pub bytes: &'a [u8],
    pub pos: usize,
    pub state: S,
    pub allow_surrogates: bool,
}

impl<S> Raw<'_, S> {
    pub(crate) fn byte(&self, at: usize) -> Option<u8> {
        self.bytes.get(at).copied()
    }
}

/// Outcome of one engine step. On `Error` the cursor has already been
/// advanced past the bytes charged to the malformed unit; `start` is where
/// that unit began.
pub(crate) enum RawStep {
    Eof,
    Code(u32),
    Error { start: usize },
}

/// How a decoder steps back to the previous character boundary.
pub(crate) enum Backward {
    /// Characters are single bytes; stepping back is a decrement.
    Byte,
    /// UTF-8: walk back over at most three continuation bytes, then
    /// re-decode forward to unmask overlong or truncated sequences.
    Utf8Window,
    /// Re-decode forward from the nearest byte below `floor`, which can
    /// only ever begin a character in the encoding at hand.
    Rescan { floor: u8 },
    /// UTF-16: pop recorded error marks, otherwise probe four bytes back.
    PairProbe,
    /// Modal encodings: replay from the origin, the only position whose
    /// shift state is known without bookkeeping.
    Replay,
}

pub(crate) trait Engine {
    /// Extra decode state threaded between steps (shift modes, pending
    /// combining scalars). Snapshots copy it by value.
    type State: Copy + Default + PartialEq + fmt::Debug;

    const BACKWARD: Backward;

    /// Non-self-synchronizing decoders record `(end, start)` marks for every
    /// malformed unit so backward seeks can jump over them.
    const PUSH_MARKS: bool = false;

    /// UTF-16 spans match byte pairs rather than bytes: `Some(big_endian)`.
    const WIDE_SPAN: Option<bool> = None;

    /// Decode one character, advancing `raw.pos` past the consumed bytes.
    fn next(&self, raw: &mut Raw<'_, Self::State>) -> RawStep;

    /// Whether `byte` can be a literal ASCII character at the current
    /// position; gates the ASCII span fast paths.
    fn span_allowed(&self, _state: &Self::State, byte: u8) -> bool {
        byte < 0x80
    }

    /// Length of a byte-order mark to skip at construction.
    fn strip_bom(&self, _bytes: &[u8]) -> usize {
        0
    }
}

/// How a decode step reports what it finds.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Pass {
    /// Honor the error mode, update `pos_err`, push marks.
    Report,
    /// Substitute silently, leave marks and `pos_err` alone; used while a
    /// probe or scan must not disturb observable state.
    Quiet,
    /// Substitute silently but rebuild marks; used by origin replays.
    Rebuild,
}

#[derive(Clone, Copy)]
struct Snapshot<S> {
    pos: usize,
    pos_char: usize,
    pos_err: Option<usize>,
    marks: usize,
    state: S,
}

pub(crate) struct Scanner<'a, E: Engine> {
    engine: E,
    raw: Raw<'a, E::State>,
    pos_char: usize,
    fatal: bool,
    pos_err: Option<usize>,
    cached_len: Option<usize>,
    /// `(end, start)` byte offsets of decoded error units, oldest first.
    marks: Vec<(usize, usize)>,
    bom: usize,
}

impl<'a, E: Engine> Scanner<'a, E> {
    pub(crate) fn new(engine: E, bytes: &'a [u8], options: DecoderOptions) -> Self {
        let bom = engine.strip_bom(bytes);
        Scanner {
            engine,
            raw: Raw {
                bytes,
                pos: bom,
                state: E::State::default(),
                allow_surrogates: options.allow_surrogates,
            },
            pos_char: 0,
            fatal: options.fatal,
            pos_err: None,
            cached_len: None,
            marks: Vec::new(),
            bom,
        }
    }

    fn step(&mut self, pass: Pass) -> Result<Option<u32>, DecodeError> {
        let char_offset = self.pos_char;
        match self.engine.next(&mut self.raw) {
            RawStep::Eof => Ok(None),
            RawStep::Code(code_point) => {
                self.pos_char += 1;
                Ok(Some(code_point))
            }
            RawStep::Error { start } => {
                self.pos_char += 1;
                if E::PUSH_MARKS && pass != Pass::Quiet {
                    self.marks.push((self.raw.pos, start));
                }
                if pass == Pass::Report {
                    self.pos_err = Some(char_offset);
                    if self.fatal {
                        return Err(DecodeError {
                            char_offset,
                            byte_offset: start,
                        });
                    }
                }
                Ok(Some(REPLACEMENT))
            }
        }
    }

    fn save(&self) -> Snapshot<E::State> {
        Snapshot {
            pos: self.raw.pos,
            pos_char: self.pos_char,
            pos_err: self.pos_err,
            marks: self.marks.len(),
            state: self.raw.state,
        }
    }

    fn restore(&mut self, snapshot: Snapshot<E::State>) {
        self.raw.pos = snapshot.pos;
        self.pos_char = snapshot.pos_char;
        self.pos_err = snapshot.pos_err;
        self.marks.truncate(snapshot.marks);
        self.raw.state = snapshot.state;
    }

    pub(crate) fn next_code(&mut self) -> Result<Option<u32>, DecodeError> {
        self.step(Pass::Report)
    }

    pub(crate) fn peek_codes(&mut self, n: usize) -> Result<Vec<u32>, DecodeError> {
        let snapshot = self.save();
        let mut out = Vec::new();
        for _ in 0..n {
            match self.step(Pass::Report) {
                Ok(Some(code_point)) => out.push(code_point),
                Ok(None) => break,
                Err(err) => {
                    self.restore(snapshot);
                    return Err(err);
                }
            }
        }
        self.restore(snapshot);
        Ok(out)
    }

    pub(crate) fn seek(&mut self, distance: isize) -> Result<isize, DecodeError> {
        if distance > 0 {
            let mut left = distance.unsigned_abs();
            while left > 0 {
                match self.step(Pass::Report)? {
                    Some(_) => left -= 1,
                    None => break,
                }
            }
            Ok(left.try_into().unwrap_or(isize::MAX))
        } else if distance < 0 {
            let left = self.seek_back(distance.unsigned_abs());
            Ok(left.try_into().unwrap_or(isize::MAX))
        } else {
            Ok(0)
        }
    }

    fn seek_back(&mut self, distance: usize) -> usize {
        match E::BACKWARD {
            Backward::Byte => {
                let n = distance.min(self.pos_char);
                self.raw.pos -= n;
                self.pos_char -= n;
                distance - n
            }
            Backward::Utf8Window => self.seek_back_utf8(distance),
            Backward::Rescan { floor } => self.seek_back_rescan(distance, floor),
            Backward::PairProbe => self.seek_back_pairs(distance),
            Backward::Replay => self.seek_back_replay(distance),
        }
    }

    fn seek_back_utf8(&mut self, distance: usize) -> usize {
        let mut left = distance;
        while left > 0 && self.raw.pos > self.bom {
            left -= 1;
            self.pos_char -= 1;
            let b = self.raw.bytes[self.raw.pos - 1];
            if b < 0x80 {
                self.raw.pos -= 1;
            } else {
                // Walk back over continuation bytes, at most four bytes and
                // no further than the start, then re-decode: a decode that
                // falls short of the starting position exposes an overlong
                // or otherwise invalid sequence occupying a single byte.
                let start = self.raw.pos;
                let mut pos = start - 1;
                let mut b = b;
                while (0x80..=0xBF).contains(&b) && pos > self.bom && (start - pos) < 4 {
                    pos -= 1;
                    b = self.raw.bytes[pos];
                }
                self.raw.pos = pos;
                let _ = self.engine.next(&mut self.raw);
                self.raw.pos = if self.raw.pos < start { start - 1 } else { pos };
            }
        }
        left
    }

    fn seek_back_rescan(&mut self, distance: usize, floor: u8) -> usize {
        let mut left = distance;
        while left > 0 && self.pos_char > 0 {
            left -= 1;
            self.pos_char -= 1;
            let target = self.raw.pos;
            let target_state = self.raw.state;
            // Any byte below the floor can only stand alone, so the position
            // after it is a known character boundary to replay from.
            let mut anchor = target.saturating_sub(1).max(self.bom);
            while anchor > self.bom && self.raw.bytes[anchor - 1] >= floor {
                anchor -= 1;
            }
            self.raw.pos = anchor;
            self.raw.state = E::State::default();
            let mut prev = (anchor, E::State::default());
            loop {
                if self.raw.pos == target && self.raw.state == target_state {
                    break;
                }
                prev = (self.raw.pos, self.raw.state);
                if matches!(self.engine.next(&mut self.raw), RawStep::Eof) {
                    break;
                }
            }
            self.raw.pos = prev.0;
            self.raw.state = prev.1;
        }
        left
    }

    fn seek_back_pairs(&mut self, distance: usize) -> usize {
        let mut left = distance;
        while left > 0 && self.pos_char > 0 {
            left -= 1;
            self.pos_char -= 1;
            if let Some(&(end, start)) = self.marks.last() {
                if end == self.raw.pos {
                    // the unit behind the cursor is a recorded error
                    self.marks.pop();
                    self.raw.pos = start;
                    continue;
                }
            }
            if self.raw.pos < self.bom + 4 {
                // less than two units in: the previous character is one unit
                self.raw.pos -= 2;
            } else {
                // go back two units and re-decode; consuming both means the
                // character behind the cursor was a surrogate pair
                let start = self.raw.pos;
                self.raw.pos = start - 4;
                let _ = self.engine.next(&mut self.raw);
                self.raw.pos = if self.raw.pos == start { start - 4 } else { start - 2 };
            }
        }
        left
    }

    fn seek_back_replay(&mut self, distance: usize) -> usize {
        let target = self.pos_char.saturating_sub(distance);
        let left = distance - (self.pos_char - target);
        self.raw.pos = self.bom;
        self.raw.state = E::State::default();
        self.pos_char = 0;
        self.marks.clear();
        while self.pos_char < target {
            if matches!(self.step(Pass::Rebuild), Ok(None)) {
                break;
            }
        }
        left
    }

    pub(crate) fn rewind(&mut self) {
        self.raw.pos = self.bom;
        self.raw.state = E::State::default();
        self.pos_char = 0;
        self.marks.clear();
    }

    pub(crate) fn pos_byte(&self) -> usize {
        self.raw.pos
    }

    pub(crate) fn pos_char(&self) -> usize {
        self.pos_char
    }

    pub(crate) fn pos_err(&self) -> Option<usize> {
        self.pos_err
    }

    pub(crate) fn len_byte(&self) -> usize {
        self.raw.bytes.len()
    }

    pub(crate) fn len_char(&mut self) -> usize {
        if let Some(len) = self.cached_len {
            return len;
        }
        let snapshot = self.save();
        while matches!(self.step(Pass::Quiet), Ok(Some(_))) {}
        let len = self.pos_char;
        self.restore(snapshot);
        self.cached_len = Some(len);
        len
    }

    pub(crate) fn eof(&self) -> bool {
        self.raw.pos >= self.raw.bytes.len()
    }

    pub(crate) fn ascii_span(&mut self, mask: &[u8], max: Option<usize>) -> String {
        self.span(mask, max, true)
    }

    pub(crate) fn ascii_span_not(&mut self, mask: &[u8], max: Option<usize>) -> String {
        self.span(mask, max, false)
    }

    fn span(&mut self, mask: &[u8], max: Option<usize>, want: bool) -> String {
        let mut out = String::new();
        let mut left = max.unwrap_or(usize::MAX);
        if let Some(big_endian) = E::WIDE_SPAN {
            while left > 0 {
                let (hi, lo) = if big_endian {
                    (self.raw.byte(self.raw.pos), self.raw.byte(self.raw.pos + 1))
                } else {
                    (self.raw.byte(self.raw.pos + 1), self.raw.byte(self.raw.pos))
                };
                let (Some(hi), Some(lo)) = (hi, lo) else { break };
                if hi != 0 || lo >= 0x80 || mask.contains(&lo) != want {
                    break;
                }
                out.push(lo as char);
                self.raw.pos += 2;
                self.pos_char += 1;
                left -= 1;
            }
        } else {
            while left > 0 {
                let Some(b) = self.raw.byte(self.raw.pos) else { break };
                if b >= 0x80
                    || !self.engine.span_allowed(&self.raw.state, b)
                    || mask.contains(&b) != want
                {
                    break;
                }
                out.push(b as char);
                self.raw.pos += 1;
                self.pos_char += 1;
                left -= 1;
            }
        }
        out
    }
}

impl<E: Engine> fmt::Debug for Scanner<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scanner")
            .field("bytes", &BStr::new(self.raw.bytes))
            .field("pos_byte", &self.raw.pos)
            .field("pos_char", &self.pos_char)
            .field("state", &self.raw.state)
            .field("fatal", &self.fatal)
            .finish_non_exhaustive()
    }
}

/// Implements the [`Decoder`](crate::Decoder) contract for a wrapper struct
/// holding a `Scanner` in its `inner` field.
macro_rules! delegate_decoder {
    ($ty:ident) => {
        impl crate::Decoder for $ty<'_> {
            fn next_code(&mut self) -> Result<Option<u32>, crate::DecodeError> {
                self.inner.next_code()
            }

            fn peek_codes(
                &mut self,
                n: usize,
            ) -> Result<alloc::vec::Vec<u32>, crate::DecodeError> {
                self.inner.peek_codes(n)
            }

            fn seek(&mut self, distance: isize) -> Result<isize, crate::DecodeError> {
                self.inner.seek(distance)
            }

            fn rewind(&mut self) {
                self.inner.rewind();
            }

            fn pos_byte(&self) -> usize {
                self.inner.pos_byte()
            }

            fn pos_char(&self) -> usize {
                self.inner.pos_char()
            }

            fn pos_err(&self) -> Option<usize> {
                self.inner.pos_err()
            }

            fn len_byte(&self) -> usize {
                self.inner.len_byte()
            }

            fn len_char(&mut self) -> usize {
                self.inner.len_char()
            }

            fn eof(&self) -> bool {
                self.inner.eof()
            }

            fn ascii_span(
                &mut self,
                mask: &[u8],
                max: Option<usize>,
            ) -> alloc::string::String {
                self.inner.ascii_span(mask, max)
            }

            fn ascii_span_not(
                &mut self,
                mask: &[u8],
                max: Option<usize>,
            ) -> alloc::string::String {
                self.inner.ascii_span_not(mask, max)
            }
        }
    };
}

pub(crate) use delegate_decoder;
