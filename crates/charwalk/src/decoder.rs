//! The decoder contract shared by every encoding.

use alloc::{string::String, vec::Vec};

use crate::{
    big5::Big5Decoder, codepoint::to_char, error::DecodeError, euc_jp::EucJpDecoder,
    euc_kr::EucKrDecoder, gb::GbDecoder, iso_2022_jp::Iso2022JpDecoder,
    replacement::ReplacementDecoder, shift_jis::ShiftJisDecoder, single_byte::SingleByteDecoder,
    utf_8::Utf8Decoder, utf_16::{Utf16BeDecoder, Utf16LeDecoder},
    x_user_defined::XUserDefinedDecoder,
};

/// A positioned decoder over an immutable byte buffer.
///
/// Every decoder keeps a byte cursor and a character cursor that move in
/// lock step: each successful [`next_code`](Decoder::next_code) advances the
/// character cursor by exactly one, including when the "character" is a
/// U+FFFD substitution for malformed input. Implementations are cheap to
/// construct and borrow their input; the same buffer may back any number of
/// decoders concurrently.
///
/// # Examples
///
/// ```rust
/// use charwalk::{Decoder, DecoderOptions, Utf8Decoder};
///
/// let mut decoder = Utf8Decoder::new("héllo".as_bytes(), DecoderOptions::default());
/// assert_eq!(decoder.next_code(), Ok(Some(u32::from('h'))));
/// assert_eq!(decoder.next_char(), Ok(Some('é')));
/// assert_eq!(decoder.pos_char(), 2);
/// assert_eq!(decoder.pos_byte(), 3);
/// ```
pub trait Decoder {
    /// Decodes the next character and returns its code point, or `Ok(None)`
    /// at the end of input.
    ///
    /// Malformed input decodes to U+FFFD, or to a [`DecodeError`] when the
    /// decoder is fatal; the cursor advances past the malformed unit in
    /// both cases, so decoding can always resume.
    fn next_code(&mut self) -> Result<Option<u32>, DecodeError>;

    /// Returns up to `n` upcoming code points without moving the cursor.
    ///
    /// The cursor and all auxiliary state are restored even when the peeked
    /// range contains a fatal error; the error is still reported.
    fn peek_codes(&mut self, n: usize) -> Result<Vec<u32>, DecodeError>;

    /// Moves `distance` characters through the string, forward when
    /// positive and backward when negative, and returns how many characters
    /// could not be traversed before hitting an end.
    ///
    /// Forward motion decodes and discards, honoring the error mode;
    /// backward motion resynchronizes silently and never fails.
    fn seek(&mut self, distance: isize) -> Result<isize, DecodeError>;

    /// Returns to the start of the string (just past any byte-order mark)
    /// in constant time, discarding accumulated error marks.
    fn rewind(&mut self);

    /// The current byte position.
    fn pos_byte(&self) -> usize;

    /// The current character position.
    fn pos_char(&self) -> usize;

    /// The character index of the most recent decoding error, if any;
    /// distinguishes a decoded U+FFFD substitution from a literal one.
    fn pos_err(&self) -> Option<usize>;

    /// The length of the string in bytes.
    fn len_byte(&self) -> usize;

    /// The length of the string in characters.
    ///
    /// The first call may scan to the end of the string; the cursor is left
    /// where it was and the result is cached. Malformed units count as one
    /// character each, regardless of error mode.
    fn len_char(&mut self) -> usize;

    /// Whether the byte cursor sits at or past the end of the string.
    fn eof(&self) -> bool;

    /// Consumes a maximal run of ASCII characters drawn from `mask`, at
    /// most `max` of them, and returns the run.
    ///
    /// Bytes at or above 0x80 in the mask can never match. An empty return
    /// does not by itself signal end of input.
    fn ascii_span(&mut self, mask: &[u8], max: Option<usize>) -> String;

    /// Consumes a maximal run of ASCII characters *not* in `mask`, at most
    /// `max` of them, and returns the run. Non-ASCII input always ends the
    /// run.
    fn ascii_span_not(&mut self, mask: &[u8], max: Option<usize>) -> String;

    /// Like [`next_code`](Decoder::next_code), expressed as a `char`.
    ///
    /// A surrogate passed through under
    /// [`allow_surrogates`](crate::DecoderOptions::allow_surrogates) is not
    /// representable as `char` and is delivered as U+FFFD here; the
    /// code-point API is authoritative for surrogate-tolerant callers.
    fn next_char(&mut self) -> Result<Option<char>, DecodeError> {
        Ok(self.next_code()?.map(to_char))
    }

    /// Returns up to `n` upcoming characters as a string without moving the
    /// cursor.
    fn peek_chars(&mut self, n: usize) -> Result<String, DecodeError> {
        Ok(self.peek_codes(n)?.into_iter().map(to_char).collect())
    }

    /// Iterates over `(index, code point)` pairs from the current position
    /// to the end of input.
    ///
    /// The iteration is single-pass: it leaves the decoder at end of input,
    /// and a fresh iterator yields nothing until [`rewind`](Decoder::rewind)
    /// is called.
    fn codes(&mut self) -> Codes<'_, Self>
    where
        Self: Sized,
    {
        Codes { decoder: self, done: false }
    }

    /// Iterates over `(index, char)` pairs from the current position to the
    /// end of input, with the same single-pass behavior as
    /// [`codes`](Decoder::codes).
    fn chars(&mut self) -> Chars<'_, Self>
    where
        Self: Sized,
    {
        Chars { decoder: self, done: false }
    }
}

/// Iterator over `(index, code point)` pairs; see [`Decoder::codes`].
#[derive(Debug)]
pub struct Codes<'d, D: Decoder> {
    decoder: &'d mut D,
    done: bool,
}

impl<D: Decoder> Iterator for Codes<'_, D> {
    type Item = Result<(usize, u32), DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.decoder.next_code() {
            Ok(Some(code_point)) => Some(Ok((self.decoder.pos_char() - 1, code_point))),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

/// Iterator over `(index, char)` pairs; see [`Decoder::chars`].
#[derive(Debug)]
pub struct Chars<'d, D: Decoder> {
    decoder: &'d mut D,
    done: bool,
}

impl<D: Decoder> Iterator for Chars<'_, D> {
    type Item = Result<(usize, char), DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.decoder.next_char() {
            Ok(Some(c)) => Some(Ok((self.decoder.pos_char() - 1, c))),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

/// A decoder for any registered encoding, resolved once at construction.
///
/// Obtained from [`Encoding::decoder`](crate::Encoding::decoder) or
/// [`Encoding::decoder_for_label`](crate::Encoding::decoder_for_label);
/// dispatch to the concrete state machine is a single enum match, never a
/// per-character string comparison.
#[derive(Debug)]
pub enum AnyDecoder<'a> {
    Big5(Big5Decoder<'a>),
    EucJp(EucJpDecoder<'a>),
    EucKr(EucKrDecoder<'a>),
    Gb(GbDecoder<'a>),
    Iso2022Jp(Iso2022JpDecoder<'a>),
    Replacement(ReplacementDecoder<'a>),
    ShiftJis(ShiftJisDecoder<'a>),
    SingleByte(SingleByteDecoder<'a>),
    Utf8(Utf8Decoder<'a>),
    Utf16Be(Utf16BeDecoder<'a>),
    Utf16Le(Utf16LeDecoder<'a>),
    XUserDefined(XUserDefinedDecoder<'a>),
}

macro_rules! each_variant {
    ($self:expr, $d:ident => $body:expr) => {
        match $self {
            AnyDecoder::Big5($d) => $body,
            AnyDecoder::EucJp($d) => $body,
            AnyDecoder::EucKr($d) => $body,
            AnyDecoder::Gb($d) => $body,
            AnyDecoder::Iso2022Jp($d) => $body,
            AnyDecoder::Replacement($d) => $body,
            AnyDecoder::ShiftJis($d) => $body,
            AnyDecoder::SingleByte($d) => $body,
            AnyDecoder::Utf8($d) => $body,
            AnyDecoder::Utf16Be($d) => $body,
            AnyDecoder::Utf16Le($d) => $body,
            AnyDecoder::XUserDefined($d) => $body,
        }
    };
}

impl Decoder for AnyDecoder<'_> {
    fn next_code(&mut self) -> Result<Option<u32>, DecodeError> {
        each_variant!(self, d => d.next_code())
    }

    fn peek_codes(&mut self, n: usize) -> Result<Vec<u32>, DecodeError> {
        each_variant!(self, d => d.peek_codes(n))
    }

    fn seek(&mut self, distance: isize) -> Result<isize, DecodeError> {
        each_variant!(self, d => d.seek(distance))
    }

    fn rewind(&mut self) {
        each_variant!(self, d => d.rewind());
    }

    fn pos_byte(&self) -> usize {
        each_variant!(self, d => d.pos_byte())
    }

    fn pos_char(&self) -> usize {
        each_variant!(self, d => d.pos_char())
    }

    fn pos_err(&self) -> Option<usize> {
        each_variant!(self, d => d.pos_err())
    }

    fn len_byte(&self) -> usize {
        each_variant!(self, d => d.len_byte())
    }

    fn len_char(&mut self) -> usize {
        each_variant!(self, d => d.len_char())
    }

    fn eof(&self) -> bool {
        each_variant!(self, d => d.eof())
    }

    fn ascii_span(&mut self, mask: &[u8], max: Option<usize>) -> String {
        each_variant!(self, d => d.ascii_span(mask, max))
    }

    fn ascii_span_not(&mut self, mask: &[u8], max: Option<usize>) -> String {
        each_variant!(self, d => d.ascii_span_not(mask, max))
    }
}
