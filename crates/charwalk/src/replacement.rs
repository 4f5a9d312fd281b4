//! The replacement encoding: a stand-in for legacy multi-byte schemes that
//! are unsafe to decode. Any non-empty input produces exactly one
//! replacement character (or one fault) and then reports end of input.

use alloc::{string::String, vec::Vec};

use crate::{decoder::Decoder, error::DecodeError, options::DecoderOptions};

/// The replacement decoder. Has no encoder counterpart.
#[derive(Debug)]
pub struct ReplacementDecoder<'a> {
    bytes: &'a [u8],
    done: bool,
    fatal: bool,
    pos_err: Option<usize>,
}

impl<'a> ReplacementDecoder<'a> {
    #[must_use]
    pub fn new(bytes: &'a [u8], options: DecoderOptions) -> Self {
        ReplacementDecoder {
            bytes,
            done: false,
            fatal: options.fatal,
            pos_err: None,
        }
    }
}

impl Decoder for ReplacementDecoder<'_> {
    fn next_code(&mut self) -> Result<Option<u32>, DecodeError> {
        if self.eof() {
            return Ok(None);
        }
        self.done = true;
        self.pos_err = Some(0);
        if self.fatal {
            Err(DecodeError { char_offset: 0, byte_offset: 0 })
        } else {
            Ok(Some(0xFFFD))
        }
    }

    fn peek_codes(&mut self, n: usize) -> Result<Vec<u32>, DecodeError> {
        if self.eof() || n == 0 {
            return Ok(Vec::new());
        }
        if self.fatal {
            return Err(DecodeError { char_offset: 0, byte_offset: 0 });
        }
        Ok(alloc::vec![0xFFFD])
    }

    fn seek(&mut self, distance: isize) -> Result<isize, DecodeError> {
        if distance > 0 {
            let mut left = distance;
            if !self.eof() {
                self.next_code()?;
                left -= 1;
            }
            Ok(left)
        } else if distance < 0 {
            let mut left = -distance;
            if self.done {
                self.done = false;
                left -= 1;
            }
            Ok(left)
        } else {
            Ok(0)
        }
    }

    fn rewind(&mut self) {
        self.done = false;
    }

    fn pos_byte(&self) -> usize {
        if self.done { self.bytes.len() } else { 0 }
    }

    fn pos_char(&self) -> usize {
        usize::from(self.done)
    }

    fn pos_err(&self) -> Option<usize> {
        self.pos_err
    }

    fn len_byte(&self) -> usize {
        self.bytes.len()
    }

    fn len_char(&mut self) -> usize {
        usize::from(!self.bytes.is_empty())
    }

    fn eof(&self) -> bool {
        self.done || self.bytes.is_empty()
    }

    fn ascii_span(&mut self, _mask: &[u8], _max: Option<usize>) -> String {
        String::new()
    }

    fn ascii_span_not(&mut self, _mask: &[u8], _max: Option<usize>) -> String {
        String::new()
    }
}
