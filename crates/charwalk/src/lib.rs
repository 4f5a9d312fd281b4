//! Seekable decoders and encoders for the WHATWG Encoding Standard.
//!
//! Each decoder walks an immutable, borrowed byte buffer with a
//! `(byte, char)` cursor: decode one character at a time, peek without
//! moving, seek in either direction, or iterate to the end and rewind. All
//! of the registry's encodings are covered — UTF-8, UTF-16LE/BE, the
//! single-byte family, Big5, gb18030/GBK, EUC-JP, EUC-KR, Shift_JIS, the
//! modal ISO-2022-JP, replacement, and x-user-defined — with bit-exact
//! error recovery in both "replace" and fatal modes.
//!
//! ```rust
//! use charwalk::{Decoder, DecoderOptions, Encoding};
//!
//! // Label resolution is case-insensitive, and a byte-order mark in the
//! // input overrides the label entirely.
//! let decoder = Encoding::decoder_for_label(
//!     "Shift_JIS",
//!     b"\xEF\xBB\xBF\x41",
//!     DecoderOptions::default(),
//! );
//! let mut decoder = decoder.unwrap();
//! assert_eq!(decoder.next_code(), Ok(Some(0x41)));
//! assert_eq!(decoder.next_code(), Ok(None));
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod big5;
mod codepoint;
mod decoder;
mod encoder;
mod error;
mod euc_jp;
mod euc_kr;
mod gb;
mod iso_2022_jp;
mod label;
mod options;
mod replacement;
mod scanner;
mod shift_jis;
mod single_byte;
mod tables;
mod utf_16;
mod utf_8;
mod x_user_defined;

#[cfg(test)]
mod tests;

pub use big5::Big5Decoder;
pub use decoder::{AnyDecoder, Chars, Codes, Decoder};
pub use encoder::Encoder;
pub use error::{DecodeError, EncodeError};
pub use euc_jp::EucJpDecoder;
pub use euc_kr::EucKrDecoder;
pub use gb::GbDecoder;
pub use iso_2022_jp::Iso2022JpDecoder;
pub use label::Encoding;
pub use options::DecoderOptions;
pub use replacement::ReplacementDecoder;
pub use shift_jis::ShiftJisDecoder;
pub use single_byte::SingleByteDecoder;
pub use utf_16::{Utf16BeDecoder, Utf16LeDecoder};
pub use utf_8::Utf8Decoder;
pub use x_user_defined::XUserDefinedDecoder;
