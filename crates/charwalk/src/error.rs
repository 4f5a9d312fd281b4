use thiserror::Error;

/// A malformed byte sequence reported by a decoder in fatal mode.
///
/// Both offsets name the character that failed to decode: `char_offset` is
/// the index it would have occupied, `byte_offset` the position of the first
/// byte of the malformed sequence. The decoder has already advanced past the
/// bytes charged to the error when this is returned, so the caller may keep
/// decoding to recover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("invalid byte sequence for character {char_offset} at byte offset {byte_offset}")]
pub struct DecodeError {
    /// Index of the character the malformed sequence would have produced.
    pub char_offset: usize,
    /// Offset of the first byte of the malformed sequence.
    pub byte_offset: usize,
}

/// A code point that has no representation in the target encoding, reported
/// by an encoder in fatal mode.
///
/// Code points outside the Unicode range are not reported this way; passing
/// one to an encoder is a caller bug and panics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("code point U+{code_point:04X} cannot be represented in {encoding}")]
pub struct EncodeError {
    /// The unrepresentable code point.
    pub code_point: u32,
    /// Canonical name of the target encoding.
    pub encoding: &'static str,
}
