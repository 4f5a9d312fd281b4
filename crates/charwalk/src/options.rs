/// Configuration options shared by every decoder.
///
/// # Examples
///
/// ```rust
/// use charwalk::{Decoder, DecoderOptions, Utf8Decoder};
///
/// let mut decoder = Utf8Decoder::new(b"abc", DecoderOptions {
///     fatal: true,
///     ..Default::default()
/// });
/// assert_eq!(decoder.next_code(), Ok(Some(0x61)));
/// ```
///
/// # Default
///
/// Both options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecoderOptions {
    /// Whether malformed input is reported as an error.
    ///
    /// When `false`, every malformed byte sequence decodes to U+FFFD
    /// REPLACEMENT CHARACTER and the cursor keeps moving. When `true`, the
    /// same sequences produce a [`DecodeError`](crate::DecodeError) carrying
    /// the character and byte offsets of the fault; the cursor advances past
    /// the sequence either way.
    ///
    /// # Default
    ///
    /// `false`
    pub fatal: bool,

    /// Whether surrogate code points are passed through as valid input.
    ///
    /// Only the UTF-8 and UTF-16 decoders consult this; the legacy encodings
    /// cannot express surrogates. Tolerated surrogates are visible through
    /// the code-point API; the `char`-level API still substitutes U+FFFD for
    /// them, since `char` cannot hold a surrogate.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_surrogates: bool,
}
