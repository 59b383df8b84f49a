use alloc::vec::Vec;

use crate::engine::{DefaultTranscoder, Transcoder};
use crate::EncodingError;

/// Convert UTF-8 to UTF-16.
///
/// Supplementary code points become surrogate pairs.
///
/// ```
/// let units = utf_transcode::utf8_to_utf16("😀".as_bytes()).unwrap();
/// assert_eq!(units, [0xD83D, 0xDE00]);
/// ```
///
/// # Errors
///
/// Fails with an `Encoding::Utf8` error on malformed input; nothing is returned partially.
#[inline]
pub fn utf8_to_utf16(input: &[u8]) -> Result<Vec<u16>, EncodingError> {
    DefaultTranscoder::utf8_to_utf16(input)
}

/// Convert UTF-16 to UTF-8.
///
/// # Errors
///
/// Fails with an `Encoding::Utf16` error on an unpaired high surrogate, a lone low surrogate, or a
/// high surrogate at the end of the input.
#[inline]
pub fn utf16_to_utf8(input: &[u16]) -> Result<Vec<u8>, EncodingError> {
    DefaultTranscoder::utf16_to_utf8(input)
}

/// Convert UTF-16 to UTF-32.
///
/// # Errors
///
/// Fails with `Truncated` (high surrogate at end of input), `UnpairedHighSurrogate`
/// or `LoneLowSurrogate`.
#[inline]
pub fn utf16_to_utf32(input: &[u16]) -> Result<Vec<u32>, EncodingError> {
    DefaultTranscoder::utf16_to_utf32(input)
}

/// Convert UTF-32 to UTF-16.
///
/// ```
/// let units = utf_transcode::utf32_to_utf16(&[0x1F600]).unwrap();
/// assert_eq!(units, [0xD83D, 0xDE00]);
/// ```
///
/// # Errors
///
/// Fails with `OutOfRange` for units above `U+10FFFF` and `EncodedSurrogate` for units in
/// `0xD800..=0xDFFF`.
#[inline]
pub fn utf32_to_utf16(input: &[u32]) -> Result<Vec<u16>, EncodingError> {
    DefaultTranscoder::utf32_to_utf16(input)
}

/// Convert UTF-8 to UTF-32.
///
/// # Errors
///
/// Fails with an `Encoding::Utf8` error on malformed input.
#[inline]
pub fn utf8_to_utf32(input: &[u8]) -> Result<Vec<u32>, EncodingError> {
    DefaultTranscoder::utf8_to_utf32(input)
}

/// Convert UTF-32 to UTF-8.
///
/// # Errors
///
/// Fails with `OutOfRange` or `EncodedSurrogate` on the first unit that is not a scalar value.
#[inline]
pub fn utf32_to_utf8(input: &[u32]) -> Result<Vec<u8>, EncodingError> {
    DefaultTranscoder::utf32_to_utf8(input)
}
