use crate::engine::{DefaultTranscoder, Transcoder};
use crate::{utf8, EncodingError};

/// Returns true iff `input` is well-formed UTF-8.
///
/// Rejects truncated sequences, stray continuation bytes, `11111xxx` bytes, overlong forms,
/// encoded surrogates (`ED A0 80..=ED BF BF`) and values above `U+10FFFF`.
#[inline]
#[must_use]
pub fn is_valid_utf8(input: &[u8]) -> bool {
    DefaultTranscoder::is_valid_utf8(input)
}

/// Returns true iff `input` is well-formed UTF-16: every high surrogate is immediately followed by
/// a low surrogate and no low surrogate stands alone.
#[inline]
#[must_use]
pub fn is_valid_utf16(input: &[u16]) -> bool {
    DefaultTranscoder::is_valid_utf16(input)
}

/// Returns true iff every unit is at most `U+10FFFF` and outside `0xD800..=0xDFFF`.
#[inline]
#[must_use]
pub fn is_valid_utf32(input: &[u32]) -> bool {
    DefaultTranscoder::is_valid_utf32(input)
}

/// Validate UTF-8 and report where it first goes wrong.
///
/// # Errors
///
/// Returns the [`ErrorCode`](crate::ErrorCode) and byte offset of the first malformed sequence.
#[inline]
pub fn validate_utf8(input: &[u8]) -> Result<(), EncodingError> {
    DefaultTranscoder::validate_utf8(input)
}

/// Validate UTF-16 and report where it first goes wrong.
///
/// # Errors
///
/// Returns `Truncated`, `UnpairedHighSurrogate` or `LoneLowSurrogate` with the unit offset.
#[inline]
pub fn validate_utf16(input: &[u16]) -> Result<(), EncodingError> {
    DefaultTranscoder::validate_utf16(input)
}

/// Validate UTF-32 and report the first unit that is not a scalar value.
///
/// # Errors
///
/// Returns `OutOfRange` or `EncodedSurrogate` with the unit offset.
#[inline]
pub fn validate_utf32(input: &[u32]) -> Result<(), EncodingError> {
    DefaultTranscoder::validate_utf32(input)
}

/// Returns true iff `bytes` is exactly one well-formed UTF-8 sequence of 1 to 4 bytes.
///
/// ```
/// assert!(utf_transcode::is_valid_utf8_sequence(&[0xE2, 0x82, 0xAC]));
/// assert!(!utf_transcode::is_valid_utf8_sequence(&[0xE2, 0x82]));
/// assert!(!utf_transcode::is_valid_utf8_sequence(b"ab"));
/// ```
#[inline]
#[must_use]
pub fn is_valid_utf8_sequence(bytes: &[u8]) -> bool {
    utf8::is_valid_sequence(bytes)
}
