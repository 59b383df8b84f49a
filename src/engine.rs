//! Transcoding strategies.
//!
//! [`Transcoder`] carries the full operation surface. Its default methods *are* the scalar
//! reference engine; [`Scalar`] uses them unchanged. With the `simdutf8` feature, `Simd`
//! overrides UTF-8 validation and the UTF-8 decoding directions and falls back to the scalar
//! engine whenever the input is rejected, so errors are always reported by the reference code.
//!
//! [`DefaultTranscoder`] is fixed at build time and backs the crate-level free functions.

use crate::{utf16, utf32, utf8, EncodingError};

#[cfg(feature = "alloc")]
use crate::codec::{transcode, Utf16, Utf32, Utf8};
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// A complete set of validators and converters.
///
/// Implementations must be observationally identical to the default methods, including the
/// exact [`EncodingError`] returned for malformed input.
pub trait Transcoder {
    /// Validate UTF-8, reporting the first malformed sequence.
    ///
    /// # Errors
    ///
    /// Returns the code and byte offset of the first malformed sequence.
    fn validate_utf8(input: &[u8]) -> Result<(), EncodingError> {
        utf8::validate(input)
    }

    /// Validate UTF-16, reporting the first malformed unit.
    ///
    /// # Errors
    ///
    /// Returns the code and unit offset of the first unpaired surrogate.
    fn validate_utf16(input: &[u16]) -> Result<(), EncodingError> {
        utf16::validate(input)
    }

    /// Validate UTF-32, reporting the first unit that is not a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` or `EncodedSurrogate` with the unit offset.
    fn validate_utf32(input: &[u32]) -> Result<(), EncodingError> {
        utf32::validate(input)
    }

    /// Returns true iff `input` is well-formed UTF-8.
    fn is_valid_utf8(input: &[u8]) -> bool {
        Self::validate_utf8(input).is_ok()
    }

    /// Returns true iff `input` is well-formed UTF-16.
    fn is_valid_utf16(input: &[u16]) -> bool {
        Self::validate_utf16(input).is_ok()
    }

    /// Returns true iff every unit of `input` is a scalar value.
    fn is_valid_utf32(input: &[u32]) -> bool {
        Self::validate_utf32(input).is_ok()
    }

    /// Convert UTF-8 to UTF-16.
    ///
    /// # Errors
    ///
    /// Fails on malformed UTF-8 or if the output cannot be allocated.
    #[cfg(feature = "alloc")]
    fn utf8_to_utf16(input: &[u8]) -> Result<Vec<u16>, EncodingError> {
        transcode::<Utf8, Utf16>(input)
    }

    /// Convert UTF-16 to UTF-8.
    ///
    /// # Errors
    ///
    /// Fails on unpaired surrogates or if the output cannot be allocated.
    #[cfg(feature = "alloc")]
    fn utf16_to_utf8(input: &[u16]) -> Result<Vec<u8>, EncodingError> {
        transcode::<Utf16, Utf8>(input)
    }

    /// Convert UTF-16 to UTF-32.
    ///
    /// # Errors
    ///
    /// Fails on unpaired surrogates or if the output cannot be allocated.
    #[cfg(feature = "alloc")]
    fn utf16_to_utf32(input: &[u16]) -> Result<Vec<u32>, EncodingError> {
        transcode::<Utf16, Utf32>(input)
    }

    /// Convert UTF-32 to UTF-16.
    ///
    /// # Errors
    ///
    /// Fails on units above `U+10FFFF` or in the surrogate range, or if the output cannot be allocated.
    #[cfg(feature = "alloc")]
    fn utf32_to_utf16(input: &[u32]) -> Result<Vec<u16>, EncodingError> {
        transcode::<Utf32, Utf16>(input)
    }

    /// Convert UTF-8 to UTF-32.
    ///
    /// # Errors
    ///
    /// Fails on malformed UTF-8 or if the output cannot be allocated.
    #[cfg(feature = "alloc")]
    fn utf8_to_utf32(input: &[u8]) -> Result<Vec<u32>, EncodingError> {
        transcode::<Utf8, Utf32>(input)
    }

    /// Convert UTF-32 to UTF-8.
    ///
    /// # Errors
    ///
    /// Fails on units above `U+10FFFF` or in the surrogate range, or if the output cannot be allocated.
    #[cfg(feature = "alloc")]
    fn utf32_to_utf8(input: &[u32]) -> Result<Vec<u8>, EncodingError> {
        transcode::<Utf32, Utf8>(input)
    }
}

/// The scalar reference engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scalar;

impl Transcoder for Scalar {}

/// SIMD-accelerated UTF-8 validation on top of the scalar engine.
///
/// CPU features are detected at runtime when the `std` feature is on and chosen at compile time
/// otherwise.
#[cfg(feature = "simdutf8")]
#[cfg_attr(docsrs, doc(cfg(feature = "simdutf8")))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Simd;

#[cfg(feature = "simdutf8")]
impl Transcoder for Simd {
    fn validate_utf8(input: &[u8]) -> Result<(), EncodingError> {
        if simdutf8::basic::from_utf8(input).is_ok() {
            return Ok(());
        }
        Scalar::validate_utf8(input)
    }

    fn is_valid_utf8(input: &[u8]) -> bool {
        simdutf8::basic::from_utf8(input).is_ok()
    }

    #[cfg(feature = "alloc")]
    fn utf8_to_utf16(input: &[u8]) -> Result<Vec<u16>, EncodingError> {
        match simdutf8::basic::from_utf8(input) {
            Ok(text) => simd::collect(text.encode_utf16(), input.len()),
            Err(_) => Scalar::utf8_to_utf16(input),
        }
    }

    #[cfg(feature = "alloc")]
    fn utf8_to_utf32(input: &[u8]) -> Result<Vec<u32>, EncodingError> {
        match simdutf8::basic::from_utf8(input) {
            Ok(text) => simd::collect(text.chars().map(u32::from), input.len()),
            Err(_) => Scalar::utf8_to_utf32(input),
        }
    }
}

#[cfg(all(feature = "simdutf8", feature = "alloc"))]
mod simd {
    use alloc::vec::Vec;

    use crate::alloc_util::{trim, try_output_vec};
    use crate::error::Encoding;
    use crate::EncodingError;

    /// Collect the units of already-validated text; UTF-8 never grows when re-encoded.
    pub fn collect<T>(
        units: impl Iterator<Item = T>,
        input_len: usize,
    ) -> Result<Vec<T>, EncodingError> {
        let mut out = try_output_vec(input_len, 1, Encoding::Utf8)?;
        out.extend(units);
        Ok(trim(out))
    }
}

/// The transcoder selected at build time: [`Simd`] with the `simdutf8` feature, else [`Scalar`].
#[cfg(feature = "simdutf8")]
pub type DefaultTranscoder = Simd;

/// The transcoder selected at build time: `Simd` with the `simdutf8` feature, else [`Scalar`].
#[cfg(not(feature = "simdutf8"))]
pub type DefaultTranscoder = Scalar;
