//! UTF-16 decode/encode primitives.

use crate::error::Encoding;
use crate::profile::{combine_surrogates, is_high_surrogate, is_low_surrogate};
use crate::{EncodingError, ErrorCode};

#[cfg(feature = "alloc")]
use crate::profile::{split_surrogates, SUPPLEMENTARY_MIN};
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

#[inline]
const fn err(code: ErrorCode, off: usize) -> EncodingError {
    EncodingError::new(Encoding::Utf16, code, off)
}

/// Decode the scalar value starting at `*pos` and advance past it.
///
/// A high surrogate consumes the following low surrogate. On error `*pos` is left unchanged.
#[inline]
pub fn decode(data: &[u16], pos: &mut usize) -> Result<u32, EncodingError> {
    let off = *pos;
    let unit = *data
        .get(off)
        .ok_or_else(|| err(ErrorCode::Truncated, off))?;

    if is_high_surrogate(unit) {
        let low = *data
            .get(off + 1)
            .ok_or_else(|| err(ErrorCode::Truncated, off))?;
        if !is_low_surrogate(low) {
            return Err(err(ErrorCode::UnpairedHighSurrogate, off));
        }
        *pos = off + 2;
        return Ok(combine_surrogates(unit, low));
    }
    if is_low_surrogate(unit) {
        return Err(err(ErrorCode::LoneLowSurrogate, off));
    }

    *pos = off + 1;
    Ok(u32::from(unit))
}

/// Validate an entire UTF-16 buffer, reporting the first malformed unit.
pub fn validate(data: &[u16]) -> Result<(), EncodingError> {
    let mut pos = 0;
    while pos < data.len() {
        decode(data, &mut pos)?;
    }
    Ok(())
}

/// Append the UTF-16 encoding of the scalar value `cp`.
#[cfg(feature = "alloc")]
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn encode(cp: u32, out: &mut Vec<u16>) {
    if cp < SUPPLEMENTARY_MIN {
        out.push(cp as u16);
    } else {
        let (high, low) = split_surrogates(cp);
        out.extend_from_slice(&[high, low]);
    }
}
