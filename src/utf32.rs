//! UTF-32 decode/encode primitives. One unit is one scalar value.

use crate::error::Encoding;
use crate::profile::validate_scalar;
use crate::{EncodingError, ErrorCode};

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Read the unit at `*pos`, check it is a scalar value, and advance.
#[inline]
pub fn decode(data: &[u32], pos: &mut usize) -> Result<u32, EncodingError> {
    let off = *pos;
    let unit = *data
        .get(off)
        .ok_or_else(|| EncodingError::new(Encoding::Utf32, ErrorCode::Truncated, off))?;
    validate_scalar(unit).map_err(|code| EncodingError::new(Encoding::Utf32, code, off))?;
    *pos = off + 1;
    Ok(unit)
}

/// Validate an entire UTF-32 buffer, reporting the first invalid unit.
pub fn validate(data: &[u32]) -> Result<(), EncodingError> {
    for (off, &unit) in data.iter().enumerate() {
        validate_scalar(unit).map_err(|code| EncodingError::new(Encoding::Utf32, code, off))?;
    }
    Ok(())
}

/// Append the scalar value `cp`.
#[cfg(feature = "alloc")]
#[inline]
pub fn encode(cp: u32, out: &mut Vec<u32>) {
    out.push(cp);
}
