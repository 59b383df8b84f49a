//! Unicode scalar-value profile shared by every encoding form.
//!
//! A `u32` is a **scalar value** iff it lies in `[0, 0x10FFFF]` and outside the surrogate range
//! `[0xD800, 0xDFFF]`. Every successful decode in this crate yields a scalar value, and every
//! encoder assumes its argument is one.
//!
//! Surrogates only exist as UTF-16 code units:
//!
//! - high (lead) surrogates: `[0xD800, 0xDBFF]`
//! - low (trail) surrogates: `[0xDC00, 0xDFFF]`
//!
//! A high/low pair encodes `0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00)`.

use crate::ErrorCode;

/// Largest Unicode code point (`U+10FFFF`).
pub const MAX_CODE_POINT: u32 = 0x10_FFFF;

/// First code point outside the Basic Multilingual Plane.
pub const SUPPLEMENTARY_MIN: u32 = 0x1_0000;

/// First surrogate code point.
pub const SURROGATE_MIN: u32 = 0xD800;
/// Last surrogate code point.
pub const SURROGATE_MAX: u32 = 0xDFFF;

/// First high (lead) surrogate unit.
pub const HIGH_SURROGATE_MIN: u16 = 0xD800;
/// Last high (lead) surrogate unit.
pub const HIGH_SURROGATE_MAX: u16 = 0xDBFF;
/// First low (trail) surrogate unit.
pub const LOW_SURROGATE_MIN: u16 = 0xDC00;
/// Last low (trail) surrogate unit.
pub const LOW_SURROGATE_MAX: u16 = 0xDFFF;

/// Returns true iff `cp` lies in the surrogate range.
#[inline]
#[must_use]
pub const fn is_surrogate(cp: u32) -> bool {
    cp >= SURROGATE_MIN && cp <= SURROGATE_MAX
}

/// Returns true iff `cp` is a Unicode scalar value.
#[inline]
#[must_use]
pub const fn is_scalar_value(cp: u32) -> bool {
    cp <= MAX_CODE_POINT && !is_surrogate(cp)
}

/// Returns true iff `unit` is a UTF-16 high surrogate.
#[inline]
#[must_use]
pub const fn is_high_surrogate(unit: u16) -> bool {
    unit >= HIGH_SURROGATE_MIN && unit <= HIGH_SURROGATE_MAX
}

/// Returns true iff `unit` is a UTF-16 low surrogate.
#[inline]
#[must_use]
pub const fn is_low_surrogate(unit: u16) -> bool {
    unit >= LOW_SURROGATE_MIN && unit <= LOW_SURROGATE_MAX
}

/// Validate that `cp` is a scalar value.
#[inline]
pub const fn validate_scalar(cp: u32) -> Result<(), ErrorCode> {
    if cp > MAX_CODE_POINT {
        return Err(ErrorCode::OutOfRange);
    }
    if is_surrogate(cp) {
        return Err(ErrorCode::EncodedSurrogate);
    }
    Ok(())
}

/// Combine a high and a low surrogate into a supplementary code point.
///
/// Callers must have checked both ranges.
#[inline]
pub const fn combine_surrogates(high: u16, low: u16) -> u32 {
    let hi = (high as u32 - HIGH_SURROGATE_MIN as u32) << 10;
    let lo = low as u32 - LOW_SURROGATE_MIN as u32;
    SUPPLEMENTARY_MIN + (hi | lo)
}

/// Split a supplementary code point (`0x10000..=0x10FFFF`) into `(high, low)` surrogates.
#[cfg(feature = "alloc")]
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn split_surrogates(cp: u32) -> (u16, u16) {
    let v = cp - SUPPLEMENTARY_MIN;
    // v < 2^20, so both halves fit in ten bits.
    let high = (v >> 10) as u16 + HIGH_SURROGATE_MIN;
    let low = (v & 0x3FF) as u16 + LOW_SURROGATE_MIN;
    (high, low)
}
