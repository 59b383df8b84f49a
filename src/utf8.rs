//! UTF-8 decode/encode primitives.
//!
//! Lead-byte classes:
//!
//! | pattern     | length | decoded range            |
//! |-------------|--------|--------------------------|
//! | `0xxxxxxx`  | 1      | `0x00..=0x7F`            |
//! | `110xxxxx`  | 2      | `0x80..=0x7FF`           |
//! | `1110xxxx`  | 3      | `0x800..=0xFFFF` minus surrogates |
//! | `11110xxx`  | 4      | `0x10000..=0x10FFFF`     |
//!
//! `10xxxxxx` and `11111xxx` never start a sequence. A value below its class minimum is overlong.

use crate::error::Encoding;
use crate::profile::{validate_scalar, SUPPLEMENTARY_MIN};
use crate::{EncodingError, ErrorCode};

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

const CONT_MASK: u8 = 0b1100_0000;
const CONT_TAG: u8 = 0b1000_0000;
const PAYLOAD_MASK: u8 = 0b0011_1111;

#[inline]
const fn err(code: ErrorCode, off: usize) -> EncodingError {
    EncodingError::new(Encoding::Utf8, code, off)
}

/// Returns true iff `byte` matches `10xxxxxx`.
#[inline]
pub const fn is_continuation(byte: u8) -> bool {
    byte & CONT_MASK == CONT_TAG
}

/// Sequence length announced by `lead`, or `None` if it cannot start a sequence.
#[inline]
pub const fn sequence_len(lead: u8) -> Option<usize> {
    if lead & 0x80 == 0 {
        Some(1)
    } else if lead & 0xE0 == 0xC0 {
        Some(2)
    } else if lead & 0xF0 == 0xE0 {
        Some(3)
    } else if lead & 0xF8 == 0xF0 {
        Some(4)
    } else {
        None
    }
}

/// Number of bytes needed to encode the scalar value `cp`.
#[cfg(feature = "alloc")]
#[inline]
pub const fn encoded_len(cp: u32) -> usize {
    if cp < 0x80 {
        1
    } else if cp < 0x800 {
        2
    } else if cp < SUPPLEMENTARY_MIN {
        3
    } else {
        4
    }
}

const fn check_decoded(cp: u32, len: usize) -> Result<(), ErrorCode> {
    let min = match len {
        2 => 0x80,
        3 => 0x800,
        _ => SUPPLEMENTARY_MIN,
    };
    if cp < min {
        return Err(ErrorCode::Overlong);
    }
    validate_scalar(cp)
}

/// Decode the scalar value starting at `*pos` and advance past it.
///
/// On error `*pos` is left unchanged and the error offset is the sequence start.
#[inline]
pub fn decode(data: &[u8], pos: &mut usize) -> Result<u32, EncodingError> {
    let off = *pos;
    let lead = *data
        .get(off)
        .ok_or_else(|| err(ErrorCode::Truncated, off))?;
    if lead < 0x80 {
        *pos = off + 1;
        return Ok(u32::from(lead));
    }

    let len = sequence_len(lead).ok_or_else(|| err(ErrorCode::InvalidLeadByte, off))?;
    // 0x7F >> len keeps the payload bits of the lead byte: 0x1F, 0x0F or 0x07.
    let mut cp = u32::from(lead & (0x7F_u8 >> len));
    for i in 1..len {
        let Some(&b) = data.get(off + i) else {
            return Err(err(ErrorCode::Truncated, off));
        };
        if !is_continuation(b) {
            return Err(err(ErrorCode::InvalidContinuation, off));
        }
        cp = (cp << 6) | u32::from(b & PAYLOAD_MASK);
    }
    check_decoded(cp, len).map_err(|code| err(code, off))?;

    *pos = off + len;
    Ok(cp)
}

/// Validate an entire UTF-8 buffer, reporting the first malformed sequence.
pub fn validate(data: &[u8]) -> Result<(), EncodingError> {
    let mut pos = 0;
    while pos < data.len() {
        if data[pos] < 0x80 {
            pos += 1;
            continue;
        }
        decode(data, &mut pos)?;
    }
    Ok(())
}

/// Returns true iff `bytes` is exactly one well-formed UTF-8 sequence.
pub fn is_valid_sequence(bytes: &[u8]) -> bool {
    let mut pos = 0;
    decode(bytes, &mut pos).is_ok() && pos == bytes.len()
}

/// Append the UTF-8 encoding of the scalar value `cp`.
#[cfg(feature = "alloc")]
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn encode(cp: u32, out: &mut Vec<u8>) {
    match encoded_len(cp) {
        1 => out.push(cp as u8),
        2 => out.extend_from_slice(&[
            0xC0 | (cp >> 6) as u8,
            CONT_TAG | (cp as u8 & PAYLOAD_MASK),
        ]),
        3 => out.extend_from_slice(&[
            0xE0 | (cp >> 12) as u8,
            CONT_TAG | ((cp >> 6) as u8 & PAYLOAD_MASK),
            CONT_TAG | (cp as u8 & PAYLOAD_MASK),
        ]),
        _ => out.extend_from_slice(&[
            0xF0 | (cp >> 18) as u8,
            CONT_TAG | ((cp >> 12) as u8 & PAYLOAD_MASK),
            CONT_TAG | ((cp >> 6) as u8 & PAYLOAD_MASK),
            CONT_TAG | (cp as u8 & PAYLOAD_MASK),
        ]),
    }
}
