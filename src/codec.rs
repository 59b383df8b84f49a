//! Generic transcoding driver.
//!
//! Every encoding form is reduced to two primitives: *decode the next scalar value at `pos`* and
//! *encode one scalar value*. All six converters are [`transcode`] instantiated with a source and a
//! destination form, so a conversion accepts exactly what the source validator accepts.

use alloc::vec::Vec;

use crate::alloc_util::{trim, try_output_vec};
use crate::error::Encoding;
use crate::{utf16, utf32, utf8, EncodingError};

/// An encoding form described by its shared decode/encode primitives.
pub trait Form {
    /// Code unit type.
    type Unit: Copy;
    /// Which form this is, for error reporting and growth estimates.
    const ENCODING: Encoding;

    /// Decode the scalar value at `*pos` and advance past it.
    fn decode(data: &[Self::Unit], pos: &mut usize) -> Result<u32, EncodingError>;

    /// Append the encoding of the scalar value `cp`.
    fn encode(cp: u32, out: &mut Vec<Self::Unit>);
}

pub enum Utf8 {}
pub enum Utf16 {}
pub enum Utf32 {}

impl Form for Utf8 {
    type Unit = u8;
    const ENCODING: Encoding = Encoding::Utf8;

    #[inline]
    fn decode(data: &[u8], pos: &mut usize) -> Result<u32, EncodingError> {
        utf8::decode(data, pos)
    }

    #[inline]
    fn encode(cp: u32, out: &mut Vec<u8>) {
        utf8::encode(cp, out);
    }
}

impl Form for Utf16 {
    type Unit = u16;
    const ENCODING: Encoding = Encoding::Utf16;

    #[inline]
    fn decode(data: &[u16], pos: &mut usize) -> Result<u32, EncodingError> {
        utf16::decode(data, pos)
    }

    #[inline]
    fn encode(cp: u32, out: &mut Vec<u16>) {
        utf16::encode(cp, out);
    }
}

impl Form for Utf32 {
    type Unit = u32;
    const ENCODING: Encoding = Encoding::Utf32;

    #[inline]
    fn decode(data: &[u32], pos: &mut usize) -> Result<u32, EncodingError> {
        utf32::decode(data, pos)
    }

    #[inline]
    fn encode(cp: u32, out: &mut Vec<u32>) {
        utf32::encode(cp, out);
    }
}

/// Worst-case destination units produced per source unit.
///
/// - UTF-16 -> UTF-8: a BMP unit needs up to 3 bytes (a pair needs 4 bytes for 2 units).
/// - UTF-32 -> UTF-8: up to 4 bytes per scalar value.
/// - UTF-32 -> UTF-16: up to 2 units per scalar value.
/// - Every other direction never grows.
#[must_use]
pub const fn growth(from: Encoding, to: Encoding) -> usize {
    match (from, to) {
        (Encoding::Utf16, Encoding::Utf8) => 3,
        (Encoding::Utf32, Encoding::Utf8) => 4,
        (Encoding::Utf32, Encoding::Utf16) => 2,
        _ => 1,
    }
}

/// Decode `input` as `S` and re-encode it as `D`.
///
/// The output is reserved from [`growth`] up front and trimmed on success; on failure the partial
/// buffer is dropped before the error is returned.
pub fn transcode<S: Form, D: Form>(input: &[S::Unit]) -> Result<Vec<D::Unit>, EncodingError> {
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let mut out = try_output_vec(input.len(), growth(S::ENCODING, D::ENCODING), S::ENCODING)?;
    let mut pos = 0;
    while pos < input.len() {
        let cp = S::decode(input, &mut pos)?;
        D::encode(cp, &mut out);
    }
    Ok(trim(out))
}
