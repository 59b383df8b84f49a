//! # utf-transcode
//!
//! Strict validation and conversion between UTF-8, UTF-16 and UTF-32, plus a bridge to the
//! platform's native wide-character form.
//!
//! ## Design principles
//!
//! - **Strict or nothing.**
//!   Every operation enforces Unicode well-formedness exactly: overlong UTF-8, encoded surrogates,
//!   unpaired UTF-16 surrogates and values above `U+10FFFF` are rejected. Nothing is ever replaced
//!   with `U+FFFD`.
//! - **All-or-nothing conversions.**
//!   A conversion returns a complete, valid buffer or an [`EncodingError`]; a partial output is
//!   never observable.
//! - **One decoder, one encoder per form.**
//!   Validators and all six converters are built from the same per-form primitives, so
//!   `is_valid_utf8(b)` holds exactly when `utf8_to_utf16(b)` succeeds (and likewise for the other
//!   forms).
//!
//! ## Accepted input
//!
//! | form   | well-formed iff |
//! |--------|-----------------|
//! | UTF-8  | each sequence is the minimal 1–4 byte encoding of a scalar value |
//! | UTF-16 | each high surrogate is immediately followed by a low surrogate; no lone low surrogate |
//! | UTF-32 | each unit is `<= 0x10FFFF` and outside `0xD800..=0xDFFF` |
//!
//! ## Errors
//!
//! [`EncodingError`] carries the rejected source [`Encoding`], a string-free [`ErrorCode`], and the
//! code-unit offset where the malformed sequence starts.
//!
//! ## Feature flags
//!
//! - `std` *(default)*: implements `std::error::Error` for [`EncodingError`] and enables runtime
//!   CPU detection for `simdutf8`.
//! - `alloc` *(default)*: enables the conversions and the wide-character bridge.
//! - `simdutf8`: enables the SIMD-accelerated `Simd` transcoder and makes it the
//!   [`DefaultTranscoder`].
//!
//! ## `no_std`
//!
//! The crate is `no_std` compatible.
//! - Validation-only usage works without `alloc` and never allocates.
//! - Conversions require `alloc` and therefore an allocator provided by your environment.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
mod alloc_util;
#[cfg(feature = "alloc")]
mod codec;
#[cfg(feature = "alloc")]
mod convert;
mod engine;
mod error;
mod profile;
mod utf16;
mod utf32;
mod utf8;
mod validate;
#[cfg(feature = "alloc")]
mod wide;

pub use crate::engine::{DefaultTranscoder, Scalar, Transcoder};
pub use crate::error::{Encoding, EncodingError, ErrorCode};
pub use crate::profile::{
    is_high_surrogate, is_low_surrogate, is_scalar_value, is_surrogate, HIGH_SURROGATE_MAX,
    HIGH_SURROGATE_MIN, LOW_SURROGATE_MAX, LOW_SURROGATE_MIN, MAX_CODE_POINT, SUPPLEMENTARY_MIN,
    SURROGATE_MAX, SURROGATE_MIN,
};
pub use crate::validate::{
    is_valid_utf16, is_valid_utf32, is_valid_utf8, is_valid_utf8_sequence, validate_utf16,
    validate_utf32, validate_utf8,
};

#[cfg(feature = "simdutf8")]
pub use crate::engine::Simd;

#[cfg(feature = "alloc")]
pub use crate::convert::{
    utf16_to_utf32, utf16_to_utf8, utf32_to_utf16, utf32_to_utf8, utf8_to_utf16, utf8_to_utf32,
};
#[cfg(feature = "alloc")]
pub use crate::wide::{utf8_to_wide, wide_to_utf8, WideChar, WideWidth, NATIVE_WIDE_WIDTH};
