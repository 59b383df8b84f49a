//! Bridge to the platform's native wide-character form.
//!
//! The width follows the platform C `wchar_t`: 16 bits (UTF-16) on Windows, 32 bits (UTF-32)
//! everywhere else. It is fixed at build time; the bridge is a direct call into the matching
//! fixed-width converter.

use alloc::vec::Vec;

use crate::EncodingError;

/// Width of the native wide-character code unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WideWidth {
    /// 16-bit units holding UTF-16.
    Bits16,
    /// 32-bit units holding UTF-32.
    Bits32,
}

impl WideWidth {
    /// Number of bits per unit.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::Bits16 => 16,
            Self::Bits32 => 32,
        }
    }
}

/// Native wide-character code unit.
#[cfg(windows)]
pub type WideChar = u16;

/// Native wide-character code unit.
#[cfg(not(windows))]
pub type WideChar = u32;

/// The wide-character width this build was configured with.
#[cfg(windows)]
pub const NATIVE_WIDE_WIDTH: WideWidth = WideWidth::Bits16;

/// The wide-character width this build was configured with.
#[cfg(not(windows))]
pub const NATIVE_WIDE_WIDTH: WideWidth = WideWidth::Bits32;

/// Convert UTF-8 to native wide characters.
///
/// # Errors
///
/// Fails exactly as [`utf8_to_utf16`](crate::utf8_to_utf16) or
/// [`utf8_to_utf32`](crate::utf8_to_utf32) does for the native width.
#[inline]
pub fn utf8_to_wide(input: &[u8]) -> Result<Vec<WideChar>, EncodingError> {
    #[cfg(windows)]
    {
        crate::utf8_to_utf16(input)
    }

    #[cfg(not(windows))]
    {
        crate::utf8_to_utf32(input)
    }
}

/// Convert native wide characters to UTF-8.
///
/// # Errors
///
/// Fails exactly as [`utf16_to_utf8`](crate::utf16_to_utf8) or
/// [`utf32_to_utf8`](crate::utf32_to_utf8) does for the native width.
#[inline]
pub fn wide_to_utf8(input: &[WideChar]) -> Result<Vec<u8>, EncodingError> {
    #[cfg(windows)]
    {
        crate::utf16_to_utf8(input)
    }

    #[cfg(not(windows))]
    {
        crate::utf32_to_utf8(input)
    }
}
