use core::fmt;

/// The encoding form whose input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// 8-bit code units.
    Utf8,
    /// 16-bit code units.
    Utf16,
    /// 32-bit code units.
    Utf32,
}

impl Encoding {
    /// Human-readable name of the encoding form.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Utf16 => "UTF-16",
            Self::Utf32 => "UTF-32",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A structured error code identifying the reason an input was rejected.
///
/// This enum is intentionally stable and string-free to support `no_std` and to remain hot-path friendly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// Arithmetic overflow while computing the output capacity.
    LengthOverflow,
    /// Memory allocation failed while reserving the output buffer.
    AllocationFailed,

    /// Input ended inside a multi-unit sequence.
    Truncated,
    /// A UTF-8 sequence started with a continuation byte or a `11111xxx` byte.
    InvalidLeadByte,
    /// A UTF-8 trailing byte did not match `10xxxxxx`.
    InvalidContinuation,
    /// A UTF-8 sequence used more bytes than the minimal encoding.
    Overlong,

    /// A surrogate value appeared where a Unicode scalar value is required.
    EncodedSurrogate,
    /// The decoded value is above `U+10FFFF`.
    OutOfRange,

    /// A UTF-16 high surrogate was followed by something other than a low surrogate.
    UnpairedHighSurrogate,
    /// A UTF-16 low surrogate appeared without a preceding high surrogate.
    LoneLowSurrogate,
}

impl ErrorCode {
    const fn message(self) -> &'static str {
        match self {
            Self::LengthOverflow => "length overflow",
            Self::AllocationFailed => "allocation failed",

            Self::Truncated => "truncated sequence",
            Self::InvalidLeadByte => "invalid start byte",
            Self::InvalidContinuation => "invalid continuation byte",
            Self::Overlong => "overlong encoding",

            Self::EncodedSurrogate => "surrogate code point",
            Self::OutOfRange => "code point out of Unicode range",

            Self::UnpairedHighSurrogate => "invalid surrogate pair",
            Self::LoneLowSurrogate => "lone low surrogate",
        }
    }

    /// Returns true iff this code describes a resource failure rather than malformed input.
    #[inline]
    #[must_use]
    pub const fn is_resource(self) -> bool {
        matches!(self, Self::LengthOverflow | Self::AllocationFailed)
    }
}

/// A transcoding error: the rejected source form, a stable code, and a code-unit offset.
///
/// `offset` counts code units of the source form (bytes for UTF-8, 16-bit units for UTF-16,
/// 32-bit units for UTF-32) and points at the first unit of the offending sequence.
/// Resource errors report offset `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodingError {
    /// The source encoding that was being read.
    pub encoding: Encoding,
    /// The error code.
    pub code: ErrorCode,
    /// Code-unit offset into the input where the malformed sequence starts.
    pub offset: usize,
}

impl EncodingError {
    /// Construct an error for `encoding` at `offset`.
    #[inline]
    #[must_use]
    pub const fn new(encoding: Encoding, code: ErrorCode, offset: usize) -> Self {
        Self {
            encoding,
            code,
            offset,
        }
    }

    /// Construct a resource error (capacity overflow, allocation failure).
    #[inline]
    #[must_use]
    pub const fn resource(encoding: Encoding, code: ErrorCode) -> Self {
        Self {
            encoding,
            code,
            offset: 0,
        }
    }

    /// Returns true iff the input itself was malformed.
    #[inline]
    #[must_use]
    pub const fn is_malformed(self) -> bool {
        !self.code.is_resource()
    }
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = self.code.message();
        if self.code.is_resource() {
            write!(f, "{} transcode failed: {msg}", self.encoding)
        } else {
            write!(f, "invalid {} at {}: {msg}", self.encoding, self.offset)
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EncodingError {}
