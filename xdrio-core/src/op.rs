//! Stream direction.

use core::fmt;

/// Direction a stream was created for.
///
/// Fixed at creation. `Encode` streams only accept `put_*` calls and
/// `Decode` streams only accept `get_*` calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XdrOp {
    /// Serialize values onto the transport.
    Encode,
    /// Deserialize values from the transport.
    Decode,
}

impl XdrOp {
    /// Convert from the numeric code used by C XDR headers.
    ///
    /// Returns `None` for codes without a stream direction (`XDR_FREE` is 2).
    #[must_use]
    pub const fn from_u32(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::Encode),
            1 => Some(Self::Decode),
            _ => None,
        }
    }

    /// Numeric code matching `XDR_ENCODE` / `XDR_DECODE`.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        match self {
            Self::Encode => 0,
            Self::Decode => 1,
        }
    }

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Encode => "encode",
            Self::Decode => "decode",
        }
    }

    /// True for [`XdrOp::Encode`].
    #[inline]
    #[must_use]
    pub const fn is_encode(self) -> bool {
        matches!(self, Self::Encode)
    }

    /// True for [`XdrOp::Decode`].
    #[inline]
    #[must_use]
    pub const fn is_decode(self) -> bool {
        matches!(self, Self::Decode)
    }
}

impl fmt::Display for XdrOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
