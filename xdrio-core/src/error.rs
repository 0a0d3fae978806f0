//! Error types for stream operations.

use std::io;

use snafu::Snafu;

use crate::XdrOp;

/// Failure reported by an [`XdrStream`](crate::XdrStream) operation.
///
/// Every variant is reported the same way; the caller decides whether a
/// failure is fatal. After any failure the stream is left usable but its
/// position is backend-defined, so collaborators restart from a known
/// position with `set_pos`.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum XdrError {
    /// The transport could not supply the requested bytes.
    #[snafu(display("short read: needed {needed} bytes"))]
    ShortRead {
        /// Bytes requested.
        needed: usize,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The transport could not accept the requested bytes.
    #[snafu(display("short write: needed {needed} bytes"))]
    ShortWrite {
        /// Bytes offered.
        needed: usize,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The transport could not move to the requested position.
    #[snafu(display("cannot seek to position {pos}"))]
    Seek {
        /// Requested absolute position.
        pos: u64,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Buffered output could not be written out.
    #[snafu(display("flush failed"))]
    Flush {
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The backend declines this operation.
    #[snafu(display("{op} is not supported by this backend"))]
    Unsupported {
        /// Operation name.
        op: &'static str,
    },

    /// The operation does not match the stream direction.
    #[snafu(display("{op} called on a stream in {mode} mode"))]
    WrongMode {
        /// Operation name.
        op: &'static str,
        /// Direction the stream was created with.
        mode: XdrOp,
    },
}

impl XdrError {
    /// True when the backend declined the operation, as opposed to failing it.
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }

    /// Kind of the underlying I/O error, if the failure came from the transport.
    #[must_use]
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::ShortRead { source, .. }
            | Self::ShortWrite { source, .. }
            | Self::Seek { source, .. }
            | Self::Flush { source } => Some(source.kind()),
            Self::Unsupported { .. } | Self::WrongMode { .. } => None,
        }
    }

    /// True for transport failures that may succeed if repeated.
    ///
    /// Retrying is the caller's job; streams never retry on their own.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.io_kind(),
            Some(io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut)
        )
    }
}

/// Result type for stream operations.
pub type Result<T, E = XdrError> = core::result::Result<T, E>;
