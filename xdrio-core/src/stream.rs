//! The stream contract.

use core::ffi::c_long;
use std::io::{IoSlice, IoSliceMut};

use tracing::debug;

use crate::{Result, UnsupportedSnafu, XdrOp};

/// Returned by [`XdrStream::get_pos`] when the transport cannot report an offset.
pub const POS_UNKNOWN: u64 = u64::MAX;

/// Request for the generic control slot.
///
/// Only backends that override [`XdrStream::control`] interpret these; the
/// default body declines every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ControlRequest {
    /// Ask how many bytes can be decoded without blocking.
    BytesAvailable,
    /// Decode the next long without consuming it.
    Peek,
}

/// Answer to a [`ControlRequest`], built by backends that override
/// [`XdrStream::control`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ControlReply {
    /// Bytes available to decode.
    BytesAvailable(u64),
    /// The next long in the stream.
    Peek(c_long),
}

/// Primitive operations every XDR transport implements.
///
/// A stream is a single-threaded cursor over a transport: every method takes
/// `&mut self`, returns one definitive result, and may block only as far as
/// the underlying resource blocks. The transport itself is owned by the
/// caller and outlives the stream.
///
/// The control and scatter/gather slots have default bodies that report
/// [`XdrError::Unsupported`](crate::XdrError::Unsupported) without touching
/// the transport. Backends override only what they can do.
pub trait XdrStream {
    /// Direction fixed at creation.
    fn op(&self) -> XdrOp;

    /// Decode one wire long into the host width.
    ///
    /// Fails when fewer than four bytes can be read. No value is produced
    /// on failure.
    fn get_long(&mut self) -> Result<c_long>;

    /// Encode the low 32 bits of `value` and write them.
    fn put_long(&mut self, value: c_long) -> Result<()>;

    /// Fill `buf` exactly from the stream. An empty `buf` always succeeds.
    fn get_bytes(&mut self, buf: &mut [u8]) -> Result<()>;

    /// Write `buf` verbatim. An empty `buf` always succeeds.
    fn put_bytes(&mut self, buf: &[u8]) -> Result<()>;

    /// Current logical offset, or [`POS_UNKNOWN`].
    ///
    /// Units are backend-defined and not portable between backends.
    fn get_pos(&mut self) -> u64;

    /// Move to an offset previously obtained from [`get_pos`](Self::get_pos).
    fn set_pos(&mut self, pos: u64) -> Result<()>;

    /// Direct access to `len` bytes of backend buffering.
    ///
    /// `None` means the fast path is not available here, which is not an
    /// error: fall back to `get_*`/`put_*`.
    fn inline(&mut self, len: usize) -> Option<&mut [u8]>;

    /// End the stream, writing out anything still buffered.
    ///
    /// Resources supplied by the caller stay open.
    fn destroy(self) -> Result<()>
    where
        Self: Sized;

    /// Backend-specific control request.
    fn control(&mut self, request: ControlRequest) -> Result<ControlReply> {
        let _ = request;
        declined("control")
    }

    /// Scatter-read into `bufs`, filling each slice in order.
    fn get_bufs(&mut self, bufs: &mut [IoSliceMut<'_>]) -> Result<()> {
        let _ = bufs;
        declined("get_bufs")
    }

    /// Gather-write `bufs` in order.
    fn put_bufs(&mut self, bufs: &[IoSlice<'_>]) -> Result<()> {
        let _ = bufs;
        declined("put_bufs")
    }
}

fn declined<T>(op: &'static str) -> Result<T> {
    debug!(op, "backend declined operation");
    UnsupportedSnafu { op }.fail()
}
