//! XDR stream over a caller-owned buffered file.

use core::ffi::c_long;
use core::fmt;
use std::io;

use snafu::ResultExt;
use tracing::{debug, trace};
use xdrio_core::{
    BYTES_PER_XDR_UNIT, FlushSnafu, POS_UNKNOWN, Result, SeekSnafu, ShortReadSnafu,
    ShortWriteSnafu, WireLong, WrongModeSnafu, XdrOp, XdrStream, long_from_wire, long_to_wire,
};
use zerocopy::IntoBytes;

use crate::{StdioFile, StdioOptions};

/// XDR stream backed by a buffered file handle.
///
/// The stream borrows the handle for its whole life and never closes it:
/// open the file before [`new`](Self::new), close it after
/// [`destroy`](XdrStream::destroy). The direction and options are fixed at
/// creation.
///
/// Positions are byte offsets from the start of the file.
///
/// A plain [`File`](std::fs::File) is unbuffered: every primitive becomes
/// its own syscall. Wrap it in [`BufWriter`](std::io::BufWriter) for
/// encoding or [`BufReader`](std::io::BufReader) for decoding to get
/// buffered-file behaviour; `destroy` flushes the writer.
///
/// ```
/// use std::io::{BufReader, BufWriter, Seek, SeekFrom};
/// use xdrio::{XdrOp, XdrStdio, XdrStream};
///
/// let mut writer = BufWriter::new(tempfile::tempfile().unwrap());
/// let mut enc = XdrStdio::new(&mut writer, XdrOp::Encode);
/// enc.put_long(7).unwrap();
/// enc.destroy().unwrap();
///
/// let mut file = writer.into_inner().unwrap();
/// file.seek(SeekFrom::Start(0)).unwrap();
/// let mut reader = BufReader::new(file);
/// let mut dec = XdrStdio::new(&mut reader, XdrOp::Decode);
/// assert_eq!(dec.get_long().unwrap(), 7);
/// ```
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use xdrio::{XdrOp, XdrStdio, XdrStream};
///
/// let mut file = Cursor::new(Vec::new());
/// let mut xdrs = XdrStdio::new(&mut file, XdrOp::Encode);
/// xdrs.put_long(-2).unwrap();
/// assert_eq!(xdrs.get_pos(), 4);
/// assert!(xdrs.inline(4).is_none());
/// xdrs.destroy().unwrap();
///
/// assert_eq!(file.into_inner(), [0xff, 0xff, 0xff, 0xfe]);
/// ```
pub struct XdrStdio<'a, F: ?Sized> {
    op: XdrOp,
    options: StdioOptions,
    file: &'a mut F,
}

impl<'a, F: StdioFile + ?Sized> XdrStdio<'a, F> {
    /// Bind a stream to an open file handle with default options.
    pub fn new(file: &'a mut F, op: XdrOp) -> Self {
        Self::with_options(file, op, StdioOptions::default())
    }

    /// Bind a stream to an open file handle.
    pub fn with_options(file: &'a mut F, op: XdrOp, options: StdioOptions) -> Self {
        trace!(%op, enforce_mode = options.enforces_mode(), "stdio stream created");
        Self { op, options, file }
    }

    /// Options the stream was created with.
    #[must_use]
    pub fn options(&self) -> StdioOptions {
        self.options
    }

    /// Shared view of the underlying handle.
    #[must_use]
    pub fn file(&self) -> &F {
        &*self.file
    }

    fn check_mode(&self, op: &'static str, wanted: XdrOp) -> Result<()> {
        if self.options.enforces_mode() && self.op != wanted {
            return traced(op, WrongModeSnafu { op, mode: self.op }.fail());
        }
        Ok(())
    }
}

/// Log a failed operation on its way back to the caller.
fn traced<T>(op: &'static str, result: Result<T>) -> Result<T> {
    result.inspect_err(|error| debug!(op, %error, "stdio stream operation failed"))
}

impl<F: StdioFile + ?Sized> XdrStream for XdrStdio<'_, F> {
    #[inline]
    fn op(&self) -> XdrOp {
        self.op
    }

    fn get_long(&mut self) -> Result<c_long> {
        self.check_mode("get_long", XdrOp::Decode)?;
        let mut wire = WireLong::new(0);
        let read = self.file.read_block(wire.as_mut_bytes()).context(ShortReadSnafu {
            needed: BYTES_PER_XDR_UNIT,
        });
        traced("get_long", read)?;
        Ok(long_from_wire(wire))
    }

    fn put_long(&mut self, value: c_long) -> Result<()> {
        self.check_mode("put_long", XdrOp::Encode)?;
        let wire = long_to_wire(value);
        let written = self.file.write_block(wire.as_bytes()).context(ShortWriteSnafu {
            needed: BYTES_PER_XDR_UNIT,
        });
        traced("put_long", written)
    }

    fn get_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        if buf.is_empty() {
            return Ok(());
        }
        self.check_mode("get_bytes", XdrOp::Decode)?;
        let needed = buf.len();
        let read = self
            .file
            .read_block(buf)
            .context(ShortReadSnafu { needed });
        traced("get_bytes", read)
    }

    fn put_bytes(&mut self, buf: &[u8]) -> Result<()> {
        if buf.is_empty() {
            return Ok(());
        }
        self.check_mode("put_bytes", XdrOp::Encode)?;
        let written = self.file.write_block(buf).context(ShortWriteSnafu {
            needed: buf.len(),
        });
        traced("put_bytes", written)
    }

    fn get_pos(&mut self) -> u64 {
        match self.file.tell() {
            Ok(pos) => pos,
            Err(error) => {
                debug!(op = "get_pos", %error, "position unknown");
                POS_UNKNOWN
            }
        }
    }

    fn set_pos(&mut self, pos: u64) -> Result<()> {
        trace!(pos, "stdio stream seek");
        let sought = if pos == POS_UNKNOWN {
            Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "cannot seek to the unknown position",
            ))
        } else {
            self.file.seek_to(pos).map(drop)
        };
        traced("set_pos", sought.context(SeekSnafu { pos }))
    }

    /// Always `None`: a pointer into the handle's buffer would be invalidated
    /// by the next buffered call, and staging through a scratch buffer would
    /// cost the copy the fast path exists to avoid.
    #[inline]
    fn inline(&mut self, _len: usize) -> Option<&mut [u8]> {
        None
    }

    fn destroy(self) -> Result<()> {
        trace!(op = %self.op, "stdio stream destroyed");
        traced("destroy", self.file.flush_output().context(FlushSnafu))
    }
}

impl<F: ?Sized> fmt::Debug for XdrStdio<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XdrStdio")
            .field("op", &self.op)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
