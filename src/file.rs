//! File handles a stdio stream can run over.
//!
//! [`StdioFile`] is the small set of buffered-I/O primitives the stream
//! needs. Read-write handles forward to `Read`/`Write`/`Seek`; read-only and
//! write-only handles refuse the other direction with
//! [`io::ErrorKind::Unsupported`] and never touch the resource.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Cursor, Read, Seek, SeekFrom, Write};

/// Buffered file primitives used by [`XdrStdio`](crate::XdrStdio).
pub trait StdioFile {
    /// Fill `buf` exactly.
    fn read_block(&mut self, buf: &mut [u8]) -> io::Result<()>;

    /// Write all of `buf`.
    fn write_block(&mut self, buf: &[u8]) -> io::Result<()>;

    /// Push buffered output to the underlying resource.
    fn flush_output(&mut self) -> io::Result<()>;

    /// Current byte offset from the start.
    fn tell(&mut self) -> io::Result<u64>;

    /// Move to `pos` bytes from the start.
    fn seek_to(&mut self, pos: u64) -> io::Result<u64>;
}

fn read_only() -> io::Error {
    io::Error::new(io::ErrorKind::Unsupported, "file handle is read-only")
}

fn write_only() -> io::Error {
    io::Error::new(io::ErrorKind::Unsupported, "file handle is write-only")
}

macro_rules! impl_stdio_file {
    (@seek) => {
        #[inline]
        fn tell(&mut self) -> io::Result<u64> {
            Seek::stream_position(self)
        }

        #[inline]
        fn seek_to(&mut self, pos: u64) -> io::Result<u64> {
            Seek::seek(self, SeekFrom::Start(pos))
        }
    };

    (read_write: $([$($gen:tt)*] $ty:ty),+ $(,)?) => {
        $(
            impl<$($gen)*> StdioFile for $ty {
                #[inline]
                fn read_block(&mut self, buf: &mut [u8]) -> io::Result<()> {
                    Read::read_exact(self, buf)
                }

                #[inline]
                fn write_block(&mut self, buf: &[u8]) -> io::Result<()> {
                    Write::write_all(self, buf)
                }

                #[inline]
                fn flush_output(&mut self) -> io::Result<()> {
                    Write::flush(self)
                }

                impl_stdio_file!(@seek);
            }
        )+
    };

    (read_only: $([$($gen:tt)*] $ty:ty),+ $(,)?) => {
        $(
            impl<$($gen)*> StdioFile for $ty {
                #[inline]
                fn read_block(&mut self, buf: &mut [u8]) -> io::Result<()> {
                    Read::read_exact(self, buf)
                }

                #[inline]
                fn write_block(&mut self, _buf: &[u8]) -> io::Result<()> {
                    Err(read_only())
                }

                // Nothing is ever buffered for output.
                #[inline]
                fn flush_output(&mut self) -> io::Result<()> {
                    Ok(())
                }

                impl_stdio_file!(@seek);
            }
        )+
    };

    (write_only: $([$($gen:tt)*] $ty:ty),+ $(,)?) => {
        $(
            impl<$($gen)*> StdioFile for $ty {
                #[inline]
                fn read_block(&mut self, _buf: &mut [u8]) -> io::Result<()> {
                    Err(write_only())
                }

                #[inline]
                fn write_block(&mut self, buf: &[u8]) -> io::Result<()> {
                    Write::write_all(self, buf)
                }

                #[inline]
                fn flush_output(&mut self) -> io::Result<()> {
                    Write::flush(self)
                }

                impl_stdio_file!(@seek);
            }
        )+
    };
}

impl_stdio_file!(read_write:
    [] File,
    ['f] &'f File,
    [] Cursor<Vec<u8>>,
    ['v] Cursor<&'v mut Vec<u8>>,
    ['s] Cursor<&'s mut [u8]>,
);

impl_stdio_file!(read_only:
    ['s] Cursor<&'s [u8]>,
    [R: Read + Seek] BufReader<R>,
);

impl_stdio_file!(write_only:
    [W: Write + Seek] BufWriter<W>,
);
