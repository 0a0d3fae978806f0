//! XDR streams over buffered files.
//!
//! [`XdrStdio`] implements the transport-agnostic [`XdrStream`] contract on
//! top of a file handle the caller opened and will close. Integers travel
//! as 4-byte big-endian words; byte blocks travel verbatim.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use xdrio::{XdrOp, XdrStdio, XdrStream};
//!
//! let mut file = Cursor::new(Vec::new());
//!
//! let mut enc = XdrStdio::new(&mut file, XdrOp::Encode);
//! enc.put_long(1).unwrap();
//! enc.put_bytes(b"hi").unwrap();
//! enc.destroy().unwrap();
//! assert_eq!(file.get_ref(), &[0, 0, 0, 1, b'h', b'i']);
//!
//! file.set_position(0);
//! let mut dec = XdrStdio::new(&mut file, XdrOp::Decode);
//! assert_eq!(dec.get_long().unwrap(), 1);
//! let mut tag = [0u8; 2];
//! dec.get_bytes(&mut tag).unwrap();
//! assert_eq!(&tag, b"hi");
//! ```

#![warn(missing_docs)]

mod file;
mod options;
mod stdio;


pub use file::StdioFile;
pub use options::StdioOptions;
pub use stdio::XdrStdio;

// Contract re-exports
pub use xdrio_core::{
    BYTES_PER_XDR_UNIT, ControlReply, ControlRequest, POS_UNKNOWN, Result, WireLong, XdrError,
    XdrOp, XdrStream, long_from_wire, long_to_wire, xdr_block, xdr_long,
};
