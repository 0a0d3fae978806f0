//! Transport-agnostic XDR stream contract.
//!
//! Every transport that wants to take part in the canonical XDR encoding
//! implements [`XdrStream`]. Generic encoders drive the stream one primitive
//! at a time and never look behind the trait.
//!
//! ```
//! use xdrio_core::{BYTES_PER_XDR_UNIT, long_from_wire, long_to_wire};
//! use zerocopy::IntoBytes;
//!
//! let wire = long_to_wire(1);
//! assert_eq!(wire.as_bytes(), &[0, 0, 0, 1]);
//! assert_eq!(wire.as_bytes().len(), BYTES_PER_XDR_UNIT);
//! assert_eq!(long_from_wire(wire), 1);
//! ```

#![warn(missing_docs)]

mod error;
mod filter;
mod op;
mod stream;
pub mod wire;


pub use error::{
    FlushSnafu, Result, SeekSnafu, ShortReadSnafu, ShortWriteSnafu, UnsupportedSnafu,
    WrongModeSnafu, XdrError,
};
pub use filter::{xdr_block, xdr_long};
pub use op::XdrOp;
pub use stream::{ControlReply, ControlRequest, POS_UNKNOWN, XdrStream};
pub use wire::{BYTES_PER_XDR_UNIT, WireLong, long_from_wire, long_to_wire};
