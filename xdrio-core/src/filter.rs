//! Mode-directed primitive filters.
//!
//! A filter reads or writes depending on the stream's [`XdrOp`], so one
//! routine describes both directions of a structure. Higher-level encoders
//! are built from these, aborting on the first error.

use core::ffi::c_long;

use crate::{Result, XdrOp, XdrStream};

/// Encode `*value`, or decode into it, according to the stream direction.
///
/// On a failed decode `*value` is left untouched.
pub fn xdr_long<S: XdrStream + ?Sized>(stream: &mut S, value: &mut c_long) -> Result<()> {
    match stream.op() {
        XdrOp::Encode => stream.put_long(*value),
        XdrOp::Decode => {
            *value = stream.get_long()?;
            Ok(())
        }
    }
}

/// Encode `buf` verbatim, or fill it, according to the stream direction.
///
/// No length prefix and no padding: both sides agree on `buf.len()`.
pub fn xdr_block<S: XdrStream + ?Sized>(stream: &mut S, buf: &mut [u8]) -> Result<()> {
    match stream.op() {
        XdrOp::Encode => stream.put_bytes(buf),
        XdrOp::Decode => stream.get_bytes(buf),
    }
}
