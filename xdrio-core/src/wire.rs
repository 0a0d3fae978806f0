//! Wire representation of primitive values.
//!
//! Integers travel as 4-byte two's complement, most significant byte first,
//! whatever the host byte order. Conversions go through zerocopy's
//! network-endian cell so a backend can read straight into the wire value.

use core::ffi::c_long;

use zerocopy::byteorder::network_endian;

/// Size of one XDR unit in bytes.
pub const BYTES_PER_XDR_UNIT: usize = 4;

/// A long integer as it appears on the wire.
pub type WireLong = network_endian::I32;

/// Convert a host long to its wire form.
///
/// Only the low 32 bits are kept, so unsigned values up to `u32::MAX`
/// passed through a wider `c_long` survive the trip.
#[inline]
#[must_use]
pub fn long_to_wire(value: c_long) -> WireLong {
    WireLong::new(value as i32)
}

/// Convert a wire long to the host width, sign-extending.
#[inline]
#[must_use]
pub fn long_from_wire(wire: WireLong) -> c_long {
    c_long::from(wire.get())
}
