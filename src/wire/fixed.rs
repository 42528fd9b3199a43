//! Fixed-width encoding.
//!
//! Non-varint numeric values are stored in little-endian byte order
//! regardless of host order. Floats and doubles are written as their
//! IEEE-754 bit patterns (`to_bits`), never via numeric conversion.

use bytes::{BufMut, BytesMut};

/// Append a 32-bit unsigned integer, little-endian.
#[inline]
pub fn put_fixed32(buf: &mut BytesMut, value: u32) {
    buf.put_slice(&value.to_le_bytes());
}

/// Append a 32-bit signed integer, little-endian two's complement.
#[inline]
pub fn put_sfixed32(buf: &mut BytesMut, value: i32) {
    buf.put_slice(&value.to_le_bytes());
}

/// Append an `f32` as its IEEE-754 bit pattern, little-endian.
#[inline]
pub fn put_float(buf: &mut BytesMut, value: f32) {
    put_fixed32(buf, value.to_bits());
}

/// Append a 64-bit unsigned integer, little-endian.
#[inline]
pub fn put_fixed64(buf: &mut BytesMut, value: u64) {
    buf.put_slice(&value.to_le_bytes());
}

/// Append a 64-bit signed integer, little-endian two's complement.
#[inline]
pub fn put_sfixed64(buf: &mut BytesMut, value: i64) {
    buf.put_slice(&value.to_le_bytes());
}

/// Append an `f64` as its IEEE-754 bit pattern, little-endian.
#[inline]
pub fn put_double(buf: &mut BytesMut, value: f64) {
    put_fixed64(buf, value.to_bits());
}
