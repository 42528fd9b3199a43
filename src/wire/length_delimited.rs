//! Length-delimited encoding.
//!
//! A varint-encoded byte count followed by that many raw bytes. Strings
//! are encoded as UTF-8; the emitted length is always the exact UTF-8
//! byte count, not a character count.
//!
//! A zero-length payload contributes nothing at all to the stream — not
//! even a zero-length prefix. Callers that tag length-delimited fields
//! must check for emptiness before emitting the tag, or the field key
//! would dangle with no payload behind it.

use bytes::{BufMut, BytesMut};

use super::varint::put_varint;

/// Append a varint length prefix followed by `data`.
///
/// Empty input appends nothing.
pub fn put_length_delimited(buf: &mut BytesMut, data: &[u8]) {
    if data.is_empty() {
        return;
    }
    put_varint(buf, data.len() as u64);
    buf.put_slice(data);
}

/// Append a string as UTF-8, length-delimited.
///
/// Empty input appends nothing.
#[inline]
pub fn put_str(buf: &mut BytesMut, text: &str) {
    put_length_delimited(buf, text.as_bytes());
}
