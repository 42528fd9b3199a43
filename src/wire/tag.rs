//! Field tag encoding.
//!
//! Each key in an encoded message is a varint holding
//! `(field_number << 3) | wire_type`. Field numbers are validated here,
//! at the point of emission: a field that never produces a tag (absent
//! value, empty payload) is never range-checked, matching the encoder's
//! skip-before-validate ordering.

use bytes::BytesMut;

use super::types::ProtobufType;
use super::varint::put_varint;
use crate::error::{ProtowireError, Result};

/// Smallest valid field number.
pub const MIN_FIELD_NUMBER: u32 = 1;

/// Largest valid field number (2^29 - 1).
pub const MAX_FIELD_NUMBER: u32 = (1 << 29) - 1;

/// Append the field key for `ty` at `number`.
///
/// # Errors
///
/// Returns [`ProtowireError::InvalidFieldNumber`] if `number` lies
/// outside `[MIN_FIELD_NUMBER, MAX_FIELD_NUMBER]`.
///
/// # Example
///
/// ```
/// use bytes::BytesMut;
/// use protowire::wire::{put_tag, ProtobufType};
///
/// let mut buf = BytesMut::new();
/// put_tag(&mut buf, ProtobufType::Int32, 1).unwrap();
/// assert_eq!(&buf[..], &[0x08]);
/// ```
pub fn put_tag(buf: &mut BytesMut, ty: ProtobufType, number: u32) -> Result<()> {
    if !(MIN_FIELD_NUMBER..=MAX_FIELD_NUMBER).contains(&number) {
        return Err(ProtowireError::InvalidFieldNumber(number));
    }
    let key = (u64::from(number) << 3) | u64::from(ty.wire_type().id());
    put_varint(buf, key);
    Ok(())
}
