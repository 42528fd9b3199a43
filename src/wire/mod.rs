//! Wire-format primitives.
//!
//! This module implements the protobuf binary wire format for the
//! encoding direction:
//! - Base-128 varints (two's complement, no zig-zag)
//! - Little-endian fixed 32/64-bit payloads
//! - Length-delimited payloads (strings, bytes, embedded messages)
//! - Field keys: varint `(field_number << 3) | wire_type`

mod fixed;
mod length_delimited;
mod tag;
mod types;
mod varint;

pub use fixed::{put_double, put_fixed32, put_fixed64, put_float, put_sfixed32, put_sfixed64};
pub use length_delimited::{put_length_delimited, put_str};
pub use tag::{put_tag, MAX_FIELD_NUMBER, MIN_FIELD_NUMBER};
pub use types::{ProtobufType, WireType};
pub use varint::put_varint;
