//! Protobuf field types and their wire-format layouts.
//!
//! Every declarable field type maps to exactly one of the four wire types
//! defined by the protobuf encoding:
//!
//! ```text
//! ┌──────────────────┬────┬─────────────────────────────────────┐
//! │ Wire type        │ ID │ Used for                            │
//! ├──────────────────┼────┼─────────────────────────────────────┤
//! │ Varint           │ 0  │ int32/64, uint32/64, sint32/64, bool│
//! │ Fixed64          │ 1  │ fixed64, sfixed64, double           │
//! │ LengthDelimited  │ 2  │ string, bytes, embedded messages    │
//! │ Fixed32          │ 5  │ fixed32, sfixed32, float            │
//! └──────────────────┴────┴─────────────────────────────────────┘
//! ```

/// Protobuf type declared for a field.
///
/// Covers the proto3 scalar types plus `Message` for embedded messages.
/// The encoder treats `Sint32`/`Sint64` identically to `Int32`/`Int64`
/// (two's-complement varints, no zig-zag transform).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProtobufType {
    Double,
    Float,
    Int32,
    Int64,
    Uint32,
    Uint64,
    Sint32,
    Sint64,
    Sfixed32,
    Sfixed64,
    Fixed32,
    Fixed64,
    Bool,
    String,
    Bytes,
    Message,
}

/// Wire-format layout of an encoded field, with its 3-bit tag ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum WireType {
    /// Base-128 varint.
    Varint = 0,
    /// 64-bit little-endian.
    Fixed64 = 1,
    /// Varint length prefix followed by raw bytes.
    LengthDelimited = 2,
    /// 32-bit little-endian.
    Fixed32 = 5,
}

impl WireType {
    /// The 3-bit ID packed into field tags.
    #[inline]
    pub fn id(self) -> u8 {
        self as u8
    }
}

impl ProtobufType {
    /// Map this type to its wire-format layout.
    ///
    /// `Message` maps to `LengthDelimited`, though the traversal never
    /// consults this table for nested messages: embedded messages are
    /// always tagged through the `Bytes` path.
    pub fn wire_type(self) -> WireType {
        match self {
            ProtobufType::Int32
            | ProtobufType::Int64
            | ProtobufType::Uint32
            | ProtobufType::Uint64
            | ProtobufType::Sint32
            | ProtobufType::Sint64
            | ProtobufType::Bool => WireType::Varint,
            ProtobufType::Fixed64 | ProtobufType::Sfixed64 | ProtobufType::Double => {
                WireType::Fixed64
            }
            ProtobufType::Fixed32 | ProtobufType::Sfixed32 | ProtobufType::Float => {
                WireType::Fixed32
            }
            ProtobufType::String | ProtobufType::Bytes | ProtobufType::Message => {
                WireType::LengthDelimited
            }
        }
    }
}
