//! Resolved field values and type compatibility.
//!
//! Field values arrive at the encoder pre-classified into one of five
//! shapes: absent, scalar, repeated scalar, embedded message, or repeated
//! message. The shape is fixed when the schema is declared, replacing any
//! encode-time casting or lookup.

use crate::message::Message;
use crate::wire::ProtobufType;

/// A single scalar payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Bool(bool),
    Double(f64),
    Float(f32),
    Int32(i32),
    Int64(i64),
    UInt32(u32),
    UInt64(u64),
    Str(&'a str),
    Bytes(&'a [u8]),
}

impl Scalar<'_> {
    /// Shape name used in type-mismatch errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Scalar::Bool(_) => "bool",
            Scalar::Double(_) => "double",
            Scalar::Float(_) => "float",
            Scalar::Int32(_) => "int32",
            Scalar::Int64(_) => "int64",
            Scalar::UInt32(_) => "uint32",
            Scalar::UInt64(_) => "uint64",
            Scalar::Str(_) => "string",
            Scalar::Bytes(_) => "bytes",
        }
    }

    /// True for a zero-length string or byte payload.
    ///
    /// Empty payloads make the whole field disappear from the output, tag
    /// included.
    pub(crate) fn is_empty_payload(&self) -> bool {
        match self {
            Scalar::Str(s) => s.is_empty(),
            Scalar::Bytes(b) => b.is_empty(),
            _ => false,
        }
    }
}

/// A resolved field value.
pub enum Value<'a> {
    /// Absent; the field contributes zero bytes.
    None,
    /// A single scalar.
    Scalar(Scalar<'a>),
    /// A repeated scalar field, encoded packed.
    Repeated(Vec<Scalar<'a>>),
    /// An embedded message.
    Message(&'a dyn Message),
    /// A repeated message field, one key-value pair per element.
    RepeatedMessage(Vec<&'a dyn Message>),
}

/// Check whether a declared protobuf type can represent a scalar value.
///
/// Any 32-bit integer scalar satisfies any of the five 32-bit integer
/// declarations, and likewise for 64 bits. `Bytes` is accepted
/// structurally. `Message` accepts no scalar at all: composite values
/// reach the encoder as [`Value::Message`], never as a `Scalar`.
pub fn is_compatible(ty: ProtobufType, value: &Scalar<'_>) -> bool {
    match ty {
        ProtobufType::Bool => matches!(value, Scalar::Bool(_)),
        ProtobufType::Double => matches!(value, Scalar::Double(_)),
        ProtobufType::Float => matches!(value, Scalar::Float(_)),
        ProtobufType::Int32
        | ProtobufType::Uint32
        | ProtobufType::Sint32
        | ProtobufType::Fixed32
        | ProtobufType::Sfixed32 => matches!(value, Scalar::Int32(_) | Scalar::UInt32(_)),
        ProtobufType::Int64
        | ProtobufType::Uint64
        | ProtobufType::Sint64
        | ProtobufType::Fixed64
        | ProtobufType::Sfixed64 => matches!(value, Scalar::Int64(_) | Scalar::UInt64(_)),
        ProtobufType::String => matches!(value, Scalar::Str(_)),
        ProtobufType::Bytes => matches!(value, Scalar::Bytes(_)),
        ProtobufType::Message => false,
    }
}
