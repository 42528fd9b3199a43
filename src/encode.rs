//! Message traversal and encoding.
//!
//! [`serialize`] walks a message depth-first in field-declaration order
//! and assembles the protobuf message body:
//! 1. Record the message type at the current recursion depth; the same
//!    type at two different depths is a circular reference.
//! 2. Per field: reject duplicate field numbers within the frame, skip
//!    absent values, verify type compatibility before any bytes are
//!    written, then emit tag + payload.
//! 3. Embedded messages are encoded recursively into their own buffer and
//!    length-delimited into the parent; empty results are omitted along
//!    with their tag. Repeated messages emit one key-value pair per
//!    element. Repeated scalars are packed: payloads concatenated under a
//!    single length-delimited key.
//!
//! Each top-level call owns its output buffer and visit log exclusively,
//! so concurrent calls on different instances never interfere. Failure
//! unwinds the whole call; no partial output is ever returned.

use std::collections::{HashMap, HashSet};

use bytes::{Bytes, BytesMut};
use tracing::trace;

use crate::error::{ProtowireError, Result};
use crate::message::{Message, TypeToken};
use crate::value::{is_compatible, Scalar, Value};
use crate::wire;
use crate::wire::ProtobufType;

/// Serialize a message to its protobuf wire-format body.
///
/// The result is the bare message body with no outer framing, exactly the
/// bytes a protobuf decoder expects for the corresponding message type.
///
/// # Errors
///
/// Fails fast on invalid or duplicate field numbers, declared types that
/// cannot represent their resolved values, and circular type references.
pub fn serialize(message: &dyn Message) -> Result<Bytes> {
    let mut visits = VisitLog::new();
    Ok(encode_message(message, 0, &mut visits)?.freeze())
}

/// Serialize a message, appending the body to a caller-owned buffer.
///
/// The message is encoded to completion first; on failure nothing is
/// appended to `buf`.
pub fn serialize_into(message: &dyn Message, buf: &mut BytesMut) -> Result<()> {
    let mut visits = VisitLog::new();
    let body = encode_message(message, 0, &mut visits)?;
    buf.unsplit(body);
    Ok(())
}

/// Depth-tagged record of visited message types, global per top-level
/// call.
///
/// A type reappearing at a different recursion depth is treated as a
/// circular reference. This is a heuristic: legitimate reuse of one type
/// at different depths in unrelated branches is rejected too.
struct VisitLog {
    depths: HashMap<TypeToken, Vec<usize>>,
}

impl VisitLog {
    fn new() -> Self {
        Self {
            depths: HashMap::new(),
        }
    }

    /// Record `token` at `depth`; true if it was already recorded at any
    /// other depth.
    fn mark(&mut self, token: TypeToken, depth: usize) -> bool {
        let seen = self.depths.entry(token).or_default();
        seen.push(depth);
        seen.iter().any(|&d| d != depth)
    }
}

/// Encode one message frame, returning its accumulated bytes.
fn encode_message(message: &dyn Message, depth: usize, visits: &mut VisitLog) -> Result<BytesMut> {
    let token = message.type_token();
    if visits.mark(token, depth) {
        return Err(ProtowireError::CircularReference(token.name()));
    }
    trace!(ty = token.name(), depth, "encoding message frame");

    let mut out = BytesMut::new();
    // Duplicate tracking is per frame: nested frames start fresh.
    let mut seen_numbers = HashSet::new();

    for field in message.fields() {
        let number = field.descriptor.number;
        let ty = field.descriptor.ty;
        if !seen_numbers.insert(number) {
            return Err(ProtowireError::DuplicateFieldNumber(number));
        }

        match field.value {
            Value::None => {}
            Value::Message(inner) => {
                check_message_type(ty, number, "message")?;
                let nested = encode_message(inner, depth + 1, visits)?;
                put_embedded(&mut out, number, &nested)?;
            }
            Value::RepeatedMessage(items) => {
                check_message_type(ty, number, "repeated message")?;
                // Unpacked repetition: one key-value pair per element, in
                // encounter order. Each element gets its own frame.
                for inner in items {
                    let nested = encode_message(inner, depth + 1, visits)?;
                    put_embedded(&mut out, number, &nested)?;
                }
            }
            Value::Scalar(scalar) => {
                check_scalar_type(ty, &scalar, number)?;
                if scalar.is_empty_payload() {
                    continue;
                }
                wire::put_tag(&mut out, ty, number)?;
                put_scalar(&mut out, ty, &scalar);
            }
            Value::Repeated(items) => {
                // Packed: element payloads concatenated with no per-element
                // keys, under a single length-delimited entry. An empty run
                // contributes nothing.
                let mut packed = BytesMut::new();
                for scalar in &items {
                    check_scalar_type(ty, scalar, number)?;
                    put_scalar(&mut packed, ty, scalar);
                }
                if !packed.is_empty() {
                    wire::put_tag(&mut out, ProtobufType::Bytes, number)?;
                    wire::put_length_delimited(&mut out, &packed);
                }
            }
        }
    }

    Ok(out)
}

/// Emit an embedded-message body under `number`, or nothing if the body
/// is empty (a message with no set fields disappears from the parent).
fn put_embedded(out: &mut BytesMut, number: u32, nested: &[u8]) -> Result<()> {
    if nested.is_empty() {
        return Ok(());
    }
    wire::put_tag(out, ProtobufType::Bytes, number)?;
    wire::put_length_delimited(out, nested);
    Ok(())
}

fn check_scalar_type(ty: ProtobufType, value: &Scalar<'_>, number: u32) -> Result<()> {
    if is_compatible(ty, value) {
        return Ok(());
    }
    Err(ProtowireError::TypeMismatch {
        field: number,
        declared: ty,
        actual: value.kind(),
    })
}

fn check_message_type(ty: ProtobufType, number: u32, actual: &'static str) -> Result<()> {
    if ty == ProtobufType::Message {
        return Ok(());
    }
    Err(ProtowireError::TypeMismatch {
        field: number,
        declared: ty,
        actual,
    })
}

/// Append a scalar payload using the codec selected by the declared type.
///
/// Callers have already verified compatibility, so every reachable pair
/// is covered below.
fn put_scalar(out: &mut BytesMut, ty: ProtobufType, value: &Scalar<'_>) {
    match (ty, value) {
        (ProtobufType::Double, Scalar::Double(v)) => wire::put_double(out, *v),
        (ProtobufType::Float, Scalar::Float(v)) => wire::put_float(out, *v),
        (ProtobufType::Bool, Scalar::Bool(v)) => wire::put_varint(out, u64::from(*v)),
        // Sign extension first: negative 32-bit values take the canonical
        // ten-byte form.
        (
            ProtobufType::Int32 | ProtobufType::Uint32 | ProtobufType::Sint32,
            Scalar::Int32(v),
        ) => wire::put_varint(out, *v as i64 as u64),
        (
            ProtobufType::Int32 | ProtobufType::Uint32 | ProtobufType::Sint32,
            Scalar::UInt32(v),
        ) => wire::put_varint(out, u64::from(*v)),
        (
            ProtobufType::Int64 | ProtobufType::Uint64 | ProtobufType::Sint64,
            Scalar::Int64(v),
        ) => wire::put_varint(out, *v as u64),
        (
            ProtobufType::Int64 | ProtobufType::Uint64 | ProtobufType::Sint64,
            Scalar::UInt64(v),
        ) => wire::put_varint(out, *v),
        (ProtobufType::Fixed32 | ProtobufType::Sfixed32, Scalar::Int32(v)) => {
            wire::put_sfixed32(out, *v)
        }
        (ProtobufType::Fixed32 | ProtobufType::Sfixed32, Scalar::UInt32(v)) => {
            wire::put_fixed32(out, *v)
        }
        (ProtobufType::Fixed64 | ProtobufType::Sfixed64, Scalar::Int64(v)) => {
            wire::put_sfixed64(out, *v)
        }
        (ProtobufType::Fixed64 | ProtobufType::Sfixed64, Scalar::UInt64(v)) => {
            wire::put_fixed64(out, *v)
        }
        (ProtobufType::String, Scalar::Str(v)) => wire::put_str(out, v),
        (ProtobufType::Bytes, Scalar::Bytes(v)) => wire::put_length_delimited(out, v),
        _ => debug_assert!(false, "scalar compatibility is checked before encoding"),
    }
}
