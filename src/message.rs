//! Message schema interface.
//!
//! A type becomes serializable by implementing [`Message`]: it names its
//! runtime identity (for circular-reference detection) and yields its
//! declared fields in declaration order, each one a [`FieldDescriptor`]
//! paired with an already-resolved [`Value`]. Declaration order is what
//! drives output byte order.
//!
//! Value resolution happens inside `fields()`, so there is no name-based
//! accessor lookup and nothing that can fail to resolve at encode time.
//! The trait is object-safe: embedded and repeated messages travel as
//! `&dyn Message`.
//!
//! # Example
//!
//! ```
//! use protowire::{Field, Message, ProtobufType, Scalar, TypeToken, Value};
//!
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! impl Message for Point {
//!     fn type_token(&self) -> TypeToken {
//!         TypeToken::of::<Self>()
//!     }
//!
//!     fn fields(&self) -> Vec<Field<'_>> {
//!         vec![
//!             Field::new(1, ProtobufType::Int32, Value::Scalar(Scalar::Int32(self.x))),
//!             Field::new(2, ProtobufType::Int32, Value::Scalar(Scalar::Int32(self.y))),
//!         ]
//!     }
//! }
//!
//! let bytes = protowire::serialize(&Point { x: 2, y: 3 }).unwrap();
//! assert_eq!(&bytes[..], &[0x08, 0x02, 0x10, 0x03]);
//! ```

use std::any::TypeId;

use crate::value::Value;
use crate::wire::ProtobufType;

/// Runtime identity of a message type.
///
/// Used by the encoder's circular-reference detector and named in
/// [`CircularReference`](crate::ProtowireError::CircularReference) errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeToken {
    id: TypeId,
    name: &'static str,
}

impl TypeToken {
    /// The token for a concrete message type.
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Human-readable type name, as reported in errors.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Static metadata declared for one field: its number and protobuf type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field number, valid in `[1, 2^29 - 1]`.
    pub number: u32,
    /// Declared protobuf type.
    pub ty: ProtobufType,
}

impl FieldDescriptor {
    /// Create a descriptor.
    pub const fn new(number: u32, ty: ProtobufType) -> Self {
        Self { number, ty }
    }
}

/// One declared field with its resolved value.
pub struct Field<'a> {
    /// Declared metadata.
    pub descriptor: FieldDescriptor,
    /// The value resolved from the message instance.
    pub value: Value<'a>,
}

impl<'a> Field<'a> {
    /// Create a field from its parts.
    pub fn new(number: u32, ty: ProtobufType, value: Value<'a>) -> Self {
        Self {
            descriptor: FieldDescriptor::new(number, ty),
            value,
        }
    }
}

/// A serializable message.
///
/// Implementations supply their identity and their ordered field list.
/// See the [module docs](self) for a complete example.
pub trait Message {
    /// Identity of this message type, used for cycle detection.
    ///
    /// Implementations should return `TypeToken::of::<Self>()`.
    fn type_token(&self) -> TypeToken;

    /// Declared fields in declaration order, with resolved values.
    fn fields(&self) -> Vec<Field<'_>>;
}
