//! # protowire
//!
//! Schema-driven Protocol Buffers wire-format encoder.
//!
//! Types declare their schema by implementing [`Message`]: an ordered list
//! of field descriptors (field number + protobuf type) with values
//! resolved into a fixed set of shapes (scalar, repeated scalar, embedded
//! message, repeated message, absent). [`serialize`] walks an instance
//! depth-first and produces the exact byte sequence a protobuf-compliant
//! decoder expects for that message body. Decoding is out of scope.
//!
//! ## Architecture
//!
//! - **Wire layer** ([`wire`]): varint, fixed-width little-endian, and
//!   length-delimited primitives plus field-key construction
//! - **Schema layer** ([`Message`], [`Field`], [`Value`]): compile-time
//!   field metadata with registration-time value resolution
//! - **Encoder** ([`serialize`], [`serialize_into`]): recursive traversal
//!   with packing rules, duplicate-field and circular-reference detection
//!
//! ## Example
//!
//! ```
//! use protowire::{serialize, Field, Message, ProtobufType, Scalar, TypeToken, Value};
//!
//! struct Inner {
//!     value: i32,
//! }
//!
//! impl Message for Inner {
//!     fn type_token(&self) -> TypeToken {
//!         TypeToken::of::<Self>()
//!     }
//!
//!     fn fields(&self) -> Vec<Field<'_>> {
//!         vec![Field::new(1, ProtobufType::Int32, Value::Scalar(Scalar::Int32(self.value)))]
//!     }
//! }
//!
//! struct Outer {
//!     id: i32,
//!     inner: Inner,
//! }
//!
//! impl Message for Outer {
//!     fn type_token(&self) -> TypeToken {
//!         TypeToken::of::<Self>()
//!     }
//!
//!     fn fields(&self) -> Vec<Field<'_>> {
//!         vec![
//!             Field::new(1, ProtobufType::Int32, Value::Scalar(Scalar::Int32(self.id))),
//!             Field::new(2, ProtobufType::Message, Value::Message(&self.inner)),
//!         ]
//!     }
//! }
//!
//! let outer = Outer { id: 2, inner: Inner { value: 2 } };
//! let bytes = serialize(&outer).unwrap();
//! assert_eq!(&bytes[..], &[0x08, 0x02, 0x12, 0x02, 0x08, 0x02]);
//! ```

pub mod error;
pub mod wire;

mod encode;
mod message;
mod value;

pub use encode::{serialize, serialize_into};
pub use error::{ProtowireError, Result};
pub use message::{Field, FieldDescriptor, Message, TypeToken};
pub use value::{is_compatible, Scalar, Value};
pub use wire::{ProtobufType, WireType};
