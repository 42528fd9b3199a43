//! Error types for protowire.

use thiserror::Error;

use crate::wire::ProtobufType;

/// Main error type for all encoding operations.
///
/// Every variant is terminal: the encoder fails fast and the whole
/// top-level `serialize` call unwinds. Callers receive either a complete,
/// well-formed byte sequence or one of these errors, never partial output.
#[derive(Debug, Error)]
pub enum ProtowireError {
    /// Field number outside the valid protobuf range `[1, 2^29 - 1]`.
    #[error("Invalid field number {0}")]
    InvalidFieldNumber(u32),

    /// Same field number declared twice within one message frame.
    #[error("Duplicate field number {0}")]
    DuplicateFieldNumber(u32),

    /// Declared protobuf type cannot represent the resolved value.
    #[error("Type mismatch for field {field}: {declared:?} cannot encode a {actual} value")]
    TypeMismatch {
        /// Field number of the offending field.
        field: u32,
        /// The protobuf type declared for the field.
        declared: ProtobufType,
        /// Shape of the value that was actually resolved.
        actual: &'static str,
    },

    /// Same message type observed at two different recursion depths.
    #[error("Circular reference found for {0}")]
    CircularReference(&'static str),
}

/// Result type alias using ProtowireError.
pub type Result<T> = std::result::Result<T, ProtowireError>;
