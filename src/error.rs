//! Error types for protoframe.

use thiserror::Error;

/// Main error type for all framing operations.
#[derive(Debug, Error)]
pub enum FramingError {
    /// Input is shorter than the 5-byte magic + schema id header.
    #[error("Frame too short: need at least 5 bytes, got {len}")]
    FrameTooShort { len: usize },

    /// First byte is not the magic byte.
    #[error("Invalid magic byte {0}, must be 0")]
    BadMagicByte(u8),

    /// Message index array could not be decoded.
    #[error("Invalid message index array: {0}")]
    BadIndexArray(#[source] IndexDecodeError),

    /// No descriptor could be loaded for the message.
    #[error("Error loading message descriptor: {0}")]
    DescriptorLoad(String),

    /// Protobuf payload decode error.
    #[error("Protobuf decode error: {0}")]
    PayloadDecode(#[from] prost::DecodeError),

    /// Index path does not name a message type in the schema file.
    #[error("No message type at index path {0:?}")]
    UnknownMessageIndex(Vec<i32>),

    /// Configuration could not be parsed.
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Varint decoding failures inside a message index array.
///
/// Offsets are relative to the start of the index array.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IndexDecodeError {
    /// The leading count varint is truncated or overflows.
    #[error("invalid count varint at offset {offset}")]
    InvalidCount { offset: usize },

    /// The count decoded to a negative number.
    #[error("negative index count {count}")]
    NegativeCount { count: i64 },

    /// An index varint is truncated or overflows.
    #[error("invalid varint for index {position} at offset {offset}")]
    InvalidIndex { position: usize, offset: usize },

    /// An index does not fit in an `i32`.
    #[error("index {position} out of range: {value}")]
    IndexOutOfRange { position: usize, value: i64 },
}

/// Result type alias using FramingError.
pub type Result<T> = std::result::Result<T, FramingError>;
