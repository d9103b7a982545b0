//! Serializer and deserializer for framed protobuf messages.
//!
//! [`Serializer`] turns a message into a frame: it encodes the payload,
//! resolves the message's index path from its descriptor and prepends the
//! schema header. [`Deserializer`] strips the header and index array and
//! decodes the payload.
//!
//! # Example
//!
//! ```ignore
//! use protoframe::{Deserializer, Serializer};
//!
//! let serializer = Serializer::builder().schema_id(42).build();
//! let bytes = serializer.serialize(&reflected_message)?;
//!
//! let (schema_id, decoded): (u32, MyMessage) = Deserializer::new().deserialize(&bytes)?;
//! assert_eq!(schema_id, 42);
//! ```

use bytes::Bytes;
use prost::{Message, Name};
use prost_reflect::{DescriptorPool, DynamicMessage, FileDescriptor, MessageDescriptor, ReflectMessage};

use crate::codec::ProtobufCodec;
use crate::config::SerializerConfig;
use crate::descriptor::{descriptor_for_indexes, message_indexes};
use crate::error::{FramingError, Result};
use crate::protocol::{compose_frame, parse_frame, Frame};

/// Builder for configuring and creating a [`Serializer`].
#[derive(Debug, Clone, Default)]
pub struct SerializerBuilder {
    config: SerializerConfig,
    pool: Option<DescriptorPool>,
}

impl SerializerBuilder {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schema identifier written into every frame.
    pub fn schema_id(mut self, schema_id: u32) -> Self {
        self.config.schema_id = schema_id;
        self
    }

    /// Whether to strip the package from full names before index resolution.
    pub fn strip_package(mut self, strip: bool) -> Self {
        self.config.strip_package = strip;
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: SerializerConfig) -> Self {
        self.config = config;
        self
    }

    /// Descriptor pool used by [`Serializer::serialize_named`].
    pub fn descriptor_pool(mut self, pool: DescriptorPool) -> Self {
        self.pool = Some(pool);
        self
    }

    /// Build the serializer.
    pub fn build(self) -> Serializer {
        Serializer {
            config: self.config,
            pool: self.pool,
        }
    }
}

/// Frames protobuf messages for a single schema identifier.
#[derive(Debug, Clone, Default)]
pub struct Serializer {
    config: SerializerConfig,
    pool: Option<DescriptorPool>,
}

impl Serializer {
    /// Create a serializer with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new serializer builder.
    pub fn builder() -> SerializerBuilder {
        SerializerBuilder::new()
    }

    /// Schema identifier written into frames.
    #[inline]
    pub fn schema_id(&self) -> u32 {
        self.config.schema_id
    }

    /// Active configuration.
    #[inline]
    pub fn config(&self) -> &SerializerConfig {
        &self.config
    }

    /// Serialize a message that carries its own descriptor.
    pub fn serialize<M: ReflectMessage>(&self, msg: &M) -> Result<Bytes> {
        let descriptor = msg.descriptor();
        Ok(self.frame(msg, &descriptor))
    }

    /// Serialize a plain `prost` message.
    ///
    /// The descriptor is looked up by `M::full_name()` in the configured
    /// descriptor pool.
    ///
    /// # Errors
    ///
    /// Returns `DescriptorLoad` if no pool is configured or the pool does
    /// not contain the message type.
    pub fn serialize_named<M: Message + Name>(&self, msg: &M) -> Result<Bytes> {
        let descriptor = self.load_descriptor(&M::full_name())?;
        Ok(self.frame(msg, &descriptor))
    }

    fn load_descriptor(&self, full_name: &str) -> Result<MessageDescriptor> {
        let Some(pool) = &self.pool else {
            tracing::debug!("No descriptor pool configured for {}", full_name);
            return Err(FramingError::DescriptorLoad(format!(
                "no descriptor pool configured for {}",
                full_name
            )));
        };

        pool.get_message_by_name(full_name).ok_or_else(|| {
            tracing::debug!("Message type {} not in descriptor pool", full_name);
            FramingError::DescriptorLoad(format!(
                "message type {} not found in descriptor pool",
                full_name
            ))
        })
    }

    fn frame<M: Message>(&self, msg: &M, descriptor: &MessageDescriptor) -> Bytes {
        let indexes = message_indexes(descriptor, self.config.strip_package);
        let payload = ProtobufCodec::encode(msg);

        tracing::trace!(
            type_name = descriptor.full_name(),
            ?indexes,
            "serializing message"
        );
        Bytes::from(compose_frame(self.config.schema_id, &indexes, &payload))
    }
}

/// Decodes framed protobuf messages.
///
/// The consumer names the target message type, so the index array is only
/// measured and skipped, except in [`Deserializer::deserialize_dynamic`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Deserializer;

impl Deserializer {
    /// Create a new deserializer.
    pub fn new() -> Self {
        Self
    }

    /// Decode a frame into `msg`, returning the frame's schema identifier.
    ///
    /// `msg` is cleared before the payload is merged in.
    ///
    /// # Errors
    ///
    /// - `FrameTooShort`, `BadMagicByte`, `BadIndexArray` for a malformed frame
    /// - `PayloadDecode` if the payload is not a valid `M`
    pub fn deserialize_into<M: Message>(&self, data: &[u8], msg: &mut M) -> Result<u32> {
        let info = parse_frame(data)?;
        ProtobufCodec::merge(msg, &data[info.payload_offset..]).map_err(|e| {
            tracing::debug!("Payload decode failed for schema {}: {}", info.schema_id, e);
            e
        })?;
        Ok(info.schema_id)
    }

    /// Decode a frame into a new message.
    pub fn deserialize<M: Message + Default>(&self, data: &[u8]) -> Result<(u32, M)> {
        let mut msg = M::default();
        let schema_id = self.deserialize_into(data, &mut msg)?;
        Ok((schema_id, msg))
    }

    /// Decode a frame whose message type is chosen by its index path.
    ///
    /// `file` is the schema the frame's identifier refers to. An empty
    /// index path selects the file's first message type.
    ///
    /// # Errors
    ///
    /// Same as [`Deserializer::deserialize_into`], plus
    /// `UnknownMessageIndex` if the path does not name a message in `file`.
    pub fn deserialize_dynamic(
        &self,
        data: Bytes,
        file: &FileDescriptor,
    ) -> Result<(u32, DynamicMessage)> {
        let frame = Frame::parse(data)?;
        let Some(descriptor) = descriptor_for_indexes(file, &frame.indexes) else {
            tracing::debug!(
                "Index path {:?} not found in {}",
                frame.indexes,
                file.name()
            );
            return Err(FramingError::UnknownMessageIndex(frame.indexes));
        };

        let msg = DynamicMessage::decode(descriptor, frame.payload)?;
        Ok((frame.schema_id, msg))
    }
}

/// Serialize a reflected message with the default configuration.
pub fn serialize<M: ReflectMessage>(msg: &M) -> Result<Bytes> {
    Serializer::new().serialize(msg)
}

/// Decode a frame into `msg`, returning the schema identifier.
pub fn deserialize<M: Message>(data: &[u8], msg: &mut M) -> Result<u32> {
    Deserializer::new().deserialize_into(data, msg)
}
