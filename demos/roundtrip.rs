//! Round trip - frame a message and read it back.
//!
//! This example demonstrates:
//! - Building a descriptor pool for `example.SimpleMessage`
//! - Serializing a reflected message into a Schema Registry frame
//! - Deserializing the frame into a plain `prost` struct
//!
//! Run with `RUST_LOG=protoframe=trace` to see framing details.

use prost_reflect::{DescriptorPool, DynamicMessage, Value};
use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::{DescriptorProto, FieldDescriptorProto, FileDescriptorProto, FileDescriptorSet};
use protoframe::{Deserializer, Serializer};
use tracing_subscriber::EnvFilter;

/// Decoded form of `example.SimpleMessage`.
#[derive(Clone, PartialEq, prost::Message)]
struct SimpleMessage {
    #[prost(string, tag = "1")]
    text: String,
    #[prost(int32, tag = "2")]
    id: i32,
}

fn field(name: &str, number: i32, ty: Type) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_string()),
        number: Some(number),
        label: Some(Label::Optional as i32),
        r#type: Some(ty as i32),
        ..Default::default()
    }
}

fn example_pool() -> Result<DescriptorPool, Box<dyn std::error::Error>> {
    let file = FileDescriptorProto {
        name: Some("example.proto".to_string()),
        package: Some("example".to_string()),
        syntax: Some("proto3".to_string()),
        message_type: vec![DescriptorProto {
            name: Some("SimpleMessage".to_string()),
            field: vec![field("text", 1, Type::String), field("id", 2, Type::Int32)],
            ..Default::default()
        }],
        ..Default::default()
    };
    Ok(DescriptorPool::from_file_descriptor_set(FileDescriptorSet {
        file: vec![file],
    })?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let pool = example_pool()?;
    let descriptor = pool
        .get_message_by_name("example.SimpleMessage")
        .ok_or("example.SimpleMessage missing from pool")?;

    let mut msg = DynamicMessage::new(descriptor);
    msg.set_field_by_name("id", Value::I32(1));
    msg.set_field_by_name("text", Value::String("Hello".to_string()));

    let bytes = Serializer::new().serialize(&msg)?;
    println!("{:02x?}", &bytes[..]);

    let (schema_id, decoded): (u32, SimpleMessage) = Deserializer::new().deserialize(&bytes)?;
    println!("schema {}: {}", schema_id, decoded.text);

    Ok(())
}
