//! Descriptor fixtures for unit tests, built without `protoc`.

use prost_reflect::DescriptorPool;
use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::{DescriptorProto, FieldDescriptorProto, FileDescriptorProto, FileDescriptorSet};

pub(crate) fn declaration(name: &str, nested: Vec<DescriptorProto>) -> DescriptorProto {
    DescriptorProto {
        name: Some(name.to_string()),
        nested_type: nested,
        ..Default::default()
    }
}

fn field(name: &str, number: i32, ty: Type) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_string()),
        number: Some(number),
        label: Some(Label::Optional as i32),
        r#type: Some(ty as i32),
        json_name: Some(name.to_string()),
        ..Default::default()
    }
}

fn file(name: &str, package: &str, messages: Vec<DescriptorProto>) -> FileDescriptorProto {
    FileDescriptorProto {
        name: Some(name.to_string()),
        package: (!package.is_empty()).then(|| package.to_string()),
        message_type: messages,
        syntax: Some("proto3".to_string()),
        ..Default::default()
    }
}

/// `example.SimpleMessage { string text = 1; int32 id = 2; }`
pub(crate) fn simple_message() -> DescriptorProto {
    DescriptorProto {
        field: vec![field("text", 1, Type::String), field("id", 2, Type::Int32)],
        ..declaration("SimpleMessage", vec![])
    }
}

/// Pool with four files:
///
/// - `example.proto` (package `example`): `SimpleMessage`
/// - `demo/nested.proto` (package `demo`): `A`, `B { C, D }`
/// - `plain.proto` (no package): `Plain { Inner }`
/// - `outer.proto` (package `Outer`): `Other`, `Outer { Outer }`
pub(crate) fn fixture_pool() -> DescriptorPool {
    let leaf = DescriptorProto {
        field: vec![field("d", 1, Type::String)],
        ..declaration("D", vec![])
    };
    let set = FileDescriptorSet {
        file: vec![
            file("example.proto", "example", vec![simple_message()]),
            file(
                "demo/nested.proto",
                "demo",
                vec![
                    DescriptorProto {
                        field: vec![field("a", 1, Type::Int32)],
                        ..declaration("A", vec![])
                    },
                    declaration("B", vec![declaration("C", vec![]), leaf]),
                ],
            ),
            file(
                "plain.proto",
                "",
                vec![declaration("Plain", vec![declaration("Inner", vec![])])],
            ),
            file(
                "outer.proto",
                "Outer",
                vec![
                    declaration("Other", vec![]),
                    declaration("Outer", vec![declaration("Outer", vec![])]),
                ],
            ),
        ],
    };
    DescriptorPool::from_file_descriptor_set(set).expect("fixture descriptors are valid")
}
