//! Message index resolution.
//!
//! A `.proto` file can declare several message types, nested to any depth.
//! The index path locates one of them: the position among the file's
//! top-level messages, then the position among that message's nested
//! messages, and so on.
//!
//! ```text
//! message A {}            // [0]
//! message B {             // [1]
//!   message C {}          // [1, 0]
//!   message D {}          // [1, 1]
//! }
//! ```
//!
//! Resolution works over anything implementing [`TypeDeclaration`]:
//! `prost_reflect::MessageDescriptor` for reflected messages and
//! `&prost_types::DescriptorProto` for raw file descriptors.

use prost_reflect::{FileDescriptor, MessageDescriptor};
use prost_types::{DescriptorProto, FileDescriptorProto};

/// A message type declaration with a name and nested declarations.
pub trait TypeDeclaration: Sized {
    /// Iterator over the nested declarations.
    type Nested: IntoIterator<Item = Self>;

    /// Short (unqualified) name of the type.
    fn type_name(&self) -> &str;

    /// Nested message types, in declaration order.
    fn nested_types(&self) -> Self::Nested;
}

impl TypeDeclaration for MessageDescriptor {
    type Nested = Vec<MessageDescriptor>;

    fn type_name(&self) -> &str {
        self.name()
    }

    fn nested_types(&self) -> Self::Nested {
        self.child_messages().collect()
    }
}

impl<'a> TypeDeclaration for &'a DescriptorProto {
    type Nested = std::slice::Iter<'a, DescriptorProto>;

    fn type_name(&self) -> &str {
        self.name()
    }

    fn nested_types(&self) -> Self::Nested {
        self.nested_type.iter()
    }
}

/// Compute the index path of `qualified_name` among `file_types`.
///
/// Walks one dot-separated segment at a time, descending into the nested
/// types of each match. A segment with no match at the current level adds
/// no index and the walk stays at that level, so the result can be shorter
/// than the number of segments. Package segments must be stripped by the
/// caller (see [`message_indexes`]) or they are skipped this way.
///
/// ```
/// use prost_types::DescriptorProto;
/// use protoframe::descriptor::resolve_indexes;
///
/// let decl = |name: &str, nested: Vec<DescriptorProto>| DescriptorProto {
///     name: Some(name.to_string()),
///     nested_type: nested,
///     ..Default::default()
/// };
/// let file_types = vec![
///     decl("A", vec![]),
///     decl("B", vec![decl("C", vec![]), decl("D", vec![])]),
/// ];
///
/// assert_eq!(resolve_indexes(&file_types, "B.D"), vec![1, 1]);
/// ```
pub fn resolve_indexes<D, I>(file_types: I, qualified_name: &str) -> Vec<i32>
where
    D: TypeDeclaration,
    I: IntoIterator<Item = D>,
{
    let mut indexes = Vec::new();
    let mut siblings: Vec<D> = file_types.into_iter().collect();

    for segment in qualified_name.split('.') {
        let Some(position) = siblings.iter().position(|decl| decl.type_name() == segment) else {
            tracing::debug!(segment, qualified_name, "no message type matches name segment");
            continue;
        };
        let nested: Vec<D> = siblings[position].nested_types().into_iter().collect();
        indexes.push(position as i32);
        siblings = nested;
    }

    indexes
}

/// Strip `package.` from the front of `full_name`, if present.
fn strip_package<'a>(full_name: &'a str, package: &str) -> &'a str {
    if package.is_empty() {
        return full_name;
    }
    full_name
        .strip_prefix(package)
        .and_then(|rest| rest.strip_prefix('.'))
        .unwrap_or(full_name)
}

/// Index path of a reflected message type within its parent file.
///
/// With `strip_package` set, the descriptor's package is removed from its
/// full name first, so `example.Outer.Inner` resolves as `Outer.Inner`.
pub fn message_indexes(descriptor: &MessageDescriptor, strip_package_name: bool) -> Vec<i32> {
    let full_name = descriptor.full_name();
    let name = if strip_package_name {
        strip_package(full_name, descriptor.package_name())
    } else {
        full_name
    };

    let file = descriptor.parent_file();
    resolve_indexes(file.messages(), name)
}

/// Index path of `full_name` within a raw file descriptor.
///
/// The file's package is stripped from `full_name` before resolving.
pub fn proto_message_indexes(file: &FileDescriptorProto, full_name: &str) -> Vec<i32> {
    let name = strip_package(full_name.trim_start_matches('.'), file.package());
    resolve_indexes(&file.message_type, name)
}

/// Look up the message type an index path points to.
///
/// An empty path selects the first top-level message. Returns `None` if
/// any index is negative or out of bounds.
pub fn descriptor_for_indexes(file: &FileDescriptor, indexes: &[i32]) -> Option<MessageDescriptor> {
    let Some((&first, rest)) = indexes.split_first() else {
        return file.messages().next();
    };

    let mut current = file.messages().nth(usize::try_from(first).ok()?)?;
    for &index in rest {
        let next = current.child_messages().nth(usize::try_from(index).ok()?)?;
        current = next;
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{declaration, fixture_pool};

    #[test]
    fn test_resolve_nested_path() {
        let file_types = vec![
            declaration("A", vec![]),
            declaration("B", vec![declaration("C", vec![]), declaration("D", vec![])]),
        ];

        assert_eq!(resolve_indexes(&file_types, "A"), vec![0]);
        assert_eq!(resolve_indexes(&file_types, "B"), vec![1]);
        assert_eq!(resolve_indexes(&file_types, "B.C"), vec![1, 0]);
        assert_eq!(resolve_indexes(&file_types, "B.D"), vec![1, 1]);
    }

    #[test]
    fn test_resolve_skips_unmatched_segments() {
        let file_types = vec![
            declaration("A", vec![]),
            declaration("B", vec![declaration("D", vec![])]),
        ];

        // Package segments are skipped without descending
        assert_eq!(resolve_indexes(&file_types, "com.acme.B.D"), vec![1, 0]);
        // Unknown leaf leaves the path short
        assert_eq!(resolve_indexes(&file_types, "B.Missing"), vec![1]);
        assert!(resolve_indexes(&file_types, "Nope").is_empty());
    }

    #[test]
    fn test_resolve_first_match_wins() {
        let file_types = vec![declaration("A", vec![]), declaration("A", vec![])];
        assert_eq!(resolve_indexes(&file_types, "A"), vec![0]);
    }

    #[test]
    fn test_resolve_empty_file() {
        let file_types: Vec<prost_types::DescriptorProto> = Vec::new();
        assert!(resolve_indexes(&file_types, "A.B").is_empty());
    }

    #[test]
    fn test_strip_package() {
        assert_eq!(strip_package("example.Simple", "example"), "Simple");
        assert_eq!(strip_package("a.b.Outer.Inner", "a.b"), "Outer.Inner");
        assert_eq!(strip_package("Plain", ""), "Plain");
        // Prefix must end on a segment boundary
        assert_eq!(strip_package("examples.Simple", "example"), "examples.Simple");
    }

    #[test]
    fn test_message_indexes_strips_package() {
        let pool = fixture_pool();
        let simple = pool.get_message_by_name("example.SimpleMessage").unwrap();
        let leaf = pool.get_message_by_name("demo.B.D").unwrap();
        let plain_inner = pool.get_message_by_name("Plain.Inner").unwrap();

        assert_eq!(message_indexes(&simple, true), vec![0]);
        assert_eq!(message_indexes(&leaf, true), vec![1, 1]);
        assert_eq!(message_indexes(&plain_inner, true), vec![0, 0]);
    }

    #[test]
    fn test_message_indexes_without_stripping() {
        let pool = fixture_pool();
        let leaf = pool.get_message_by_name("demo.B.D").unwrap();

        // "demo" matches nothing and is skipped
        assert_eq!(message_indexes(&leaf, false), vec![1, 1]);
    }

    #[test]
    fn test_message_indexes_package_collides_with_type_name() {
        let pool = fixture_pool();
        let target = pool.get_message_by_name("Outer.Outer").unwrap();

        assert_eq!(message_indexes(&target, true), vec![1]);
        // Without stripping, the package segment is taken as a type name
        // and the path points at the nested Outer.Outer.Outer instead
        assert_eq!(message_indexes(&target, false), vec![1, 0]);
    }

    #[test]
    fn test_proto_message_indexes() {
        let pool = fixture_pool();
        let file = pool
            .get_file_by_name("demo/nested.proto")
            .unwrap()
            .file_descriptor_proto()
            .clone();

        assert_eq!(proto_message_indexes(&file, "demo.B.D"), vec![1, 1]);
        assert_eq!(proto_message_indexes(&file, ".demo.B.C"), vec![1, 0]);
        assert_eq!(proto_message_indexes(&file, "demo.A"), vec![0]);
    }

    #[test]
    fn test_descriptor_for_indexes() {
        let pool = fixture_pool();
        let file = pool.get_file_by_name("demo/nested.proto").unwrap();

        let found = |indexes: &[i32]| {
            descriptor_for_indexes(&file, indexes).map(|d| d.full_name().to_string())
        };
        assert_eq!(found(&[]).as_deref(), Some("demo.A"));
        assert_eq!(found(&[0]).as_deref(), Some("demo.A"));
        assert_eq!(found(&[1, 1]).as_deref(), Some("demo.B.D"));
        assert_eq!(found(&[2]), None);
        assert_eq!(found(&[1, 5]), None);
        assert_eq!(found(&[-1]), None);
    }

    #[test]
    fn test_indexes_roundtrip_through_descriptors() {
        let pool = fixture_pool();
        for descriptor in pool.all_messages() {
            let indexes = message_indexes(&descriptor, true);
            let file = descriptor.parent_file();
            let found = descriptor_for_indexes(&file, &indexes).unwrap();
            assert_eq!(found.full_name(), descriptor.full_name());
        }
    }
}
