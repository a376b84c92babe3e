//! docjson-tree - untyped document tree model.
//!
//! The tree node is [`serde_json::Value`] with the `preserve_order` feature,
//! so object members keep their insertion order through every operation.
//! This crate adds what the node type itself does not carry: a kind enum,
//! uniform child access, ordered child iteration, resolved locations for
//! addressing nodes from the root, and deep structural equality.
//!
//! No operation here panics on a kind mismatch; absence is expressed as
//! `None` or an empty iterator.

mod access;
mod deep_equal;
mod location;

pub use access::{child, child_by_index, child_by_key, children, resolve, resolve_mut};
pub use deep_equal::deep_equal;
pub use location::{format_location, Location, PathComponent};

use serde_json::Value;

/// The six node kinds of a document tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

/// Kind of the given node.
pub fn kind_of(value: &Value) -> NodeKind {
    match value {
        Value::Null => NodeKind::Null,
        Value::Bool(_) => NodeKind::Bool,
        Value::Number(_) => NodeKind::Number,
        Value::String(_) => NodeKind::String,
        Value::Array(_) => NodeKind::Array,
        Value::Object(_) => NodeKind::Object,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_matrix() {
        assert_eq!(kind_of(&json!(null)), NodeKind::Null);
        assert_eq!(kind_of(&json!(true)), NodeKind::Bool);
        assert_eq!(kind_of(&json!(1.5)), NodeKind::Number);
        assert_eq!(kind_of(&json!("x")), NodeKind::String);
        assert_eq!(kind_of(&json!([])), NodeKind::Array);
        assert_eq!(kind_of(&json!({})), NodeKind::Object);
    }
}
