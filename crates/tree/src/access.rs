//! Uniform child access and location resolution over tree nodes.

use crate::PathComponent;
use serde_json::Value;

/// Child of an object node by key. `None` for missing keys and for
/// non-object nodes.
pub fn child_by_key<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(key),
        _ => None,
    }
}

/// Child of an array node by index. Negative indices resolve from the end
/// (`-1` is the last element). `None` when out of range and for non-array
/// nodes.
pub fn child_by_index(value: &Value, index: i64) -> Option<&Value> {
    match value {
        Value::Array(arr) => arr.get(resolve_index(index, arr.len())?),
        _ => None,
    }
}

/// Child addressed by one resolved component.
pub fn child<'a>(value: &'a Value, component: &PathComponent) -> Option<&'a Value> {
    match component {
        PathComponent::Key(key) => child_by_key(value, key),
        PathComponent::Index(index) => match value {
            Value::Array(arr) => arr.get(*index),
            _ => None,
        },
    }
}

/// Direct children of a node with their resolved components, in document
/// order: object members in key insertion order, array elements by
/// ascending index. Scalars have no children.
pub fn children<'a>(value: &'a Value) -> Box<dyn Iterator<Item = (PathComponent, &'a Value)> + 'a> {
    match value {
        Value::Object(map) => Box::new(
            map.iter()
                .map(|(key, child)| (PathComponent::Key(key.clone()), child)),
        ),
        Value::Array(arr) => Box::new(
            arr.iter()
                .enumerate()
                .map(|(index, child)| (PathComponent::Index(index), child)),
        ),
        _ => Box::new(std::iter::empty()),
    }
}

/// Walks a location from the root. `None` as soon as a component does not
/// apply to the node it addresses.
pub fn resolve<'a>(root: &'a Value, location: &[PathComponent]) -> Option<&'a Value> {
    let mut current = root;
    for component in location {
        current = child(current, component)?;
    }
    Some(current)
}

/// Mutable variant of [`resolve`].
pub fn resolve_mut<'a>(root: &'a mut Value, location: &[PathComponent]) -> Option<&'a mut Value> {
    let mut current = root;
    for component in location {
        current = match (component, current) {
            (PathComponent::Key(key), Value::Object(map)) => map.get_mut(key)?,
            (PathComponent::Index(index), Value::Array(arr)) => arr.get_mut(*index)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Maps a possibly-negative index onto `0..len`.
pub(crate) fn resolve_index(index: i64, len: usize) -> Option<usize> {
    if index < 0 {
        len.checked_sub(index.unsigned_abs() as usize)
    } else {
        let index = index as usize;
        (index < len).then_some(index)
    }
}
