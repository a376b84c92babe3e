//! Mutation engine: set, delete, and append at matched locations.
//!
//! All operations mutate the caller-owned document in place and report
//! how many locations they touched. Absence of a match is never an error;
//! the error cases are a `set` that cannot create its terminal slot and
//! an `append` aimed at a non-array node.

use docjson_path::{PathExpr, Step};
use docjson_tree::{format_location, resolve, resolve_mut, PathComponent};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MutateError {
    /// `set` through a missing intermediate segment, or a terminal slot
    /// that cannot be created (only a new object key, or an array index
    /// equal to the current length, can be).
    #[error("cannot create `{path}`: no existing location accepts the terminal segment")]
    PathNotCreatable { path: String },
    /// `append` matched a node that is not an array.
    #[error("append target `{location}` is not an array")]
    NotAnArray { location: String },
}

/// Replaces every node matched by `path` with `value`.
///
/// When nothing matches, the terminal step is applied to the matches of
/// the parent path instead: a `Field` inserts a new key into an object
/// parent, and an `Index` equal to the array's current length appends a
/// slot. Negative indices and wildcards never create. If no slot can be
/// created either, the set fails with [`MutateError::PathNotCreatable`]
/// and the document is left untouched.
///
/// Returns the number of locations written. The root path replaces the
/// whole document.
pub fn set(doc: &mut Value, path: &PathExpr, value: Value) -> Result<usize, MutateError> {
    let Some((terminal, parent_steps)) = path.steps.split_last() else {
        *doc = value;
        return Ok(1);
    };

    let matched = path.eval(doc).locations;
    if let Some((first, rest)) = matched.split_first() {
        // Reverse traversal order: descendant matches are written before
        // any ancestor that contains them is replaced.
        for location in rest.iter().rev() {
            if let Some(slot) = resolve_mut(doc, location) {
                *slot = value.clone();
            }
        }
        if let Some(slot) = resolve_mut(doc, first) {
            *slot = value;
        }
        return Ok(matched.len());
    }

    let parent_path = PathExpr {
        steps: parent_steps.to_vec(),
    };
    let parents = parent_path.eval(doc).locations;

    let mut created = 0;
    for parent_location in &parents {
        let Some(parent) = resolve_mut(doc, parent_location) else {
            continue;
        };
        match (terminal, parent) {
            (Step::Field(name), Value::Object(map)) => {
                map.insert(name.clone(), value.clone());
                created += 1;
            }
            (Step::Index(index), Value::Array(arr)) if *index >= 0 && *index as usize == arr.len() => {
                arr.push(value.clone());
                created += 1;
            }
            _ => {}
        }
    }

    if created == 0 {
        return Err(MutateError::PathNotCreatable {
            path: path.to_string(),
        });
    }
    Ok(created)
}

/// Removes every node matched by `path` and returns how many were
/// removed. Array removal shifts later elements down; object removal
/// keeps the remaining member order. Zero matches is a no-op, as is a
/// match on the root location (a root has no parent to remove it from).
pub fn delete(doc: &mut Value, path: &PathExpr) -> usize {
    let locations = path.eval(doc).locations;

    let mut removed = 0;
    // Reverse traversal order: sibling array indices stay valid, and
    // descendants go before the ancestors that contain them.
    for location in locations.iter().rev() {
        let Some((component, parent_location)) = location.split_last() else {
            continue;
        };
        let Some(parent) = resolve_mut(doc, parent_location) else {
            continue;
        };
        match (component, parent) {
            (PathComponent::Key(key), Value::Object(map)) => {
                if map.shift_remove(key).is_some() {
                    removed += 1;
                }
            }
            (PathComponent::Index(index), Value::Array(arr)) => {
                if *index < arr.len() {
                    arr.remove(*index);
                    removed += 1;
                }
            }
            _ => {}
        }
    }
    removed
}

/// Pushes `value` onto the end of every array matched by `path`.
///
/// Every match must be an array; otherwise the append fails with
/// [`MutateError::NotAnArray`] naming the offending location, and the
/// document is left untouched. Zero matches is a no-op.
pub fn append(doc: &mut Value, path: &PathExpr, value: Value) -> Result<usize, MutateError> {
    let locations = path.eval(doc).locations;

    for location in &locations {
        if !matches!(resolve(doc, location), Some(Value::Array(_))) {
            return Err(MutateError::NotAnArray {
                location: format_location(location),
            });
        }
    }

    for location in &locations {
        if let Some(Value::Array(arr)) = resolve_mut(doc, location) {
            arr.push(value.clone());
        }
    }
    Ok(locations.len())
}
