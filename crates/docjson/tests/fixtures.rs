//! Shared documents for the matrix tests.

use serde_json::{json, Value};

/// The nested document used by the mutation scenarios.
pub fn nested() -> Value {
    json!({"a": {"b": [1, 2, 3]}})
}

/// A store document with parallel structures for wildcard and descent
/// queries.
pub fn store() -> Value {
    json!({
        "store": {
            "book": [
                {"title": "Sayings of the Century", "price": 8.95},
                {"title": "Moby Dick", "price": 8.99, "isbn": "0-553-21311-3"},
                {"title": "The Lord of the Rings", "price": 22.99}
            ],
            "bicycle": {"color": "red", "price": 399}
        },
        "open": true
    })
}
