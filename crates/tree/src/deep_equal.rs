//! Deep structural equality for tree nodes.

use serde_json::{Number, Value};

/// Recursively compares two nodes with strict kind checking, except that
/// numbers compare by numeric value across integer/float representations
/// (`1` equals `1.0`). Arrays compare element-wise in order; objects
/// compare by key set and per-key value, irrespective of key order.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => number_equal(a, b),
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| deep_equal(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, x)| b.get(key).is_some_and(|y| deep_equal(x, y)))
        }
        _ => false,
    }
}

fn number_equal(a: &Number, b: &Number) -> bool {
    if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
        return a == b;
    }
    if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
        return a == b;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalar_matrix() {
        assert!(deep_equal(&json!(null), &json!(null)));
        assert!(deep_equal(&json!(1), &json!(1.0)));
        assert!(deep_equal(&json!(-3), &json!(-3)));
        assert!(!deep_equal(&json!(1), &json!("1")));
        assert!(!deep_equal(&json!(0), &json!(false)));
        assert!(!deep_equal(&json!(null), &json!(0)));
    }

    #[test]
    fn array_order_is_significant() {
        assert!(deep_equal(&json!([1, 2]), &json!([1, 2])));
        assert!(!deep_equal(&json!([1, 2]), &json!([2, 1])));
        assert!(!deep_equal(&json!([1, 2]), &json!([1, 2, 3])));
    }

    #[test]
    fn object_key_order_is_not_significant() {
        let a = json!({"x": 1, "y": {"z": [true]}});
        let b = json!({"y": {"z": [true]}, "x": 1});
        assert!(deep_equal(&a, &b));
        assert!(!deep_equal(&a, &json!({"x": 1})));
        assert!(!deep_equal(&a, &json!({"x": 1, "y": {"z": [false]}})));
    }
}
