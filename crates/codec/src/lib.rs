//! docjson-codec - conversion between typed values, document trees, and
//! text.
//!
//! The shape descriptor of a typed value is its `Serialize`/`Deserialize`
//! implementation: resolved once at compile time and reused for every
//! conversion, so no runtime type inspection happens during traversal.
//!
//! A [`Codec`] is immutable after construction and can be shared freely
//! across threads.

mod error;

pub use error::{DecodeError, EncodeError, SyntaxError};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Conversion policies plus the entry points that apply them.
///
/// Defaults match the original service configuration: null-valued object
/// members are omitted on encode, and whole-valued floats satisfy
/// integer-typed fields on decode.
#[derive(Debug, Clone, Copy)]
pub struct Codec {
    omit_nulls: bool,
    coerce_whole_floats: bool,
}

impl Default for Codec {
    fn default() -> Self {
        Self {
            omit_nulls: true,
            coerce_whole_floats: true,
        }
    }
}

impl Codec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps null-valued object members on encode instead of omitting
    /// them.
    pub fn keep_null_members(mut self) -> Self {
        self.omit_nulls = false;
        self
    }

    /// Disables the whole-float-to-integer decode coercion; `2.0` then no
    /// longer satisfies an integer-typed field.
    pub fn strict_numbers(mut self) -> Self {
        self.coerce_whole_floats = false;
        self
    }

    /// Serializes a typed value into a tree node.
    ///
    /// Under the null-omission policy, null-valued object members are
    /// stripped recursively. Array elements are never stripped; element
    /// positions are significant.
    pub fn encode<T: Serialize>(&self, value: &T) -> Result<Value, EncodeError> {
        let mut node = serde_json::to_value(value)?;
        if self.omit_nulls {
            strip_null_members(&mut node);
        }
        Ok(node)
    }

    /// Materializes a tree node into the target shape.
    ///
    /// Unknown keys in the node are ignored; a missing required field or
    /// a value the shape cannot absorb losslessly is a [`DecodeError`].
    /// Integer widening (and narrowing, when in range) is handled by the
    /// deserializer; whole-valued floats additionally coerce to integers
    /// unless [`Codec::strict_numbers`] was requested.
    pub fn decode<T: DeserializeOwned>(&self, mut node: Value) -> Result<T, DecodeError> {
        if self.coerce_whole_floats {
            normalize_whole_floats(&mut node);
        }
        Ok(serde_json::from_value(node)?)
    }

    /// Parses UTF-8 document text into a tree node. Trailing garbage
    /// after the root value is rejected.
    pub fn parse(&self, bytes: &[u8]) -> Result<Value, SyntaxError> {
        serde_json::from_slice(bytes).map_err(|err| SyntaxError::from_parse(bytes, err))
    }

    /// Prints a tree node as document text. Deterministic: the same node
    /// and `pretty` flag always produce byte-identical output, and object
    /// member order is preserved as encoded, never alphabetized.
    pub fn print(&self, node: &Value, pretty: bool) -> Result<Vec<u8>, EncodeError> {
        let out = if pretty {
            serde_json::to_vec_pretty(node)?
        } else {
            serde_json::to_vec(node)?
        };
        Ok(out)
    }

    /// [`Codec::print`] into an owned string.
    pub fn print_string(&self, node: &Value, pretty: bool) -> Result<String, EncodeError> {
        let out = if pretty {
            serde_json::to_string_pretty(node)?
        } else {
            serde_json::to_string(node)?
        };
        Ok(out)
    }

    /// Typed value straight to compact document text.
    pub fn to_text<T: Serialize>(&self, value: &T) -> Result<String, EncodeError> {
        let node = self.encode(value)?;
        self.print_string(&node, false)
    }

    /// Typed value straight to indented document text.
    pub fn to_text_pretty<T: Serialize>(&self, value: &T) -> Result<String, EncodeError> {
        let node = self.encode(value)?;
        self.print_string(&node, true)
    }

    /// True iff the text parses as a single well-formed document.
    pub fn is_valid(&self, text: &str) -> bool {
        self.parse(text.as_bytes()).is_ok()
    }
}

/// Recursively removes null-valued members from object nodes.
fn strip_null_members(node: &mut Value) {
    match node {
        Value::Object(map) => {
            map.retain(|_, member| !member.is_null());
            for member in map.values_mut() {
                strip_null_members(member);
            }
        }
        Value::Array(arr) => {
            for element in arr {
                strip_null_members(element);
            }
        }
        _ => {}
    }
}

/// Rewrites float numbers with a zero fractional part into integer
/// numbers, so they satisfy integer-typed fields. Integer-typed fields
/// still reject fractional and out-of-range values, and float-typed
/// fields absorb integers either way, so the rewrite loses nothing.
fn normalize_whole_floats(node: &mut Value) {
    // 2^63; values at or beyond cannot be cast to i64 exactly
    const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;
    match node {
        Value::Number(n) => {
            if let Some(f) = n.as_f64() {
                if n.is_f64() && f.fract() == 0.0 && f >= -I64_BOUND && f < I64_BOUND {
                    *n = serde_json::Number::from(f as i64);
                }
            }
        }
        Value::Array(arr) => {
            for element in arr {
                normalize_whole_floats(element);
            }
        }
        Value::Object(map) => {
            for member in map.values_mut() {
                normalize_whole_floats(member);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Book {
        title: String,
        price: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        isbn: Option<String>,
    }

    #[test]
    fn encode_omits_null_members() {
        let codec = Codec::new();
        let node = codec
            .encode(&json!({"a": null, "b": {"c": null, "d": 1}, "e": [null, 2]}))
            .unwrap();
        assert_eq!(node, json!({"b": {"d": 1}, "e": [null, 2]}));

        let node = Codec::new()
            .keep_null_members()
            .encode(&json!({"a": null}))
            .unwrap();
        assert_eq!(node, json!({"a": null}));
    }

    #[test]
    fn decode_matrix() {
        let codec = Codec::new();

        let book: Book = codec
            .decode(json!({"title": "Dune", "price": 9, "year": 1965}))
            .unwrap();
        assert_eq!(book.title, "Dune");
        assert_eq!(book.price, 9.0); // integer widens to float
        assert_eq!(book.isbn, None); // unknown `year` ignored

        // missing required field
        assert!(codec.decode::<Book>(json!({"price": 1.0})).is_err());
        // kind mismatch
        assert!(codec.decode::<Book>(json!({"title": 1, "price": 1.0})).is_err());
        // out-of-range narrowing
        assert!(codec.decode::<u8>(json!(300)).is_err());
        assert!(codec.decode::<u32>(json!(-1)).is_err());
    }

    #[test]
    fn whole_float_coercion() {
        let codec = Codec::new();
        assert_eq!(codec.decode::<i32>(json!(2.0)).unwrap(), 2);
        assert_eq!(codec.decode::<f64>(json!(2.0)).unwrap(), 2.0);
        assert!(codec.decode::<i32>(json!(2.5)).is_err());
        assert!(codec.decode::<i32>(json!(1e300)).is_err());

        assert!(Codec::new().strict_numbers().decode::<i32>(json!(2.0)).is_err());
    }

    #[test]
    fn parse_rejects_trailing_garbage_with_offset() {
        let codec = Codec::new();
        assert_eq!(codec.parse(b"{\"a\": 1}").unwrap(), json!({"a": 1}));

        let err = codec.parse(b"{\"a\": 1} x").unwrap_err();
        assert_eq!(err.line, 1);
        assert!(err.offset >= 8);

        let err = codec.parse(b"{\n  \"a\": ,\n}").unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(err.offset, 9);

        assert!(!codec.is_valid(""));
        assert!(!codec.is_valid("{"));
        assert!(codec.is_valid("null"));
    }

    #[test]
    fn print_is_deterministic_and_order_preserving() {
        let codec = Codec::new();
        let node = codec.parse(b"{\"z\": 1, \"a\": [true, null]}").unwrap();
        let compact = codec.print(&node, false).unwrap();
        assert_eq!(compact, b"{\"z\":1,\"a\":[true,null]}".to_vec());
        assert_eq!(compact, codec.print(&node, false).unwrap());

        let pretty = codec.print_string(&node, true).unwrap();
        assert!(pretty.contains("\"z\": 1"));
        assert!(pretty.find("\"z\"").unwrap() < pretty.find("\"a\"").unwrap());
    }

    #[test]
    fn typed_round_trip() {
        let codec = Codec::new();
        let book = Book {
            title: "Dune".into(),
            price: 9.99,
            isbn: None,
        };
        let text = codec.to_text(&book).unwrap();
        assert_eq!(text, "{\"title\":\"Dune\",\"price\":9.99}");
        let node = codec.parse(text.as_bytes()).unwrap();
        assert_eq!(codec.decode::<Book>(node).unwrap(), book);
    }
}
