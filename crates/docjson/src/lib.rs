//! docjson - a query/mutation engine for semi-structured documents.
//!
//! Ties the tree model, the path language, and the codec together behind
//! one [`Engine`]: typed reads and writes addressed by path expressions,
//! text-in/text-out convenience wrappers, and deep-copy-by-round-trip.
//!
//! ```
//! use docjson::Engine;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), docjson::Error> {
//! let engine = Engine::new();
//! let mut doc = json!({"a": {"b": [1, 2, 3]}});
//!
//! assert_eq!(engine.read_one(&doc, "$.a.b[1]")?, Some(&json!(2)));
//! engine.set_path(&mut doc, "$.a.b[1]", &9)?;
//! engine.append_path(&mut doc, "$.a.b", &4)?;
//! assert_eq!(doc, json!({"a": {"b": [1, 9, 3, 4]}}));
//! # Ok(())
//! # }
//! ```
//!
//! Everything is synchronous, in-memory computation; mutation entry
//! points change the caller-owned document in place and say so in their
//! docs. An [`Engine`] is immutable after construction and freely
//! shareable across threads.

pub mod mutate;

pub use docjson_codec::{Codec, DecodeError, EncodeError, SyntaxError};
pub use docjson_path::{PathExpr, PathSyntaxError, QueryResult, Step};
pub use docjson_tree::{
    child, child_by_index, child_by_key, children, deep_equal, format_location, kind_of, resolve,
    resolve_mut, Location, NodeKind, PathComponent,
};
pub use mutate::MutateError;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Any failure the engine can report. Each variant is one of the distinct
/// component error types; absence of a match is never reported here.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Path(#[from] PathSyntaxError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Mutate(#[from] MutateError),
}

/// The engine facade: a [`Codec`] plus path-addressed entry points.
#[derive(Debug, Clone, Copy, Default)]
pub struct Engine {
    codec: Codec,
}

impl Engine {
    /// Engine with the default codec policies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with explicit codec policies.
    pub fn with_codec(codec: Codec) -> Self {
        Self { codec }
    }

    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    // ── Codec bridge ──────────────────────────────────────────────────

    /// Serializes a typed value into a tree node.
    pub fn encode<T: Serialize>(&self, value: &T) -> Result<Value, Error> {
        Ok(self.codec.encode(value)?)
    }

    /// Materializes a tree node into the target shape.
    pub fn decode<T: DeserializeOwned>(&self, node: Value) -> Result<T, Error> {
        Ok(self.codec.decode(node)?)
    }

    /// Parses document text into a tree node.
    pub fn parse(&self, bytes: &[u8]) -> Result<Value, Error> {
        Ok(self.codec.parse(bytes)?)
    }

    /// Prints a tree node as document text.
    pub fn print(&self, node: &Value, pretty: bool) -> Result<Vec<u8>, Error> {
        Ok(self.codec.print(node, pretty)?)
    }

    /// Typed value to compact document text.
    pub fn to_text<T: Serialize>(&self, value: &T) -> Result<String, Error> {
        Ok(self.codec.to_text(value)?)
    }

    /// Typed value to indented document text.
    pub fn to_text_pretty<T: Serialize>(&self, value: &T) -> Result<String, Error> {
        Ok(self.codec.to_text_pretty(value)?)
    }

    /// Document text straight into the target shape.
    pub fn from_text<T: DeserializeOwned>(&self, text: &str) -> Result<T, Error> {
        let node = self.codec.parse(text.as_bytes())?;
        Ok(self.codec.decode(node)?)
    }

    /// True iff the text parses as a single well-formed document.
    pub fn is_valid(&self, text: &str) -> bool {
        self.codec.is_valid(text)
    }

    /// Typed value to an insertion-ordered key/node map. Fails when the
    /// value does not encode to an object node.
    pub fn to_map<T: Serialize>(&self, value: &T) -> Result<IndexMap<String, Value>, Error> {
        let node = self.codec.encode(value)?;
        Ok(self.codec.decode(node)?)
    }

    /// Insertion-ordered key/node map into the target shape.
    pub fn from_map<T: DeserializeOwned>(&self, map: IndexMap<String, Value>) -> Result<T, Error> {
        let node = self.codec.encode(&map)?;
        Ok(self.codec.decode(node)?)
    }

    /// Round-trips a typed value through the tree representation,
    /// producing an independent copy.
    ///
    /// Structurally equal to the original for any value that survives one
    /// encode/decode cycle; values that cannot round-trip losslessly
    /// (e.g. a float exceeding the target's precision) are a documented
    /// limitation of this representation.
    pub fn deep_copy<T: Serialize + DeserializeOwned>(&self, value: &T) -> Result<T, Error> {
        let node = self.codec.encode(value)?;
        Ok(self.codec.decode(node)?)
    }

    // ── Path reads ────────────────────────────────────────────────────

    /// First node matched by the path, in traversal order.
    pub fn read_one<'a>(&self, doc: &'a Value, path: &str) -> Result<Option<&'a Value>, Error> {
        let path = PathExpr::parse(path)?;
        Ok(path.first(doc))
    }

    /// Every node matched by the path, in traversal order.
    pub fn read_all<'a>(&self, doc: &'a Value, path: &str) -> Result<Vec<&'a Value>, Error> {
        let path = PathExpr::parse(path)?;
        Ok(path.eval(doc).nodes)
    }

    /// First matched node, materialized into the target shape. `None`
    /// when the path matches nothing.
    pub fn read_typed<T: DeserializeOwned>(
        &self,
        doc: &Value,
        path: &str,
    ) -> Result<Option<T>, Error> {
        match self.read_one(doc, path)? {
            Some(node) => Ok(Some(self.codec.decode(node.clone())?)),
            None => Ok(None),
        }
    }

    /// Every matched node, each materialized into the target shape.
    pub fn read_typed_all<T: DeserializeOwned>(
        &self,
        doc: &Value,
        path: &str,
    ) -> Result<Vec<T>, Error> {
        self.read_all(doc, path)?
            .into_iter()
            .map(|node| Ok(self.codec.decode(node.clone())?))
            .collect()
    }

    /// True iff the path matches at least one node.
    pub fn exists(&self, doc: &Value, path: &str) -> Result<bool, Error> {
        let path = PathExpr::parse(path)?;
        Ok(path.exists(doc))
    }

    // ── Path mutations (in place) ─────────────────────────────────────

    /// Encodes `value` and sets it at every location matched by the path,
    /// creating the terminal slot when possible. See [`mutate::set`].
    pub fn set_path<T: Serialize>(
        &self,
        doc: &mut Value,
        path: &str,
        value: &T,
    ) -> Result<usize, Error> {
        let path = PathExpr::parse(path)?;
        let node = self.codec.encode(value)?;
        Ok(mutate::set(doc, &path, node)?)
    }

    /// Deletes every location matched by the path; returns how many were
    /// removed. See [`mutate::delete`].
    pub fn delete_path(&self, doc: &mut Value, path: &str) -> Result<usize, Error> {
        let path = PathExpr::parse(path)?;
        Ok(mutate::delete(doc, &path))
    }

    /// Encodes `value` and appends it to every array matched by the path.
    /// See [`mutate::append`].
    pub fn append_path<T: Serialize>(
        &self,
        doc: &mut Value,
        path: &str,
        value: &T,
    ) -> Result<usize, Error> {
        let path = PathExpr::parse(path)?;
        let node = self.codec.encode(value)?;
        Ok(mutate::append(doc, &path, node)?)
    }

    // ── Text-in/text-out wrappers ─────────────────────────────────────

    /// Parses `text`, sets `value` at the path, and prints the result
    /// compactly.
    pub fn set_in_text<T: Serialize>(
        &self,
        text: &str,
        path: &str,
        value: &T,
    ) -> Result<String, Error> {
        let mut doc = self.codec.parse(text.as_bytes())?;
        self.set_path(&mut doc, path, value)?;
        Ok(self.codec.print_string(&doc, false)?)
    }

    /// Parses `text`, deletes the path, and prints the result compactly.
    pub fn delete_in_text(&self, text: &str, path: &str) -> Result<String, Error> {
        let mut doc = self.codec.parse(text.as_bytes())?;
        self.delete_path(&mut doc, path)?;
        Ok(self.codec.print_string(&doc, false)?)
    }

    /// Parses `text`, appends `value` at the path, and prints the result
    /// compactly.
    pub fn append_in_text<T: Serialize>(
        &self,
        text: &str,
        path: &str,
        value: &T,
    ) -> Result<String, Error> {
        let mut doc = self.codec.parse(text.as_bytes())?;
        self.append_path(&mut doc, path, value)?;
        Ok(self.codec.print_string(&doc, false)?)
    }
}
