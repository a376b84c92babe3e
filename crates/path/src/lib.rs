//! docjson-path - path expressions over document trees.
//!
//! A path expression addresses zero or more nodes inside a tree. The
//! grammar is a practical JSONPath subset:
//!
//! ```text
//! path  := "$" step*
//! step  := "." ident          field access
//!        | "['" key "']"      field access, any key (also double quotes)
//!        | "[" int "]"        array index; negative counts from the end
//!        | "[*]" | ".*"       every direct child
//!        | ".." ident         the named field here and in every descendant
//! ```
//!
//! Parsing is strict: anything outside this subset (slices, filters,
//! `..*`) is a [`PathSyntaxError`] carrying the byte position, never a
//! silent no-match. Evaluation is the opposite: a step that does not apply
//! to the node it meets simply drops that candidate.

mod eval;
mod parser;
mod types;

pub use eval::eval;
pub use types::{PathExpr, PathSyntaxError, QueryResult, Step};
