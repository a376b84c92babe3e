//! Path expression AST and query results.

use docjson_tree::Location;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One step of a path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Object field access: `.name`, `['name']`.
    Field(String),
    /// Array element access: `[0]`. Negative indices count from the end.
    Index(i64),
    /// Every direct child of an object (key insertion order) or array
    /// (element order): `[*]`, `.*`.
    Wildcard,
    /// Recursive descent on a field name: `..name` selects the named
    /// member of the current node and of every descendant, in pre-order.
    Descend(String),
}

/// A parsed path expression. The `$` root anchor is implicit; an empty
/// step list addresses the whole document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathExpr {
    pub steps: Vec<Step>,
}

impl PathExpr {
    /// The root path `$`.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parses a path expression, reporting malformed input with its byte
    /// position.
    pub fn parse(input: &str) -> Result<Self, PathSyntaxError> {
        crate::parser::parse(input)
    }

    /// Evaluates this path against a document.
    pub fn eval<'a>(&self, doc: &'a Value) -> QueryResult<'a> {
        crate::eval::eval(self, doc)
    }

    /// First matched node, in traversal order.
    pub fn first<'a>(&self, doc: &'a Value) -> Option<&'a Value> {
        self.eval(doc).nodes.into_iter().next()
    }

    /// True iff the path matches at least one node.
    pub fn exists(&self, doc: &Value) -> bool {
        !self.eval(doc).nodes.is_empty()
    }
}

impl FromStr for PathExpr {
    type Err = PathSyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PathExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for step in &self.steps {
            match step {
                Step::Field(name) if is_plain_ident(name) => write!(f, ".{name}")?,
                Step::Field(name) => {
                    write!(f, "['{}']", name.replace('\\', "\\\\").replace('\'', "\\'"))?
                }
                Step::Index(index) => write!(f, "[{index}]")?,
                Step::Wildcard => f.write_str("[*]")?,
                Step::Descend(name) => write!(f, "..{name}")?,
            }
        }
        Ok(())
    }
}

pub(crate) fn is_plain_ident(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Malformed path expression, with the byte position of the offending
/// input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid path expression at byte {position}: {reason}")]
pub struct PathSyntaxError {
    pub position: usize,
    pub reason: String,
}

/// Result of evaluating a path against a document: matched nodes and
/// their resolved locations, as parallel vectors in traversal order.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult<'a> {
    pub nodes: Vec<&'a Value>,
    pub locations: Vec<Location>,
}

impl<'a> QueryResult<'a> {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First matched node, in traversal order.
    pub fn first(&self) -> Option<&'a Value> {
        self.nodes.first().copied()
    }

    /// Matched `(location, node)` pairs in traversal order.
    pub fn iter(&self) -> impl Iterator<Item = (&Location, &'a Value)> {
        self.locations.iter().zip(self.nodes.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_round_trips() {
        for text in ["$", "$.a.b[1]", "$[*].x", "$..name[-1]", "$['we ird']"] {
            let parsed = PathExpr::parse(text).unwrap();
            assert_eq!(parsed.to_string(), text);
            assert_eq!(PathExpr::parse(&parsed.to_string()).unwrap(), parsed);
        }
        // `.*` parses but prints in canonical bracket form
        assert_eq!(PathExpr::parse("$.*").unwrap().to_string(), "$[*]");
    }
}
