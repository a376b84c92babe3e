//! Resolved locations within a document tree.

use std::fmt;

/// One resolved step of a concrete location: an object key or an array
/// index. Unlike a path-expression step, a component is always exact -
/// wildcards and negative indices have already been resolved against a
/// document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathComponent {
    Key(String),
    Index(usize),
}

impl From<&str> for PathComponent {
    fn from(value: &str) -> Self {
        Self::Key(value.to_string())
    }
}

impl From<String> for PathComponent {
    fn from(value: String) -> Self {
        Self::Key(value)
    }
}

impl From<usize> for PathComponent {
    fn from(value: usize) -> Self {
        Self::Index(value)
    }
}

impl fmt::Display for PathComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(k) => f.write_str(k),
            Self::Index(i) => write!(f, "{i}"),
        }
    }
}

/// Address of one node relative to the document root. Empty means the root
/// itself.
pub type Location = Vec<PathComponent>;

/// Formats a location in normalized bracket form: `$['a']['b'][0]`.
///
/// Keys are JSON-escaped so the output is unambiguous for any key content.
pub fn format_location(location: &[PathComponent]) -> String {
    let mut out = String::from("$");
    for component in location {
        match component {
            PathComponent::Key(key) => {
                let encoded = serde_json::to_string(key).unwrap_or_else(|_| format!("\"{key}\""));
                let inner = encoded
                    .strip_prefix('"')
                    .and_then(|s| s.strip_suffix('"'))
                    .unwrap_or(&encoded);
                out.push_str("['");
                out.push_str(inner);
                out.push_str("']");
            }
            PathComponent::Index(index) => {
                out.push('[');
                out.push_str(&index.to_string());
                out.push(']');
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_location_matrix() {
        assert_eq!(format_location(&[]), "$");
        assert_eq!(
            format_location(&["store".into(), "book".into(), 0.into(), "title".into()]),
            "$['store']['book'][0]['title']"
        );
        assert_eq!(
            format_location(&["we ird\"key".into()]),
            "$['we ird\\\"key']"
        );
    }
}
