//! Codec error types.

use thiserror::Error;

/// Malformed document text, with the byte offset of the failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid document at byte {offset} (line {line}, column {column}): {reason}")]
pub struct SyntaxError {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
    pub reason: String,
}

impl SyntaxError {
    /// Converts a serde_json parse failure, recovering the byte offset
    /// from the reported line/column against the original input.
    pub(crate) fn from_parse(input: &[u8], err: serde_json::Error) -> Self {
        let line = err.line().max(1);
        let column = err.column().max(1);
        Self {
            offset: byte_offset(input, line, column),
            line,
            column,
            reason: err.to_string(),
        }
    }
}

/// A typed value that cannot be represented as a document tree, e.g. a
/// map with non-string keys.
#[derive(Debug, Error)]
#[error("cannot encode value as a document tree: {0}")]
pub struct EncodeError(#[from] serde_json::Error);

/// A tree node that cannot be materialized into the target shape: a
/// required field is missing, or a value cannot be coerced losslessly.
#[derive(Debug, Error)]
#[error("cannot decode node into target shape: {0}")]
pub struct DecodeError(#[from] serde_json::Error);

/// Byte offset of 1-based `line`/`column` within `input`. `column` counts
/// bytes within the line, matching serde_json's accounting.
fn byte_offset(input: &[u8], line: usize, column: usize) -> usize {
    let mut remaining = line - 1;
    let mut line_start = 0;
    if remaining > 0 {
        for (i, b) in input.iter().enumerate() {
            if *b == b'\n' {
                remaining -= 1;
                if remaining == 0 {
                    line_start = i + 1;
                    break;
                }
            }
        }
    }
    (line_start + column.saturating_sub(1)).min(input.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_recovery() {
        let input = b"{\n  \"a\": ,\n}";
        assert_eq!(byte_offset(input, 1, 1), 0);
        assert_eq!(byte_offset(input, 2, 1), 2);
        assert_eq!(byte_offset(input, 2, 8), 9);
        // clamped to input length for end-of-input errors
        assert_eq!(byte_offset(input, 3, 99), input.len());
    }
}
