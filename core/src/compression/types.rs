//! compression/types.rs
//! Codec trait and error taxonomy.

use thiserror::Error;

/// Why a record line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatErrorReason {
    #[error("missing space between prefix length and suffix")]
    MissingDelimiter,
    #[error("empty prefix length")]
    EmptyPrefixLength,
    #[error("prefix length {0:?} is not a non-negative integer")]
    InvalidPrefixLength(String),
}

/// Decode failures. `line` is the zero-based record index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("record {line}: malformed record: {reason}")]
    Format { line: usize, reason: FormatErrorReason },

    #[error("record {line}: prefix length {prefix_len} exceeds previous line length {available}")]
    Range { line: usize, prefix_len: usize, available: usize },

    #[error("record {line}: prefix length {prefix_len} splits a character of the previous line")]
    CharBoundary { line: usize, prefix_len: usize },
}

/// Coarse classification of [`CodecError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Record does not have the `<int> <suffix>` shape.
    Format,
    /// Prefix length cannot be taken from the previous line.
    Range,
}

impl CodecError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::Format { .. } => ErrorKind::Format,
            CodecError::Range { .. } | CodecError::CharBoundary { .. } => ErrorKind::Range,
        }
    }

    /// Zero-based index of the offending record.
    pub fn line(&self) -> usize {
        match self {
            CodecError::Format { line, .. }
            | CodecError::Range { line, .. }
            | CodecError::CharBoundary { line, .. } => *line,
        }
    }

    pub(crate) fn at_line(self, line: usize) -> Self {
        match self {
            CodecError::Format { reason, .. } => CodecError::Format { line, reason },
            CodecError::Range { prefix_len, available, .. } => {
                CodecError::Range { line, prefix_len, available }
            }
            CodecError::CharBoundary { prefix_len, .. } => {
                CodecError::CharBoundary { line, prefix_len }
            }
        }
    }
}

// Send + Sync so a single coder can be shared across threads.
pub trait LineCodec: Send + Sync {
    /// Encode a newline-delimited corpus. Never fails.
    fn encode(&self, corpus: &str) -> String;
    /// Decode a newline-delimited list of records.
    fn decode(&self, encoded: &str) -> Result<String, CodecError>;
}
