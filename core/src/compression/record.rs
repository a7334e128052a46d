//! compression/record.rs
//! One encoded line: `<prefix_len> <suffix>`.
//!
//! Design notes:
//! - Only the first delimiter is significant; the suffix keeps any further spaces.
//! - The prefix length is plain decimal ASCII. Signs, whitespace and empty tokens
//!   are rejected.
//! - Errors produced here carry record index 0; decode rewrites it with
//!   `CodecError::at_line`.

use std::fmt;
use std::str::FromStr;

use crate::compression::types::{CodecError, FormatErrorReason};
use crate::constants::RECORD_DELIMITER;

/// Owned record, mostly useful for inspection and tests. The codec itself
/// works on borrowed slices.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    pub prefix_len: usize,
    pub suffix: String,
}

impl Record {
    pub fn new(prefix_len: usize, suffix: impl Into<String>) -> Self {
        Self { prefix_len, suffix: suffix.into() }
    }

    /// Rebuild the line this record stands for, given the line before it.
    pub fn apply(&self, previous: &str) -> Result<String, CodecError> {
        let prefix = shared_prefix(previous, self.prefix_len)?;
        let mut line = String::with_capacity(prefix.len() + self.suffix.len());
        line.push_str(prefix);
        line.push_str(&self.suffix);
        Ok(line)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix_len, RECORD_DELIMITER, self.suffix)
    }
}

impl FromStr for Record {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix_len, suffix) = parse_record(s)?;
        Ok(Record::new(prefix_len, suffix))
    }
}

/// Append `<prefix_len> <suffix><terminator>` to `out`.
#[inline]
pub fn write_record(out: &mut String, prefix_len: usize, suffix: &str, terminator: &str) {
    out.push_str(&prefix_len.to_string());
    out.push(RECORD_DELIMITER);
    out.push_str(suffix);
    out.push_str(terminator);
}

/// Split a record line into its prefix length and borrowed suffix.
pub fn parse_record(line: &str) -> Result<(usize, &str), CodecError> {
    let (token, suffix) = line
        .split_once(RECORD_DELIMITER)
        .ok_or_else(|| format_error(FormatErrorReason::MissingDelimiter))?;

    if token.is_empty() {
        return Err(format_error(FormatErrorReason::EmptyPrefixLength));
    }
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format_error(FormatErrorReason::InvalidPrefixLength(token.to_string())));
    }
    // Digits only; the remaining failure is overflow.
    let prefix_len = token
        .parse::<usize>()
        .map_err(|_| format_error(FormatErrorReason::InvalidPrefixLength(token.to_string())))?;

    Ok((prefix_len, suffix))
}

/// The first `prefix_len` bytes of `previous`, checked for range and
/// character boundary.
#[inline]
pub fn shared_prefix(previous: &str, prefix_len: usize) -> Result<&str, CodecError> {
    if prefix_len > previous.len() {
        return Err(CodecError::Range { line: 0, prefix_len, available: previous.len() });
    }
    if !previous.is_char_boundary(prefix_len) {
        return Err(CodecError::CharBoundary { line: 0, prefix_len });
    }
    Ok(&previous[..prefix_len])
}

fn format_error(reason: FormatErrorReason) -> CodecError {
    CodecError::Format { line: 0, reason }
}
