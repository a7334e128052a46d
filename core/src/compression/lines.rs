//! compression/lines.rs
//! Line-splitting contract shared by encode and decode.
//!
//! - Boundaries are `\n`, `\r\n` and a lone `\r`, so no line ever holds a `\r`.
//! - A trailing boundary does not open another line: `"a\n"` is `["a"]`.
//! - Empty lines elsewhere are kept: `"a\n\nb"` is `["a", "", "b"]`.

use std::iter::FusedIterator;

use crate::constants::{CARRIAGE_RETURN, NEWLINE};

/// Iterator over the lines of a text, see module docs for the exact contract.
#[derive(Debug, Clone)]
pub struct SplitLines<'a> {
    rest: &'a str,
}

pub fn split_lines(text: &str) -> SplitLines<'_> {
    SplitLines { rest: text }
}

impl<'a> Iterator for SplitLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        let bytes = self.rest.as_bytes();
        match bytes.iter().position(|b| *b == NEWLINE || *b == CARRIAGE_RETURN) {
            Some(pos) => {
                let crlf = bytes[pos] == CARRIAGE_RETURN && bytes.get(pos + 1) == Some(&NEWLINE);
                let width = if crlf { 2 } else { 1 };
                let line = &self.rest[..pos];
                self.rest = &self.rest[pos + width..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}

impl FusedIterator for SplitLines<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(text: &str) -> Vec<&str> {
        split_lines(text).collect()
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(collect("").is_empty());
    }

    #[test]
    fn trailing_newline_is_not_a_line() {
        assert_eq!(collect("a\nb\n"), vec!["a", "b"]);
        assert_eq!(collect("a\nb"), vec!["a", "b"]);
    }

    #[test]
    fn lone_newline_is_one_empty_line() {
        assert_eq!(collect("\n"), vec![""]);
        assert_eq!(collect("\n\n"), vec!["", ""]);
    }

    #[test]
    fn blank_middle_lines_survive() {
        assert_eq!(collect("a\n\nb"), vec!["a", "", "b"]);
    }

    #[test]
    fn crlf_is_one_boundary() {
        assert_eq!(collect("a\r\nb\r\n"), vec!["a", "b"]);
        assert_eq!(collect("\r\n"), vec![""]);
    }

    #[test]
    fn lone_carriage_return_is_a_boundary() {
        assert_eq!(collect("a\rb\nc"), vec!["a", "b", "c"]);
        assert_eq!(collect("ab\ncd\r"), vec!["ab", "cd"]);
        assert_eq!(collect("\r"), vec![""]);
    }

    #[test]
    fn carriage_return_before_crlf_is_its_own_boundary() {
        assert_eq!(collect("a\r\r\nb"), vec!["a", "", "b"]);
        assert_eq!(collect("a\n\rb"), vec!["a", "", "b"]);
    }
}
