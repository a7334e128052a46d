//! constants.rs
//! Wire constants for the front-coded record format.
//!
//! Record layout: `<prefix_len><RECORD_DELIMITER><suffix><line terminator>`.

/// Separates the prefix length from the suffix. Only the first occurrence in a
/// record is significant; the suffix may contain more.
pub const RECORD_DELIMITER: char = ' ';

/// Line feed terminator (default).
pub const LF: &str = "\n";

/// Carriage return + line feed terminator.
pub const CRLF: &str = "\r\n";

/// Line boundary byte used when splitting.
pub const NEWLINE: u8 = b'\n';

/// Optional carriage return preceding a line boundary.
pub const CARRIAGE_RETURN: u8 = b'\r';
