//! compression/mod.rs
//! Front coding of newline-delimited string lists.
//!
//! Notes:
//! - Each line is stored as the length of the prefix it shares with the line
//!   before it, plus the remaining suffix.
//! - Decoding is a dependent chain: one bad record poisons every later line, so
//!   decode fails as a whole on the first bad record.
//! - Prefix lengths count UTF-8 bytes and never split a character.

pub mod codecs;
pub mod config;
pub mod lines;
pub mod prefix;
pub mod record;
pub mod types;

pub use codecs::*;
pub use config::*;
pub use lines::*;
pub use prefix::*;
pub use record::*;
pub use types::*;
