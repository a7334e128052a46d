//! telemetry/counters.rs
//! Mutable counters filled while a corpus is encoded or decoded.
//!
//! Converted into an immutable `TelemetrySnapshot` at the end of a run.

use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryCounters {
    /// Lines processed (one record per line).
    pub lines: u64,
    /// Decoded text bytes, terminators included.
    pub bytes_raw: u64,
    /// Encoded text bytes, terminators included.
    pub bytes_encoded: u64,
    /// Bytes elided because they were shared with the previous line.
    pub bytes_shared_prefix: u64,
}

impl TelemetryCounters {
    /// Record one line and the prefix bytes its record did not repeat.
    pub fn add_line(&mut self, shared_len: usize) {
        self.lines += 1;
        self.bytes_shared_prefix += shared_len as u64;
    }

    /// Record the size of a decoded text and its encoded form.
    pub fn add_text(&mut self, raw_len: usize, encoded_len: usize) {
        self.bytes_raw += raw_len as u64;
        self.bytes_encoded += encoded_len as u64;
    }

    pub fn merge(&mut self, other: &TelemetryCounters) {
        self.lines += other.lines;
        self.bytes_raw += other.bytes_raw;
        self.bytes_encoded += other.bytes_encoded;
        self.bytes_shared_prefix += other.bytes_shared_prefix;
    }
}

impl AddAssign for TelemetryCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
