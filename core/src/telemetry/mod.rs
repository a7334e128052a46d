//! telemetry/mod.rs
//! Counters, stage timers and immutable snapshots for encode/decode runs.
//!
//! Notes:
//! - Compression ratio is `bytes_encoded / bytes_raw`. Front coding can expand
//!   unsorted input, so the ratio is not capped at 1.0.
//! - Snapshots are immutable and serializable (serde) for logs and reports.

pub mod counters;
pub mod snapshot;
pub mod timers;

pub use counters::*;
pub use snapshot::*;
pub use timers::*;
