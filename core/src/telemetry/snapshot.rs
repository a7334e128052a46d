//! telemetry/snapshot.rs
//! Immutable summary of one encode or decode run.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::TelemetryCounters;
use crate::telemetry::timers::{StageTimes, TelemetryTimer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub lines: u64,
    pub bytes_raw: u64,
    pub bytes_encoded: u64,
    pub bytes_shared_prefix: u64,
    /// `bytes_encoded / bytes_raw`; above 1.0 when coding expanded the text.
    pub compression_ratio: f64,
    /// `bytes_shared_prefix / bytes_raw`.
    pub prefix_savings: f64,
    pub throughput_raw_bytes_per_sec: f64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

impl TelemetrySnapshot {
    pub fn from(counters: &TelemetryCounters, timer: &TelemetryTimer) -> Self {
        let elapsed = timer.elapsed();

        let (compression_ratio, prefix_savings) = if counters.bytes_raw > 0 {
            let raw = counters.bytes_raw as f64;
            (
                counters.bytes_encoded as f64 / raw,
                counters.bytes_shared_prefix as f64 / raw,
            )
        } else {
            (0.0, 0.0)
        };

        let throughput = if elapsed.as_secs_f64() > 0.0 {
            counters.bytes_raw as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            lines: counters.lines,
            bytes_raw: counters.bytes_raw,
            bytes_encoded: counters.bytes_encoded,
            bytes_shared_prefix: counters.bytes_shared_prefix,
            compression_ratio,
            prefix_savings,
            throughput_raw_bytes_per_sec: throughput,
            elapsed,
            stage_times: timer.stage_times.clone(),
        }
    }

    pub fn total_stage_time(&self) -> Duration {
        self.stage_times.total()
    }

    /// Internal invariants: stage time fits in elapsed, savings within the raw size.
    pub fn sanity_check(&self) -> bool {
        self.total_stage_time() <= self.elapsed && self.bytes_shared_prefix <= self.bytes_raw
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
