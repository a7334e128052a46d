//! verify.rs
//! Round-trip self check: encode, decode, compare against the original.
//!
//! Comparison order:
//! 1. byte-identical text -> `Exact`
//! 2. first differing line -> `LineMismatch`
//! 3. differing line count -> `LineCountMismatch`
//! 4. same lines, different raw text (terminators) -> `LineEndingsDiffer`

use std::fmt;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::compression::{split_lines, CodecError, FrontCoder};
use crate::telemetry::{Stage, TelemetrySnapshot};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundTripOutcome {
    Exact,
    LineEndingsDiffer,
    LineMismatch { index: usize, original: String, decoded: String },
    LineCountMismatch { original: usize, decoded: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundTripReport {
    pub original_len: usize,
    pub compressed_len: usize,
    pub outcome: RoundTripOutcome,
    /// Encode counters with encode, decode and verify stage times.
    pub telemetry: TelemetrySnapshot,
}

impl RoundTripReport {
    /// True when every line survived; terminator differences are tolerated.
    pub fn is_lossless(&self) -> bool {
        matches!(self.outcome, RoundTripOutcome::Exact | RoundTripOutcome::LineEndingsDiffer)
    }

    pub fn compression_ratio(&self) -> f64 {
        if self.original_len == 0 {
            0.0
        } else {
            self.compressed_len as f64 / self.original_len as f64
        }
    }
}

impl fmt::Display for RoundTripReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            RoundTripOutcome::Exact | RoundTripOutcome::LineEndingsDiffer => {
                write!(
                    f,
                    "round trip ok: original length {}, compressed length {} (ratio {:.3})",
                    self.original_len,
                    self.compressed_len,
                    self.compression_ratio()
                )?;
                if self.outcome == RoundTripOutcome::LineEndingsDiffer {
                    f.write_str(", line endings differ")?;
                }
                Ok(())
            }
            RoundTripOutcome::LineMismatch { index, original, decoded } => {
                write!(f, "round trip broken: line {}: {:?} != {:?}", index, original, decoded)
            }
            RoundTripOutcome::LineCountMismatch { original, decoded } => write!(
                f,
                "round trip broken: original has {} lines, decoded has {}",
                original, decoded
            ),
        }
    }
}

/// Verify with the default coder.
pub fn verify_round_trip(original: &str) -> Result<RoundTripReport, CodecError> {
    verify_round_trip_with(&FrontCoder::default(), original)
}

/// Encode and decode `original` with `coder` and report how the result compares.
/// Decode errors propagate; they mean the encoded form itself is unusable.
pub fn verify_round_trip_with(
    coder: &FrontCoder,
    original: &str,
) -> Result<RoundTripReport, CodecError> {
    let (compressed, encode_snapshot) = coder.encode_with_telemetry(original);
    let (decoded, decode_snapshot) = coder.decode_with_telemetry(&compressed)?;

    let started = Instant::now();
    let outcome = compare(original, &decoded);

    let mut telemetry = encode_snapshot;
    telemetry.stage_times.add(Stage::Decode, decode_snapshot.stage_times.get(Stage::Decode));
    telemetry.stage_times.add(Stage::Verify, started.elapsed());
    telemetry.elapsed += decode_snapshot.elapsed + started.elapsed();

    let report = RoundTripReport {
        original_len: original.len(),
        compressed_len: compressed.len(),
        outcome,
        telemetry,
    };
    debug!(
        lossless = report.is_lossless(),
        original_len = report.original_len,
        compressed_len = report.compressed_len,
        "round trip verified"
    );
    Ok(report)
}

fn compare(original: &str, decoded: &str) -> RoundTripOutcome {
    if original == decoded {
        return RoundTripOutcome::Exact;
    }

    let original_lines: Vec<&str> = split_lines(original).collect();
    let decoded_lines: Vec<&str> = split_lines(decoded).collect();

    if let Some(index) = original_lines
        .iter()
        .zip(&decoded_lines)
        .position(|(a, b)| a != b)
    {
        return RoundTripOutcome::LineMismatch {
            index,
            original: original_lines[index].to_string(),
            decoded: decoded_lines[index].to_string(),
        };
    }

    if original_lines.len() != decoded_lines.len() {
        return RoundTripOutcome::LineCountMismatch {
            original: original_lines.len(),
            decoded: decoded_lines.len(),
        };
    }

    RoundTripOutcome::LineEndingsDiffer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_text_is_exact() {
        let report = verify_round_trip("cat\ncar\ncard\n").unwrap();
        assert_eq!(report.outcome, RoundTripOutcome::Exact);
        assert!(report.is_lossless());
        assert_eq!(report.original_len, 13);
        assert_eq!(report.compressed_len, "0 cat\n2 r\n3 d\n".len());
        assert!(report.telemetry.stage_times.contains(Stage::Verify));
    }

    #[test]
    fn missing_trailing_newline_only_changes_endings() {
        let report = verify_round_trip("apple\napple pie\napplesauce").unwrap();
        assert_eq!(report.outcome, RoundTripOutcome::LineEndingsDiffer);
        assert!(report.is_lossless());
        assert!(report.to_string().contains("line endings differ"));
    }

    #[test]
    fn compare_finds_first_bad_line() {
        let outcome = compare("a\nb\nc\n", "a\nx\ny\n");
        assert_eq!(
            outcome,
            RoundTripOutcome::LineMismatch { index: 1, original: "b".into(), decoded: "x".into() }
        );
    }

    #[test]
    fn compare_detects_missing_lines() {
        let outcome = compare("a\nb\n", "a\n");
        assert_eq!(outcome, RoundTripOutcome::LineCountMismatch { original: 2, decoded: 1 });
        let report_text = RoundTripReport {
            original_len: 4,
            compressed_len: 4,
            outcome,
            telemetry: verify_round_trip("").unwrap().telemetry,
        }
        .to_string();
        assert!(report_text.contains("original has 2 lines"), "{report_text}");
    }

    #[test]
    fn empty_input_has_zero_ratio() {
        let report = verify_round_trip("").unwrap();
        assert_eq!(report.outcome, RoundTripOutcome::Exact);
        assert_eq!(report.compression_ratio(), 0.0);
    }
}
