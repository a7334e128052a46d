//! codecs/front.rs
//! Front coding: each line becomes `<shared prefix len> <suffix>`.

use tracing::{debug, trace};

use crate::compression::config::CodecConfig;
use crate::compression::lines::split_lines;
use crate::compression::prefix::common_prefix_length;
use crate::compression::record::{parse_record, shared_prefix, write_record, Record};
use crate::compression::types::{CodecError, LineCodec};
use crate::telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};

/// Encode with the default configuration. `None` stays `None`.
pub fn encode(corpus: Option<&str>) -> Option<String> {
    corpus.map(|c| FrontCoder::default().encode(c))
}

/// Decode with the default configuration. `None` stays `None`.
pub fn decode(encoded: Option<&str>) -> Result<Option<String>, CodecError> {
    encoded.map(|e| FrontCoder::default().decode(e)).transpose()
}

/// Stateless front coder. Holds only its configuration, so one instance can be
/// shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrontCoder {
    config: CodecConfig,
}

impl FrontCoder {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode a newline-delimited corpus. Empty input yields empty output.
    pub fn encode(&self, corpus: &str) -> String {
        self.encode_counted(corpus, &mut TelemetryCounters::default())
    }

    /// Decode records back into lines. Fails on the first bad record; no
    /// partial output is returned.
    pub fn decode(&self, encoded: &str) -> Result<String, CodecError> {
        self.decode_counted(encoded, &mut TelemetryCounters::default())
    }

    /// Encode into owned records instead of text.
    pub fn encode_records(&self, corpus: &str) -> Vec<Record> {
        let mut previous = "";
        split_lines(corpus)
            .map(|current| {
                let p = common_prefix_length(current, previous);
                previous = current;
                Record::new(p, &current[p..])
            })
            .collect()
    }

    /// Decode owned records into text, with the configured terminators.
    pub fn decode_records(&self, records: &[Record]) -> Result<String, CodecError> {
        let terminator = self.config.line_ending.as_str();
        let mut out = String::new();
        let mut previous = String::new();

        for (index, record) in records.iter().enumerate() {
            extend_previous(&mut previous, record.prefix_len, &record.suffix)
                .map_err(|e| decode_failed(e, index))?;
            out.push_str(&previous);
            out.push_str(terminator);
        }
        Ok(out)
    }

    pub fn encode_with_telemetry(&self, corpus: &str) -> (String, TelemetrySnapshot) {
        let mut counters = TelemetryCounters::default();
        let mut timer = TelemetryTimer::new();
        let out = timer.time(Stage::Encode, || self.encode_counted(corpus, &mut counters));
        timer.finish();
        (out, TelemetrySnapshot::from(&counters, &timer))
    }

    pub fn decode_with_telemetry(
        &self,
        encoded: &str,
    ) -> Result<(String, TelemetrySnapshot), CodecError> {
        let mut counters = TelemetryCounters::default();
        let mut timer = TelemetryTimer::new();
        let out = timer.time(Stage::Decode, || self.decode_counted(encoded, &mut counters))?;
        timer.finish();
        Ok((out, TelemetrySnapshot::from(&counters, &timer)))
    }

    fn encode_counted(&self, corpus: &str, counters: &mut TelemetryCounters) -> String {
        let terminator = self.config.line_ending.as_str();
        // Grows amortized; sorted input usually encodes smaller than it reads.
        let mut out = String::with_capacity(corpus.len());
        let mut previous = "";

        for (index, current) in split_lines(corpus).enumerate() {
            let p = common_prefix_length(current, previous);
            write_record(&mut out, p, &current[p..], terminator);
            counters.add_line(p);
            trace!(index, prefix_len = p, "encoded record");
            previous = current;
        }

        counters.add_text(corpus.len(), out.len());
        debug!(
            lines = counters.lines,
            bytes_in = corpus.len(),
            bytes_out = out.len(),
            "front coding encode complete"
        );
        out
    }

    fn decode_counted(
        &self,
        encoded: &str,
        counters: &mut TelemetryCounters,
    ) -> Result<String, CodecError> {
        let terminator = self.config.line_ending.as_str();
        let mut out = String::with_capacity(encoded.len() * 2);
        // Holds the line rebuilt last; each record truncates and extends it.
        let mut previous = String::new();

        for (index, record) in split_lines(encoded).enumerate() {
            let (p, suffix) = parse_record(record).map_err(|e| decode_failed(e, index))?;
            extend_previous(&mut previous, p, suffix).map_err(|e| decode_failed(e, index))?;
            out.push_str(&previous);
            out.push_str(terminator);
            counters.add_line(p);
            trace!(index, prefix_len = p, "decoded record");
        }

        counters.add_text(out.len(), encoded.len());
        debug!(
            lines = counters.lines,
            bytes_in = encoded.len(),
            bytes_out = out.len(),
            "front coding decode complete"
        );
        Ok(out)
    }
}

impl LineCodec for FrontCoder {
    fn encode(&self, corpus: &str) -> String {
        FrontCoder::encode(self, corpus)
    }

    fn decode(&self, encoded: &str) -> Result<String, CodecError> {
        FrontCoder::decode(self, encoded)
    }
}

/// Turn `previous` into the next line: keep `prefix_len` bytes, append `suffix`.
fn extend_previous(previous: &mut String, prefix_len: usize, suffix: &str) -> Result<(), CodecError> {
    shared_prefix(previous, prefix_len)?;
    previous.truncate(prefix_len);
    previous.push_str(suffix);
    Ok(())
}

fn decode_failed(err: CodecError, index: usize) -> CodecError {
    let err = err.at_line(index);
    debug!(error = %err, "front coding decode failed");
    err
}
