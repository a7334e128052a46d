//! frontcode-core
//!
//! Pure Rust front coding (incremental prefix encoding) for ordered lists of
//! strings. No I/O, no FFI.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;

// Codec
pub mod compression;
pub mod telemetry;
pub mod verify;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::compression::{
        common_prefix_length, decode, encode, CodecConfig, CodecError, FrontCoder, LineCodec,
        LineEnding, Record,
    };
    pub use crate::telemetry::{Stage, TelemetryCounters, TelemetrySnapshot};
    pub use crate::verify::{verify_round_trip, RoundTripOutcome, RoundTripReport};
}
