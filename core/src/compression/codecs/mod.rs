//! compression/codecs/mod.rs
//! Line codec implementations.

pub mod front;

pub use front::*;
