//! Codec Override Integration Tests
//!
//! Tests for the process-wide codec registry and the json/jsonb marshaller:
//! custom encoders/decoders, restoration, framing, concurrency.

#[path = "../common/mod.rs"]
mod common;

mod framing;
mod round_trip;
