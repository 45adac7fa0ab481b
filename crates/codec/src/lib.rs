//! JSON codec registry and value marshalling
//!
//! This crate wires a swappable JSON encoder/decoder into the path that
//! builds `json` / `jsonb` database values from application types and reads
//! them back.
//!
//! - [`SerdeJsonEncoder`] / [`SerdeJsonDecoder`]: the default codec
//! - [`CodecRegistry`]: current encoder and decoder, atomically swappable
//! - [`global()`]: the process-wide registry used by the plain functions
//! - [`build_json`], [`build_jsonb`], [`extract_json`]: the marshaller
//!
//! ## Examples
//!
//! ```
//! use dbjson_codec::{build_jsonb, extract_json};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let value = build_jsonb(&Point { x: 1, y: 2 }).unwrap();
//! assert_eq!(value.wire_bytes().unwrap(), b"\x01{\"x\":1,\"y\":2}");
//!
//! let point: Point = extract_json(&value).unwrap();
//! assert_eq!(point, Point { x: 1, y: 2 });
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod default;
pub mod marshal;
pub mod registry;
pub mod scoped;

pub use default::{SerdeJsonDecoder, SerdeJsonEncoder};
pub use marshal::{
    build_json, build_json_in, build_jsonb, build_jsonb_in, build_value_in, extract_json,
    extract_json_in, extract_optional_json, extract_optional_json_in,
};
pub use registry::{
    decoder, encoder, global, set_decoder, set_encoder, CodecOptions, CodecRegistry,
    RegistryBuilder,
};
pub use scoped::{with_decoder, with_encoder, DecoderOverride, EncoderOverride};

pub use dbjson_core::{
    erased_serde, BoxError, DecodeSink, Error, JsonDecoder, JsonEncoder, JsonKind, JsonValue,
    Malformed, Result, JSONB_VERSION,
};
