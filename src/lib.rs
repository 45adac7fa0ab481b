//! # dbjson
//!
//! Pluggable JSON codec layer for a database client's value marshalling.
//!
//! `json` and `jsonb` database values are built from application types with
//! the *current encoder* and read back with the *current decoder*. Both can
//! be replaced at runtime, process-wide or per [`CodecRegistry`], without
//! restarting anything.
//!
//! ## Quick Start
//!
//! ```
//! use dbjson::prelude::*;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Profile {
//!     name: String,
//! }
//!
//! let value = build_jsonb(&Profile { name: "Alice".into() })?;
//! assert_eq!(value.kind().oid(), 3802);
//!
//! let profile: Profile = extract_json(&value)?;
//! assert_eq!(profile.name, "Alice");
//! # Ok::<(), dbjson::Error>(())
//! ```
//!
//! ## Replacing the Codec
//!
//! Any type implementing [`JsonEncoder`] / [`JsonDecoder`] can be installed:
//!
//! - [`set_encoder`] / [`set_decoder`]: replace, returning the previous codec
//! - [`CodecRegistry::override_encoder`]: replace until a guard drops
//! - [`with_encoder`] / [`with_decoder`]: replace for the duration of a closure
//!
//! Overrides of the process-wide registry are visible to every thread.
//! Concurrent overriders interfere with each other; serialize them.

#![warn(missing_docs)]

pub mod prelude;

// Re-export core types
pub use dbjson_core::{
    erased_serde, BoxError, DecodeSink, Error, JsonDecoder, JsonEncoder, JsonKind, JsonValue,
    Malformed, Result, JSONB_VERSION,
};

// Re-export the registry and marshaller
pub use dbjson_codec::{
    build_json, build_json_in, build_jsonb, build_jsonb_in, build_value_in, decoder, encoder,
    extract_json, extract_json_in, extract_optional_json, extract_optional_json_in, global,
    set_decoder, set_encoder, with_decoder, with_encoder, CodecOptions, CodecRegistry,
    DecoderOverride, EncoderOverride, RegistryBuilder, SerdeJsonDecoder, SerdeJsonEncoder,
};
