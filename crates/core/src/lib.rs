//! Core types for dbjson
//!
//! This crate defines the pieces shared by every layer of the JSON codec:
//!
//! - [`JsonKind`]: the `json` / `jsonb` tag and its PostgreSQL type OIDs
//! - [`JsonValue`]: a database JSON value holding its wire bytes
//! - [`JsonEncoder`] / [`JsonDecoder`]: the pluggable codec capabilities
//! - [`Error`]: the canonical error type
//!
//! ## Wire Representation
//!
//! | Kind | OID | Wire bytes |
//! |------|-----|------------|
//! | `json` | 114 | UTF-8 JSON text |
//! | `jsonb` | 3802 | `0x01` version byte + UTF-8 JSON text |
//!
//! Length prefixing and type tagging of the whole value belong to the
//! surrounding protocol layer.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod error;
pub mod kind;
pub mod value;

pub use codec::{DecodeSink, JsonDecoder, JsonEncoder};
pub use error::{BoxError, Error, Malformed, Result};
pub use kind::{JsonKind, JSONB_VERSION};
pub use value::JsonValue;

pub use erased_serde;
