//! Convenient imports for dbjson.
//!
//! ```
//! use dbjson::prelude::*;
//!
//! let value = build_json(&json!({"a": 1}))?;
//! let doc: serde_json::Value = extract_json(&value)?;
//! assert_eq!(doc, json!({"a": 1}));
//! # Ok::<(), dbjson::Error>(())
//! ```

// Error handling
pub use crate::{Error, Result};

// Values
pub use crate::{JsonKind, JsonValue};

// Codecs and registry
pub use crate::{CodecRegistry, JsonDecoder, JsonEncoder, SerdeJsonDecoder, SerdeJsonEncoder};

// Marshalling
pub use crate::{build_json, build_jsonb, extract_json, extract_optional_json};

// Re-export serde_json for convenience
pub use serde_json::json;
