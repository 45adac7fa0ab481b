//! Database JSON values
//!
//! A [`JsonValue`] is the database-side representation of a `json` or
//! `jsonb` value: a [`JsonKind`] tag plus the exact bytes that travel on
//! the wire. `jsonb` bytes always start with [`JSONB_VERSION`].
//!
//! ```
//! use dbjson_core::{JsonKind, JsonValue};
//!
//! let value = JsonValue::from_json_text(JsonKind::Jsonb, br#"{"a":1}"#.to_vec());
//! assert_eq!(value.wire_bytes().unwrap()[0], 1);
//! assert_eq!(value.json_payload().unwrap(), Some(&br#"{"a":1}"#[..]));
//! ```

use crate::error::{Error, Malformed, Result};
use crate::kind::{JsonKind, JSONB_VERSION};

/// A `json` / `jsonb` database value.
///
/// Holds the wire bytes (version byte included for `jsonb`), or nothing
/// for SQL NULL. Bytes taken from the wire are not checked until the
/// payload is read, see [`JsonValue::json_payload`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonValue {
    kind: JsonKind,
    bytes: Option<Vec<u8>>,
}

impl JsonValue {
    /// Frame encoded JSON text as a value of the given kind.
    ///
    /// For `jsonb` the version byte is prepended.
    pub fn from_json_text(kind: JsonKind, json: Vec<u8>) -> Self {
        let bytes = match kind {
            JsonKind::Json => json,
            JsonKind::Jsonb => {
                let mut framed = Vec::with_capacity(kind.prefix_len() + json.len());
                framed.push(JSONB_VERSION);
                framed.extend_from_slice(&json);
                framed
            }
        };
        JsonValue {
            kind,
            bytes: Some(bytes),
        }
    }

    /// Wrap bytes received from the wire, framing included.
    pub fn from_wire(kind: JsonKind, bytes: Vec<u8>) -> Self {
        JsonValue {
            kind,
            bytes: Some(bytes),
        }
    }

    /// Wrap bytes received from the wire for a column of the given type OID.
    ///
    /// `None` bytes mean SQL NULL.
    pub fn from_oid(oid: u32, bytes: Option<Vec<u8>>) -> Result<Self> {
        let kind = JsonKind::from_oid(oid).ok_or(Error::UnsupportedType { oid })?;
        Ok(JsonValue { kind, bytes })
    }

    /// SQL NULL of the given kind
    pub fn null(kind: JsonKind) -> Self {
        JsonValue { kind, bytes: None }
    }

    /// Get the kind tag
    pub fn kind(&self) -> JsonKind {
        self.kind
    }

    /// Check for SQL NULL
    pub fn is_null(&self) -> bool {
        self.bytes.is_none()
    }

    /// Bytes as sent on the wire, or `None` for NULL
    pub fn wire_bytes(&self) -> Option<&[u8]> {
        self.bytes.as_deref()
    }

    /// Hand the wire bytes over to the protocol layer
    pub fn into_wire_bytes(self) -> Option<Vec<u8>> {
        self.bytes
    }

    /// The JSON text without framing, or `None` for NULL.
    ///
    /// Fails with [`Error::MalformedValue`] when a `jsonb` value is empty
    /// or carries a version byte other than [`JSONB_VERSION`].
    pub fn json_payload(&self) -> Result<Option<&[u8]>> {
        let Some(bytes) = self.bytes.as_deref() else {
            return Ok(None);
        };
        match self.kind {
            JsonKind::Json => Ok(Some(bytes)),
            JsonKind::Jsonb => match bytes.split_first() {
                None => Err(Malformed::MissingVersion.into()),
                Some((&JSONB_VERSION, rest)) => Ok(Some(rest)),
                Some((&version, _)) => Err(Malformed::UnsupportedVersion(version).into()),
            },
        }
    }
}
