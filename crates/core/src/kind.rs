//! JSON value kinds
//!
//! PostgreSQL has two JSON types. `json` stores the text as given,
//! `jsonb` is sent with a leading format version byte.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Version byte that prefixes every `jsonb` value on the wire.
pub const JSONB_VERSION: u8 = 1;

/// Which JSON type a database value carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonKind {
    /// Textual JSON (`json`)
    Json,
    /// Binary JSON (`jsonb`), version-prefixed on the wire
    Jsonb,
}

impl JsonKind {
    /// Type OID of `json`
    pub const JSON_OID: u32 = 114;
    /// Type OID of `jsonb`
    pub const JSONB_OID: u32 = 3802;

    /// Get the type OID
    pub fn oid(&self) -> u32 {
        match self {
            JsonKind::Json => Self::JSON_OID,
            JsonKind::Jsonb => Self::JSONB_OID,
        }
    }

    /// Look up a kind by type OID
    pub fn from_oid(oid: u32) -> Option<Self> {
        match oid {
            Self::JSON_OID => Some(JsonKind::Json),
            Self::JSONB_OID => Some(JsonKind::Jsonb),
            _ => None,
        }
    }

    /// Get the SQL type name
    pub fn type_name(&self) -> &'static str {
        match self {
            JsonKind::Json => "json",
            JsonKind::Jsonb => "jsonb",
        }
    }

    /// Number of framing bytes in front of the JSON text
    pub fn prefix_len(&self) -> usize {
        match self {
            JsonKind::Json => 0,
            JsonKind::Jsonb => 1,
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}
