//! Error types for dbjson.
//!
//! Callers can tell apart "could not serialize my value"
//! ([`Error::EncodingFailed`]), "could not parse stored bytes"
//! ([`Error::DecodingFailed`]) and "stored bytes carry an unknown format
//! marker" ([`Error::MalformedValue`]).

use crate::kind::JsonKind;
use thiserror::Error;

/// Boxed error returned by encoder and decoder implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Reason a stored JSONB value was rejected before decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Malformed {
    /// The value has no bytes where the version byte should be
    #[error("missing jsonb version byte")]
    MissingVersion,

    /// The version byte is not one this client understands
    #[error("unsupported jsonb version {0}")]
    UnsupportedVersion(u8),
}

/// All dbjson errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Serializing the application value failed
    #[error("encoding failed: {0}")]
    EncodingFailed(#[source] BoxError),

    /// Parsing the stored bytes, or converting them to the target type, failed
    #[error("decoding failed: {0}")]
    DecodingFailed(#[source] BoxError),

    /// Stored bytes have a missing or unrecognized format marker
    #[error("malformed value: {0}")]
    MalformedValue(#[from] Malformed),

    /// A value was required but the database value is SQL NULL
    #[error("unexpected null {kind} value")]
    UnexpectedNull {
        /// Kind of the NULL value
        kind: JsonKind,
    },

    /// The type OID is not a JSON type
    #[error("unsupported type oid {oid}")]
    UnsupportedType {
        /// The rejected OID
        oid: u32,
    },
}

/// Result type for dbjson operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap any error as an encoding failure.
    pub fn encoding(cause: impl Into<BoxError>) -> Self {
        Error::EncodingFailed(cause.into())
    }

    /// Wrap any error as a decoding failure.
    pub fn decoding(cause: impl Into<BoxError>) -> Self {
        Error::DecodingFailed(cause.into())
    }

    /// Check if the application value could not be serialized.
    pub fn is_encoding(&self) -> bool {
        matches!(self, Error::EncodingFailed(_))
    }

    /// Check if the stored bytes could not be decoded.
    pub fn is_decoding(&self) -> bool {
        matches!(self, Error::DecodingFailed(_))
    }

    /// Check if the stored bytes had a bad format marker.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::MalformedValue(_))
    }
}
