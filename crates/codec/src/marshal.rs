//! JSON value marshalling
//!
//! Builds `json` / `jsonb` database values from application types and reads
//! them back, using whatever codec a [`CodecRegistry`] currently holds.
//!
//! Every call loads the current codec exactly once and uses that snapshot
//! for the whole call, so a concurrent replacement never affects a call that
//! is already running.
//!
//! | Function | Registry |
//! |----------|----------|
//! | `build_json(v)` | process-wide, see [`global`] |
//! | `build_json_in(&registry, v)` | explicit |
//!
//! ## Errors
//!
//! - [`Error::EncodingFailed`]: the value could not be serialized, or the
//!   encoder failed
//! - [`Error::DecodingFailed`]: the decoder failed, or the stored JSON does
//!   not fit the requested type
//! - [`Error::MalformedValue`]: a `jsonb` value has no version byte or an
//!   unknown one
//! - [`Error::UnexpectedNull`]: [`extract_json`] on SQL NULL

use crate::registry::{global, CodecRegistry};
use dbjson_core::{Error, JsonKind, JsonValue, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Build a `json` value with the process-wide encoder
pub fn build_json<T: Serialize + ?Sized>(value: &T) -> Result<JsonValue> {
    build_value_in(global(), JsonKind::Json, value)
}

/// Build a `json` value with the encoder of `registry`
pub fn build_json_in<T: Serialize + ?Sized>(
    registry: &CodecRegistry,
    value: &T,
) -> Result<JsonValue> {
    build_value_in(registry, JsonKind::Json, value)
}

/// Build a version-prefixed `jsonb` value with the process-wide encoder
pub fn build_jsonb<T: Serialize + ?Sized>(value: &T) -> Result<JsonValue> {
    build_value_in(global(), JsonKind::Jsonb, value)
}

/// Build a version-prefixed `jsonb` value with the encoder of `registry`
pub fn build_jsonb_in<T: Serialize + ?Sized>(
    registry: &CodecRegistry,
    value: &T,
) -> Result<JsonValue> {
    build_value_in(registry, JsonKind::Jsonb, value)
}

/// Build a value of the given kind with the encoder of `registry`.
///
/// The encoder is invoked exactly once.
pub fn build_value_in<T: Serialize + ?Sized>(
    registry: &CodecRegistry,
    kind: JsonKind,
    value: &T,
) -> Result<JsonValue> {
    let encoder = registry.encoder();
    let json = encoder.encode(&value).map_err(Error::EncodingFailed)?;
    tracing::trace!(%kind, len = json.len(), "built json value");
    Ok(JsonValue::from_json_text(kind, json))
}

/// Read a value back with the process-wide decoder
pub fn extract_json<T: DeserializeOwned>(value: &JsonValue) -> Result<T> {
    extract_json_in(global(), value)
}

/// Read a value back with the decoder of `registry`.
///
/// Fails with [`Error::UnexpectedNull`] on SQL NULL.
pub fn extract_json_in<T: DeserializeOwned>(
    registry: &CodecRegistry,
    value: &JsonValue,
) -> Result<T> {
    extract_optional_json_in(registry, value)?.ok_or(Error::UnexpectedNull {
        kind: value.kind(),
    })
}

/// Read a nullable value back with the process-wide decoder
pub fn extract_optional_json<T: DeserializeOwned>(value: &JsonValue) -> Result<Option<T>> {
    extract_optional_json_in(global(), value)
}

/// Read a nullable value back with the decoder of `registry`.
///
/// SQL NULL gives `Ok(None)` without invoking the decoder.
pub fn extract_optional_json_in<T: DeserializeOwned>(
    registry: &CodecRegistry,
    value: &JsonValue,
) -> Result<Option<T>> {
    let decoder = registry.decoder();
    let payload = match value.json_payload() {
        Ok(Some(payload)) => payload,
        Ok(None) => return Ok(None),
        Err(err) => {
            tracing::warn!(kind = %value.kind(), error = %err, "rejected stored json value");
            return Err(err);
        }
    };
    let mut typed = None;
    decoder
        .decode(payload, &mut |de| {
            typed = Some(erased_serde::deserialize::<T>(de)?);
            Ok(())
        })
        .map_err(Error::DecodingFailed)?;
    let typed = typed.ok_or_else(|| Error::decoding("decoder did not produce a value"))?;
    tracing::trace!(kind = %value.kind(), len = payload.len(), "extracted json value");
    Ok(Some(typed))
}
