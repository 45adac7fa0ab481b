//! Default codec backed by `serde_json`
//!
//! These adapters are installed in every new [`CodecRegistry`] and add no
//! behavior of their own beyond delegating to `serde_json`.
//!
//! [`CodecRegistry`]: crate::CodecRegistry

use dbjson_core::{BoxError, DecodeSink, JsonDecoder, JsonEncoder};
use erased_serde::{Deserializer, Serialize};

/// Encoder delegating to `serde_json::to_vec`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SerdeJsonEncoder {
    pretty: bool,
}

impl SerdeJsonEncoder {
    /// Compact output
    pub fn new() -> Self {
        Self::default()
    }

    /// Indented output via `serde_json::to_vec_pretty`
    pub fn pretty() -> Self {
        SerdeJsonEncoder { pretty: true }
    }

    /// Check if output is indented
    pub fn is_pretty(&self) -> bool {
        self.pretty
    }
}

impl JsonEncoder for SerdeJsonEncoder {
    fn encode(&self, value: &dyn Serialize) -> Result<Vec<u8>, BoxError> {
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(value)?
        } else {
            serde_json::to_vec(value)?
        };
        Ok(bytes)
    }
}

/// Decoder delegating to `serde_json::Deserializer::from_slice`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SerdeJsonDecoder;

impl SerdeJsonDecoder {
    /// Create the decoder
    pub fn new() -> Self {
        SerdeJsonDecoder
    }
}

impl JsonDecoder for SerdeJsonDecoder {
    fn decode(&self, bytes: &[u8], sink: &mut DecodeSink<'_>) -> Result<(), BoxError> {
        let mut json = serde_json::Deserializer::from_slice(bytes);
        sink(&mut <dyn Deserializer>::erase(&mut json))?;
        // Same trailing-input rule as `serde_json::from_slice`
        json.end()?;
        Ok(())
    }
}
