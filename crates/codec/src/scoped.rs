//! Scoped codec overrides
//!
//! An override installs a codec and puts the previously installed one back
//! when the guard is dropped, including during unwinding.
//!
//! Saving, overriding and restoring are three separate atomic steps, not
//! one. Two overrides of the same registry that overlap in time interfere:
//! whichever guard drops last decides what ends up installed. Code that
//! overrides the process-wide registry (tests in particular) must serialize
//! those overrides itself.
//!
//! ```
//! use dbjson_codec::{with_encoder, CodecRegistry, SerdeJsonEncoder};
//! use std::sync::Arc;
//!
//! let registry = CodecRegistry::new();
//! let pretty = with_encoder(&registry, Arc::new(SerdeJsonEncoder::pretty()), || {
//!     dbjson_codec::build_json_in(&registry, &[1]).unwrap()
//! });
//! assert_eq!(pretty.wire_bytes().unwrap(), b"[\n  1\n]");
//!
//! let compact = dbjson_codec::build_json_in(&registry, &[1]).unwrap();
//! assert_eq!(compact.wire_bytes().unwrap(), b"[1]");
//! ```

use crate::registry::{CodecRegistry, Installed};
use dbjson_core::{JsonDecoder, JsonEncoder};
use std::sync::Arc;

const OVERRIDE_ENCODER: &str = "override JsonEncoder";
const OVERRIDE_DECODER: &str = "override JsonDecoder";

/// Guard restoring the previous encoder on drop.
#[must_use = "the override ends as soon as the guard is dropped"]
pub struct EncoderOverride<'a> {
    registry: &'a CodecRegistry,
    previous: Option<Arc<Installed<dyn JsonEncoder>>>,
}

impl EncoderOverride<'_> {
    /// The encoder that will be restored
    pub fn previous(&self) -> Option<Arc<dyn JsonEncoder>> {
        self.previous.as_ref().map(|installed| Arc::clone(&installed.codec))
    }
}

impl Drop for EncoderOverride<'_> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            self.registry.encoder.restore(previous);
        }
    }
}

/// Guard restoring the previous decoder on drop.
#[must_use = "the override ends as soon as the guard is dropped"]
pub struct DecoderOverride<'a> {
    registry: &'a CodecRegistry,
    previous: Option<Arc<Installed<dyn JsonDecoder>>>,
}

impl DecoderOverride<'_> {
    /// The decoder that will be restored
    pub fn previous(&self) -> Option<Arc<dyn JsonDecoder>> {
        self.previous.as_ref().map(|installed| Arc::clone(&installed.codec))
    }
}

impl Drop for DecoderOverride<'_> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            self.registry.decoder.restore(previous);
        }
    }
}

impl CodecRegistry {
    /// Install `encoder` until the returned guard is dropped
    pub fn override_encoder(&self, encoder: Arc<dyn JsonEncoder>) -> EncoderOverride<'_> {
        let previous = self.encoder.replace(Installed::new(encoder, OVERRIDE_ENCODER));
        EncoderOverride {
            registry: self,
            previous: Some(previous),
        }
    }

    /// Install `decoder` until the returned guard is dropped
    pub fn override_decoder(&self, decoder: Arc<dyn JsonDecoder>) -> DecoderOverride<'_> {
        let previous = self.decoder.replace(Installed::new(decoder, OVERRIDE_DECODER));
        DecoderOverride {
            registry: self,
            previous: Some(previous),
        }
    }
}

/// Run `f` with `encoder` installed in `registry`, restoring the previous
/// encoder on every exit path.
pub fn with_encoder<R>(
    registry: &CodecRegistry,
    encoder: Arc<dyn JsonEncoder>,
    f: impl FnOnce() -> R,
) -> R {
    let _guard = registry.override_encoder(encoder);
    f()
}

/// Run `f` with `decoder` installed in `registry`, restoring the previous
/// decoder on every exit path.
pub fn with_decoder<R>(
    registry: &CodecRegistry,
    decoder: Arc<dyn JsonDecoder>,
    f: impl FnOnce() -> R,
) -> R {
    let _guard = registry.override_decoder(decoder);
    f()
}
