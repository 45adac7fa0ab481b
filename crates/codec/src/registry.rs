//! Codec registry
//!
//! A [`CodecRegistry`] holds exactly one current encoder and one current
//! decoder. Each slot is an [`ArcSwap`], so:
//!
//! - reads are lock-free and never block each other
//! - a replacement is a single atomic pointer swap
//! - a read racing a replacement sees either the old or the new codec,
//!   never a torn or missing one
//!
//! The two slots are independent. Nothing makes a combined encoder+decoder
//! replacement atomic; callers needing that must coordinate themselves.
//!
//! ## Process-wide registry
//!
//! [`global()`] returns the registry used by [`build_json`], [`build_jsonb`]
//! and [`extract_json`]. It is created on first use with the
//! `serde_json` codec installed and lives for the rest of the process.
//!
//! [`build_json`]: crate::build_json
//! [`build_jsonb`]: crate::build_jsonb
//! [`extract_json`]: crate::extract_json

use crate::default::{SerdeJsonDecoder, SerdeJsonEncoder};
use arc_swap::ArcSwap;
use dbjson_core::{JsonDecoder, JsonEncoder};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

const UNNAMED_ENCODER: &str = "dyn JsonEncoder";
const UNNAMED_DECODER: &str = "dyn JsonDecoder";

static GLOBAL: Lazy<CodecRegistry> = Lazy::new(CodecRegistry::new);

/// The process-wide registry.
pub fn global() -> &'static CodecRegistry {
    &GLOBAL
}

/// Current encoder of the process-wide registry
pub fn encoder() -> Arc<dyn JsonEncoder> {
    global().encoder()
}

/// Replace the encoder of the process-wide registry, returning the old one
pub fn set_encoder(encoder: Arc<dyn JsonEncoder>) -> Arc<dyn JsonEncoder> {
    global().set_encoder(encoder)
}

/// Current decoder of the process-wide registry
pub fn decoder() -> Arc<dyn JsonDecoder> {
    global().decoder()
}

/// Replace the decoder of the process-wide registry, returning the old one
pub fn set_decoder(decoder: Arc<dyn JsonDecoder>) -> Arc<dyn JsonDecoder> {
    global().set_decoder(decoder)
}

/// Options for the default `serde_json` codec.
///
/// Deserializable so it can sit inside a host application's own config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecOptions {
    /// Indent JSON produced by the default encoder
    pub pretty: bool,
}

impl CodecOptions {
    /// Default encoder configured by these options
    pub fn default_encoder(&self) -> SerdeJsonEncoder {
        if self.pretty {
            SerdeJsonEncoder::pretty()
        } else {
            SerdeJsonEncoder::new()
        }
    }
}

/// An installed codec and the name it is logged under.
pub(crate) struct Installed<C: ?Sized> {
    pub(crate) codec: Arc<C>,
    pub(crate) name: &'static str,
}

impl<C: ?Sized> Installed<C> {
    pub(crate) fn new(codec: Arc<C>, name: &'static str) -> Self {
        Installed { codec, name }
    }
}

/// One atomically swappable codec reference.
pub(crate) struct CodecSlot<C: ?Sized> {
    label: &'static str,
    current: ArcSwap<Installed<C>>,
}

impl<C: ?Sized> CodecSlot<C> {
    fn new(label: &'static str, installed: Installed<C>) -> Self {
        CodecSlot {
            label,
            current: ArcSwap::from_pointee(installed),
        }
    }

    fn load(&self) -> Arc<C> {
        Arc::clone(&self.current.load().codec)
    }

    fn name(&self) -> &'static str {
        self.current.load().name
    }

    pub(crate) fn replace(&self, installed: Installed<C>) -> Arc<Installed<C>> {
        let name = installed.name;
        let previous = self.current.swap(Arc::new(installed));
        tracing::debug!(
            slot = self.label,
            previous = previous.name,
            current = name,
            "codec replaced"
        );
        previous
    }

    pub(crate) fn restore(&self, previous: Arc<Installed<C>>) {
        tracing::debug!(slot = self.label, current = previous.name, "codec restored");
        self.current.store(previous);
    }
}

/// Holder of the current JSON encoder and decoder.
///
/// # Example
///
/// ```
/// use dbjson_codec::{CodecRegistry, SerdeJsonEncoder};
///
/// let registry = CodecRegistry::new();
/// let previous = registry.install_encoder(SerdeJsonEncoder::pretty());
///
/// // ... build values with the pretty encoder ...
///
/// registry.set_encoder(previous);
/// ```
pub struct CodecRegistry {
    options: CodecOptions,
    pub(crate) encoder: CodecSlot<dyn JsonEncoder>,
    pub(crate) decoder: CodecSlot<dyn JsonDecoder>,
}

impl CodecRegistry {
    /// Registry with the default `serde_json` codec
    pub fn new() -> Self {
        Self::with_options(CodecOptions::default())
    }

    /// Registry with the default codec configured by `options`
    pub fn with_options(options: CodecOptions) -> Self {
        Self::builder().options(options).build()
    }

    /// Create a builder for registry configuration.
    ///
    /// ```
    /// use dbjson_codec::CodecRegistry;
    ///
    /// let registry = CodecRegistry::builder().pretty(true).build();
    /// assert!(registry.options().pretty);
    /// ```
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Options the default codec was built with
    pub fn options(&self) -> CodecOptions {
        self.options
    }

    /// Get the current encoder
    pub fn encoder(&self) -> Arc<dyn JsonEncoder> {
        self.encoder.load()
    }

    /// Replace the current encoder, returning the one it replaced
    pub fn set_encoder(&self, encoder: Arc<dyn JsonEncoder>) -> Arc<dyn JsonEncoder> {
        Arc::clone(&self.encoder.replace(Installed::new(encoder, UNNAMED_ENCODER)).codec)
    }

    /// Install an encoder by value, returning the one it replaced
    pub fn install_encoder<E: JsonEncoder + 'static>(&self, encoder: E) -> Arc<dyn JsonEncoder> {
        let codec = Arc::new(encoder) as Arc<dyn JsonEncoder>;
        let installed = Installed::new(codec, std::any::type_name::<E>());
        Arc::clone(&self.encoder.replace(installed).codec)
    }

    /// Name of the current encoder as it appears in logs
    pub fn encoder_name(&self) -> &'static str {
        self.encoder.name()
    }

    /// Get the current decoder
    pub fn decoder(&self) -> Arc<dyn JsonDecoder> {
        self.decoder.load()
    }

    /// Replace the current decoder, returning the one it replaced
    pub fn set_decoder(&self, decoder: Arc<dyn JsonDecoder>) -> Arc<dyn JsonDecoder> {
        Arc::clone(&self.decoder.replace(Installed::new(decoder, UNNAMED_DECODER)).codec)
    }

    /// Install a decoder by value, returning the one it replaced
    pub fn install_decoder<D: JsonDecoder + 'static>(&self, decoder: D) -> Arc<dyn JsonDecoder> {
        let codec = Arc::new(decoder) as Arc<dyn JsonDecoder>;
        let installed = Installed::new(codec, std::any::type_name::<D>());
        Arc::clone(&self.decoder.replace(installed).codec)
    }

    /// Name of the current decoder as it appears in logs
    pub fn decoder_name(&self) -> &'static str {
        self.decoder.name()
    }

    /// Re-install the default codec in both slots.
    ///
    /// Each slot is replaced separately.
    pub fn restore_defaults(&self) {
        self.install_encoder(self.options.default_encoder());
        self.install_decoder(SerdeJsonDecoder::new());
    }
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodecRegistry")
            .field("options", &self.options)
            .field("encoder", &self.encoder_name())
            .field("decoder", &self.decoder_name())
            .finish()
    }
}

/// Builder for [`CodecRegistry`].
///
/// Slots not given an explicit codec get the default `serde_json` one,
/// configured by [`CodecOptions`].
#[derive(Default)]
pub struct RegistryBuilder {
    options: CodecOptions,
    encoder: Option<Installed<dyn JsonEncoder>>,
    decoder: Option<Installed<dyn JsonDecoder>>,
}

impl RegistryBuilder {
    /// Set options for the default codec
    pub fn options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// Indent output of the default encoder
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.options.pretty = pretty;
        self
    }

    /// Start with this encoder instead of the default one
    pub fn encoder<E: JsonEncoder + 'static>(mut self, encoder: E) -> Self {
        let codec = Arc::new(encoder) as Arc<dyn JsonEncoder>;
        self.encoder = Some(Installed::new(codec, std::any::type_name::<E>()));
        self
    }

    /// Start with this decoder instead of the default one
    pub fn decoder<D: JsonDecoder + 'static>(mut self, decoder: D) -> Self {
        let codec = Arc::new(decoder) as Arc<dyn JsonDecoder>;
        self.decoder = Some(Installed::new(codec, std::any::type_name::<D>()));
        self
    }

    /// Build the registry
    pub fn build(self) -> CodecRegistry {
        let options = self.options;
        let encoder = self.encoder.unwrap_or_else(|| {
            let codec = Arc::new(options.default_encoder()) as Arc<dyn JsonEncoder>;
            Installed::new(codec, std::any::type_name::<SerdeJsonEncoder>())
        });
        let decoder = self.decoder.unwrap_or_else(|| {
            let codec = Arc::new(SerdeJsonDecoder::new()) as Arc<dyn JsonDecoder>;
            Installed::new(codec, std::any::type_name::<SerdeJsonDecoder>())
        });
        CodecRegistry {
            options,
            encoder: CodecSlot::new("encoder", encoder),
            decoder: CodecSlot::new("decoder", decoder),
        }
    }
}

impl fmt::Debug for RegistryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field("options", &self.options)
            .field("encoder", &self.encoder.as_ref().map(|i| i.name))
            .field("decoder", &self.decoder.as_ref().map(|i| i.name))
            .finish()
    }
}
