//! Pluggable JSON codec capabilities
//!
//! Any JSON implementation, the built-in one or a user-supplied one, plugs
//! into the marshalling path through these two traits. Application values
//! cross the trait boundary type-erased through `erased_serde`, so codecs
//! can be stored as trait objects and still serialize the value itself.
//! 128-bit integers and `f32` reach the encoder exactly as the type
//! serializes them.
//!
//! Both traits are `Send + Sync`. Implementations that keep mutable state
//! (counters, buffers) must synchronize it themselves. Side effects must not
//! change the bytes or value produced.
//!
//! Closures with the right shape implement [`JsonEncoder`] directly:
//!
//! ```
//! use dbjson_core::{BoxError, JsonEncoder};
//!
//! let compact = |value: &dyn erased_serde::Serialize| -> Result<Vec<u8>, BoxError> {
//!     Ok(serde_json::to_vec(value)?)
//! };
//! assert_eq!(compact.encode(&[1, 2]).unwrap(), b"[1,2]");
//! ```

use crate::error::BoxError;
use erased_serde::{Deserializer, Serialize};

/// Receiver of the deserializer a [`JsonDecoder`] builds over stored bytes.
///
/// The marshaller supplies the sink; it drives the deserializer into the
/// requested application type.
pub type DecodeSink<'a> =
    dyn for<'de> FnMut(&mut dyn Deserializer<'de>) -> Result<(), erased_serde::Error> + 'a;

/// Turns a serializable value into UTF-8 JSON bytes.
pub trait JsonEncoder: Send + Sync {
    /// Encode `value` as JSON text
    fn encode(&self, value: &dyn Serialize) -> Result<Vec<u8>, BoxError>;
}

/// Parses UTF-8 JSON bytes on behalf of a deserializable value.
pub trait JsonDecoder: Send + Sync {
    /// Parse `bytes` and hand a deserializer over them to `sink`, once.
    ///
    /// Errors returned by `sink` must be propagated. The implementation is
    /// responsible for rejecting trailing input after the value.
    fn decode(&self, bytes: &[u8], sink: &mut DecodeSink<'_>) -> Result<(), BoxError>;
}

impl<F> JsonEncoder for F
where
    F: Fn(&dyn Serialize) -> Result<Vec<u8>, BoxError> + Send + Sync,
{
    fn encode(&self, value: &dyn Serialize) -> Result<Vec<u8>, BoxError> {
        self(value)
    }
}
