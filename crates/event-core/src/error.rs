//! Error types for the event model.

use thiserror::Error;

/// Errors raised while encoding or decoding events and payloads.
#[derive(Error, Debug)]
pub enum CoreError {
    /// An event or payload could not be encoded to JSON
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    /// A published payload or event string could not be decoded
    #[error("Invalid payload: {0}")]
    InvalidPayload(#[source] serde_json::Error),

    /// A country code outside the fixed set
    #[error("Unknown country code: {0}")]
    UnknownCountry(String),
}
