//! Codec for the message published on the broker channel.
//!
//! A payload is a JSON array of strings, each string being one event's JSON
//! encoding. Downstream consumers rely on this double encoding, so it is kept
//! as is rather than flattened into an array of objects.

use crate::error::CoreError;
use crate::event::Event;

/// Encode already-serialized events into one payload, preserving order.
pub fn encode_payload<S: AsRef<str>>(values: &[S]) -> Result<String, CoreError> {
    let strings: Vec<&str> = values.iter().map(|v| v.as_ref()).collect();
    serde_json::to_string(&strings).map_err(CoreError::Serialization)
}

/// Decode a payload into its event strings without parsing the events.
pub fn decode_payload_strings(payload: &str) -> Result<Vec<String>, CoreError> {
    serde_json::from_str(payload).map_err(CoreError::InvalidPayload)
}

/// Decode a payload all the way down to events.
pub fn decode_payload(payload: &str) -> Result<Vec<Event>, CoreError> {
    decode_payload_strings(payload)?
        .iter()
        .map(|s| Event::from_json(s))
        .collect()
}
