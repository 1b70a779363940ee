//! Core types for viewfeed.
//!
//! This crate holds the [`Event`] record shared by the generator, the batch
//! pipeline, the publisher and the statistics crate, together with the codec for
//! the message published on the broker channel.
//!
//! # Wire format
//!
//! Each event is encoded as its own JSON object:
//!
//! ```text
//! {"clip":"0042","country":"IT","event_id":"…","publisher_id":"07","viewable_time":12.3,"timestamp":1700000000.25}
//! ```
//!
//! One published message is a JSON array whose elements are those encodings
//! *as strings*, not a flat array of objects. Consumers decode twice.

pub mod error;
pub mod event;
pub mod payload;

// Re-exports for convenience
pub use error::CoreError;
pub use event::{Country, Event};
pub use payload::{decode_payload, decode_payload_strings, encode_payload};
