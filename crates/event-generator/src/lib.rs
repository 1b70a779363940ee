//! Synthetic view event generator for viewfeed.
//!
//! This crate provides the [`EventGenerator`] which produces [`Event`] records
//! with well-defined field domains. The generator owns a seeded RNG, so a run
//! with the same seed and clock reproduces the same events.
//!
//! # Architecture
//!
//! ```text
//! FieldLengths (clip, publisher)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │  EventGenerator  │
//! │                  │
//! │  - rng (StdRng)  │
//! │  - clock         │
//! │  - generated     │
//! └────────┬─────────┘
//!          │
//!          ▼
//!    Event { clip, country, event_id, publisher_id, viewable_time, timestamp }
//! ```
//!
//! # Example
//!
//! ```rust
//! use event_generator::{EventGenerator, FieldLengths};
//!
//! let mut generator = EventGenerator::new(FieldLengths::default(), 42);
//! let event = generator.next_event();
//! assert_eq!(event.clip_id.len(), 4);
//! assert_eq!(event.publisher_id.len(), 2);
//! ```
//!
//! [`Event`]: event_core::Event

pub mod clock;
pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use generator::{
    generate_event, EventGenerator, EventIterator, FieldLengths, GeneratorError,
    DEFAULT_CLIP_LENGTH, DEFAULT_PUBLISHER_LENGTH, MAX_FIELD_LENGTH,
};
