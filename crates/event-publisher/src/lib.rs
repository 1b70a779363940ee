//! Publish loop for viewfeed.
//!
//! This crate provides the [`EventPublisher`] which repeatedly builds a batch of
//! generated events on a fresh [`Pipeline`](event_pipeline::Pipeline), flushes
//! it, and publishes the ordered values as one message on a broker channel.
//!
//! # Architecture
//!
//! ```text
//!            ┌──────────────────────────────────────────────┐
//!            │                EventPublisher                │
//!            │                                              │
//!  Idle ───► │ Generating ──► Publishing ──► Waiting ──┐    │ ──► Done
//!            │      ▲                                  │    │
//!            │      └──────────────────────────────────┘    │
//!            └──────┬─────────────────────┬─────────────────┘
//!                   │                     │
//!                   ▼                     ▼
//!       EventGenerator + Pipeline     Broker::publish(channel, payload)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use event_generator::{EventGenerator, FieldLengths};
//! use event_pipeline::RedisPipeline;
//! use event_publisher::{EventPublisher, PublisherConfig, RedisBroker};
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let broker = RedisBroker::connect("redis://127.0.0.1:6379/0").await?;
//!     let conn = broker.connection();
//!     let generator = EventGenerator::from_entropy(FieldLengths::default());
//!
//!     let mut publisher = EventPublisher::new(broker, generator, PublisherConfig::default())?;
//!     let metrics = publisher
//!         .run(|| RedisPipeline::new(conn.clone()), CancellationToken::new())
//!         .await?;
//!     println!("Published {} events in {} cycles", metrics.events_published, metrics.cycles);
//!     Ok(())
//! }
//! ```

pub mod args;
pub mod broker;
pub mod duration;
pub mod error;
pub mod publisher;

// Re-exports for convenience
pub use args::{GeneratorArgs, PublishArgs};
pub use broker::{Broker, BrokerError, MemoryBroker, PublishedMessage, RedisBroker};
pub use error::PublisherError;
pub use publisher::{
    EventPublisher, LoopState, PublishMetrics, PublisherConfig, DEFAULT_BATCH_SIZE,
    DEFAULT_CHANNEL, DEFAULT_INTERVAL, DEFAULT_ITERATIONS,
};
