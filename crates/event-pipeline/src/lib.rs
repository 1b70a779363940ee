//! Batched write pipelines for viewfeed.
//!
//! A [`Pipeline`] buffers keyed writes and hands them over in one go on
//! [`Pipeline::flush`]. Two implementations exist:
//!
//! - [`RedisPipeline`] queues `SET key value` commands on a `redis::Pipeline`
//!   and sends them in a single round trip.
//! - [`MemoryPipeline`] keeps writes in an ordered in-memory [`Batch`] and hands
//!   it back on flush. It needs no network and backs the tests.
//!
//! [`build_batch`] fills a pipeline with generated events, keyed by event id.
//!
//! ```text
//!   generate() ──► Event ──► key_of(&event), event.to_json()
//!                                   │
//!                                   ▼
//!                          Pipeline::queue(key, value)   (× size)
//!                                   │
//!                                   ▼
//!                          Pipeline::flush()  ──► Ack
//! ```

pub mod batch;
pub mod builder;
pub mod error;
pub mod memory;
pub mod pipeline;
pub mod redis;

// Re-exports for convenience
pub use batch::Batch;
pub use builder::{build_batch, build_event_batch, by_event_id};
pub use error::PipelineError;
pub use memory::MemoryPipeline;
pub use pipeline::Pipeline;
pub use self::redis::{FlushAck, RedisPipeline};
