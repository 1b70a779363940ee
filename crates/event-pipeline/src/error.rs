//! Error types for pipelines and batch construction.

use thiserror::Error;

/// Errors that can occur while building or flushing a pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// A precondition on the caller's arguments was violated
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An event could not be serialized into its stored form
    #[error("Failed to serialize event: {0}")]
    Serialization(#[from] event_core::CoreError),

    /// The broker could not be reached or failed the round trip
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// The broker answered a queued write with something other than OK
    #[error("Write for key '{key}' rejected: {reply}")]
    Rejected { key: String, reply: String },
}
