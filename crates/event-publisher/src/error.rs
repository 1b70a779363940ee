//! Error types for the publish loop.

use crate::broker::BrokerError;
use event_core::CoreError;
use event_generator::GeneratorError;
use event_pipeline::PipelineError;
use thiserror::Error;

/// Errors that stop the publish loop.
///
/// Every variant raised during a cycle names the cycle (1-based) and the phase
/// that failed. None of them is retried.
#[derive(Error, Debug)]
pub enum PublisherError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Generator configuration error: {0}")]
    Generation(#[from] GeneratorError),

    #[error("Failed to connect to broker: {0}")]
    Connect(#[source] BrokerError),

    #[error("Batching failed in cycle {cycle}: {source}")]
    Batching {
        cycle: u64,
        #[source]
        source: PipelineError,
    },

    #[error("Flush failed in cycle {cycle}: {source}")]
    Flush {
        cycle: u64,
        #[source]
        source: PipelineError,
    },

    #[error("Failed to encode payload in cycle {cycle}: {source}")]
    Serialization {
        cycle: u64,
        #[source]
        source: CoreError,
    },

    #[error("Publish to channel '{channel}' failed in cycle {cycle}: {source}")]
    Publish {
        channel: String,
        cycle: u64,
        #[source]
        source: BrokerError,
    },
}
