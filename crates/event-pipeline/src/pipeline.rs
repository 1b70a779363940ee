//! The pipeline capability shared by the batch builder and the publisher.

use crate::batch::Batch;
use crate::error::PipelineError;
use async_trait::async_trait;

/// Accumulates keyed writes and hands them over in a single flush.
///
/// Queuing never performs I/O. Writing the same key twice keeps the last
/// value. A pipeline belongs to exactly one batch and is consumed by `flush`.
#[async_trait]
pub trait Pipeline: Send + Sized {
    /// What a successful flush hands back.
    type Ack: Send;

    /// Record `key -> value`, returning the pipeline for chaining.
    fn queue(&mut self, key: String, value: String) -> &mut Self;

    /// The writes accumulated so far, in insertion order.
    fn batch(&self) -> &Batch;

    /// Send or materialize every queued write.
    async fn flush(self) -> Result<Self::Ack, PipelineError>;

    fn len(&self) -> usize {
        self.batch().len()
    }

    fn is_empty(&self) -> bool {
        self.batch().is_empty()
    }

    /// Values in insertion order, ready to be published.
    fn values(&self) -> Vec<String> {
        self.batch().values().map(str::to_string).collect()
    }
}
