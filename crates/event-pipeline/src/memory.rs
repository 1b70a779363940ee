//! In-memory pipeline used without any broker.

use crate::batch::Batch;
use crate::error::PipelineError;
use crate::pipeline::Pipeline;
use async_trait::async_trait;

/// Pipeline that accumulates writes into a [`Batch`].
///
/// Flushing materializes the batch; nothing leaves the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryPipeline {
    batch: Batch,
}

impl MemoryPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            batch: Batch::with_capacity(capacity),
        }
    }

    /// Expose the accumulated mapping, consuming the pipeline.
    pub fn materialize(self) -> Batch {
        self.batch
    }
}

#[async_trait]
impl Pipeline for MemoryPipeline {
    type Ack = Batch;

    fn queue(&mut self, key: String, value: String) -> &mut Self {
        self.batch.insert(key, value);
        self
    }

    fn batch(&self) -> &Batch {
        &self.batch
    }

    async fn flush(self) -> Result<Batch, PipelineError> {
        Ok(self.materialize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_is_chainable() {
        let mut pipe = MemoryPipeline::new();
        pipe.queue("a".to_string(), "1".to_string())
            .queue("b".to_string(), "2".to_string())
            .queue("a".to_string(), "3".to_string());

        assert_eq!(pipe.len(), 2);
        assert_eq!(pipe.values(), vec!["3".to_string(), "2".to_string()]);
    }

    #[tokio::test]
    async fn test_flush_materializes() {
        let mut pipe = MemoryPipeline::with_capacity(2);
        pipe.queue("k".to_string(), "v".to_string());

        let batch = pipe.flush().await.unwrap();
        assert_eq!(batch.get("k"), Some("v"));
        assert_eq!(batch.len(), 1);
    }
}
