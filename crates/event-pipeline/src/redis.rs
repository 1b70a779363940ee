//! Redis-backed pipeline.

use crate::batch::Batch;
use crate::error::PipelineError;
use crate::pipeline::Pipeline;
use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::Value;
use tracing::debug;

/// Acknowledgment of a flushed Redis pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlushAck {
    /// Number of `SET` commands the server answered with `OK`
    pub acknowledged: usize,
}

/// Pipeline that buffers `SET key value` commands for one Redis round trip.
///
/// The connection is a clone of the publisher's multiplexed connection, so all
/// pipelines share the single underlying socket. Every queued write is sent,
/// including overwrites of the same key; Redis applies them in order so the
/// last value wins, matching the local [`Batch`].
pub struct RedisPipeline {
    conn: MultiplexedConnection,
    pipe: redis::Pipeline,
    /// Keys in the order their `SET`s were queued
    queued: Vec<String>,
    batch: Batch,
}

impl RedisPipeline {
    pub fn new(conn: MultiplexedConnection) -> Self {
        Self {
            conn,
            pipe: redis::pipe(),
            queued: Vec::new(),
            batch: Batch::new(),
        }
    }

    /// Number of `SET` commands waiting to be sent.
    pub fn queued_commands(&self) -> usize {
        self.queued.len()
    }
}

#[async_trait]
impl Pipeline for RedisPipeline {
    type Ack = FlushAck;

    fn queue(&mut self, key: String, value: String) -> &mut Self {
        self.pipe.cmd("SET").arg(&key).arg(&value);
        self.queued.push(key.clone());
        self.batch.insert(key, value);
        self
    }

    fn batch(&self) -> &Batch {
        &self.batch
    }

    async fn flush(mut self) -> Result<FlushAck, PipelineError> {
        if self.queued.is_empty() {
            return Ok(FlushAck::default());
        }

        let replies: Vec<Value> = self.pipe.query_async(&mut self.conn).await?;

        for (key, reply) in self.queued.iter().zip(&replies) {
            if !matches!(reply, Value::Okay) {
                return Err(PipelineError::Rejected {
                    key: key.clone(),
                    reply: format!("{reply:?}"),
                });
            }
        }

        debug!(writes = replies.len(), "redis pipeline flushed");
        Ok(FlushAck {
            acknowledged: replies.len(),
        })
    }
}
