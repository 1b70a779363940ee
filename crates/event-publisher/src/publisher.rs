//! The publish loop.
//!
//! Each cycle builds a batch on a fresh pipeline, flushes it, and publishes
//! the batch values as one message. Cycles run strictly one after another and
//! the wait between them never overlaps generation.

use crate::broker::Broker;
use crate::error::PublisherError;
use event_core::encode_payload;
use event_generator::{Clock, EventGenerator, SystemClock};
use event_pipeline::{build_event_batch, Pipeline};
use std::fmt;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

/// Default channel events are published on.
pub const DEFAULT_CHANNEL: &str = "events";

/// Default number of events per batch.
pub const DEFAULT_BATCH_SIZE: i64 = 100;

/// Default number of publish cycles.
pub const DEFAULT_ITERATIONS: u64 = 10;

/// Default wait between cycles.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

/// Phases of the publish loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Generating,
    Publishing,
    Waiting,
    Done,
}

impl fmt::Display for LoopState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LoopState::Idle => "idle",
            LoopState::Generating => "generating",
            LoopState::Publishing => "publishing",
            LoopState::Waiting => "waiting",
            LoopState::Done => "done",
        };
        f.write_str(name)
    }
}

/// Settings of one publisher run.
#[derive(Debug, Clone)]
pub struct PublisherConfig {
    /// Number of cycles; `None` runs until stopped
    pub iterations: Option<u64>,
    /// Events generated per cycle
    pub batch_size: i64,
    /// Wait between the end of one publish and the next cycle
    pub interval: Duration,
    pub channel: String,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            iterations: Some(DEFAULT_ITERATIONS),
            batch_size: DEFAULT_BATCH_SIZE,
            interval: DEFAULT_INTERVAL,
            channel: DEFAULT_CHANNEL.to_string(),
        }
    }
}

impl PublisherConfig {
    pub fn validate(&self) -> Result<(), PublisherError> {
        if self.batch_size < 0 {
            return Err(PublisherError::InvalidArgument(format!(
                "batch size must be non-negative, got {}",
                self.batch_size
            )));
        }
        if self.channel.is_empty() {
            return Err(PublisherError::InvalidArgument(
                "channel name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Metrics from a publisher run.
#[derive(Debug, Clone, Default)]
pub struct PublishMetrics {
    /// Cycles that completed a publish.
    pub cycles: u64,
    /// Events across all published payloads.
    pub events_published: u64,
    /// Sum of receivers reported by the broker.
    pub receivers: u64,
    /// Total time taken, waits included.
    pub total_duration: Duration,
    /// Time spent building and flushing batches.
    pub generation_duration: Duration,
    /// Time spent in publish calls.
    pub publish_duration: Duration,
}

impl PublishMetrics {
    /// Calculate events per second over the whole run.
    pub fn events_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.events_published as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Drives repeated {build, flush, publish, wait} cycles.
///
/// The publisher owns the broker (and through it the connection) and the
/// generator for its whole lifetime.
pub struct EventPublisher<B, C = SystemClock> {
    broker: B,
    generator: EventGenerator<C>,
    config: PublisherConfig,
    state: LoopState,
}

impl<B: Broker, C: Clock> EventPublisher<B, C> {
    pub fn new(
        broker: B,
        generator: EventGenerator<C>,
        config: PublisherConfig,
    ) -> Result<Self, PublisherError> {
        config.validate()?;
        Ok(Self {
            broker,
            generator,
            config,
            state: LoopState::Idle,
        })
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn config(&self) -> &PublisherConfig {
        &self.config
    }

    pub fn broker(&self) -> &B {
        &self.broker
    }

    fn transition(&mut self, next: LoopState) {
        debug!(from = %self.state, to = %next, "publisher state change");
        self.state = next;
    }

    /// Run the loop until the iteration budget is spent or `shutdown` fires.
    ///
    /// `new_pipeline` is called once per cycle. A cancellation is honoured
    /// before a cycle starts and while waiting; a started cycle always runs to
    /// the end of its publish. The first failure ends the loop.
    pub async fn run<P, F>(
        &mut self,
        mut new_pipeline: F,
        shutdown: CancellationToken,
    ) -> Result<PublishMetrics, PublisherError>
    where
        P: Pipeline,
        F: FnMut() -> P,
    {
        let start_time = Instant::now();
        let mut metrics = PublishMetrics::default();
        let mut cycle = 0u64;

        info!(
            "Publishing to channel '{}' (batch size: {}, iterations: {}, interval: {:?})",
            self.config.channel,
            self.config.batch_size,
            self.config
                .iterations
                .map_or_else(|| "unbounded".to_string(), |n| n.to_string()),
            self.config.interval
        );

        loop {
            if self.config.iterations.is_some_and(|n| cycle >= n) {
                break;
            }
            if shutdown.is_cancelled() {
                info!("Stop requested, not starting cycle {}", cycle + 1);
                break;
            }

            cycle += 1;
            if let Err(e) = self.run_cycle(new_pipeline(), cycle, &mut metrics).await {
                error!("Cycle {} failed: {}", cycle, e);
                self.transition(LoopState::Done);
                return Err(e);
            }

            let has_next = self.config.iterations.map_or(true, |n| cycle < n);
            if !has_next {
                break;
            }

            self.transition(LoopState::Waiting);
            tokio::select! {
                _ = tokio::time::sleep(self.config.interval) => {}
                _ = shutdown.cancelled() => {
                    info!("Stop requested while waiting after cycle {}", cycle);
                    break;
                }
            }
        }

        self.transition(LoopState::Done);
        metrics.total_duration = start_time.elapsed();

        info!(
            "Publishing complete: {} events in {} cycles over {:?} ({:.2} events/sec)",
            metrics.events_published,
            metrics.cycles,
            metrics.total_duration,
            metrics.events_per_second()
        );

        Ok(metrics)
    }

    async fn run_cycle<P: Pipeline>(
        &mut self,
        pipeline: P,
        cycle: u64,
        metrics: &mut PublishMetrics,
    ) -> Result<(), PublisherError> {
        self.transition(LoopState::Generating);
        let gen_start = Instant::now();

        let generator = &mut self.generator;
        let pipeline = build_event_batch(pipeline, self.config.batch_size, || {
            generator.next_event()
        })
        .map_err(|source| PublisherError::Batching { cycle, source })?;

        let values = pipeline.values();
        pipeline
            .flush()
            .await
            .map_err(|source| PublisherError::Flush { cycle, source })?;
        metrics.generation_duration += gen_start.elapsed();

        self.transition(LoopState::Publishing);
        let payload = encode_payload(&values)
            .map_err(|source| PublisherError::Serialization { cycle, source })?;

        let publish_start = Instant::now();
        let receivers = self
            .broker
            .publish(&self.config.channel, payload)
            .await
            .map_err(|source| PublisherError::Publish {
                channel: self.config.channel.clone(),
                cycle,
                source,
            })?;
        metrics.publish_duration += publish_start.elapsed();

        metrics.cycles += 1;
        metrics.events_published += values.len() as u64;
        metrics.receivers += receivers;

        debug!(
            "Cycle {} complete: {} events published to {} receivers",
            cycle,
            values.len(),
            receivers
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::broker::MemoryBroker;
    use event_generator::FieldLengths;
    use event_pipeline::MemoryPipeline;

    fn publisher(
        broker: MemoryBroker,
        config: PublisherConfig,
    ) -> EventPublisher<MemoryBroker, SystemClock> {
        let generator = EventGenerator::new(FieldLengths::default(), 42);
        EventPublisher::new(broker, generator, config).unwrap()
    }

    #[test]
    fn test_metrics() {
        let metrics = PublishMetrics {
            cycles: 10,
            events_published: 1000,
            total_duration: Duration::from_secs(10),
            ..Default::default()
        };

        assert_eq!(metrics.events_per_second(), 100.0);
        assert_eq!(PublishMetrics::default().events_per_second(), 0.0);
    }

    #[test]
    fn test_negative_batch_size_rejected() {
        let config = PublisherConfig {
            batch_size: -1,
            ..Default::default()
        };
        let generator = EventGenerator::new(FieldLengths::default(), 42);

        assert!(matches!(
            EventPublisher::new(MemoryBroker::new(), generator, config),
            Err(PublisherError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_empty_channel_rejected() {
        let config = PublisherConfig {
            channel: String::new(),
            ..Default::default()
        };

        assert!(config.validate().is_err());
        assert!(PublisherConfig::default().validate().is_ok());
    }

    #[tokio::test]
    async fn test_state_is_idle_then_done() {
        let config = PublisherConfig {
            iterations: Some(1),
            batch_size: 1,
            interval: Duration::ZERO,
            ..Default::default()
        };
        let mut publisher = publisher(MemoryBroker::new(), config);

        assert_eq!(publisher.state(), LoopState::Idle);
        publisher
            .run(MemoryPipeline::new, CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(publisher.state(), LoopState::Done);
    }

    #[tokio::test]
    async fn test_zero_iterations_publishes_nothing() {
        let broker = MemoryBroker::new();
        let config = PublisherConfig {
            iterations: Some(0),
            ..Default::default()
        };
        let mut publisher = publisher(broker.clone(), config);

        let metrics = publisher
            .run(MemoryPipeline::new, CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(metrics.cycles, 0);
        assert_eq!(broker.attempts(), 0);
    }

    #[tokio::test]
    async fn test_zero_batch_size_publishes_empty_payloads() {
        let broker = MemoryBroker::new();
        let config = PublisherConfig {
            iterations: Some(2),
            batch_size: 0,
            interval: Duration::ZERO,
            ..Default::default()
        };
        let mut publisher = publisher(broker.clone(), config);

        publisher
            .run(MemoryPipeline::new, CancellationToken::new())
            .await
            .unwrap();

        let messages = broker.messages();
        assert_eq!(messages.len(), 2);
        assert!(messages.iter().all(|m| m.payload == "[]"));
    }

    #[test]
    fn test_loop_state_display() {
        assert_eq!(LoopState::Waiting.to_string(), "waiting");
        assert_eq!(LoopState::Done.to_string(), "done");
    }
}
