//! Publish command runner.

use anyhow::Context;
use event_pipeline::{MemoryPipeline, RedisPipeline};
use event_publisher::{EventPublisher, PublishArgs, PublishMetrics, PublisherError, RedisBroker};
use tokio_util::sync::CancellationToken;

use crate::logging::mask_connection_password;

/// Run the publish loop until its cycles are spent or `shutdown` fires.
pub async fn run_publish(
    args: PublishArgs,
    shutdown: CancellationToken,
) -> anyhow::Result<PublishMetrics> {
    let config = args.publisher_config();
    config.validate()?;
    let generator = args
        .generator
        .build_generator()
        .context("Invalid generator configuration")?;

    let redacted_url = mask_connection_password(&args.redis_url);

    if args.dry_run {
        tracing::info!(
            "[DRY-RUN] Would publish {} batches of {} events to channel '{}' every {:?}",
            config
                .iterations
                .map_or_else(|| "unbounded".to_string(), |n| n.to_string()),
            config.batch_size,
            config.channel,
            config.interval
        );
        tracing::info!("[DRY-RUN] Connection: {}", redacted_url);
        tracing::info!("[DRY-RUN] Store events: {}", args.store_events);
        tracing::info!("[DRY-RUN] Configuration validated successfully");
        return Ok(PublishMetrics::default());
    }

    tracing::info!("Connecting to Redis at {}", redacted_url);
    let broker = RedisBroker::connect(&args.redis_url)
        .await
        .map_err(PublisherError::Connect)
        .with_context(|| format!("Failed to connect to Redis at {redacted_url}"))?;
    let conn = broker.connection();

    let mut publisher = EventPublisher::new(broker, generator, config)?;

    let metrics = if args.store_events {
        publisher
            .run(move || RedisPipeline::new(conn.clone()), shutdown)
            .await?
    } else {
        publisher.run(MemoryPipeline::new, shutdown).await?
    };

    tracing::info!(
        "Published {} events in {} cycles ({} receivers in total)",
        metrics.events_published,
        metrics.cycles,
        metrics.receivers
    );

    Ok(metrics)
}
