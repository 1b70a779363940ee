//! CLI argument definitions for the publisher.

use crate::duration::parse_duration;
use crate::publisher::{PublisherConfig, DEFAULT_CHANNEL};
use clap::Args;
use event_generator::{EventGenerator, FieldLengths, GeneratorError};
use std::time::Duration;

/// Event generation arguments shared by every command that generates events.
#[derive(Args, Clone, Debug)]
pub struct GeneratorArgs {
    /// Number of digits in clip ids
    #[arg(long, env = "VIEWFEED_CLIP_LENGTH", default_value = "4")]
    pub clip_length: u32,

    /// Number of digits in publisher ids
    #[arg(long, env = "VIEWFEED_PUBLISHER_LENGTH", default_value = "2")]
    pub publisher_length: u32,

    /// Random seed for reproducible generation (default: seeded from OS entropy)
    #[arg(long, env = "VIEWFEED_SEED")]
    pub seed: Option<u64>,
}

impl GeneratorArgs {
    pub fn field_lengths(&self) -> Result<FieldLengths, GeneratorError> {
        FieldLengths::new(self.clip_length, self.publisher_length)
    }

    pub fn build_generator(&self) -> Result<EventGenerator, GeneratorError> {
        let lengths = self.field_lengths()?;
        Ok(match self.seed {
            Some(seed) => EventGenerator::new(lengths, seed),
            None => EventGenerator::from_entropy(lengths),
        })
    }
}

/// Arguments of the `publish` command.
#[derive(Args, Clone, Debug)]
pub struct PublishArgs {
    /// Redis connection URL (redis://[:password@]host:port/db)
    #[arg(long, env = "REDIS_URL", default_value = "redis://127.0.0.1:6379/0")]
    pub redis_url: String,

    /// Pub/sub channel to publish batches on
    #[arg(long, env = "VIEWFEED_CHANNEL", default_value = DEFAULT_CHANNEL)]
    pub channel: String,

    /// Events per published batch
    #[arg(long, env = "VIEWFEED_BATCH_SIZE", default_value = "100", allow_negative_numbers = true)]
    pub batch_size: i64,

    /// Number of publish cycles
    #[arg(long, env = "VIEWFEED_ITERATIONS", default_value = "10")]
    pub iterations: u64,

    /// Keep publishing until interrupted (ignores --iterations)
    #[arg(long)]
    pub forever: bool,

    /// Wait between cycles (e.g. "500ms", "5s", "1m")
    #[arg(long, env = "VIEWFEED_INTERVAL", default_value = "5s", value_parser = parse_interval)]
    pub interval: Duration,

    /// Also store each event under its id with SET, in one pipeline per batch
    #[arg(long)]
    pub store_events: bool,

    /// Validate configuration without connecting to Redis
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub generator: GeneratorArgs,
}

fn parse_interval(s: &str) -> Result<Duration, String> {
    parse_duration(s).map_err(|e| format!("{e:#}"))
}

impl PublishArgs {
    pub fn publisher_config(&self) -> PublisherConfig {
        PublisherConfig {
            iterations: if self.forever {
                None
            } else {
                Some(self.iterations)
            },
            batch_size: self.batch_size,
            interval: self.interval,
            channel: self.channel.clone(),
        }
    }
}
