//! Command-line interface for viewfeed
//!
//! # Usage Examples
//!
//! ## Publish
//! ```bash
//! # Ten batches of 100 events on "events", five seconds apart
//! viewfeed publish --redis-url redis://localhost:6379/0
//!
//! # Custom batch shape until Ctrl+C
//! viewfeed publish --forever --batch-size 500 --interval 2s \
//!   --clip-length 6 --publisher-length 3
//! ```
//!
//! ## Generate
//! ```bash
//! viewfeed generate --count 1000 --seed 7 --output events.jsonl
//! ```
//!
//! ## Stats
//! ```bash
//! viewfeed stats --input events.jsonl --top 5 --utc
//! ```
//!
//! Logging is controlled with `RUST_LOG` (e.g. `RUST_LOG=info`).

use clap::{Parser, Subcommand};
use event_publisher::PublishArgs;
use viewfeed::{cancel_on_signal, run_generate, run_publish, run_stats, GenerateArgs, StatsArgs};

#[derive(Parser)]
#[command(name = "viewfeed")]
#[command(about = "Generate synthetic view events and publish them to Redis pub/sub")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Publish batches of generated events on a Redis channel
    Publish(PublishArgs),

    /// Print generated events without publishing them
    Generate(GenerateArgs),

    /// Compute descriptive statistics over captured events
    Stats(StatsArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Publish(args) => {
            let shutdown = cancel_on_signal();
            run_publish(args, shutdown).await?;
        }
        Commands::Generate(args) => {
            run_generate(args)?;
        }
        Commands::Stats(args) => {
            run_stats(args)?;
        }
    }

    Ok(())
}
