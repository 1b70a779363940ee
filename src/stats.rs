//! Stats command handler.

use anyhow::Context;
use chrono::{Local, Utc};
use clap::{Args, ValueEnum};
use event_core::{decode_payload, Event};
use event_stats::Summary;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// How each input line is encoded.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputFormat {
    /// One event JSON object per line
    #[value(name = "events")]
    Events,
    /// One published payload (JSON array of event strings) per line
    #[value(name = "payloads")]
    Payloads,
}

/// Arguments of the `stats` command.
#[derive(Args, Clone, Debug)]
pub struct StatsArgs {
    /// JSON Lines file with captured events or payloads
    #[arg(long, short = 'i')]
    pub input: PathBuf,

    /// Encoding of the input lines
    #[arg(long, value_enum, default_value = "events")]
    pub format: InputFormat,

    /// Number of publishers in the top-by-count ranking
    #[arg(long, default_value = "10", value_parser = clap::value_parser!(u64).range(1..))]
    pub top: u64,

    /// Bucket day/night in UTC instead of the local timezone
    #[arg(long)]
    pub utc: bool,
}

/// Load every event from a JSON Lines file. Blank lines are skipped.
pub fn load_events(path: &Path, format: InputFormat) -> anyhow::Result<Vec<Event>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open input file: {path:?}"))?;
    let reader = BufReader::new(file);

    let mut events = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", index + 1))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match format {
            InputFormat::Events => {
                events.push(
                    Event::from_json(line)
                        .with_context(|| format!("Invalid event on line {}", index + 1))?,
                );
            }
            InputFormat::Payloads => {
                events.extend(
                    decode_payload(line)
                        .with_context(|| format!("Invalid payload on line {}", index + 1))?,
                );
            }
        }
    }

    Ok(events)
}

/// Run the stats command and print the summary as JSON.
pub fn run_stats(args: StatsArgs) -> anyhow::Result<Summary> {
    let events = load_events(&args.input, args.format)?;
    tracing::info!("Loaded {} events from {:?}", events.len(), args.input);

    let top = args.top as usize;
    let summary = if args.utc {
        Summary::compute(&events, top, &Utc)?
    } else {
        Summary::compute(&events, top, &Local)?
    };

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(summary)
}
