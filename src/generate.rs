//! Generate command handler.

use anyhow::Context;
use clap::Args;
use event_core::encode_payload;
use event_generator::{Clock, EventGenerator};
use event_publisher::GeneratorArgs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Arguments of the `generate` command.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Number of events to generate
    #[arg(long, default_value = "10")]
    pub count: u64,

    /// Write to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Emit one published-style payload instead of one event per line
    #[arg(long)]
    pub payload: bool,

    #[command(flatten)]
    pub generator: GeneratorArgs,
}

/// Write `count` events to `writer`, either as JSON lines or as one payload line.
pub fn write_events<C: Clock, W: Write>(
    generator: &mut EventGenerator<C>,
    count: u64,
    as_payload: bool,
    writer: &mut W,
) -> anyhow::Result<u64> {
    let mut written = 0u64;

    if as_payload {
        let mut lines = Vec::new();
        for event in generator.events(count) {
            lines.push(event.to_json()?);
        }
        writeln!(writer, "{}", encode_payload(&lines)?)?;
        written = lines.len() as u64;
    } else {
        for event in generator.events(count) {
            writeln!(writer, "{}", event.to_json()?)?;
            written += 1;
        }
    }
    writer.flush()?;

    Ok(written)
}

/// Run the generate command.
pub fn run_generate(args: GenerateArgs) -> anyhow::Result<u64> {
    let mut generator = args
        .generator
        .build_generator()
        .context("Invalid generator configuration")?;

    let written = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {path:?}"))?;
            let mut writer = BufWriter::new(file);
            write_events(&mut generator, args.count, args.payload, &mut writer)?
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            write_events(&mut generator, args.count, args.payload, &mut writer)?
        }
    };

    tracing::info!("Generated {} events", written);
    Ok(written)
}
