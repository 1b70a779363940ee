use clap::Parser;
use event_core::{decode_payload, Event};
use event_publisher::PublishArgs;
use std::io::Write;
use viewfeed::{load_events, run_generate, GenerateArgs, InputFormat, StatsArgs};

#[derive(Parser)]
struct GenerateCli {
    #[command(flatten)]
    args: GenerateArgs,
}

#[derive(Parser)]
struct StatsCli {
    #[command(flatten)]
    args: StatsArgs,
}

#[derive(Parser)]
struct PublishCli {
    #[command(flatten)]
    args: PublishArgs,
}

#[test]
fn test_generate_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.jsonl");
    let cli = GenerateCli::try_parse_from([
        "viewfeed",
        "--count",
        "25",
        "--seed",
        "9",
        "--clip-length",
        "6",
        "--output",
        path.to_str().unwrap(),
    ])
    .unwrap();

    assert_eq!(run_generate(cli.args).unwrap(), 25);

    let events = load_events(&path, InputFormat::Events).unwrap();
    assert_eq!(events.len(), 25);
    assert!(events.iter().all(|e| e.clip_id.len() == 6));
}

#[test]
fn test_generate_payload_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("payload.jsonl");
    let cli = GenerateCli::try_parse_from([
        "viewfeed",
        "--count",
        "5",
        "--payload",
        "-o",
        path.to_str().unwrap(),
    ])
    .unwrap();

    run_generate(cli.args).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(decode_payload(text.trim_end()).unwrap().len(), 5);
    assert_eq!(load_events(&path, InputFormat::Payloads).unwrap().len(), 5);
}

#[test]
fn test_seeded_generate_is_reproducible() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("a.jsonl");
    let second = dir.path().join("b.jsonl");

    for path in [&first, &second] {
        let cli = GenerateCli::try_parse_from([
            "viewfeed",
            "--seed",
            "123",
            "-o",
            path.to_str().unwrap(),
        ])
        .unwrap();
        run_generate(cli.args).unwrap();
    }

    let ids = |path: &std::path::Path| -> Vec<String> {
        load_events(path, InputFormat::Events)
            .unwrap()
            .into_iter()
            .map(|e: Event| e.event_id)
            .collect()
    };
    assert_eq!(ids(&first), ids(&second));
}

#[test]
fn test_invalid_generator_length_fails() {
    let cli = GenerateCli::try_parse_from(["viewfeed", "--publisher-length", "20"]).unwrap();
    assert!(run_generate(cli.args).is_err());
}

#[test]
fn test_stats_args() {
    let cli = StatsCli::try_parse_from([
        "viewfeed",
        "--input",
        "captured.jsonl",
        "--format",
        "payloads",
        "--utc",
    ])
    .unwrap();

    assert_eq!(cli.args.format, InputFormat::Payloads);
    assert_eq!(cli.args.top, 10);
    assert!(cli.args.utc);
}

#[test]
fn test_stats_rejects_zero_top() {
    assert!(StatsCli::try_parse_from(["viewfeed", "-i", "x.jsonl", "--top", "0"]).is_err());
}

#[test]
fn test_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.jsonl");

    let err = load_events(&missing, InputFormat::Events).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to open input file"));
}

#[test]
fn test_load_events_skips_blank_lines() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{"clip":"0042","country":"JP","event_id":"e-1","publisher_id":"07","viewable_time":12.5,"timestamp":1710504000.0}}"#
    )
    .unwrap();
    writeln!(file, "   ").unwrap();

    let events = load_events(file.path(), InputFormat::Events).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].clip_id, "0042");
}

#[tokio::test]
async fn test_publish_dry_run() {
    let cli = PublishCli::try_parse_from([
        "viewfeed",
        "--dry-run",
        "--redis-url",
        "redis://:secret@unreachable:6379/0",
    ])
    .unwrap();

    let metrics = viewfeed::run_publish(cli.args, tokio_util::sync::CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(metrics.cycles, 0);
}

#[tokio::test]
async fn test_publish_rejects_negative_batch_size() {
    let cli = PublishCli::try_parse_from(["viewfeed", "--dry-run", "--batch-size", "-5"]).unwrap();

    assert!(
        viewfeed::run_publish(cli.args, tokio_util::sync::CancellationToken::new())
            .await
            .is_err()
    );
}
