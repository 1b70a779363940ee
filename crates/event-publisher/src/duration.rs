//! Duration parsing for CLI arguments.

use anyhow::Context;
use std::time::Duration;

/// Parse a duration string like "500ms", "5s", "2m", "1h" or "5".
///
/// Supports:
/// - Plain numbers (interpreted as seconds): "5"
/// - Milliseconds suffix: "500ms"
/// - Seconds suffix: "5s"
/// - Minutes suffix: "2m"
/// - Hours suffix: "1h"
pub fn parse_duration(s: &str) -> anyhow::Result<Duration> {
    let s = s.trim();
    if s.is_empty() {
        anyhow::bail!("Empty duration string");
    }

    // "ms" must be checked before "m" and "s"
    if let Some(num_str) = s.strip_suffix("ms") {
        let millis: u64 = num_str
            .parse()
            .with_context(|| format!("Invalid milliseconds value: {num_str}"))?;
        return Ok(Duration::from_millis(millis));
    }
    if let Some(num_str) = s.strip_suffix('h') {
        let hours: u64 = num_str
            .parse()
            .with_context(|| format!("Invalid hours value: {num_str}"))?;
        return Ok(Duration::from_secs(hours * 3600));
    }
    if let Some(num_str) = s.strip_suffix('m') {
        let minutes: u64 = num_str
            .parse()
            .with_context(|| format!("Invalid minutes value: {num_str}"))?;
        return Ok(Duration::from_secs(minutes * 60));
    }
    if let Some(num_str) = s.strip_suffix('s') {
        let secs: f64 = num_str
            .parse()
            .with_context(|| format!("Invalid seconds value: {num_str}"))?;
        return Duration::try_from_secs_f64(secs)
            .with_context(|| format!("Invalid seconds value: {num_str}"));
    }

    // No suffix - treat as seconds
    let secs: f64 = s
        .parse()
        .with_context(|| format!("Invalid duration value: {s}"))?;
    Duration::try_from_secs_f64(secs).with_context(|| format!("Invalid duration value: {s}"))
}
