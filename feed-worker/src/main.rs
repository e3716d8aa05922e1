//! starwatch-feed-worker - Host process wiring the wave tracker to stdio.
//!
//! The feed relay pipes flattened announcement text in; this worker parses
//! it, runs the lifecycle engine, and emits JSON views on stdout for the
//! display/broadcast side.
//!
//! Usage:
//!   starwatch-feed-worker <file|->    one-shot: parse a blob, print a
//!                                     FeedWorkerOutput JSON line
//!   starwatch-feed-worker --follow    stream blank-line-delimited blobs
//!                                     from stdin; a periodic tick ages the
//!                                     live sets; each change prints a
//!                                     TrackerSnapshot JSON line

use std::time::Instant;

use chrono::Utc;
use starwatch_core::announce::parse_announcement;
use starwatch_core::config::TrackerConfig;
use starwatch_core::lifecycle;
use starwatch_core::state::{FeedWorkerOutput, TrackerSnapshot, WaveCache};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::filter::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let result = match args.get(1).map(String::as_str) {
        Some("--follow") => follow().await,
        Some(path) => one_shot(path),
        None => Err(format!("usage: {} <file|-> | --follow", args[0])),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "Feed worker failed");
        std::process::exit(1);
    }
}

fn load_config() -> TrackerConfig {
    match TrackerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "Falling back to default config");
            TrackerConfig::default()
        }
    }
}

/// Parse one blob, ingest into a fresh cache, print the full output once.
fn one_shot(path: &str) -> Result<(), String> {
    let text = if path == "-" {
        std::io::read_to_string(std::io::stdin()).map_err(|e| format!("Failed to read stdin: {e}"))?
    } else {
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read {path}: {e}"))?
    };

    let timer = Instant::now();
    let records = parse_announcement(&text, Utc::now());
    let record_count = records.len();

    let mut cache = WaveCache::new();
    lifecycle::ingest(&mut cache, records);

    let output = FeedWorkerOutput {
        record_count,
        elapsed_ms: timer.elapsed().as_millis(),
        snapshot: TrackerSnapshot::capture(&cache),
    };

    let json = serde_json::to_string(&output).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

/// Stream blobs from stdin and age the live sets on a periodic tick.
async fn follow() -> Result<(), String> {
    let config = load_config();
    let mut cache = WaveCache::new();

    let mut interval =
        tokio::time::interval(std::time::Duration::from_secs(config.tick_interval_secs));
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut blob = String::new();

    tracing::info!(
        tick_interval_secs = config.tick_interval_secs,
        "Feed worker following stdin"
    );

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let signals = lifecycle::tick(&mut cache, Utc::now());
                for signal in &signals {
                    tracing::info!(?signal, "Wave transition");
                }
                if !signals.is_empty() {
                    emit_snapshot(&cache)?;
                }
            }
            line = lines.next_line() => match line.map_err(|e| format!("stdin read failed: {e}"))? {
                Some(line) if line.trim().is_empty() => {
                    ingest_blob(&mut cache, &blob)?;
                    blob.clear();
                }
                Some(line) => {
                    blob.push_str(&line);
                    blob.push('\n');
                }
                None => {
                    ingest_blob(&mut cache, &blob)?;
                    tracing::info!("Feed closed, shutting down");
                    return Ok(());
                }
            }
        }
    }
}

/// Parse and ingest a completed blob, then emit the new view.
/// A parse that yields no records leaves the live sets untouched.
fn ingest_blob(cache: &mut WaveCache, blob: &str) -> Result<(), String> {
    if blob.is_empty() {
        return Ok(());
    }

    let records = parse_announcement(blob, Utc::now());
    if records.is_empty() {
        tracing::debug!("Blob contained no wave headers, keeping previous sets");
        return Ok(());
    }

    tracing::info!(count = records.len(), "Ingesting parsed waves");
    lifecycle::ingest(cache, records);
    emit_snapshot(cache)
}

fn emit_snapshot(cache: &WaveCache) -> Result<(), String> {
    let snapshot = TrackerSnapshot::capture(cache);
    let json = serde_json::to_string(&snapshot).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}
