//! Wave lifecycle engine.
//!
//! State machine per record: `upcoming → current → (removed)`.
//! Ingest replaces both live sets from the newest parse batch; the periodic
//! tick promotes upcoming waves whose ETA has elapsed and expires current
//! waves past the grace window. A record is promoted at most once and never
//! re-enters a set after promotion or expiry. Ticks with nothing to do are
//! no-ops; the engine has no fatal states.

mod signal;

#[cfg(test)]
mod lifecycle_tests;

pub use signal::WaveSignal;

use chrono::{DateTime, Duration, Utc};
use starwatch_types::{WaveRecord, WaveStatus};

use crate::state::WaveCache;

/// Minutes a current wave stays visible past its ETA before expiring.
pub const EXPIRY_GRACE_MINUTES: i64 = 15;

/// Reference tick period for hosts driving the engine from a timer.
pub const DEFAULT_TICK_INTERVAL_SECS: u64 = 30;

/// Replace the live sets with a freshly parsed batch.
///
/// The newest parse wins wholesale: records are partitioned by their parse
/// status and overwrite the previous upcoming/current contents. No merging
/// across parses.
pub fn ingest(cache: &mut WaveCache, records: Vec<WaveRecord>) -> Vec<WaveSignal> {
    let (upcoming, current): (Vec<_>, Vec<_>) = records
        .into_iter()
        .partition(|record| record.status == WaveStatus::Upcoming);

    tracing::debug!(
        upcoming = upcoming.len(),
        current = current.len(),
        "Replacing wave sets"
    );

    cache.upcoming = upcoming;
    cache.current = current;

    vec![WaveSignal::WaveSetReplaced {
        upcoming: cache.upcoming.len(),
        current: cache.current.len(),
    }]
}

/// Age the live sets against `now`.
///
/// Promotion runs before expiry, so a wave whose ETA is already more than
/// the grace window in the past passes through current and out in a single
/// tick only if it was ingested that stale; normally it lingers for
/// [`EXPIRY_GRACE_MINUTES`] after promotion.
pub fn tick(cache: &mut WaveCache, now: DateTime<Utc>) -> Vec<WaveSignal> {
    let mut signals = Vec::new();

    // Promotion: ETA elapsed (boundary inclusive).
    let mut still_upcoming = Vec::with_capacity(cache.upcoming.len());
    for record in cache.upcoming.drain(..) {
        if record.eta <= now {
            signals.push(WaveSignal::WavePromoted {
                world: record.world,
                region: record.region,
                eta: record.eta,
            });
            cache.current.push(WaveRecord {
                status: WaveStatus::Current,
                ..record
            });
        } else {
            still_upcoming.push(record);
        }
    }
    cache.upcoming = still_upcoming;

    // Expiry: grace window elapsed (boundary inclusive, removed for good).
    // A deadline past the representable timestamp range never elapses.
    let grace = Duration::minutes(EXPIRY_GRACE_MINUTES);
    cache.current.retain(|record| {
        let expired = record
            .eta
            .checked_add_signed(grace)
            .is_some_and(|deadline| deadline <= now);
        if expired {
            signals.push(WaveSignal::WaveExpired {
                world: record.world,
                region: record.region,
                eta: record.eta,
            });
            false
        } else {
            true
        }
    });

    for signal in &signals {
        tracing::debug!(?signal, "Wave transition");
    }

    signals
}
