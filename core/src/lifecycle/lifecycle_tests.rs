//! Tests for the wave lifecycle engine
//!
//! Verifies ingest-replace semantics, promotion/expiry boundaries, and
//! signal emission.

use chrono::{DateTime, Duration, TimeZone, Utc};
use starwatch_types::{Region, WaveRecord, WaveStatus};

use super::{EXPIRY_GRACE_MINUTES, WaveSignal, ingest, tick};
use crate::state::WaveCache;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

fn wave(world: u32, region: Region, eta: DateTime<Utc>, status: WaveStatus) -> WaveRecord {
    WaveRecord {
        world,
        size: 5,
        region,
        eta,
        status,
    }
}

#[test]
fn test_ingest_partitions_by_status() {
    let mut cache = WaveCache::new();
    let signals = ingest(
        &mut cache,
        vec![
            wave(1, Region::Asgarnia, now() + Duration::minutes(5), WaveStatus::Upcoming),
            wave(2, Region::Kandarin, now() - Duration::minutes(3), WaveStatus::Current),
            wave(3, Region::Wilderness, now() + Duration::minutes(9), WaveStatus::Upcoming),
        ],
    );

    assert_eq!(cache.upcoming().len(), 2);
    assert_eq!(cache.current().len(), 1);
    assert_eq!(cache.upcoming()[0].world, 1);
    assert_eq!(cache.upcoming()[1].world, 3);
    assert_eq!(cache.current()[0].world, 2);
    assert_eq!(
        signals,
        vec![WaveSignal::WaveSetReplaced {
            upcoming: 2,
            current: 1
        }]
    );
}

#[test]
fn test_ingest_replaces_wholesale() {
    let mut cache = WaveCache::new();
    ingest(
        &mut cache,
        vec![wave(1, Region::Asgarnia, now(), WaveStatus::Current)],
    );
    ingest(
        &mut cache,
        vec![wave(2, Region::Misthalin, now() + Duration::minutes(1), WaveStatus::Upcoming)],
    );

    // No merge across parses: the first batch is gone.
    assert!(cache.current().is_empty());
    assert_eq!(cache.upcoming().len(), 1);
    assert_eq!(cache.upcoming()[0].world, 2);
}

#[test]
fn test_ingest_empty_batch_clears() {
    let mut cache = WaveCache::new();
    ingest(
        &mut cache,
        vec![wave(1, Region::Asgarnia, now(), WaveStatus::Current)],
    );
    ingest(&mut cache, Vec::new());

    assert!(cache.is_empty());
}

#[test]
fn test_tick_promotes_elapsed_waves() {
    let mut cache = WaveCache::new();
    ingest(
        &mut cache,
        vec![
            wave(1, Region::Asgarnia, now() - Duration::minutes(1), WaveStatus::Upcoming),
            wave(2, Region::Kandarin, now() + Duration::minutes(1), WaveStatus::Upcoming),
        ],
    );

    let signals = tick(&mut cache, now());

    assert_eq!(cache.upcoming().len(), 1);
    assert_eq!(cache.upcoming()[0].world, 2);
    assert_eq!(cache.current().len(), 1);
    assert_eq!(cache.current()[0].world, 1);
    assert_eq!(cache.current()[0].status, WaveStatus::Current);
    assert_eq!(
        signals,
        vec![WaveSignal::WavePromoted {
            world: 1,
            region: Region::Asgarnia,
            eta: now() - Duration::minutes(1),
        }]
    );
}

#[test]
fn test_promotion_boundary_is_inclusive() {
    let mut cache = WaveCache::new();
    ingest(
        &mut cache,
        vec![wave(1, Region::Asgarnia, now(), WaveStatus::Upcoming)],
    );

    tick(&mut cache, now());

    assert!(cache.upcoming().is_empty());
    assert_eq!(cache.current().len(), 1);
}

#[test]
fn test_tick_expires_stale_current_waves() {
    let eta = now() - Duration::minutes(EXPIRY_GRACE_MINUTES + 1);
    let mut cache = WaveCache::new();
    ingest(
        &mut cache,
        vec![
            wave(1, Region::Asgarnia, eta, WaveStatus::Current),
            wave(2, Region::Kandarin, now() - Duration::minutes(2), WaveStatus::Current),
        ],
    );

    let signals = tick(&mut cache, now());

    assert_eq!(cache.current().len(), 1);
    assert_eq!(cache.current()[0].world, 2);
    assert_eq!(
        signals,
        vec![WaveSignal::WaveExpired {
            world: 1,
            region: Region::Asgarnia,
            eta,
        }]
    );
}

#[test]
fn test_expiry_boundary_is_inclusive() {
    // A wave at exactly eta + grace is removed.
    let eta = now() - Duration::minutes(EXPIRY_GRACE_MINUTES);
    let mut cache = WaveCache::new();
    ingest(&mut cache, vec![wave(1, Region::Asgarnia, eta, WaveStatus::Current)]);

    tick(&mut cache, now());

    assert!(cache.current().is_empty());
}

#[test]
fn test_promoted_wave_is_not_promoted_again() {
    let mut cache = WaveCache::new();
    ingest(
        &mut cache,
        vec![wave(1, Region::Asgarnia, now() - Duration::minutes(1), WaveStatus::Upcoming)],
    );

    tick(&mut cache, now());
    let signals = tick(&mut cache, now() + Duration::minutes(1));

    assert!(signals.is_empty());
    assert_eq!(cache.current().len(), 1);
}

#[test]
fn test_stale_upcoming_passes_through_in_one_tick() {
    // Ingested already past the grace window: promoted and expired in the
    // same tick, never observable in either set afterwards.
    let eta = now() - Duration::minutes(EXPIRY_GRACE_MINUTES + 5);
    let mut cache = WaveCache::new();
    ingest(&mut cache, vec![wave(1, Region::Asgarnia, eta, WaveStatus::Upcoming)]);

    let signals = tick(&mut cache, now());

    assert!(cache.is_empty());
    assert_eq!(signals.len(), 2);
    assert!(matches!(signals[0], WaveSignal::WavePromoted { world: 1, .. }));
    assert!(matches!(signals[1], WaveSignal::WaveExpired { world: 1, .. }));
}

#[test]
fn test_far_future_eta_never_expires() {
    // The expiry deadline for an ETA at the edge of the timestamp range is
    // unrepresentable; the wave stays put instead of panicking.
    let mut cache = WaveCache::new();
    ingest(
        &mut cache,
        vec![wave(1, Region::Asgarnia, DateTime::<Utc>::MAX_UTC, WaveStatus::Current)],
    );

    let signals = tick(&mut cache, now());

    assert!(signals.is_empty());
    assert_eq!(cache.current().len(), 1);
}

#[test]
fn test_empty_tick_is_a_noop() {
    let mut cache = WaveCache::new();
    assert!(tick(&mut cache, now()).is_empty());

    ingest(
        &mut cache,
        vec![wave(1, Region::Asgarnia, now() + Duration::minutes(30), WaveStatus::Upcoming)],
    );
    let before = cache.upcoming().to_vec();
    assert!(tick(&mut cache, now()).is_empty());
    assert_eq!(cache.upcoming(), before);
}
