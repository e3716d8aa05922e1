//! Per-region status board.
//!
//! Pure function of the cache, recomputed from scratch on every call; no
//! incremental state is retained between calls.

use hashbrown::HashMap;
use starwatch_types::{Region, RegionActivity, RegionMeta};

use crate::state::WaveCache;

/// Derived status and summary metadata for all 7 canonical regions.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionOverview {
    pub status: HashMap<Region, RegionActivity>,
    pub meta: HashMap<Region, RegionMeta>,
}

/// Derive the region board from the live sets.
///
/// Every region starts idle with empty metadata. Current waves mark their
/// region active; upcoming waves mark theirs upcoming only where still idle
/// (active is never downgraded). Metadata runs over the union of both sets:
/// largest size and soonest absolute ETA per region.
pub fn region_overview(cache: &WaveCache) -> RegionOverview {
    let mut status: HashMap<Region, RegionActivity> = Region::ALL
        .iter()
        .map(|region| (*region, RegionActivity::Idle))
        .collect();
    let mut meta: HashMap<Region, RegionMeta> = Region::ALL
        .iter()
        .map(|region| (*region, RegionMeta::default()))
        .collect();

    for record in cache.current() {
        status.insert(record.region, RegionActivity::Active);
    }

    for record in cache.upcoming() {
        let entry = status.entry(record.region).or_insert(RegionActivity::Idle);
        if *entry == RegionActivity::Idle {
            *entry = RegionActivity::Upcoming;
        }
    }

    for record in cache.upcoming().iter().chain(cache.current()) {
        let entry = meta.entry(record.region).or_default();
        entry.top_size = Some(match entry.top_size {
            Some(size) => size.max(record.size),
            None => record.size,
        });
        entry.soon_eta = Some(match entry.soon_eta {
            Some(eta) => eta.min(record.eta),
            None => record.eta,
        });
    }

    RegionOverview { status, meta }
}
