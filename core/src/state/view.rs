//! Serializable views over the tracker state.
//!
//! These types define the contract for worker output, ensuring the emitting
//! and consuming sides use identical struct definitions for
//! serialization/deserialization.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use starwatch_types::{Region, RegionActivity, RegionMeta, WaveRecord};

use crate::query::region_overview;
use crate::state::WaveCache;

/// Full display contract: the derived region board plus the raw record
/// lists, captured from the cache at one point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerSnapshot {
    /// Activity per canonical region (all 7 keys always present).
    pub region_status: HashMap<Region, RegionActivity>,
    /// Summary metadata per canonical region (all 7 keys always present).
    pub region_meta: HashMap<Region, RegionMeta>,
    /// Upcoming waves, in insertion order.
    pub upcoming: Vec<WaveRecord>,
    /// Current waves, in insertion order.
    pub current: Vec<WaveRecord>,
}

impl TrackerSnapshot {
    /// Capture the cache as a snapshot, recomputing the region board.
    pub fn capture(cache: &WaveCache) -> Self {
        let overview = region_overview(cache);
        Self {
            region_status: overview.status,
            region_meta: overview.meta,
            upcoming: cache.upcoming().to_vec(),
            current: cache.current().to_vec(),
        }
    }
}

/// Output of a one-shot feed-worker run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedWorkerOutput {
    /// Number of records parsed from the blob.
    pub record_count: usize,
    /// Elapsed parse+ingest time in milliseconds.
    pub elapsed_ms: u128,
    pub snapshot: TrackerSnapshot,
}
