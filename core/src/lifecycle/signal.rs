use chrono::{DateTime, Utc};
use starwatch_types::Region;

/// Signals emitted by ingest/tick for cross-cutting concerns.
/// These represent "interesting things that happened" at a higher level
/// than the raw record sets, so hosts can log or rebroadcast transitions
/// without diffing snapshots.
#[derive(Debug, Clone, PartialEq)]
pub enum WaveSignal {
    /// A parse batch fully replaced the live sets.
    WaveSetReplaced { upcoming: usize, current: usize },

    /// An upcoming wave reached its ETA and moved to current.
    WavePromoted {
        world: u32,
        region: Region,
        eta: DateTime<Utc>,
    },

    /// A current wave passed its expiry deadline and was removed.
    WaveExpired {
        world: u32,
        region: Region,
        eta: DateTime<Utc>,
    },
}
