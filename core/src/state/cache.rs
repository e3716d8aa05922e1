//! Live wave collections.
//!
//! Pure storage for the tracker's two record sets. Transition logic
//! (ingest, promotion, expiry) lives in the `lifecycle` module.

use starwatch_types::WaveRecord;

/// Owned state of the wave tracker: the upcoming and current record sets,
/// each kept in insertion order for list-style display.
///
/// Created at startup, mutated only by `lifecycle::ingest`/`lifecycle::tick`,
/// dropped at shutdown. A record lives in exactly one of the two sets.
#[derive(Debug, Clone, Default)]
pub struct WaveCache {
    pub(crate) upcoming: Vec<WaveRecord>,
    pub(crate) current: Vec<WaveRecord>,
}

impl WaveCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upcoming waves, in insertion order.
    pub fn upcoming(&self) -> &[WaveRecord] {
        &self.upcoming
    }

    /// Current waves, in insertion order.
    pub fn current(&self) -> &[WaveRecord] {
        &self.current
    }

    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty() && self.current.is_empty()
    }
}
