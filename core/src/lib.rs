pub mod announce;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod query;
pub mod state;

// Re-exports for convenience
pub use announce::parse_announcement;
pub use error::CoreError;
pub use lifecycle::WaveSignal;
pub use state::{TrackerSnapshot, WaveCache};
