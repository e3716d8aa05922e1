pub mod cache;
pub mod view;

pub use cache::WaveCache;
pub use view::{FeedWorkerOutput, TrackerSnapshot};
