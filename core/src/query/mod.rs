//! Derived read-only views over the live wave sets.

pub mod overview;

pub use overview::{RegionOverview, region_overview};
