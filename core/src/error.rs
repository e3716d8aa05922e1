use thiserror::Error;

/// Errors surfaced by the core's host boundaries.
///
/// The engine itself is total: parsing, classification, lifecycle, and
/// aggregation degrade to policy defaults instead of failing.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] confy::ConfyError),
}
