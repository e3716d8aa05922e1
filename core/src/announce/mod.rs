//! Announcement text parsing
//!
//! Turns one flattened chat announcement (message body plus any embed
//! titles/descriptions/fields, newline-joined by the ingestion side) into
//! structured wave records:
//!
//! - **parser**: locates "Size N • World M" header lines and pairs each with
//!   the detail line that follows it
//! - **region**: maps the free-text region label to a canonical [`Region`]
//! - **reltime**: resolves "N minutes ago/in" phrases to signed offsets
//!
//! [`Region`]: starwatch_types::Region

mod parser;
pub mod region;
pub mod reltime;


pub use parser::parse_announcement;
