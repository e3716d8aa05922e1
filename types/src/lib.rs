//! Shared domain types for Starwatch.
//!
//! These types define the contract between the core engine and any
//! display/broadcast collaborator, ensuring both sides use identical
//! struct definitions for serialization/deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One of the 7 canonical regions used for display aggregation.
///
/// Serialized names match the display labels verbatim (including slashes)
/// so collaborators can render map keys without a lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Asgarnia,
    Kandarin,
    Wilderness,
    #[serde(rename = "Kharidian Desert")]
    KharidianDesert,
    Misthalin,
    #[serde(rename = "Pisc/Gnome/Tirannwn")]
    PiscGnomeTirannwn,
    #[serde(rename = "Frem/Lunar")]
    FremLunar,
}

impl Region {
    /// All canonical regions, in display order.
    pub const ALL: [Region; 7] = [
        Region::Asgarnia,
        Region::Kandarin,
        Region::Wilderness,
        Region::KharidianDesert,
        Region::Misthalin,
        Region::PiscGnomeTirannwn,
        Region::FremLunar,
    ];

    /// Display label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Region::Asgarnia => "Asgarnia",
            Region::Kandarin => "Kandarin",
            Region::Wilderness => "Wilderness",
            Region::KharidianDesert => "Kharidian Desert",
            Region::Misthalin => "Misthalin",
            Region::PiscGnomeTirannwn => "Pisc/Gnome/Tirannwn",
            Region::FremLunar => "Frem/Lunar",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Lifecycle stage of a wave record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaveStatus {
    Upcoming,
    Current,
}

/// One detected wave event. Immutable after creation; promotion copies the
/// record and rewrites `status`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveRecord {
    /// Numbered server instance hosting the event. Always positive.
    pub world: u32,
    /// Magnitude/tier of the event. Always positive.
    pub size: u8,
    pub region: Region,
    /// Absolute timestamp at which the event starts (or started).
    pub eta: DateTime<Utc>,
    pub status: WaveStatus,
}

/// Derived per-region activity level.
///
/// `Active` always wins over `Upcoming`: a region with both a current and an
/// upcoming wave reports `active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionActivity {
    Idle,
    Upcoming,
    Active,
}

/// Derived per-region summary over the union of upcoming and current waves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionMeta {
    /// Largest wave size seen for the region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_size: Option<u8>,
    /// Soonest ETA for the region, in absolute time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soon_eta: Option<DateTime<Utc>>,
}
