use std::collections::BTreeMap;
use serde::{Serialize, Deserialize};

/// A player is identified by name only
pub type Player = String;

/// Cumulative number of groups each roster member has been placed into
pub type PlayCount = BTreeMap<Player, u32>;

/// Chronological key of a tee time. Ordering is month, then day, then hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlotKey {
    pub month: u32,
    pub day: u32,
    pub hour: u32,
}

impl SlotKey {
    pub fn new(month: u32, day: u32, hour: u32) -> Self {
        SlotKey { month, day, hour }
    }
}

/// A tee time, optionally claimed by one player in advance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub key: SlotKey,
    pub reserved: Option<Player>,
}

/// The group formed for a single slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledGroup {
    pub slot: SlotKey,
    pub reserved: Option<Player>,
    pub players: Vec<Player>, // sorted by name
}

/// Full result of one scheduling run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSchedule {
    pub groups: Vec<ScheduledGroup>, // chronological, one per input slot
    pub play_counts: PlayCount,
}
