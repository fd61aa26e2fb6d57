pub mod types;
pub mod slot_utils;
pub mod candidates;
pub mod groups;

pub use types::{Player, PlayCount, Slot, SlotKey, ScheduledGroup, GroupSchedule};
pub use slot_utils::{slot_to_label, slot_to_notation};
pub use groups::schedule_groups;
