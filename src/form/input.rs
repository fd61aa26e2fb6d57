use std::collections::HashSet;
use serde::{Deserialize, Serialize};
use crate::error::InputError;
use crate::parser::{parse_slot_token, sort_slots, split_slot_tokens};
use crate::schedule::{Player, Slot};

pub const MIN_PLAYERS: usize = 1;
pub const MAX_PLAYERS: usize = 10;

/// The schedule form exactly as the user filled it in
///
/// Fields stay as typed text so a half-finished form can be saved and restored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleInput {
    pub num_players: String,
    pub player_names: Vec<String>,
    pub dates_text: String, // e.g. "8/12/4, 8/13/4/Kim"
    pub group_size: String,
}

impl Default for ScheduleInput {
    fn default() -> Self {
        ScheduleInput {
            num_players: "4".to_string(),
            player_names: Vec::new(),
            dates_text: String::new(),
            group_size: String::new(),
        }
    }
}

/// Input that satisfies everything `schedule_groups` expects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInput {
    pub roster: Vec<Player>,
    pub slots: Vec<Slot>, // sorted by key
    pub group_size: usize,
}

impl ScheduleInput {
    /// Checks the form and converts it into scheduler input
    ///
    /// Fields are checked in form order and the first problem is returned.
    pub fn validate(&self) -> Result<ValidatedInput, InputError> {
        let roster = self.validate_roster()?;
        let slots = self.validate_slots(&roster)?;

        let group_size = self
            .group_size
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|size| (1..=roster.len()).contains(size))
            .ok_or_else(|| InputError::InvalidGroupSize {
                value: self.group_size.clone(),
                max: roster.len(),
            })?;

        Ok(ValidatedInput { roster, slots, group_size })
    }

    fn validate_roster(&self) -> Result<Vec<Player>, InputError> {
        let expected = self
            .num_players
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|n| (MIN_PLAYERS..=MAX_PLAYERS).contains(n))
            .ok_or_else(|| InputError::InvalidRosterSize {
                value: self.num_players.clone(),
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            })?;

        if self.player_names.len() != expected {
            return Err(InputError::PlayerCountMismatch {
                expected,
                found: self.player_names.len(),
            });
        }

        let mut seen = HashSet::new();
        let mut roster = Vec::with_capacity(expected);
        for (index, raw) in self.player_names.iter().enumerate() {
            let name = raw.trim();
            if name.is_empty() {
                return Err(InputError::EmptyPlayerName { position: index + 1 });
            }
            if !seen.insert(name) {
                return Err(InputError::DuplicatePlayer(name.to_string()));
            }
            roster.push(name.to_string());
        }
        Ok(roster)
    }

    fn validate_slots(&self, roster: &[Player]) -> Result<Vec<Slot>, InputError> {
        let tokens = split_slot_tokens(&self.dates_text);
        if tokens.is_empty() {
            return Err(InputError::NoSlots);
        }

        let mut slots = Vec::with_capacity(tokens.len());
        for token in tokens {
            let slot = parse_slot_token(token)?;
            if let Some(player) = &slot.reserved {
                if !roster.contains(player) {
                    return Err(InputError::UnknownReservedPlayer {
                        player: player.clone(),
                        token: token.to_string(),
                    });
                }
            }
            slots.push(slot);
        }

        log::debug!("Slots before sorting: {:?}", slots);
        sort_slots(&mut slots);
        log::debug!("Slots after sorting: {:?}", slots);
        Ok(slots)
    }
}
