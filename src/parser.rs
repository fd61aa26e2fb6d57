use crate::error::InputError;
use crate::schedule::{Slot, SlotKey};

/// Splits the free-text dates field into tokens
/// Any run of commas and whitespace separates two tokens
pub fn split_slot_tokens(text: &str) -> Vec<&str> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Parses one number of a `month/day/hour` triple and checks its range
fn parse_part(part: &str, min: u32, max: u32) -> Option<u32> {
    let value: u32 = part.trim().parse().ok()?;
    if value < min || value > max {
        return None;
    }
    Some(value)
}

/// Parses a `month/day/hour` or `month/day/hour/player` token into a slot
/// A `.` is accepted wherever a `/` is, so `8.12.4` reads the same as `8/12/4`
pub fn parse_slot_token(token: &str) -> Result<Slot, InputError> {
    let normalized = token.replace('.', "/");
    let parts: Vec<&str> = normalized.split('/').collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(InputError::InvalidSlotSyntax(token.to_string()));
    }

    let invalid = || InputError::InvalidSlotSyntax(token.to_string());
    let month = parse_part(parts[0], 1, 12).ok_or_else(invalid)?;
    let day = parse_part(parts[1], 1, 31).ok_or_else(invalid)?;
    let hour = parse_part(parts[2], 0, 23).ok_or_else(invalid)?;

    // "8/12/4/" carries no reservation
    let reserved = parts
        .get(3)
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(str::to_string);

    Ok(Slot {
        key: SlotKey::new(month, day, hour),
        reserved,
    })
}

/// Sorts slots chronologically; slots with the same key keep their input order
pub fn sort_slots(slots: &mut [Slot]) {
    slots.sort_by_key(|s| s.key);
}

/// Parses a comma-separated player list such as `Kim, Lee, Park`
pub fn parse_player_list(text: &str) -> Vec<String> {
    text.split(',').map(|name| name.trim().to_string()).collect()
}
