use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};
use super::types::{Player, PlayCount, Slot};

/// Counts how many slots each player has reserved across the whole input
/// Returns a HashMap: player -> reservation_count (higher count = filled into open seats sooner)
pub fn count_reservations(slots: &[Slot]) -> HashMap<&str, u32> {
    let mut counts = HashMap::new();
    for slot in slots {
        if let Some(player) = &slot.reserved {
            *counts.entry(player.as_str()).or_insert(0) += 1;
        }
    }
    counts
}

/// Roster members not already seated and who did not play the previous slot
pub fn preferred_candidates<'a>(
    roster: &'a [Player],
    group: &[&'a Player],
    last_round: &HashSet<&str>,
) -> Vec<&'a Player> {
    roster
        .iter()
        .filter(|p| !last_round.contains(p.as_str()) && !group.contains(p))
        .collect()
}

/// Roster members not already seated, ignoring who played the previous slot
pub fn full_candidates<'a>(roster: &'a [Player], group: &[&'a Player]) -> Vec<&'a Player> {
    roster.iter().filter(|p| !group.contains(p)).collect()
}

/// Sorts candidates so the least-played come first. Ties go to the player with
/// more reservations elsewhere in the schedule, then to the lower name.
pub fn rank_candidates(
    candidates: &mut [&Player],
    play_counts: &PlayCount,
    reservation_counts: &HashMap<&str, u32>,
) {
    candidates.sort_by_key(|&p| {
        let played = play_counts.get(p.as_str()).copied().unwrap_or(0);
        let reserved = reservation_counts.get(p.as_str()).copied().unwrap_or(0);
        (played, Reverse(reserved), p.as_str())
    });
}
