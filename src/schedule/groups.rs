use std::collections::HashSet;
use super::types::{Player, PlayCount, Slot, ScheduledGroup, GroupSchedule};
use super::candidates::{count_reservations, preferred_candidates, full_candidates, rank_candidates};

/// Forms one group per slot, in the order the slots are given.
///
/// Expects `slots` sorted by key, every reserved player to be on the roster,
/// and `1 <= group_size <= roster.len()`. Input that breaks these is rejected
/// by `form::input` before it gets here.
///
/// 1. Seat the slot's reserved player, if any.
/// 2. Fill the remaining seats from players who sat out the previous slot,
///    falling back to the whole roster when there are not enough of them.
/// 3. Within the pool, least-played first, then most reservations, then by name.
pub fn schedule_groups(roster: &[Player], slots: &[Slot], group_size: usize) -> GroupSchedule {
    let mut play_counts: PlayCount = roster.iter().map(|p| (p.clone(), 0)).collect();
    let reservation_counts = count_reservations(slots);

    let mut groups = Vec::with_capacity(slots.len());
    let mut last_round: HashSet<&str> = HashSet::new();

    for slot in slots {
        let mut group: Vec<&Player> = Vec::with_capacity(group_size);

        // A reservation is only honored for roster members
        if let Some(reserved) = slot
            .reserved
            .as_ref()
            .and_then(|r| roster.iter().find(|p| *p == r))
        {
            group.push(reserved);
        }

        let needed = group_size.saturating_sub(group.len());
        if needed > 0 {
            let mut candidates = preferred_candidates(roster, &group, &last_round);
            if candidates.len() < needed {
                candidates = full_candidates(roster, &group);
            }
            rank_candidates(&mut candidates, &play_counts, &reservation_counts);
            group.extend(candidates.into_iter().take(needed));
        }

        for player in &group {
            if let Some(count) = play_counts.get_mut(player.as_str()) {
                *count += 1;
            }
        }

        let mut players: Vec<Player> = group.iter().map(|p| (*p).clone()).collect();
        players.sort();

        last_round = group.iter().map(|&p| p.as_str()).collect();
        groups.push(ScheduledGroup {
            slot: slot.key,
            reserved: slot.reserved.clone(),
            players,
        });
    }

    GroupSchedule { groups, play_counts }
}
