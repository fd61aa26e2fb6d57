use std::collections::BTreeMap;
use crate::schedule::{slot_to_label, GroupSchedule, ScheduledGroup};

/// Formats one group as `[8/12 PM 04:00]: Kim, Lee`
pub fn format_group_line(group: &ScheduledGroup) -> String {
    format!("[{}]: {}", slot_to_label(&group.slot), group.players.join(", "))
}

/// Renders the schedule and per-player participation as plain text
///
/// Players are listed by how often they play (most first), then by name.
pub fn render_schedule(schedule: &GroupSchedule) -> String {
    let mut out = String::from("--- Final golf group schedule ---\n");
    for group in &schedule.groups {
        out.push_str(&format_group_line(group));
        out.push('\n');
    }

    // Slot labels each player appears in, chronological
    let mut player_slots: BTreeMap<&str, Vec<String>> = BTreeMap::new();
    for group in &schedule.groups {
        for player in &group.players {
            player_slots
                .entry(player.as_str())
                .or_default()
                .push(slot_to_label(&group.slot));
        }
    }

    let mut players: Vec<(&str, u32)> = schedule
        .play_counts
        .iter()
        .map(|(p, c)| (p.as_str(), *c))
        .collect();
    players.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    out.push_str("\n--- Participation by player ---\n");
    for (player, count) in players {
        let slots = player_slots.get(player).map(|s| s.join(", ")).unwrap_or_default();
        let rounds = if count == 1 { "round" } else { "rounds" };
        out.push_str(&format!("- {}: {} {} ({})\n", player, count, rounds, slots));
    }

    out
}

/// Prints the rendered schedule to stdout
pub fn print_schedule(schedule: &GroupSchedule) {
    println!("{}", render_schedule(schedule));
}
