use super::types::SlotKey;

/// Afternoon tee times are written 1-6 and 12; everything else is a morning start
pub fn period_label(hour: u32) -> &'static str {
    if (1..=6).contains(&hour) || hour == 12 {
        "PM"
    } else {
        "AM"
    }
}

/// Converts a slot key to its display label, e.g. `8/12 PM 04:00`
pub fn slot_to_label(key: &SlotKey) -> String {
    format!("{}/{} {} {:02}:00", key.month, key.day, period_label(key.hour), key.hour)
}

/// Converts a slot key back to the `month/day/hour` notation it was typed in
pub fn slot_to_notation(key: &SlotKey) -> String {
    format!("{}/{}/{}", key.month, key.day, key.hour)
}
