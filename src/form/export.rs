use std::fs;
use std::path::Path;
use chrono::{DateTime, Local};
use csv::WriterBuilder;
use crate::display::render_schedule;
use crate::error::StoreError;
use crate::schedule::{slot_to_label, GroupSchedule};
use super::input::ScheduleInput;

/// Builds the saved-result text: a timestamped header, the input as entered, then the schedule
///
/// # Arguments
/// * `input` - The form the schedule was generated from
/// * `schedule` - The generated schedule
/// * `generated_at` - Timestamp written into the header
pub fn build_report(input: &ScheduleInput, schedule: &GroupSchedule, generated_at: DateTime<Local>) -> String {
    let mut out = format!(
        "## Golf group schedule ({}) ##\n\n",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    );
    out.push_str("--- Input ---\n");
    out.push_str(&format!("- Players: {}\n", input.num_players.trim()));
    let names: Vec<&str> = input.player_names.iter().map(|n| n.trim()).collect();
    out.push_str(&format!("- Names: {}\n", names.join(", ")));
    out.push_str(&format!("- Dates as entered: {}\n", input.dates_text.trim()));
    out.push_str(&format!("- Group size: {}\n\n", input.group_size.trim()));
    out.push_str("--- Result ---\n");
    out.push_str(&render_schedule(schedule));
    out
}

/// Writes the text report to `path`, overwriting any existing file
pub fn write_report_to_file(
    path: &Path,
    input: &ScheduleInput,
    schedule: &GroupSchedule,
) -> Result<(), StoreError> {
    fs::write(path, build_report(input, schedule, Local::now()))?;
    log::info!("Wrote report to {}", path.display());
    Ok(())
}

/// Exports the schedule as CSV, one row per slot
/// Columns: slot label, month, day, hour, reserved player, players joined by "; "
pub fn export_schedule_to_csv(path: &Path, schedule: &GroupSchedule) -> Result<(), StoreError> {
    let mut wtr = WriterBuilder::new().has_headers(true).from_path(path)?;
    wtr.write_record(["slot", "month", "day", "hour", "reserved", "players"])?;

    for group in &schedule.groups {
        wtr.write_record([
            slot_to_label(&group.slot),
            group.slot.month.to_string(),
            group.slot.day.to_string(),
            group.slot.hour.to_string(),
            group.reserved.clone().unwrap_or_default(),
            group.players.join("; "),
        ])?;
    }

    wtr.flush()?;
    log::info!("Exported {} groups to {}", schedule.groups.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::tempdir;
    use crate::schedule::schedule_groups;

    fn sample() -> (ScheduleInput, GroupSchedule) {
        let input = ScheduleInput {
            num_players: "3".to_string(),
            player_names: vec!["Kim".to_string(), "Lee".to_string(), "Park".to_string()],
            dates_text: "8/13/9, 8/12/4/Park".to_string(),
            group_size: "2".to_string(),
        };
        let validated = input.validate().unwrap();
        let schedule = schedule_groups(&validated.roster, &validated.slots, validated.group_size);
        (input, schedule)
    }

    #[test]
    fn test_build_report() {
        let (input, schedule) = sample();
        let at = Local.with_ymd_and_hms(2025, 8, 1, 9, 30, 0).unwrap();

        let report = build_report(&input, &schedule, at);

        assert!(report.starts_with("## Golf group schedule (2025-08-01 09:30:00) ##\n\n--- Input ---\n"));
        assert!(report.contains("- Players: 3\n"));
        assert!(report.contains("- Names: Kim, Lee, Park\n"));
        assert!(report.contains("- Dates as entered: 8/13/9, 8/12/4/Park\n"));
        assert!(report.contains("- Group size: 2\n\n--- Result ---\n--- Final golf group schedule ---\n"));
        assert!(report.contains("[8/12 PM 04:00]: Kim, Park\n"));
    }

    #[test]
    fn test_write_report_to_file() {
        let (input, schedule) = sample();
        let dir = tempdir().unwrap();
        let path = dir.path().join("result.txt");

        write_report_to_file(&path, &input, &schedule).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("--- Result ---"));
    }

    #[test]
    fn test_export_schedule_to_csv() {
        let (_, schedule) = sample();
        let dir = tempdir().unwrap();
        let path = dir.path().join("result.csv");

        export_schedule_to_csv(&path, &schedule).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), vec!["slot", "month", "day", "hour", "reserved", "players"]);

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "8/12 PM 04:00");
        assert_eq!(&rows[0][4], "Park");
        assert_eq!(&rows[0][5], "Kim; Park");
        assert_eq!(&rows[1][4], "");
        assert_eq!(&rows[1][5], "Lee; Park");
    }

    #[test]
    fn test_export_to_missing_directory_is_error() {
        let (_, schedule) = sample();
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope").join("result.csv");
        assert!(export_schedule_to_csv(&path, &schedule).is_err());
    }
}
