pub mod input;
pub mod store;
pub mod export;

pub use input::ScheduleInput;
pub use store::{InputStore, DEFAULT_INPUT_FILE};
pub use export::{build_report, export_schedule_to_csv, write_report_to_file};
