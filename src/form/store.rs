use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use crate::error::StoreError;
use super::input::ScheduleInput;

pub const DEFAULT_INPUT_FILE: &str = "golf_scheduler_input.json";

/// Keeps the last-used schedule form in a JSON file
#[derive(Debug, Clone)]
pub struct InputStore {
    path: PathBuf,
}

impl InputStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        InputStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the form as 4-space indented JSON, replacing any previous save
    pub fn save(&self, input: &ScheduleInput) -> Result<(), StoreError> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        input.serialize(&mut serializer)?;
        fs::write(&self.path, buf)?;
        log::info!("Saved input to {}", self.path.display());
        Ok(())
    }

    /// Reads the saved form; `Ok(None)` when nothing has been saved yet
    pub fn load(&self) -> Result<Option<ScheduleInput>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No saved input at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let input = serde_json::from_str(&contents)?;
        Ok(Some(input))
    }
}
