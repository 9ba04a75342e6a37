use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use chrono::Local;
use log::{error, info, warn};
use serde_json::Value;

use super::error::{NoticeError, NoticeResult};
use super::models::schedule_model::{ScheduleDocument, SchoolDay};

const SECTIONS: [(&str, &str); 3] = [
    ("课程安排", "courses"),
    ("社团安排", "clubs"),
    ("值日安排", "duty"),
];

pub fn load_schedule(path: &Path) -> NoticeResult<ScheduleDocument> {
    info!(
        "Reading schedule from {}",
        std::path::absolute(path)?.display()
    );
    let schedule_file = BufReader::new(File::open(path)?);
    let value: Value = serde_json::from_reader(schedule_file)?;
    validate_schedule(value)
}

/// Like [`load_schedule`], but a missing or broken file only gets reported and
/// the notice is composed from an empty schedule.
pub fn load_schedule_or_default(path: &Path) -> ScheduleDocument {
    match load_schedule(path) {
        Ok(schedule) => schedule,
        Err(err) => {
            error!(
                "Could not load schedule from {}: {}. Continuing with an empty schedule",
                path.display(),
                err
            );
            ScheduleDocument::default()
        }
    }
}

/// Checks the shape of a schedule document and converts it.
pub fn validate_schedule(value: Value) -> NoticeResult<ScheduleDocument> {
    let Some(document) = value.as_object() else {
        return Err(NoticeError::InvalidSchedule(
            "top level must be an object".to_owned(),
        ));
    };

    for (key, alias) in SECTIONS {
        let Some(section) = document.get(key).or_else(|| document.get(alias)) else {
            return Err(NoticeError::InvalidSchedule(format!(
                "missing required section {}",
                key
            )));
        };
        let Some(days) = section.as_object() else {
            return Err(NoticeError::InvalidSchedule(format!(
                "section {} must map weekdays to entries",
                key
            )));
        };
        if let Some(day) = days.keys().find(|day| SchoolDay::from_label(day).is_none()) {
            return Err(NoticeError::InvalidSchedule(format!(
                "section {} has unknown weekday {}",
                key, day
            )));
        }
    }

    serde_json::from_value(value).map_err(|err| NoticeError::InvalidSchedule(err.to_string()))
}

/// Writes the schedule, copying the file it replaces into `backup_dir` first.
pub fn save_schedule(
    schedule: &ScheduleDocument,
    path: &Path,
    backup_dir: &Path,
) -> NoticeResult<()> {
    match create_backup(path, backup_dir) {
        Ok(Some(backup)) => info!("Backed up schedule to {}", backup.display()),
        Ok(None) => {}
        Err(err) => warn!("Could not back up schedule: {}", err),
    }

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, schedule)?;
    writer.flush()?;
    info!("Saved schedule to {}", path.display());
    Ok(())
}

/// Copies the current schedule file to a time-stamped backup, if there is one.
pub fn create_backup(path: &Path, backup_dir: &Path) -> NoticeResult<Option<PathBuf>> {
    if !path.exists() {
        return Ok(None);
    }
    fs::create_dir_all(backup_dir)?;
    let stamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
    let mut backup = backup_dir.join(format!("schedule_data_backup_{}.json", stamp));
    // several saves within one second get a counter instead of overwriting
    let mut counter = 1;
    while backup.exists() {
        backup = backup_dir.join(format!("schedule_data_backup_{}_{}.json", stamp, counter));
        counter += 1;
    }
    fs::copy(path, &backup)?;
    Ok(Some(backup))
}

#[cfg(test)]
#[path = "tests/schedule_store_tests.rs"]
mod tests;
