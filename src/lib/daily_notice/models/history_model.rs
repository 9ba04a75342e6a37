use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::notice_model::Notice;

/// What a generation hands to the history before it is time-stamped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationEntry {
    pub date: String,
    pub weekday: String,
    pub weather: String,
    pub special_notes: String,
    pub reminder_content: String,
}

impl GenerationEntry {
    pub fn new(target: NaiveDate, notice: &Notice, special_notes: &str, text: &str) -> Self {
        Self {
            date: target.format("%Y年%m月%d日").to_string(),
            weekday: notice.weekday.clone(),
            weather: notice.weather.clone(),
            special_notes: special_notes.to_owned(),
            reminder_content: text.to_owned(),
        }
    }
}

/// Model for one entry of `history_records.json`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HistoryRecord {
    pub date: String,
    pub weekday: String,
    pub weather: String,
    #[serde(default)]
    pub special_notes: String,
    pub reminder_content: String,
    pub timestamp: NaiveDateTime,
}

impl HistoryRecord {
    pub fn stamped(entry: GenerationEntry, timestamp: NaiveDateTime) -> Self {
        Self {
            date: entry.date,
            weekday: entry.weekday,
            weather: entry.weather,
            special_notes: entry.special_notes,
            reminder_content: entry.reminder_content,
            timestamp,
        }
    }
}

impl fmt::Display for HistoryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "时间: {}", self.timestamp.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(f, "日期: {} {}", self.date, self.weekday)?;
        writeln!(f, "天气: {}", self.weather)?;
        if !self.special_notes.trim().is_empty() {
            writeln!(f, "特别注意事项: {}", self.special_notes)?;
        }
        Ok(())
    }
}
