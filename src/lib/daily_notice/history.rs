use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::PathBuf,
};

use chrono::{Local, NaiveDateTime};
use log::{debug, info};

use super::error::NoticeResult;
use super::models::history_model::{GenerationEntry, HistoryRecord};

/// Append-only log of generated notices, oldest first, capped at `limit` records.
/// Every operation reads and rewrites the whole file.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
    limit: usize,
}

impl HistoryStore {
    pub fn new(path: PathBuf, limit: usize) -> Self {
        Self { path, limit }
    }

    pub fn append(&self, entry: GenerationEntry) -> NoticeResult<HistoryRecord> {
        self.append_at(entry, Local::now().naive_local())
    }

    pub fn append_at(
        &self,
        entry: GenerationEntry,
        timestamp: NaiveDateTime,
    ) -> NoticeResult<HistoryRecord> {
        let mut records = self.list()?;
        let record = HistoryRecord::stamped(entry, timestamp);
        records.push(record.clone());
        if records.len() > self.limit {
            let dropped = records.len() - self.limit;
            records.drain(..dropped);
            debug!("Dropped {} old history record(s)", dropped);
        }
        self.write(&records)?;
        Ok(record)
    }

    pub fn list(&self) -> NoticeResult<Vec<HistoryRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let history_file = BufReader::new(File::open(&self.path)?);
        Ok(serde_json::from_reader(history_file)?)
    }

    /// Removes every record `predicate` accepts, keeping the order of the rest.
    pub fn delete<P>(&self, mut predicate: P) -> NoticeResult<usize>
    where
        P: FnMut(&HistoryRecord) -> bool,
    {
        let mut records = self.list()?;
        let before = records.len();
        records.retain(|record| !predicate(record));
        let removed = before - records.len();
        if removed > 0 {
            self.write(&records)?;
        }
        info!("Deleted {} history record(s)", removed);
        Ok(removed)
    }

    pub fn clear(&self) -> NoticeResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        info!("Cleared history at {}", self.path.display());
        Ok(())
    }

    fn write(&self, records: &[HistoryRecord]) -> NoticeResult<()> {
        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, records)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/history_tests.rs"]
mod tests;
