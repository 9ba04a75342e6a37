use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::PathBuf,
};

use chrono::{Duration, NaiveDate, NaiveDateTime};
use log::{debug, warn};

use super::error::NoticeResult;
use super::models::weather_model::CachedWeather;

/// File backed cache of weather lines, keyed by `<city>_<date>`.
/// Cache failures never reach the caller, they only cost a fresh lookup.
#[derive(Debug, Clone)]
pub struct WeatherCache {
    path: PathBuf,
    ttl: Duration,
}

impl WeatherCache {
    pub fn new(path: PathBuf, ttl: Duration) -> Self {
        Self { path, ttl }
    }

    pub fn key(city: &str, date: NaiveDate) -> String {
        format!("{}_{}", city, date.format("%Y-%m-%d"))
    }

    /// Cached line for the key, if it was stored less than the TTL before `now`.
    /// An expired entry is removed from the file.
    pub fn get(&self, city: &str, date: NaiveDate, now: NaiveDateTime) -> Option<String> {
        let key = Self::key(city, date);
        let mut entries = match self.read() {
            Ok(entries) => entries,
            Err(err) => {
                warn!("Ignoring unreadable weather cache {}: {}", self.path.display(), err);
                return None;
            }
        };

        let entry = entries.get(&key)?;
        if now - entry.timestamp > self.ttl {
            debug!("Weather cache entry {} expired", key);
            entries.remove(&key);
            if let Err(err) = self.write(&entries) {
                warn!("Could not prune weather cache: {}", err);
            }
            return None;
        }

        debug!("Weather cache hit for {}", key);
        Some(entry.weather_info.clone())
    }

    pub fn put(&self, city: &str, date: NaiveDate, weather_info: &str, now: NaiveDateTime) {
        let mut entries = self.read().unwrap_or_default();
        entries.insert(
            Self::key(city, date),
            CachedWeather {
                weather_info: weather_info.to_owned(),
                timestamp: now,
            },
        );
        if let Err(err) = self.write(&entries) {
            warn!("Could not write weather cache {}: {}", self.path.display(), err);
        }
    }

    fn read(&self) -> NoticeResult<BTreeMap<String, CachedWeather>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let cache_file = BufReader::new(File::open(&self.path)?);
        Ok(serde_json::from_reader(cache_file)?)
    }

    fn write(&self, entries: &BTreeMap<String, CachedWeather>) -> NoticeResult<()> {
        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, entries)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/weather_cache_tests.rs"]
mod tests;
