//! Module with forecast model compatible with t.weather.sojson.com's city API
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ForecastDay {
    #[serde(rename = "type")]
    pub kind: String,
    /// e.g. `高温 33℃`
    pub high: String,
    /// e.g. `低温 25℃`
    pub low: String,
    #[serde(default)]
    pub ymd: Option<String>,
}

impl ForecastDay {
    pub fn describe(&self) -> String {
        format!("{}，{}~{}", self.kind, self.low, self.high)
    }
}

#[derive(Deserialize, Debug, Serialize)]
pub struct ForecastData {
    pub forecast: Vec<ForecastDay>,
}

#[derive(Deserialize, Debug, Serialize)]
pub struct ForecastResponse {
    pub status: u16,
    #[serde(default)]
    pub data: Option<ForecastData>,
}

/// Model for one entry of `weather_cache.json`
#[derive(Deserialize, Debug, Serialize, Clone, PartialEq, Eq)]
pub struct CachedWeather {
    pub weather_info: String,
    pub timestamp: NaiveDateTime,
}
