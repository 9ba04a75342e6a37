use chrono::{NaiveDate, NaiveDateTime};
use log::{info, warn};
use reqwest::Client;

use super::error::{NoticeError, NoticeResult};
use super::models::weather_model::{ForecastDay, ForecastResponse};
use super::weather_cache::WeatherCache;

/// Shown when the forecast could not be fetched; the user is expected to type the weather in.
pub const WEATHER_FAILED: &str = "查询天气信息失败，可手动输入天气信息";
/// Shown when the target date is not covered by the forecast.
pub const WEATHER_OUT_OF_RANGE: &str = "超出天气预报范围，可手动输入天气信息";

/// A trait, necessary for every entity that will be used for getting the forecast.
/// The first returned day is today.
#[allow(async_fn_in_trait)]
pub trait ForecastGetter {
    async fn get_forecast(&self, city_code: &str) -> NoticeResult<Vec<ForecastDay>>;
}

/// Forecast source talking to the sojson city weather API.
pub struct HttpForecast {
    pub client: Client,
    pub api_base: String,
}

impl ForecastGetter for HttpForecast {
    async fn get_forecast(&self, city_code: &str) -> NoticeResult<Vec<ForecastDay>> {
        info!("Getting forecast for city {}", city_code);
        let request_url = format!("{}/{}", self.api_base.trim_end_matches('/'), city_code);
        let response: ForecastResponse = self.client.get(request_url).send().await?.json().await?;
        if response.status != 200 {
            return Err(NoticeError::ForecastStatus(response.status));
        }
        response
            .data
            .map(|data| data.forecast)
            .ok_or(NoticeError::ForecastMissing)
    }
}

/// Weather line for `target`, served from the cache when it is fresh enough.
pub async fn lookup_weather<FG: ForecastGetter>(
    getter: &FG,
    cache: &WeatherCache,
    city_code: &str,
    target: NaiveDate,
    today: NaiveDate,
    now: NaiveDateTime,
) -> NoticeResult<String> {
    if let Some(cached) = cache.get(city_code, target, now) {
        return Ok(cached);
    }

    let forecast = getter.get_forecast(city_code).await?;
    let offset = (target - today).num_days();
    let day = usize::try_from(offset)
        .ok()
        .and_then(|index| forecast.get(index))
        .ok_or(NoticeError::ForecastOutOfRange {
            offset,
            available: forecast.len(),
        })?;

    let weather_info = day.describe();
    info!("Weather for {}: {}", target, weather_info);
    cache.put(city_code, target, &weather_info, now);
    Ok(weather_info)
}

/// [`lookup_weather`] with failures turned into the placeholder texts.
pub async fn get_weather_info<FG: ForecastGetter>(
    getter: &FG,
    cache: &WeatherCache,
    city_code: &str,
    target: NaiveDate,
    today: NaiveDate,
    now: NaiveDateTime,
) -> String {
    match lookup_weather(getter, cache, city_code, target, today, now).await {
        Ok(weather_info) => weather_info,
        Err(err @ NoticeError::ForecastOutOfRange { .. }) => {
            warn!("{}, the weather can be entered manually", err);
            WEATHER_OUT_OF_RANGE.to_owned()
        }
        Err(err) => {
            warn!("Weather lookup failed: {}, the weather can be entered manually", err);
            WEATHER_FAILED.to_owned()
        }
    }
}

#[cfg(test)]
#[path = "tests/weather_getter_tests.rs"]
mod tests;
