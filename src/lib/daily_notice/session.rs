use std::path::PathBuf;

use chrono::{Datelike, Duration, Local, NaiveDate};
use log::{error, info};

use super::composer::compose_notice;
use super::error::NoticeResult;
use super::history::HistoryStore;
use super::models::{
    history_model::{GenerationEntry, HistoryRecord},
    notice_model::Notice,
    schedule_model::{weekday_label, ScheduleDocument},
    Config,
};
use super::renderer::write_page;
use super::schedule_store::load_schedule_or_default;
use super::weather_cache::WeatherCache;
use super::weather_getter::{get_weather_info, ForecastGetter};

#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub target: NaiveDate,
    pub special_notes: String,
    /// Weather typed in by the user, skips the lookup
    pub weather: Option<String>,
    pub write_page: bool,
    pub record_history: bool,
}

#[derive(Debug, Clone)]
pub struct GeneratedNotice {
    pub notice: Notice,
    pub text: String,
    pub history: Option<HistoryRecord>,
    pub page: Option<PathBuf>,
}

/// State of one running session: the loaded schedule and the weather line of
/// the last looked up date. Owned by whoever drives the session.
#[derive(Debug)]
pub struct Session {
    pub config: Config,
    pub schedule: ScheduleDocument,
    weather: Option<(NaiveDate, String)>,
}

impl Session {
    pub fn open(config: Config) -> Self {
        let schedule = load_schedule_or_default(&config.schedule_json_path);
        Self::with_schedule(config, schedule)
    }

    pub fn with_schedule(config: Config, schedule: ScheduleDocument) -> Self {
        Self {
            config,
            schedule,
            weather: None,
        }
    }

    pub fn history(&self) -> HistoryStore {
        HistoryStore::new(
            self.config.history_json_path.clone(),
            self.config.history_limit,
        )
    }

    pub fn weather_cache(&self) -> WeatherCache {
        WeatherCache::new(
            self.config.weather_cache_json_path.clone(),
            Duration::minutes(self.config.weather_cache_ttl_minutes),
        )
    }

    /// Replaces the weather line for `target`, as when the user corrects it by hand.
    pub fn set_weather(&mut self, target: NaiveDate, weather: String) {
        self.weather = Some((target, weather));
    }

    /// Weather line for `target`, looked up once per date and then reused.
    pub async fn weather_for<FG: ForecastGetter>(
        &mut self,
        getter: &FG,
        target: NaiveDate,
        today: NaiveDate,
    ) -> String {
        if let Some((date, weather)) = &self.weather {
            if *date == target {
                return weather.clone();
            }
        }
        let weather = get_weather_info(
            getter,
            &self.weather_cache(),
            &self.config.city_code,
            target,
            today,
            Local::now().naive_local(),
        )
        .await;
        self.weather = Some((target, weather.clone()));
        weather
    }

    pub async fn generate<FG: ForecastGetter>(
        &mut self,
        getter: &FG,
        request: GenerateRequest,
        today: NaiveDate,
    ) -> NoticeResult<GeneratedNotice> {
        let target = request.target;
        let weekday = weekday_label(target.weekday());
        if let Some(weather) = request.weather {
            self.set_weather(target, weather);
        }
        let weather = self.weather_for(getter, target, today).await;

        let notice = compose_notice(
            target,
            weekday,
            &weather,
            &self.schedule,
            &request.special_notes,
        );
        let text = notice.to_string();
        info!("Generated notice for {} {}", target, weekday);

        let history = if request.record_history {
            let entry = GenerationEntry::new(target, &notice, &request.special_notes, &text);
            match self.history().append(entry) {
                Ok(record) => Some(record),
                Err(err) => {
                    error!("Could not save history record: {}", err);
                    None
                }
            }
        } else {
            None
        };

        let page = if request.write_page {
            let (_, path) = write_page(&notice, target, &self.config.output_dir)?;
            Some(path)
        } else {
            None
        };

        Ok(GeneratedNotice {
            notice,
            text,
            history,
            page,
        })
    }
}

/// Tomorrow's date, the default target of a notice.
pub fn tomorrow() -> NaiveDate {
    Local::now().date_naive() + Duration::days(1)
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
