use thiserror::Error;

use super::models::notice_model::Section;

pub type NoticeResult<T> = Result<T, NoticeError>;

#[derive(Error, Debug)]
pub enum NoticeError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("config error: {0}")]
    Config(#[from] figment::Error),

    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    /// Schedule document does not have the expected shape
    #[error("invalid schedule: {0}")]
    InvalidSchedule(String),

    #[error("forecast service answered with status {0}")]
    ForecastStatus(u16),

    #[error("forecast service returned no forecast data")]
    ForecastMissing,

    /// Target date is before today or past the last forecast day
    #[error("day offset {offset} is outside the forecast range of {available} day(s)")]
    ForecastOutOfRange { offset: i64, available: usize },

    #[error("unrecognised notice sections: {}", join_sections(.0))]
    UnmatchedSections(Vec<Section>),
}

fn join_sections(sections: &[Section]) -> String {
    sections
        .iter()
        .map(|section| section.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
