use std::fmt;

use serde::{Deserialize, Serialize};

use crate::daily_notice::format::{DUTY_SEPARATORS, LEADER_MARKER};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClubEntry {
    pub name: String,
    pub members: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DutyEntry {
    pub name: String,
    pub is_leader: bool,
}

/// One day's notice as structured data. The text form is its `Display`
/// implementation (see `composer`), the mobile page is rendered from it directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Notice {
    /// `<month>月<day>日`
    pub date: String,
    pub weekday: String,
    pub weather_emoji: String,
    pub weather: String,
    pub morning_courses: Vec<String>,
    pub afternoon_courses: Vec<String>,
    pub clubs: Vec<ClubEntry>,
    /// Duty roster exactly as written in the schedule, empty when nobody is on duty
    pub duty: String,
    pub dress_code: Vec<String>,
    pub special_notes: Vec<String>,
}

impl Notice {
    pub fn has_courses(&self) -> bool {
        !(self.morning_courses.is_empty() && self.afternoon_courses.is_empty())
    }

    pub fn duty_entries(&self) -> Vec<DutyEntry> {
        parse_duty_roster(&self.duty)
    }

    /// Month and day from the `<month>月<day>日` date field.
    pub fn month_day(&self) -> Option<(u32, u32)> {
        let (month, rest) = self.date.split_once('月')?;
        let day = rest.strip_suffix('日')?;
        Some((month.trim().parse().ok()?, day.trim().parse().ok()?))
    }
}

/// Splits a free-text roster into names. An entry carrying `[组长]` is the group leader.
pub fn parse_duty_roster(roster: &str) -> Vec<DutyEntry> {
    roster
        .split(DUTY_SEPARATORS)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| DutyEntry {
            name: item.replace(LEADER_MARKER, "").trim().to_owned(),
            is_leader: item.contains(LEADER_MARKER),
        })
        .collect()
}

/// Sections of the text notice the parser looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Header,
    Weather,
    Courses,
    Clubs,
    Duty,
    DressCode,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Header => "date header",
            Section::Weather => "weather",
            Section::Courses => "courses",
            Section::Clubs => "clubs",
            Section::Duty => "duty roster",
            Section::DressCode => "dress code",
        };
        f.write_str(name)
    }
}
