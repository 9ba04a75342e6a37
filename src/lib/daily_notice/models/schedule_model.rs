//! Weekly schedule document, compatible with the class's `schedule_data.json`
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The five school days used as keys throughout the schedule document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub enum SchoolDay {
    #[serde(rename = "星期一")]
    Monday,
    #[serde(rename = "星期二")]
    Tuesday,
    #[serde(rename = "星期三")]
    Wednesday,
    #[serde(rename = "星期四")]
    Thursday,
    #[serde(rename = "星期五")]
    Friday,
}

impl SchoolDay {
    pub const ALL: [SchoolDay; 5] = [
        SchoolDay::Monday,
        SchoolDay::Tuesday,
        SchoolDay::Wednesday,
        SchoolDay::Thursday,
        SchoolDay::Friday,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SchoolDay::Monday => "星期一",
            SchoolDay::Tuesday => "星期二",
            SchoolDay::Wednesday => "星期三",
            SchoolDay::Thursday => "星期四",
            SchoolDay::Friday => "星期五",
        }
    }

    pub fn from_label(label: &str) -> Option<SchoolDay> {
        SchoolDay::ALL.into_iter().find(|day| day.label() == label)
    }
}

impl fmt::Display for SchoolDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Chinese label for any day of the week, weekends included.
pub fn weekday_label(weekday: chrono::Weekday) -> &'static str {
    match weekday {
        chrono::Weekday::Mon => "星期一",
        chrono::Weekday::Tue => "星期二",
        chrono::Weekday::Wed => "星期三",
        chrono::Weekday::Thu => "星期四",
        chrono::Weekday::Fri => "星期五",
        chrono::Weekday::Sat => "星期六",
        chrono::Weekday::Sun => "星期日",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DayCourses {
    #[serde(rename = "上午", alias = "morning")]
    pub morning: Vec<String>,
    #[serde(rename = "下午", alias = "afternoon")]
    pub afternoon: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Club {
    #[serde(rename = "社团名称", alias = "name")]
    pub name: String,
    #[serde(rename = "成员", alias = "members")]
    pub members: Vec<String>,
}

/// Courses, clubs and duty rosters keyed by school day. Weekends are never present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScheduleDocument {
    #[serde(rename = "课程安排", alias = "courses")]
    pub courses: BTreeMap<SchoolDay, DayCourses>,
    #[serde(rename = "社团安排", alias = "clubs")]
    pub clubs: BTreeMap<SchoolDay, Vec<Club>>,
    #[serde(rename = "值日安排", alias = "duty")]
    pub duty: BTreeMap<SchoolDay, String>,
}

/// Everything the schedule holds for one day, borrowed from the document.
#[derive(Debug, Default)]
pub struct DaySchedule<'a> {
    pub courses: Option<&'a DayCourses>,
    pub clubs: &'a [Club],
    pub duty: &'a str,
}

impl ScheduleDocument {
    /// Looks a day up by its label; unknown labels (weekends included) give an empty day.
    pub fn day(&self, label: &str) -> DaySchedule<'_> {
        let Some(day) = SchoolDay::from_label(label) else {
            return DaySchedule::default();
        };
        DaySchedule {
            courses: self.courses.get(&day),
            clubs: self.clubs.get(&day).map(Vec::as_slice).unwrap_or_default(),
            duty: self.duty.get(&day).map(String::as_str).unwrap_or_default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty() && self.clubs.is_empty() && self.duty.is_empty()
    }
}
