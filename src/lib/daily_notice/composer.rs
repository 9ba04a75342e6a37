use std::fmt;

use chrono::{Datelike, NaiveDate};
use log::debug;

use super::format::{
    AFTERNOON_LABEL, BULLET, CLOSING_HEADER, CLOSING_LINES, CLUBS_HEADER, CLUB_SUFFIX,
    COMFORTABLE_CLOTHING, COURSES_HEADER, COURSE_SEPARATOR, DATE_MARKER, DRESS_HEADER,
    DUTY_HEADER, MORNING_LABEL, NOTES_HEADER, NO_CLUBS, NO_COURSES, NO_DUTY, TITLE,
    UNIFORM_REMINDER, WEATHER_EMOJI, WEATHER_HEADER,
};
use super::models::{
    notice_model::{ClubEntry, Notice},
    schedule_model::{ScheduleDocument, SchoolDay},
};

/// Builds the notice for `weekday` out of the schedule. Missing schedule entries
/// turn into "nothing scheduled" sections, never into errors.
pub fn compose_notice(
    date: NaiveDate,
    weekday: &str,
    weather: &str,
    schedule: &ScheduleDocument,
    special_notes: &str,
) -> Notice {
    let day = schedule.day(weekday);
    debug!(
        "Composing notice for {} {}: courses {}, {} club(s), duty {:?}",
        date,
        weekday,
        day.courses.is_some(),
        day.clubs.len(),
        day.duty
    );

    let (morning_courses, afternoon_courses) = match day.courses {
        Some(courses) => (courses.morning.clone(), courses.afternoon.clone()),
        None => (Vec::new(), Vec::new()),
    };

    let clubs = day
        .clubs
        .iter()
        .map(|club| ClubEntry {
            name: format_club_name(&club.name).to_owned(),
            members: club.members.clone(),
        })
        .collect();

    let mut dress_code = Vec::new();
    if weekday == SchoolDay::Monday.label() {
        dress_code.push(UNIFORM_REMINDER.to_owned());
    }
    dress_code.push(COMFORTABLE_CLOTHING.to_owned());

    Notice {
        date: format!("{}月{}日", date.month(), date.day()),
        weekday: weekday.to_owned(),
        weather_emoji: WEATHER_EMOJI.to_owned(),
        weather: weather.to_owned(),
        morning_courses,
        afternoon_courses,
        clubs,
        duty: day.duty.to_owned(),
        dress_code,
        special_notes: split_special_notes(special_notes),
    }
}

/// The text notice, see [`compose_notice`].
pub fn compose(
    date: NaiveDate,
    weekday: &str,
    weather: &str,
    schedule: &ScheduleDocument,
    special_notes: &str,
) -> String {
    compose_notice(date, weekday, weather, schedule, special_notes).to_string()
}

/// Drops a `（...）` suffix, then anything from the first `-` or `/`.
pub fn format_club_name(name: &str) -> &str {
    let name = name.split('（').next().unwrap_or(name);
    name.split(['-', '/']).next().unwrap_or(name)
}

/// One note per non-blank line, trimmed, in input order.
pub fn split_special_notes(special_notes: &str) -> Vec<String> {
    special_notes
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

fn bracketed(courses: &[String]) -> String {
    if courses.is_empty() {
        return String::new();
    }
    format!("[{}]", courses.join(COURSE_SEPARATOR))
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", TITLE)?;
        writeln!(
            f,
            "{}{}[{}] [{}]{}",
            DATE_MARKER, BULLET, self.date, self.weekday, DATE_MARKER
        )?;
        writeln!(f)?;

        writeln!(f, "{}{}", self.weather_emoji, WEATHER_HEADER)?;
        writeln!(f, "{}{}", BULLET, self.weather)?;
        writeln!(f)?;

        writeln!(f, "{}", COURSES_HEADER)?;
        if self.has_courses() {
            writeln!(f, "{}{}{}", BULLET, MORNING_LABEL, bracketed(&self.morning_courses))?;
            writeln!(f, "{}{}{}", BULLET, AFTERNOON_LABEL, bracketed(&self.afternoon_courses))?;
        } else {
            writeln!(f, "{}{}", BULLET, NO_COURSES)?;
        }
        writeln!(f)?;

        writeln!(f, "{}", CLUBS_HEADER)?;
        if self.clubs.is_empty() {
            writeln!(f, "{}{}", BULLET, NO_CLUBS)?;
        }
        for club in &self.clubs {
            writeln!(f, "{}{}{}{}", BULLET, club.name, CLUB_SUFFIX, club.members.join(", "))?;
        }
        writeln!(f)?;

        writeln!(f, "{}", DUTY_HEADER)?;
        if self.duty.is_empty() {
            writeln!(f, "{}{}", BULLET, NO_DUTY)?;
        } else {
            writeln!(f, "{}{}", BULLET, self.duty)?;
        }
        writeln!(f)?;

        writeln!(f, "{}", DRESS_HEADER)?;
        for line in &self.dress_code {
            writeln!(f, "{}{}", BULLET, line)?;
        }
        writeln!(f)?;

        if !self.special_notes.is_empty() {
            writeln!(f, "{}", NOTES_HEADER)?;
            for note in &self.special_notes {
                writeln!(f, "{}{}", BULLET, note)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "{}", CLOSING_HEADER)?;
        for line in CLOSING_LINES {
            writeln!(f, "{}{}", BULLET, line)?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
#[path = "tests/composer_tests.rs"]
mod tests;
