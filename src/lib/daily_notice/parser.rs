use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use super::error::{NoticeError, NoticeResult};
use super::format::{
    AFTERNOON_LABEL, BULLET, CLUBS_HEADER, CLUB_SUFFIX, COURSES_HEADER, COURSE_SEPARATOR,
    DATE_MARKER, DRESS_HEADER, DUTY_HEADER, MORNING_LABEL, NOTES_HEADER, NO_DUTY,
    SECTION_HEADERS, WEATHER_HEADER,
};
use super::models::notice_model::{ClubEntry, Notice, Section};

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    let marker = regex::escape(DATE_MARKER);
    Regex::new(&format!(
        r"{marker}{}\[(.*?)\] \[(.*?)\]{marker}",
        regex::escape(BULLET)
    ))
    .expect("date header pattern is valid")
});

static CLUB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^{}(.*){}(.*)$",
        regex::escape(BULLET),
        regex::escape(CLUB_SUFFIX)
    ))
    .expect("club pattern is valid")
});

/// Result of reading a text notice back. Sections that could not be found
/// are left at their defaults in `notice` and listed in `unmatched`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNotice {
    pub notice: Notice,
    pub unmatched: Vec<Section>,
}

impl ParsedNotice {
    pub fn is_complete(&self) -> bool {
        self.unmatched.is_empty()
    }

    pub fn into_strict(self) -> NoticeResult<Notice> {
        if self.unmatched.is_empty() {
            Ok(self.notice)
        } else {
            Err(NoticeError::UnmatchedSections(self.unmatched))
        }
    }
}

/// Reads the fields of a composed notice back out of its text.
pub fn parse(text: &str) -> ParsedNotice {
    let lines = text.lines().map(str::trim_end).collect::<Vec<_>>();
    let mut notice = Notice::default();
    let mut unmatched = Vec::new();

    match HEADER_RE.captures(text) {
        Some(caps) => {
            notice.date = caps[1].to_owned();
            notice.weekday = caps[2].to_owned();
        }
        None => unmatched.push(Section::Header),
    }

    match section(&lines, |line| line.ends_with(WEATHER_HEADER)) {
        Some((header, body)) => {
            notice.weather_emoji = header.trim_end_matches(WEATHER_HEADER).to_owned();
            notice.weather = body.first().map(|line| unbullet(line)).unwrap_or_default().to_owned();
        }
        None => unmatched.push(Section::Weather),
    }

    match section(&lines, |line| line == COURSES_HEADER) {
        Some((_, body)) => {
            for line in body.iter().map(|line| unbullet(line)) {
                if let Some(courses) = line.strip_prefix(MORNING_LABEL) {
                    notice.morning_courses = bracket_tokens(courses);
                } else if let Some(courses) = line.strip_prefix(AFTERNOON_LABEL) {
                    notice.afternoon_courses = bracket_tokens(courses);
                }
            }
        }
        None => unmatched.push(Section::Courses),
    }

    match section(&lines, |line| line == CLUBS_HEADER) {
        Some((_, body)) => {
            notice.clubs = body
                .iter()
                .filter(|line| line.starts_with(BULLET))
                .filter_map(|line| CLUB_RE.captures(line))
                .map(|caps| ClubEntry {
                    name: caps[1].to_owned(),
                    members: caps[2]
                        .split(", ")
                        .filter(|member| !member.is_empty())
                        .map(str::to_owned)
                        .collect(),
                })
                .collect();
        }
        None => unmatched.push(Section::Clubs),
    }

    match section(&lines, |line| line == DUTY_HEADER) {
        Some((_, body)) => {
            let roster = body.first().map(|line| unbullet(line)).unwrap_or_default();
            if roster != NO_DUTY {
                notice.duty = roster.to_owned();
            }
        }
        None => unmatched.push(Section::Duty),
    }

    // Hand-written notices may leave a blank line between the uniform reminder
    // and the clothing line, so this section runs up to the next header.
    match lines.iter().position(|line| *line == DRESS_HEADER) {
        Some(start) => {
            notice.dress_code = lines[start + 1..]
                .iter()
                .take_while(|line| !is_section_header(line))
                .filter_map(|line| line.strip_prefix(BULLET))
                .map(str::to_owned)
                .collect();
        }
        None => unmatched.push(Section::DressCode),
    }

    if let Some((_, body)) = section(&lines, |line| line == NOTES_HEADER) {
        notice.special_notes = body
            .iter()
            .filter_map(|line| line.strip_prefix(BULLET))
            .map(|note| note.trim().to_owned())
            .collect();
    }

    if !unmatched.is_empty() {
        debug!("Notice text is missing sections {:?}", unmatched);
    }

    ParsedNotice { notice, unmatched }
}

/// Finds the first line accepted by `is_header` and returns it together with
/// the lines that follow it up to the next blank line.
fn section<'a>(
    lines: &[&'a str],
    is_header: impl Fn(&str) -> bool,
) -> Option<(&'a str, Vec<&'a str>)> {
    let start = lines.iter().position(|line| is_header(line))?;
    let body = lines[start + 1..]
        .iter()
        .take_while(|line| !line.trim().is_empty())
        .copied()
        .collect();
    Some((lines[start], body))
}

fn is_section_header(line: &str) -> bool {
    SECTION_HEADERS.contains(&line) || line.ends_with(WEATHER_HEADER)
}

fn unbullet(line: &str) -> &str {
    line.strip_prefix(BULLET).unwrap_or(line)
}

/// Splits `[a], [b]` back into its names; brackets inside a name are kept.
fn bracket_tokens(line: &str) -> Vec<String> {
    if line.is_empty() {
        return Vec::new();
    }
    let inner = line.strip_prefix('[').unwrap_or(line);
    let inner = inner.strip_suffix(']').unwrap_or(inner);
    inner.split(COURSE_SEPARATOR).map(str::to_owned).collect()
}

#[cfg(test)]
#[path = "tests/parser_tests.rs"]
mod tests;
