//! Property-based tests: whatever the schedule holds, composing a notice and
//! parsing the text back gives the same notice.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use lib::daily_notice::composer::{compose, compose_notice, format_club_name};
use lib::daily_notice::models::notice_model::DutyEntry;
use lib::daily_notice::models::schedule_model::{Club, DayCourses, ScheduleDocument, SchoolDay};
use lib::daily_notice::parser::parse;
use proptest::prelude::*;

/// Course names may carry brackets, but never the `", "` that separates them.
fn course_name() -> impl Strategy<Value = String> {
    "[\\p{Han}a-zA-Z0-9\\[\\]]{1,8}"
}

/// Club names with the qualifiers `format_club_name` cuts off.
fn club_name() -> impl Strategy<Value = String> {
    "[\\p{Han}a-z]{1,4}(（[\\p{Han}0-9]{1,4}）|-[\\p{Han}0-9]{1,3}|/[\\p{Han}a-z]{1,3})?"
}

fn person() -> impl Strategy<Value = String> {
    "[\\p{Han}]{2,3}"
}

fn duty_roster() -> impl Strategy<Value = (Vec<(String, bool)>, String)> {
    prop::collection::vec((person(), any::<bool>()), 0..5).prop_map(|entries| {
        let roster = entries
            .iter()
            .map(|(name, leader)| {
                if *leader {
                    format!("{}[组长]", name)
                } else {
                    name.clone()
                }
            })
            .collect::<Vec<_>>()
            .join("、");
        (entries, roster)
    })
}

fn special_notes() -> impl Strategy<Value = String> {
    prop::collection::vec("[\\p{Han}a-z0-9《》]{1,12}", 0..4).prop_map(|notes| notes.join("\n"))
}

fn weather() -> impl Strategy<Value = String> {
    "[\\p{Han}0-9~，℃]{0,12}"
}

prop_compose! {
    fn school_day_schedule()(
        day in prop::sample::select(SchoolDay::ALL.to_vec()),
        morning in prop::collection::vec(course_name(), 0..5),
        afternoon in prop::collection::vec(course_name(), 0..5),
        clubs in prop::collection::vec(
            (club_name(), prop::collection::vec(person(), 0..4)),
            0..4,
        ),
        (duty, roster) in duty_roster(),
    ) -> (SchoolDay, ScheduleDocument, Vec<(String, bool)>) {
        let schedule = ScheduleDocument {
            courses: BTreeMap::from([(day, DayCourses { morning, afternoon })]),
            clubs: BTreeMap::from([(
                day,
                clubs
                    .into_iter()
                    .map(|(name, members)| Club { name, members })
                    .collect(),
            )]),
            duty: BTreeMap::from([(day, roster)]),
        };
        (day, schedule, duty)
    }
}

/// Monday 2025-09-22 plus the school day's offset.
fn date_of(day: SchoolDay) -> NaiveDate {
    let monday = NaiveDate::from_ymd_opt(2025, 9, 22).unwrap();
    monday + chrono::Duration::days(day as i64)
}

proptest! {
    #[test]
    fn proptest_compose_then_parse_round_trips(
        (day, schedule, duty) in school_day_schedule(),
        weather in weather(),
        notes in special_notes(),
    ) {
        let date = date_of(day);
        let notice = compose_notice(date, day.label(), &weather, &schedule, &notes);
        let parsed = parse(&compose(date, day.label(), &weather, &schedule, &notes));

        prop_assert!(parsed.is_complete(), "unmatched {:?}", parsed.unmatched);
        prop_assert_eq!(&parsed.notice, &notice);

        prop_assert_eq!(parsed.notice.date.clone(), format!("{}月{}日", date.month(), date.day()));
        prop_assert_eq!(parsed.notice.weekday.as_str(), day.label());
        prop_assert_eq!(parsed.notice.weather.as_str(), weather.as_str());

        let courses = &schedule.courses[&day];
        prop_assert_eq!(&parsed.notice.morning_courses, &courses.morning);
        prop_assert_eq!(&parsed.notice.afternoon_courses, &courses.afternoon);

        let clubs = &schedule.clubs[&day];
        prop_assert_eq!(parsed.notice.clubs.len(), clubs.len());
        for (parsed_club, club) in parsed.notice.clubs.iter().zip(clubs) {
            prop_assert_eq!(parsed_club.name.as_str(), format_club_name(&club.name));
            prop_assert_eq!(&parsed_club.members, &club.members);
        }

        let expected_duty = duty
            .into_iter()
            .map(|(name, is_leader)| DutyEntry { name, is_leader })
            .collect::<Vec<_>>();
        prop_assert_eq!(parsed.notice.duty_entries(), expected_duty);

        let expected_notes = notes.lines().map(str::to_owned).collect::<Vec<_>>();
        prop_assert_eq!(&parsed.notice.special_notes, &expected_notes);

        let has_uniform_line = parsed
            .notice
            .dress_code
            .iter()
            .any(|line| line.contains("穿校服"));
        prop_assert_eq!(has_uniform_line, day == SchoolDay::Monday);
    }
}
