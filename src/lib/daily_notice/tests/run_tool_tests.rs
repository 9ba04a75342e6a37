use super::*;

fn notice_on(date: &str) -> Notice {
    Notice {
        date: date.to_string(),
        ..Notice::default()
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn notice_date_stays_in_the_current_year() {
    assert_eq!(notice_date(&notice_on("9月22日"), ymd(2025, 9, 21)), ymd(2025, 9, 22));
    assert_eq!(notice_date(&notice_on("9月19日"), ymd(2025, 9, 21)), ymd(2025, 9, 19));
}

#[test]
fn notice_date_crosses_the_new_year() {
    assert_eq!(notice_date(&notice_on("1月1日"), ymd(2025, 12, 31)), ymd(2026, 1, 1));
    assert_eq!(notice_date(&notice_on("12月31日"), ymd(2026, 1, 2)), ymd(2025, 12, 31));
}

#[test]
fn notice_date_skips_years_without_the_day() {
    assert_eq!(notice_date(&notice_on("2月29日"), ymd(2027, 12, 30)), ymd(2028, 2, 29));
}

#[test]
fn unreadable_notice_date_is_the_next_day() {
    for date in ["", "某月某日", "13月1日", "2月30日"] {
        assert_eq!(notice_date(&notice_on(date), ymd(2025, 12, 31)), ymd(2026, 1, 1));
    }
}
