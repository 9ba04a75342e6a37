use chrono::{Duration, NaiveDate};

use super::*;

fn entry(n: usize) -> GenerationEntry {
    GenerationEntry {
        date: "2025年09月22日".to_string(),
        weekday: "星期一".to_string(),
        weather: "晴，低温 20℃~高温 28℃".to_string(),
        special_notes: format!("第{}条", n),
        reminder_content: format!("📅乐知班明日温馨提醒 {}", n),
    }
}

fn stamp(n: usize) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 9, 21)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
        + Duration::minutes(n as i64)
}

fn store(dir: &tempfile::TempDir) -> HistoryStore {
    HistoryStore::new(dir.path().join("data").join("history_records.json"), 100)
}

#[test]
fn empty_history_lists_nothing() {
    let dir = tempfile::tempdir().unwrap();
    assert!(store(&dir).list().unwrap().is_empty());
}

#[test]
fn append_keeps_insertion_order() {
    let dir = tempfile::tempdir().unwrap();
    let history = store(&dir);
    let first = history.append_at(entry(1), stamp(1)).unwrap();
    let second = history.append_at(entry(2), stamp(2)).unwrap();

    assert_eq!(first.timestamp, stamp(1));
    assert_eq!(first.special_notes, "第1条");
    assert_eq!(history.list().unwrap(), vec![first, second]);
}

#[test]
fn oldest_records_are_dropped_past_the_limit() {
    let dir = tempfile::tempdir().unwrap();
    let history = store(&dir);
    for n in 0..101 {
        history.append_at(entry(n), stamp(n)).unwrap();
    }

    let records = history.list().unwrap();
    assert_eq!(records.len(), 100);
    assert_eq!(records[0].timestamp, stamp(1));
    assert_eq!(records[99].timestamp, stamp(100));
}

#[test]
fn smaller_limit_is_honoured() {
    let dir = tempfile::tempdir().unwrap();
    let history = HistoryStore::new(dir.path().join("history_records.json"), 2);
    for n in 0..5 {
        history.append_at(entry(n), stamp(n)).unwrap();
    }
    let notes = history
        .list()
        .unwrap()
        .into_iter()
        .map(|record| record.special_notes)
        .collect::<Vec<_>>();
    assert_eq!(notes, vec!["第3条".to_string(), "第4条".to_string()]);
}

#[test]
fn delete_removes_matching_records_only() {
    let dir = tempfile::tempdir().unwrap();
    let history = store(&dir);
    for n in 0..4 {
        history.append_at(entry(n), stamp(n)).unwrap();
    }

    let doomed = [stamp(1), stamp(3)];
    assert_eq!(history.delete(|record| doomed.contains(&record.timestamp)).unwrap(), 2);
    let left = history
        .list()
        .unwrap()
        .into_iter()
        .map(|record| record.timestamp)
        .collect::<Vec<_>>();
    assert_eq!(left, vec![stamp(0), stamp(2)]);

    assert_eq!(history.delete(|_| false).unwrap(), 0);
    assert_eq!(history.list().unwrap().len(), 2);
}

#[test]
fn clear_empties_the_history() {
    let dir = tempfile::tempdir().unwrap();
    let history = store(&dir);
    history.clear().unwrap();
    history.append_at(entry(0), stamp(0)).unwrap();

    history.clear().unwrap();
    assert!(history.list().unwrap().is_empty());
}

#[test]
fn records_without_notes_are_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history_records.json");
    fs::write(
        &path,
        r#"[{
            "date": "2025年09月22日",
            "weekday": "星期一",
            "weather": "晴",
            "reminder_content": "📅乐知班明日温馨提醒",
            "timestamp": "2025-09-21T20:15:30.123456"
        }]"#,
    )
    .unwrap();

    let records = HistoryStore::new(path, 100).list().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].special_notes, "");
    assert_eq!(
        records[0].to_string(),
        "时间: 2025-09-21 20:15:30\n日期: 2025年09月22日 星期一\n天气: 晴\n"
    );
}

#[cfg(target_os = "linux")]
#[test]
fn failed_write_is_reported() {
    let history = HistoryStore::new(PathBuf::from("/dev/full"), 100);
    let record = HistoryRecord::stamped(entry(0), stamp(0));
    assert!(history.write(&[record]).is_err());
}
