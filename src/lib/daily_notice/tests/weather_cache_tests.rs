use super::*;

const CITY: &str = "101240701";

fn target() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 22).unwrap()
}

fn stored_at() -> NaiveDateTime {
    target().pred_opt().unwrap().and_hms_opt(20, 0, 0).unwrap()
}

fn cache(dir: &tempfile::TempDir) -> WeatherCache {
    WeatherCache::new(
        dir.path().join("data").join("weather_cache.json"),
        Duration::minutes(60),
    )
}

#[test]
fn key_joins_city_and_date() {
    assert_eq!(WeatherCache::key(CITY, target()), "101240701_2025-09-22");
}

#[test]
fn fresh_entry_is_served() {
    let dir = tempfile::tempdir().unwrap();
    let cache = cache(&dir);
    cache.put(CITY, target(), "晴，低温 20℃~高温 28℃", stored_at());

    let later = stored_at() + Duration::minutes(59);
    assert_eq!(
        cache.get(CITY, target(), later).as_deref(),
        Some("晴，低温 20℃~高温 28℃")
    );
}

#[test]
fn expired_entry_is_dropped_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let cache = cache(&dir);
    cache.put(CITY, target(), "晴，低温 20℃~高温 28℃", stored_at());
    cache.put(
        CITY,
        target().succ_opt().unwrap(),
        "阴，低温 19℃~高温 26℃",
        stored_at() + Duration::minutes(30),
    );

    let later = stored_at() + Duration::minutes(61);
    assert_eq!(cache.get(CITY, target(), later), None);

    let cache_file = fs::read_to_string(dir.path().join("data").join("weather_cache.json")).unwrap();
    let entries: BTreeMap<String, CachedWeather> = serde_json::from_str(&cache_file).unwrap();
    assert_eq!(entries.keys().collect::<Vec<_>>(), vec!["101240701_2025-09-23"]);
}

#[test]
fn other_city_or_date_misses() {
    let dir = tempfile::tempdir().unwrap();
    let cache = cache(&dir);
    cache.put(CITY, target(), "晴，低温 20℃~高温 28℃", stored_at());

    assert_eq!(cache.get("101010100", target(), stored_at()), None);
    assert_eq!(cache.get(CITY, target().succ_opt().unwrap(), stored_at()), None);
}

#[test]
fn missing_or_broken_file_is_a_miss() {
    let dir = tempfile::tempdir().unwrap();
    let cache = cache(&dir);
    assert_eq!(cache.get(CITY, target(), stored_at()), None);

    fs::create_dir_all(dir.path().join("data")).unwrap();
    fs::write(dir.path().join("data").join("weather_cache.json"), "not json").unwrap();
    assert_eq!(cache.get(CITY, target(), stored_at()), None);

    cache.put(CITY, target(), "小雨，低温 25℃~高温 33℃", stored_at());
    assert_eq!(
        cache.get(CITY, target(), stored_at()).as_deref(),
        Some("小雨，低温 25℃~高温 33℃")
    );
}

#[cfg(target_os = "linux")]
#[test]
fn failed_write_is_reported() {
    let cache = WeatherCache::new(PathBuf::from("/dev/full"), Duration::minutes(60));
    let entries = BTreeMap::from([(
        WeatherCache::key(CITY, target()),
        CachedWeather {
            weather_info: "晴，低温 20℃~高温 28℃".to_string(),
            timestamp: stored_at(),
        },
    )]);
    assert!(cache.write(&entries).is_err());
}
