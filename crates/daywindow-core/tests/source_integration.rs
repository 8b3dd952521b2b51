//! Integration tests for config persistence and the countdown data source.

use chrono::{FixedOffset, TimeZone};
use daywindow_core::{
    ComplicationData, ComplicationDataSource, ComplicationRequest, ComplicationType, Config,
    DailyCountdownSource, TimeDifferenceStyle,
};

#[test]
fn test_missing_config_file_is_created_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg, Config::default());
    assert!(path.exists());

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("hour = 22"));
}

#[test]
fn test_config_changes_survive_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut cfg = Config::load_from(&path).unwrap();
    cfg.set("anchor.hour", "18").unwrap();
    cfg.set("countdown.style", "words_single_unit").unwrap();
    cfg.save_to(&path).unwrap();

    let reloaded = Config::load_from(&path).unwrap();
    assert_eq!(reloaded.anchor.hour, 18);
    assert_eq!(reloaded.countdown.style, TimeDifferenceStyle::WordsSingleUnit);
}

#[test]
fn test_hand_edited_invalid_anchor_is_rejected_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[anchor]\nhour = 24\nminute = 0\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.is_invalid_configuration());
}

#[test]
fn test_garbage_config_is_a_load_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "anchor = [[[").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to load configuration"));
}

#[test]
fn test_source_from_config_serves_countdown() {
    let mut cfg = Config::default();
    cfg.set("anchor.hour", "7").unwrap();
    cfg.set("countdown.style", "short_single_unit").unwrap();
    let source = DailyCountdownSource::from_config(&cfg).unwrap();

    // 05:00 at UTC-5, two hours before the anchor
    let now = FixedOffset::west_opt(5 * 3600)
        .unwrap()
        .with_ymd_and_hms(2025, 1, 10, 5, 0, 0)
        .unwrap();
    let request = ComplicationRequest::new(42, ComplicationType::RangedValue);
    let (data, event) = source.handle_request(&request, now);

    let ComplicationData::RangedValue(ranged) = data.unwrap();
    assert_eq!(ranged.max - ranged.value, 2.0 * 3_600_000.0);
    assert_eq!(ranged.text.unwrap().render(now.timestamp_millis()), "2h");
    assert_eq!(event.instance_id(), 42);

    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["type"], "DataRequested");
    assert_eq!(json["served"], true);
}

#[test]
fn test_only_ranged_value_is_served() {
    let source = DailyCountdownSource::default();
    let now = FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2025, 1, 10, 12, 0, 0)
        .unwrap();
    for ty in ComplicationType::ALL {
        let data = source.on_request(&ComplicationRequest::new(1, ty), now);
        assert_eq!(data.is_some(), ty == ComplicationType::RangedValue, "type {ty}");
    }
}
