// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for the string-keyed preference bridge

use remote_play::bridge::{PrefKey, PreferenceBridge, decode_bitrate, encode_bitrate};
use remote_play::config::StreamConfig;
use remote_play::constants::{FrameRate, Resolution};
use remote_play::storage::MemorySettingsStore;

fn bridge() -> PreferenceBridge<MemorySettingsStore> {
    PreferenceBridge::load(MemorySettingsStore::new())
}

#[test]
fn test_key_names_round_trip() {
    for key in PrefKey::ALL {
        assert_eq!(PrefKey::from_name(key.name()), Some(key));
    }
    assert_eq!(PrefKey::from_name("brightness"), None);
}

#[test]
fn test_get_bool_known_keys() {
    let mut bridge = bridge();
    bridge.put_bool("log_verbose", true);

    assert!(bridge.get_bool("log_verbose", false));
    assert!(!bridge.get_bool("swap_cross_moon", false));
}

#[test]
fn test_get_unknown_key_returns_default() {
    let bridge = bridge();

    // Both accessors hand the caller's default back untouched
    assert!(bridge.get_bool("no_such_key", true));
    assert!(!bridge.get_bool("no_such_key", false));
    assert_eq!(bridge.get_string("no_such_key", "fallback"), "fallback");

    // A key backed by the other accessor type behaves the same way
    assert!(bridge.get_bool("resolution", true));
    assert_eq!(bridge.get_string("log_verbose", "fallback"), "fallback");
}

#[test]
fn test_put_unknown_key_changes_nothing() {
    let mut bridge = bridge();
    let before = bridge.config().clone();

    bridge.put_bool("no_such_key", true);
    bridge.put_string("no_such_key", "720p");
    bridge.put_string("log_verbose", "true");
    bridge.put_bool("resolution", true);

    assert_eq!(*bridge.config(), before, "Unknown puts must not mutate any field");
}

#[test]
fn test_set_resolution_by_token() {
    let mut bridge = bridge();
    bridge.put_string("resolution", "720p");
    assert_eq!(bridge.get_string("resolution", ""), "720p");

    bridge.put_string("resolution", "1080p");
    assert_eq!(bridge.config().resolution, Resolution::R1080p);
}

#[test]
fn test_unknown_resolution_token_keeps_previous_value() {
    let mut bridge = bridge();
    bridge.put_string("resolution", "1080p");

    bridge.put_string("resolution", "9999p");
    assert_eq!(
        bridge.config().resolution,
        Resolution::R1080p,
        "An unrecognized token must not reset the user's choice"
    );
}

#[test]
fn test_unknown_fps_token_keeps_previous_value() {
    let mut bridge = bridge();
    bridge.put_string("fps", "30");

    bridge.put_string("fps", "144");
    assert_eq!(bridge.config().fps, FrameRate::Fps30);
}

#[test]
fn test_bitrate_set_then_automatic() {
    let mut bridge = bridge();

    bridge.put_string("bitrate", "8000");
    assert_eq!(bridge.config().bitrate_kbps, Some(8_000));
    assert_eq!(bridge.get_string("bitrate", ""), "8000");

    bridge.put_string("bitrate", "");
    assert_eq!(bridge.config().bitrate_kbps, None);
    assert_eq!(bridge.get_string("bitrate", "unused"), "");
}

#[test]
fn test_bitrate_codec() {
    assert_eq!(decode_bitrate(""), None);
    assert_eq!(decode_bitrate("not-a-number"), None);
    assert_eq!(decode_bitrate("007"), Some(7));
    assert_eq!(decode_bitrate("15000"), Some(15_000));

    assert_eq!(encode_bitrate(None), "");
    assert_eq!(encode_bitrate(Some(15_000)), "15000");

    // decode(encode(x)) == x for every x encode produces
    for value in [None, Some(0), Some(7), Some(15_000)] {
        assert_eq!(decode_bitrate(&encode_bitrate(value)), value);
    }
}

#[test]
fn test_put_writes_through_to_store() {
    let store = MemorySettingsStore::new();
    let mut bridge = PreferenceBridge::load(store.clone());
    bridge.put_string("resolution", "360p");

    // No separate save step: the store already holds the new record
    let raw = store.contents().expect("store should hold the record");
    let text = String::from_utf8(raw).expect("stored record should be UTF-8");
    assert!(text.contains("\"360p\""));

    // A fresh session constructed from the same store sees the new value
    let reloaded = PreferenceBridge::load(store);
    assert_eq!(reloaded.config(), &StreamConfig {
        resolution: Resolution::R360p,
        ..StreamConfig::default()
    });
}

#[test]
fn test_get_after_put_is_canonical() {
    let mut bridge = bridge();
    for resolution in Resolution::ALL {
        bridge.put_string("resolution", resolution.token());
        assert_eq!(bridge.get_string("resolution", ""), resolution.token());
    }
    for fps in FrameRate::ALL {
        bridge.put_string("fps", fps.token());
        assert_eq!(bridge.get_string("fps", ""), fps.token());
    }
}
