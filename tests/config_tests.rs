// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for the settings record and its persistence

use remote_play::config::StreamConfig;
use remote_play::constants::{FrameRate, Resolution};
use remote_play::storage::{MemorySettingsStore, SettingsStore};

#[test]
fn test_config_defaults() {
    let config = StreamConfig::default();

    assert!(!config.log_verbose);
    assert!(!config.swap_cross_moon);
    assert_eq!(config.resolution, Resolution::R720p);
    assert_eq!(config.fps, FrameRate::Fps60);
    assert_eq!(config.bitrate_kbps, None, "Bitrate should default to automatic");
}

#[test]
fn test_config_load_from_empty_store_uses_defaults() {
    let store = MemorySettingsStore::new();
    let config = StreamConfig::load(&store);
    assert_eq!(config, StreamConfig::default());
}

#[test]
fn test_config_store_round_trip() {
    let store = MemorySettingsStore::new();
    let config = StreamConfig {
        log_verbose: true,
        swap_cross_moon: true,
        resolution: Resolution::R1080p,
        fps: FrameRate::Fps30,
        bitrate_kbps: Some(12_000),
    };

    config.persist(&store).expect("persist should succeed");
    let reloaded = StreamConfig::load(&store);
    assert_eq!(reloaded, config);
}

#[test]
fn test_config_load_from_corrupt_store_uses_defaults() {
    let store = MemorySettingsStore::new();
    store
        .save_raw(b"{ not valid json")
        .expect("raw save should succeed");

    let config = StreamConfig::load(&store);
    assert_eq!(config, StreamConfig::default());
}

#[test]
fn test_config_stored_form_uses_tokens() {
    // The persisted record uses the same stable tokens as the codecs
    let store = MemorySettingsStore::new();
    StreamConfig::default()
        .persist(&store)
        .expect("persist should succeed");

    let raw = store.contents().expect("store should hold the record");
    let text = String::from_utf8(raw).expect("stored record should be UTF-8");
    assert!(text.contains("\"720p\""));
    assert!(text.contains("\"60\""));
}

#[test]
fn test_effective_bitrate_prefers_override() {
    let mut config = StreamConfig::default();
    assert_eq!(
        config.effective_bitrate_kbps(),
        config.resolution.auto_bitrate_kbps()
    );

    config.bitrate_kbps = Some(8_000);
    assert_eq!(config.effective_bitrate_kbps(), 8_000);
}
