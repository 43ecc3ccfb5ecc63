// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands for settings operations
//!
//! This module provides command-line functionality for:
//! - Showing the current settings
//! - Setting individual preferences
//! - Exporting and importing settings documents

use remote_play::bridge::{PrefKey, PreferenceBridge, decode_bitrate};
use remote_play::constants::{FrameRate, Resolution};
use remote_play::errors::SettingsError;
use remote_play::session::SettingsSession;
use remote_play::storage::FsSettingsStore;
use remote_play::transfer::SettingsTransfer;
use std::path::PathBuf;

/// Show the current settings
pub fn show_settings() -> Result<(), Box<dyn std::error::Error>> {
    let store = FsSettingsStore::new()?;
    let store_path = store.path().display().to_string();
    let bridge = PreferenceBridge::load(store);
    let config = bridge.config();

    println!("Settings ({})", store_path);
    println!();
    println!("  Verbose logging:  {}", config.log_verbose);
    println!("  Swap cross/moon:  {}", config.swap_cross_moon);

    let (width, height) = config.resolution.dimensions();
    println!(
        "  Resolution:       {} ({}x{})",
        config.resolution.token(),
        width,
        height
    );
    println!("  Frame rate:       {} fps", config.fps.as_u32());

    match config.bitrate_kbps {
        Some(kbps) => println!("  Bitrate:          {} kbps", kbps),
        None => println!(
            "  Bitrate:          automatic ({} kbps)",
            config.effective_bitrate_kbps()
        ),
    }

    Ok(())
}

/// Set a single preference
pub fn set_preference(key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
    let Some(pref) = PrefKey::from_name(key) else {
        println!("Unknown preference key: {}", key);
        let known: Vec<&str> = PrefKey::ALL.iter().map(|k| k.name()).collect();
        println!("Known keys: {}", known.join(", "));
        return Ok(());
    };

    let store = FsSettingsStore::new()?;
    let mut bridge = PreferenceBridge::load(store);

    match pref {
        PrefKey::LogVerbose | PrefKey::SwapCrossMoon => {
            let parsed: bool = value
                .parse()
                .map_err(|_| format!("Expected true or false for {}", key))?;
            bridge.put_bool(key, parsed);
            println!("{} = {}", key, parsed);
        }
        PrefKey::Resolution => {
            if Resolution::from_token(value).is_none() {
                let options: Vec<&str> = Resolution::ALL.iter().map(|r| r.token()).collect();
                println!("Unknown resolution '{}'", value);
                println!("Options: {}", options.join(", "));
                return Ok(());
            }
            bridge.put_string(key, value);
            println!("{} = {}", key, value);
        }
        PrefKey::Fps => {
            if FrameRate::from_token(value).is_none() {
                let options: Vec<&str> = FrameRate::ALL.iter().map(|f| f.token()).collect();
                println!("Unknown frame rate '{}'", value);
                println!("Options: {}", options.join(", "));
                return Ok(());
            }
            bridge.put_string(key, value);
            println!("{} = {}", key, value);
        }
        PrefKey::Bitrate => {
            bridge.put_string(key, value);
            match decode_bitrate(value) {
                Some(kbps) => println!("{} = {} kbps", key, kbps),
                None => println!(
                    "{} = automatic ({} kbps)",
                    key,
                    bridge.config().effective_bitrate_kbps()
                ),
            }
        }
    }

    Ok(())
}

/// Export the current settings to a portable document
pub fn export_settings(output: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let store = FsSettingsStore::new()?;
    let dir = output.unwrap_or_else(SettingsTransfer::default_export_dir);

    let rt = tokio::runtime::Runtime::new()?;
    let path = rt.block_on(async {
        let mut session = SettingsSession::open(store);
        session.start_export(dir).await;
        session
            .finish_export()
            .await
            .unwrap_or(Err(SettingsError::Cancelled))
    })?;

    println!("Settings exported: {}", path.display());
    Ok(())
}

/// Import settings from an exported document
pub fn import_settings(file: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let store = FsSettingsStore::new()?;

    let rt = tokio::runtime::Runtime::new()?;
    let summary = rt.block_on(async {
        let mut session = SettingsSession::open(store);
        session.start_import(file).await;
        session
            .finish_import()
            .await
            .unwrap_or(Err(SettingsError::Cancelled))
    })?;

    if summary.skipped.is_empty() {
        println!("Settings imported.");
    } else {
        println!(
            "Settings imported; unrecognized values kept their previous setting: {}",
            summary.skipped.join(", ")
        );
    }

    Ok(())
}
