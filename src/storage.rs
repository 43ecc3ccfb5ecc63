// SPDX-License-Identifier: GPL-3.0-only

//! Backing store for the persisted settings record
//!
//! The host environment supplies the actual storage; the core only needs a
//! raw blob it can load at session start and rewrite after every mutation.

use crate::errors::{SettingsError, SettingsResult};
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Raw storage for the serialized settings record
pub trait SettingsStore {
    /// Load the persisted settings blob. Returns `Ok(None)` when nothing has
    /// been stored yet.
    fn load_raw(&self) -> SettingsResult<Option<Vec<u8>>>;

    /// Persist the settings blob, replacing any previous contents.
    fn save_raw(&self, data: &[u8]) -> SettingsResult<()>;
}

/// Store the settings as a JSON file under the platform config directory
pub struct FsSettingsStore {
    path: PathBuf,
}

impl FsSettingsStore {
    /// Create a store rooted at the user config directory
    /// (e.g. `~/.config/remote-play/settings.json`)
    pub fn new() -> SettingsResult<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| SettingsError::Store("could not resolve config directory".into()))?
            .join("remote-play");
        Ok(Self {
            path: config_dir.join("settings.json"),
        })
    }

    /// Create a store backed by an explicit file path
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file, for display
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl SettingsStore for FsSettingsStore {
    fn load_raw(&self) -> SettingsResult<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(SettingsError::Io(err)),
        }
    }

    fn save_raw(&self, data: &[u8]) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, data)?;
        Ok(())
    }
}

/// Keep the settings blob in memory; used by tests and previews
///
/// Clones share the same buffer, so a test can hold one handle and hand
/// another to the bridge.
#[derive(Clone, Default)]
pub struct MemorySettingsStore {
    data: Arc<Mutex<Option<Vec<u8>>>>,
}

impl MemorySettingsStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Current stored blob, if any
    pub fn contents(&self) -> Option<Vec<u8>> {
        self.data.lock().expect("settings store poisoned").clone()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load_raw(&self) -> SettingsResult<Option<Vec<u8>>> {
        Ok(self.contents())
    }

    fn save_raw(&self, data: &[u8]) -> SettingsResult<()> {
        *self.data.lock().expect("settings store poisoned") = Some(data.to_vec());
        Ok(())
    }
}
