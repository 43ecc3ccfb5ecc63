// SPDX-License-Identifier: GPL-3.0-only

use crate::constants::{FrameRate, Resolution};
use crate::errors::{SettingsError, SettingsResult};
use crate::storage::SettingsStore;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// The typed settings record for one client installation
///
/// Constructed once per settings session from the backing store, mutated in
/// place by the preference bridge and the import path, and written back to
/// the store by every successful mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    /// Verbose session logging
    pub log_verbose: bool,
    /// Swap the confirm/back controller buttons (cross and moon)
    pub swap_cross_moon: bool,
    /// Stream resolution preset
    pub resolution: Resolution,
    /// Stream frame rate preset
    pub fps: FrameRate,
    /// Manual bitrate override in kbps; `None` selects the automatic bitrate
    /// for the current resolution
    pub bitrate_kbps: Option<u32>,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            log_verbose: false,
            swap_cross_moon: false,
            resolution: Resolution::default(), // 720p
            fps: FrameRate::default(),         // 60 fps
            bitrate_kbps: None,                // Automatic
        }
    }
}

impl StreamConfig {
    /// Load the record from the backing store, falling back to defaults when
    /// nothing is stored or the stored blob does not parse
    pub fn load<S: SettingsStore>(store: &S) -> Self {
        match store.load_raw() {
            Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
                Ok(config) => config,
                Err(err) => {
                    warn!(error = %err, "Stored settings did not parse, using defaults");
                    Self::default()
                }
            },
            Ok(None) => Self::default(),
            Err(err) => {
                warn!(error = %err, "Failed to read stored settings, using defaults");
                Self::default()
            }
        }
    }

    /// Write the record to the backing store
    pub fn persist<S: SettingsStore>(&self, store: &S) -> SettingsResult<()> {
        let data = serde_json::to_vec_pretty(self)
            .map_err(|err| SettingsError::Store(err.to_string()))?;
        store.save_raw(&data)
    }

    /// Bitrate the stream will actually use: the manual override when set,
    /// otherwise the automatic bitrate for the selected resolution
    pub fn effective_bitrate_kbps(&self) -> u32 {
        self.bitrate_kbps
            .unwrap_or_else(|| self.resolution.auto_bitrate_kbps())
    }
}
