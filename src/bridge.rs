// SPDX-License-Identifier: GPL-3.0-only

//! String-keyed preference access for the host UI
//!
//! The settings screen addresses fields by preference key and reads/writes
//! plain booleans and strings; this module maps those generic accesses onto
//! the typed [`StreamConfig`] record. Keys the bridge does not know are
//! tolerated on both sides: gets fall back to the caller's default and puts
//! are silent no-ops, so a host screen schema may reference more keys than
//! this build understands and vice versa.

use crate::config::StreamConfig;
use crate::constants::{FrameRate, Resolution};
use crate::storage::SettingsStore;
use tracing::error;

/// The preference keys this client understands
///
/// One key per [`StreamConfig`] field; the key set is closed so every
/// accessor match is checked for completeness at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefKey {
    /// Verbose session logging (boolean)
    LogVerbose,
    /// Swap confirm/back controller buttons (boolean)
    SwapCrossMoon,
    /// Resolution preset token (string)
    Resolution,
    /// Frame rate preset token (string)
    Fps,
    /// Manual bitrate in kbps, empty for automatic (string)
    Bitrate,
}

impl PrefKey {
    /// All keys, in settings-screen order
    pub const ALL: [PrefKey; 5] = [
        PrefKey::LogVerbose,
        PrefKey::SwapCrossMoon,
        PrefKey::Resolution,
        PrefKey::Fps,
        PrefKey::Bitrate,
    ];

    /// Wire name the host UI uses for this key
    pub const fn name(self) -> &'static str {
        match self {
            PrefKey::LogVerbose => "log_verbose",
            PrefKey::SwapCrossMoon => "swap_cross_moon",
            PrefKey::Resolution => "resolution",
            PrefKey::Fps => "fps",
            PrefKey::Bitrate => "bitrate",
        }
    }

    /// Look up a key by its wire name
    pub fn from_name(key: &str) -> Option<Self> {
        PrefKey::ALL.into_iter().find(|k| k.name() == key)
    }
}

/// Decode a bitrate override from its text form
///
/// An empty or unparseable string selects the automatic bitrate; that is the
/// documented way for the UI text field to request "automatic", not an
/// error. Parsed values are not range-checked here.
pub fn decode_bitrate(value: &str) -> Option<u32> {
    value.parse().ok()
}

/// Encode a bitrate override into its text form
pub fn encode_bitrate(value: Option<u32>) -> String {
    match value {
        Some(kbps) => kbps.to_string(),
        None => String::new(),
    }
}

/// Adapter between the host UI's generic key/value accesses and the typed
/// settings record
///
/// Every successful put writes the whole record back to the backing store;
/// there is no separate save step. Store failures are logged and do not fail
/// the put.
pub struct PreferenceBridge<S> {
    config: StreamConfig,
    store: S,
}

impl<S: SettingsStore> PreferenceBridge<S> {
    /// Construct the bridge for one settings session, loading the record
    /// from the backing store (defaults when absent)
    pub fn load(store: S) -> Self {
        let config = StreamConfig::load(&store);
        Self { config, store }
    }

    /// Current state of the typed record
    pub fn config(&self) -> &StreamConfig {
        &self.config
    }

    /// Read a boolean preference; unknown or string-backed keys return
    /// `default` unchanged
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match PrefKey::from_name(key) {
            Some(PrefKey::LogVerbose) => self.config.log_verbose,
            Some(PrefKey::SwapCrossMoon) => self.config.swap_cross_moon,
            Some(PrefKey::Resolution) | Some(PrefKey::Fps) | Some(PrefKey::Bitrate) | None => {
                default
            }
        }
    }

    /// Write a boolean preference; unknown or string-backed keys are a
    /// silent no-op
    pub fn put_bool(&mut self, key: &str, value: bool) {
        match PrefKey::from_name(key) {
            Some(PrefKey::LogVerbose) => self.config.log_verbose = value,
            Some(PrefKey::SwapCrossMoon) => self.config.swap_cross_moon = value,
            Some(PrefKey::Resolution) | Some(PrefKey::Fps) | Some(PrefKey::Bitrate) | None => {
                return;
            }
        }
        self.persist();
    }

    /// Read a string preference in its codec-encoded form; unknown or
    /// boolean-backed keys return `default` unchanged
    pub fn get_string(&self, key: &str, default: &str) -> String {
        match PrefKey::from_name(key) {
            Some(PrefKey::Resolution) => self.config.resolution.token().to_string(),
            Some(PrefKey::Fps) => self.config.fps.token().to_string(),
            Some(PrefKey::Bitrate) => encode_bitrate(self.config.bitrate_kbps),
            Some(PrefKey::LogVerbose) | Some(PrefKey::SwapCrossMoon) | None => {
                default.to_string()
            }
        }
    }

    /// Write a string preference through its field codec
    ///
    /// Unknown keys and boolean-backed keys are silent no-ops. An enum token
    /// this build does not recognize keeps the field's previous value; it
    /// must not reset a user's earlier choice.
    pub fn put_string(&mut self, key: &str, value: &str) {
        match PrefKey::from_name(key) {
            Some(PrefKey::Resolution) => {
                let Some(resolution) = Resolution::from_token(value) else {
                    return;
                };
                self.config.resolution = resolution;
            }
            Some(PrefKey::Fps) => {
                let Some(fps) = FrameRate::from_token(value) else {
                    return;
                };
                self.config.fps = fps;
            }
            Some(PrefKey::Bitrate) => {
                self.config.bitrate_kbps = decode_bitrate(value);
            }
            Some(PrefKey::LogVerbose) | Some(PrefKey::SwapCrossMoon) | None => {
                return;
            }
        }
        self.persist();
    }

    fn persist(&self) {
        if let Err(err) = self.config.persist(&self.store) {
            error!(?err, "Failed to save settings");
        }
    }
}
