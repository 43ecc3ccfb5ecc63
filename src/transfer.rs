// SPDX-License-Identifier: GPL-3.0-only

//! Settings export and import
//!
//! Exports the full settings record as a portable JSON document for sharing
//! between installations, and applies an imported document back onto the
//! record. Import distinguishes two failure layers: a document that does not
//! parse rejects the whole import with nothing applied, while individual
//! fields inside a valid document go through the same tolerant codecs as the
//! preference bridge and are skipped independently.

use crate::bridge::{PrefKey, PreferenceBridge, encode_bitrate};
use crate::config::StreamConfig;
use crate::constants::{FrameRate, Resolution};
use crate::errors::{SettingsError, SettingsResult};
use crate::storage::SettingsStore;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use uuid::Uuid;

/// Portable settings document
///
/// Enum fields travel as their storage tokens; the bitrate is `null` (or
/// absent) for automatic. Unknown extra fields in an imported document are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsDocument {
    pub log_verbose: bool,
    pub swap_cross_moon: bool,
    /// Resolution token, e.g. "720p"
    pub resolution: String,
    /// Frame rate token, e.g. "60"
    pub fps: String,
    /// Manual bitrate in kbps; `null` selects automatic
    pub bitrate: Option<u32>,
}

impl SettingsDocument {
    /// Snapshot the full record into a document. Pure read.
    pub fn from_config(config: &StreamConfig) -> Self {
        Self {
            log_verbose: config.log_verbose,
            swap_cross_moon: config.swap_cross_moon,
            resolution: config.resolution.token().to_string(),
            fps: config.fps.token().to_string(),
            bitrate: config.bitrate_kbps,
        }
    }
}

/// Advisory outcome of an import: fields whose document value was not
/// recognized and therefore kept their previous setting
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub skipped: Vec<&'static str>,
}

/// Where an export will be published, and the staging file it is written
/// through first
///
/// The document is staged under a unique dot-prefixed name in the
/// destination directory and renamed into place once fully written, so the
/// published name never points at a partial document.
#[derive(Debug, Clone)]
pub struct ExportPlan {
    /// Published document path
    pub path: PathBuf,
    /// Staging file the document is written to before the rename
    pub stage: PathBuf,
}

impl ExportPlan {
    /// Plan an export into `dir` under a timestamped file name
    pub fn new(dir: &Path) -> Self {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let name = format!("remote-play-settings-{}.json", timestamp);
        let stage = dir.join(format!(".{}.{}.partial", name, Uuid::new_v4()));
        Self {
            path: dir.join(name),
            stage,
        }
    }
}

/// Settings transfer operations
pub struct SettingsTransfer;

impl SettingsTransfer {
    /// Default directory for exported settings documents
    ///
    /// The user documents directory, falling back to home
    pub fn default_export_dir() -> PathBuf {
        dirs::document_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Export a settings snapshot to the planned path
    ///
    /// Returns the published path
    pub async fn export(config: StreamConfig, plan: &ExportPlan) -> SettingsResult<PathBuf> {
        let document = SettingsDocument::from_config(&config);
        let json = serde_json::to_string_pretty(&document)
            .map_err(|err| SettingsError::Store(err.to_string()))?;

        if let Some(parent) = plan.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        // Stage first, publish by rename
        if let Err(err) = tokio::fs::write(&plan.stage, &json).await {
            let _ = tokio::fs::remove_file(&plan.stage).await;
            return Err(SettingsError::Io(err));
        }
        if let Err(err) = tokio::fs::rename(&plan.stage, &plan.path).await {
            let _ = tokio::fs::remove_file(&plan.stage).await;
            return Err(SettingsError::Io(err));
        }

        info!(path = %plan.path.display(), "Settings exported");
        Ok(plan.path.clone())
    }

    /// Read and parse an exported document
    ///
    /// Fails as a whole on unreadable input (`Io`) or a document that does
    /// not match the schema (`MalformedDocument`); no settings are touched
    /// on either failure.
    pub async fn read_document(path: &Path) -> SettingsResult<SettingsDocument> {
        let raw = tokio::fs::read_to_string(path).await?;
        let document = serde_json::from_str(&raw)?;
        Ok(document)
    }

    /// Apply a parsed document onto the record, one field at a time
    ///
    /// Every field goes through the bridge, so each applied field is
    /// immediately durable and carries the bridge's codec tolerances: an
    /// enum token this build does not recognize leaves that one field at its
    /// previous value and is reported in the summary.
    pub fn apply_document<S: SettingsStore>(
        document: &SettingsDocument,
        bridge: &mut PreferenceBridge<S>,
    ) -> ImportSummary {
        let mut summary = ImportSummary::default();

        bridge.put_bool(PrefKey::LogVerbose.name(), document.log_verbose);
        bridge.put_bool(PrefKey::SwapCrossMoon.name(), document.swap_cross_moon);

        if Resolution::from_token(&document.resolution).is_none() {
            warn!(token = %document.resolution, "Skipping unrecognized resolution");
            summary.skipped.push("resolution");
        }
        bridge.put_string(PrefKey::Resolution.name(), &document.resolution);

        if FrameRate::from_token(&document.fps).is_none() {
            warn!(token = %document.fps, "Skipping unrecognized frame rate");
            summary.skipped.push("fps");
        }
        bridge.put_string(PrefKey::Fps.name(), &document.fps);

        bridge.put_string(PrefKey::Bitrate.name(), &encode_bitrate(document.bitrate));

        info!(skipped = summary.skipped.len(), "Settings imported");
        summary
    }
}
