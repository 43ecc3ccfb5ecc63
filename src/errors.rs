// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the settings core
//!
//! Only document-level and I/O-level failures surface here. Unknown
//! preference keys, unrecognized enum tokens and unparseable bitrate strings
//! are compatibility tolerances resolved inside the bridge and codecs and
//! never reach this type.

use thiserror::Error;

/// Result type alias using SettingsError
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Failures surfaced by settings persistence and transfer
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Imported document is not structurally valid; nothing was applied
    #[error("malformed settings document: {0}")]
    MalformedDocument(#[from] serde_json::Error),

    /// Reading or writing a settings document failed; safe to retry
    #[error("settings I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The backing settings store failed or is unavailable
    #[error("settings storage failed: {0}")]
    Store(String),

    /// The owning session cancelled the transfer before it completed
    #[error("settings transfer cancelled")]
    Cancelled,
}
