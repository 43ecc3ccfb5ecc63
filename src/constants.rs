// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants
//!
//! Stream quality presets: the closed sets of resolutions and frame rates
//! the client offers, with their stable storage tokens.

use serde::{Deserialize, Serialize};

/// Stream resolution presets
///
/// Each variant carries a stable token (e.g. "720p") used in the settings
/// store and in exported settings documents. Tokens are append-only: a token
/// that shipped once is never reassigned to a different variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Resolution {
    /// 640x360 - lowest bandwidth
    #[serde(rename = "360p")]
    R360p,
    /// 960x540 - reduced bandwidth
    #[serde(rename = "540p")]
    R540p,
    /// 1280x720 (default)
    #[default]
    #[serde(rename = "720p")]
    R720p,
    /// 1920x1080 - highest quality
    #[serde(rename = "1080p")]
    R1080p,
}

impl Resolution {
    /// All resolutions in presentation order (lowest to highest)
    pub const ALL: [Resolution; 4] = [
        Resolution::R360p,
        Resolution::R540p,
        Resolution::R720p,
        Resolution::R1080p,
    ];

    /// Stable storage token for this resolution
    pub fn token(&self) -> &'static str {
        match self {
            Resolution::R360p => "360p",
            Resolution::R540p => "540p",
            Resolution::R720p => "720p",
            Resolution::R1080p => "1080p",
        }
    }

    /// Look up a resolution by its storage token
    ///
    /// Returns `None` for tokens this build does not know (e.g. written by a
    /// newer client version). Callers keep their previous value in that case
    /// rather than falling back to a default.
    pub fn from_token(token: &str) -> Option<Self> {
        Resolution::ALL.into_iter().find(|r| r.token() == token)
    }

    /// Frame dimensions for this resolution
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Resolution::R360p => (640, 360),
            Resolution::R540p => (960, 540),
            Resolution::R720p => (1280, 720),
            Resolution::R1080p => (1920, 1080),
        }
    }

    /// Bitrate in kbps used when no manual override is set
    ///
    /// Tuned per resolution tier:
    /// - 360p: 2 Mbps
    /// - 540p: 6 Mbps
    /// - 720p: 10 Mbps
    /// - 1080p: 15 Mbps
    pub fn auto_bitrate_kbps(&self) -> u32 {
        match self {
            Resolution::R360p => 2_000,
            Resolution::R540p => 6_000,
            Resolution::R720p => 10_000,
            Resolution::R1080p => 15_000,
        }
    }
}

/// Stream frame rate presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FrameRate {
    /// 30 frames per second
    #[serde(rename = "30")]
    Fps30,
    /// 60 frames per second (default)
    #[default]
    #[serde(rename = "60")]
    Fps60,
}

impl FrameRate {
    /// All frame rates in presentation order
    pub const ALL: [FrameRate; 2] = [FrameRate::Fps30, FrameRate::Fps60];

    /// Stable storage token for this frame rate
    pub fn token(&self) -> &'static str {
        match self {
            FrameRate::Fps30 => "30",
            FrameRate::Fps60 => "60",
        }
    }

    /// Look up a frame rate by its storage token
    pub fn from_token(token: &str) -> Option<Self> {
        FrameRate::ALL.into_iter().find(|f| f.token() == token)
    }

    /// Frame rate as an integer
    pub fn as_u32(&self) -> u32 {
        match self {
            FrameRate::Fps30 => 30,
            FrameRate::Fps60 => 60,
        }
    }
}
