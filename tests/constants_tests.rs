// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for the quality preset constants

use remote_play::constants::{FrameRate, Resolution};

#[test]
fn test_resolution_tokens_round_trip() {
    for resolution in Resolution::ALL {
        assert_eq!(
            Resolution::from_token(resolution.token()),
            Some(resolution),
            "Token {:?} should decode back to its variant",
            resolution.token()
        );
    }
}

#[test]
fn test_resolution_unknown_token_decodes_to_none() {
    assert_eq!(Resolution::from_token("9999p"), None);
    assert_eq!(Resolution::from_token(""), None);
    assert_eq!(Resolution::from_token("720"), None);
}

#[test]
fn test_resolution_tokens_are_unique() {
    for a in Resolution::ALL {
        for b in Resolution::ALL {
            if a != b {
                assert_ne!(a.token(), b.token(), "Tokens must be unique per enum");
            }
        }
    }
}

#[test]
fn test_resolution_ordering() {
    // Presentation order is lowest to highest
    let mut prev_pixels = 0u32;
    for resolution in Resolution::ALL {
        let (width, height) = resolution.dimensions();
        let pixels = width * height;
        assert!(
            pixels > prev_pixels,
            "Resolutions should be ordered from lowest to highest"
        );
        prev_pixels = pixels;
    }
}

#[test]
fn test_auto_bitrate_scales_with_resolution() {
    // Higher resolution should have a higher automatic bitrate
    let mut prev_bitrate = 0u32;
    for resolution in Resolution::ALL {
        let bitrate = resolution.auto_bitrate_kbps();
        assert!(
            bitrate > prev_bitrate,
            "Automatic bitrate should grow with resolution"
        );
        prev_bitrate = bitrate;
    }
}

#[test]
fn test_frame_rate_tokens_round_trip() {
    for fps in FrameRate::ALL {
        assert_eq!(FrameRate::from_token(fps.token()), Some(fps));
    }
}

#[test]
fn test_frame_rate_unknown_token_decodes_to_none() {
    assert_eq!(FrameRate::from_token("120"), None);
    assert_eq!(FrameRate::from_token("sixty"), None);
}

#[test]
fn test_frame_rate_values_match_tokens() {
    assert_eq!(FrameRate::Fps30.as_u32(), 30);
    assert_eq!(FrameRate::Fps60.as_u32(), 60);
    for fps in FrameRate::ALL {
        assert_eq!(fps.as_u32().to_string(), fps.token());
    }
}

#[test]
fn test_defaults() {
    assert_eq!(Resolution::default(), Resolution::R720p);
    assert_eq!(FrameRate::default(), FrameRate::Fps60);
}
