// SPDX-License-Identifier: GPL-3.0-only

use std::process::Command;

// Stamp the build with a version string for `remote-play --version`.
// Packaged builds set REMOTE_PLAY_VERSION; development builds fall back
// to `git describe`, then to the bare commit hash.
fn main() {
    println!("cargo::rerun-if-changed=.git/HEAD");
    println!("cargo::rerun-if-changed=.git/refs/tags");
    println!("cargo::rerun-if-env-changed=REMOTE_PLAY_VERSION");

    let version = std::env::var("REMOTE_PLAY_VERSION")
        .ok()
        .or_else(describe)
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo::rustc-env=GIT_VERSION={}", version);
}

fn describe() -> Option<String> {
    let described = git(&["describe", "--tags", "--always", "--match", "v*"])?;
    Some(described.strip_prefix('v').unwrap_or(&described).to_string())
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!text.is_empty()).then_some(text)
}
