// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "remote-play")]
#[command(about = "Settings for the Remote Play streaming client")]
#[command(version = env!("GIT_VERSION"))]
#[command(subcommand_required = false)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current settings
    Settings,

    /// Set a single preference
    Set {
        /// Preference key (e.g. resolution, fps, bitrate)
        key: String,

        /// New value (e.g. 1080p, 60, 15000; empty bitrate means automatic)
        value: String,
    },

    /// Export settings to a portable document
    Export {
        /// Output directory (default: ~/Documents)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import settings from an exported document
    Import {
        /// Path to a previously exported settings document
        file: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=remote_play=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Set { key, value }) => cli::set_preference(&key, &value),
        Some(Commands::Export { output }) => cli::export_settings(output),
        Some(Commands::Import { file }) => cli::import_settings(file),
        Some(Commands::Settings) | None => cli::show_settings(),
    }
}
