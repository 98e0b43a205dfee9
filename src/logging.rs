//! Tracing subscriber setup.
//!
//! CLI commands log to stderr. The TUI owns the terminal, so interactive
//! sessions write to a log file instead.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Builds the level filter: `RUST_LOG` wins, then `--verbose`, then config.
fn build_filter(config: &Config, verbose: bool) -> EnvFilter {
    let fallback = if verbose {
        "debug".to_string()
    } else {
        config.logging.level.to_lowercase()
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Initializes logging to stderr.
pub fn init_stderr(config: &Config, verbose: bool) {
    // A subscriber may already be installed (e.g. in tests); that's fine.
    let _ = tracing_subscriber::registry()
        .with(build_filter(config, verbose))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Initializes logging to `path`, appending to an existing file.
pub fn init_file(config: &Config, verbose: bool, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context(format!(
            "Failed to create log directory: {}",
            parent.display()
        ))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .context(format!("Failed to open log file: {}", path.display()))?;

    let _ = tracing_subscriber::registry()
        .with(build_filter(config, verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init();

    Ok(())
}
