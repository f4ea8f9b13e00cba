//! Tracing subscriber setup

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Log to `path`. The dashboard owns the terminal, so nothing may reach stdout.
pub fn init_file(path: &Path, level: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    report_existing(installed);
    Ok(())
}

/// Log to stderr, keeping stdout clean for command output
pub fn init_stderr(level: &str) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    report_existing(installed);
}

/// A global subscriber can only be set once; a later init keeps the first
/// one and records that through it
fn report_existing(installed: Result<(), Box<dyn std::error::Error + Send + Sync>>) {
    if let Err(e) = installed {
        tracing::debug!(error = %e, "Tracing subscriber already installed, keeping it");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_logging_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("siemdeck.log");
        init_file(&path, "debug").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_repeated_init_keeps_first_subscriber() {
        init_stderr("info");
        init_stderr("debug");
        report_existing(Err("already set".into()));
    }

    #[test]
    fn test_unwritable_log_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "").unwrap();
        let err = init_file(&blocker.join("siemdeck.log"), "info").unwrap_err();
        assert!(err.to_string().contains("log directory"));
    }
}
