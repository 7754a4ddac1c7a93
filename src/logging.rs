//! Logging setup
//!
//! The TUI owns the terminal, so log output goes to a file in the config
//! directory. The filter comes from `MULTISTEP_LOG` (e.g. `multistep=debug`),
//! falling back to `info`, or `multistep=debug` when verbose.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::paths::MultiStepPaths;
use crate::error::{MultiStepError, MultiStepResult};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "MULTISTEP_LOG";

/// Build the log filter from the environment
pub fn log_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new(format!("info,{}=debug", env!("CARGO_CRATE_NAME")))
        } else {
            EnvFilter::new("info")
        }
    })
}

/// Install the global subscriber, appending to the log file
pub fn init_logging(paths: &MultiStepPaths, verbose: bool) -> MultiStepResult<()> {
    paths.ensure_directories()?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())
        .map_err(|e| MultiStepError::Io(format!("Failed to open log file: {}", e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| MultiStepError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_log_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MultiStepPaths::with_base_dir(temp_dir.path().join("logs"));

        // A subscriber may already be installed by another test; only the
        // file creation is checked.
        let _ = init_logging(&paths, true);
        assert!(paths.log_file().exists());
    }
}
