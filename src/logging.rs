//! File-based logging setup.
//!
//! The terminal belongs to the TUI, so log output goes to a file. The
//! filter defaults to `nudge=info` and can be overridden with `RUST_LOG`.

use std::fs::File;
use std::io;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Initialize the global subscriber writing to the configured log file.
///
/// A config without a log file disables logging. Calling this more than
/// once is a no-op.
pub fn init(config: &Config) -> io::Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = Arc::new(File::create(path)?);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nudge=info")),
        )
        .with_writer(file)
        .with_ansi(false)
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_init_creates_log_file_and_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("nudge.log");
        let config = Config {
            base_url: "http://test".to_string(),
            log_file: Some(path.clone()),
        };

        init(&config).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_init_without_log_file_is_noop() {
        let config = Config {
            base_url: "http://test".to_string(),
            log_file: None,
        };
        init(&config).unwrap();
    }

    #[test]
    fn test_init_with_unwritable_path_errors() {
        let config = Config {
            base_url: "http://test".to_string(),
            log_file: Some(PathBuf::from("/proc/definitely/not/writable.log")),
        };
        assert!(init(&config).is_err());
    }
}
