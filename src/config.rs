//! Runtime configuration.
//!
//! The backend URL comes from the `NUDGE_URL` environment variable, with a
//! `--url` flag taking precedence. Logging goes to a file (the terminal
//! belongs to the TUI): `NUDGE_LOG` overrides the default path under the
//! user state directory.

use std::path::PathBuf;

/// Default backend base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone)]
pub struct Config {
    /// Backend base URL
    pub base_url: String,
    /// Log file path; `None` disables logging entirely
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the process environment and CLI arguments.
    pub fn load() -> Self {
        Self::from_parts(
            std::env::var("NUDGE_URL").ok(),
            std::env::var("NUDGE_LOG").ok(),
            std::env::args().skip(1),
        )
    }

    /// Build a config from explicit parts (separated out for testing).
    pub fn from_parts(
        url_env: Option<String>,
        log_env: Option<String>,
        args: impl Iterator<Item = String>,
    ) -> Self {
        let mut base_url = url_env.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let mut args = args.peekable();
        while let Some(arg) = args.next() {
            if arg == "--url" {
                if let Some(value) = args.next() {
                    base_url = value;
                }
            }
        }

        let log_file = log_env.map(PathBuf::from).or_else(default_log_path);

        Self { base_url, log_file }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            log_file: None,
        }
    }
}

fn default_log_path() -> Option<PathBuf> {
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .map(|dir| dir.join("nudge").join("nudge.log"))
}
