use std::env;
use std::path::PathBuf;
use std::time::Duration;

use dotenvy::dotenv;
use strum_macros::{Display, EnumString};

use crate::error::ConfigError;

/// Backend deployment the app talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Environment {
    #[default]
    #[strum(to_string = "dev", serialize = "development")]
    Dev,
    #[strum(to_string = "prod", serialize = "production")]
    Prod,
}

impl Environment {
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Dev => "https://ti054d02.agussbn.my.id",
            Environment::Prod => "https://ti054d01.agussbn.my.id",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    pub base_url: String,
    pub timeout: Duration,
    pub session_file: PathBuf,
    pub log_dir: PathBuf,
}

impl Config {
    pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("SIMPADU_ENV") {
            Some(raw) => raw
                .trim()
                .parse::<Environment>()
                .map_err(|_| ConfigError::UnknownEnvironment(raw))?,
            None => Environment::default(),
        };

        let base_url = lookup("SIMPADU_BASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| environment.base_url().to_string());

        let timeout_ms = match lookup("SIMPADU_TIMEOUT_MS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or(ConfigError::InvalidNumber {
                    key: "SIMPADU_TIMEOUT_MS",
                    value: raw,
                })?,
            None => Self::DEFAULT_TIMEOUT_MS,
        };

        Ok(Self {
            environment,
            base_url: normalize_origin(&base_url),
            timeout: Duration::from_millis(timeout_ms),
            session_file: lookup("SIMPADU_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".simpadu/session.json")),
            log_dir: lookup("SIMPADU_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("logs")),
        })
    }
}

/// Strips whitespace and trailing slashes so paths can be appended verbatim.
pub fn normalize_origin(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
