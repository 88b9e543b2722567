//! Host configuration.
//!
//! Read from environment variables at startup. Library code never reads the
//! environment itself; only the binary calls [`HostConfig::from_env`].

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::libcal::{DEFAULT_URL, HoursConfig};

pub const ENV_URL: &str = "LIBRARY_HOURS_URL";
pub const ENV_TIMEOUT_SECS: &str = "LIBRARY_HOURS_TIMEOUT_SECS";
pub const ENV_REFRESH_SECS: &str = "LIBRARY_HOURS_REFRESH_SECS";
pub const ENV_ADDR: &str = "LIBRARY_HOURS_ADDR";
pub const ENV_FIXTURE: &str = "LIBRARY_HOURS_FIXTURE";

/// Error for a malformed environment variable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {var}={value:?}: {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: &'static str,
}

/// Configuration for the host server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Hours feed URL
    pub url: String,

    /// Per-fetch timeout.
    pub timeout: Duration,

    /// How often to refresh the feed.
    pub refresh_interval: Duration,

    /// Address to serve on.
    pub addr: SocketAddr,

    /// Serve this JSON file instead of calling the feed.
    pub fixture: Option<PathBuf>,
}

impl HostConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// anything unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let url = lookup(ENV_URL).unwrap_or(defaults.url);

        let timeout = match lookup(ENV_TIMEOUT_SECS) {
            Some(value) => Duration::from_secs(parse_secs(ENV_TIMEOUT_SECS, value)?),
            None => defaults.timeout,
        };

        let refresh_interval = match lookup(ENV_REFRESH_SECS) {
            Some(value) => Duration::from_secs(parse_secs(ENV_REFRESH_SECS, value)?),
            None => defaults.refresh_interval,
        };

        let addr = match lookup(ENV_ADDR) {
            Some(value) => value.parse().map_err(|_| ConfigError {
                var: ENV_ADDR,
                value,
                reason: "expected host:port",
            })?,
            None => defaults.addr,
        };

        let fixture = lookup(ENV_FIXTURE)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            url,
            timeout,
            refresh_interval,
            addr,
            fixture,
        })
    }

    /// Client configuration for the hours feed.
    pub fn hours_config(&self) -> HoursConfig {
        HoursConfig::new()
            .with_url(self.url.clone())
            .with_timeout(self.timeout.as_secs())
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout: Duration::from_secs(30),
            refresh_interval: Duration::from_secs(60 * 60),
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            fixture: None,
        }
    }
}

/// Parse a positive number of seconds.
fn parse_secs(var: &'static str, value: String) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(0) => Err(ConfigError {
            var,
            value,
            reason: "must be greater than zero",
        }),
        Ok(secs) => Ok(secs),
        Err(_) => Err(ConfigError {
            var,
            value,
            reason: "expected a whole number of seconds",
        }),
    }
}
