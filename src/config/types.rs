//! Configuration types.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the catalog service (scheme + host + port).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub timeouts: TimeoutConfig,
    #[serde(default)]
    pub authoring: AuthoringConfig,
}

/// HTTP timeout settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeoutConfig {
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_seconds: u64,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_request_timeout")]
    pub request_seconds: u64,
}

/// Authoring workflow settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthoringConfig {
    /// How long the post-save success indicator stays up before the
    /// draft resets, in milliseconds (default: 4000).
    #[serde(default = "default_saved_reset_delay_ms")]
    pub saved_reset_delay_ms: u64,
}

/// Resolved timeout durations for building an HTTP client.
#[derive(Debug, Clone, Copy)]
pub struct Timeouts {
    pub connect: Duration,
    pub request: Duration,
}

impl Config {
    /// Resolved timeout durations.
    pub fn timeouts(&self) -> Timeouts {
        Timeouts {
            connect: Duration::from_secs(self.timeouts.connect_seconds),
            request: Duration::from_secs(self.timeouts.request_seconds),
        }
    }

    /// Delay between a successful save and the automatic draft reset.
    pub fn saved_reset_delay(&self) -> Duration {
        Duration::from_millis(self.authoring.saved_reset_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeouts: TimeoutConfig::default(),
            authoring: AuthoringConfig::default(),
        }
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_seconds: default_connect_timeout(),
            request_seconds: default_request_timeout(),
        }
    }
}

impl Default for AuthoringConfig {
    fn default() -> Self {
        Self {
            saved_reset_delay_ms: default_saved_reset_delay_ms(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8001".to_string()
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_request_timeout() -> u64 {
    30
}

fn default_saved_reset_delay_ms() -> u64 {
    4000
}
