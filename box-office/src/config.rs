//! Configuration management for the box office.
//!
//! Loads configuration from environment variables with sensible defaults.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Process-level settings
    pub app: AppConfig,
    /// Checkout collaborator settings
    pub checkout: CheckoutConfig,
}

/// Process-level settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default `tracing` filter when `RUST_LOG` is unset
    pub log_level: String,
    /// JSON file replacing the built-in page content
    pub content_path: Option<PathBuf>,
    /// Seconds to wait for in-flight effects on shutdown
    pub shutdown_timeout_secs: u64,
}

/// Checkout collaborator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Simulated hand-off latency in milliseconds
    pub latency_ms: u64,
    /// Seconds before a hand-off is marked timed out
    pub timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Reads:
    /// - `LOG_LEVEL` (default `info`)
    /// - `CONTENT_PATH` (default: built-in content)
    /// - `SHUTDOWN_TIMEOUT_SECS` (default 5)
    /// - `CHECKOUT_LATENCY_MS` (default 100)
    /// - `CHECKOUT_TIMEOUT_SECS` (default 30)
    ///
    /// Unparseable numbers fall back to their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            app: AppConfig {
                log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
                content_path: lookup("CONTENT_PATH")
                    .filter(|path| !path.is_empty())
                    .map(PathBuf::from),
                shutdown_timeout_secs: lookup("SHUTDOWN_TIMEOUT_SECS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
            },
            checkout: CheckoutConfig {
                latency_ms: lookup("CHECKOUT_LATENCY_MS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(100),
                timeout_secs: lookup("CHECKOUT_TIMEOUT_SECS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            },
        }
    }

    /// Shutdown grace period
    #[must_use]
    pub const fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.app.shutdown_timeout_secs)
    }

    /// Simulated checkout latency
    #[must_use]
    pub const fn checkout_latency(&self) -> Duration {
        Duration::from_millis(self.checkout.latency_ms)
    }

    /// Checkout timeout
    #[must_use]
    pub const fn checkout_timeout(&self) -> Duration {
        Duration::from_secs(self.checkout.timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
