//! Shared configuration structures.

use std::env;

use serde::{Deserialize, Serialize};

/// Default service name for logging and tracing
pub const DEFAULT_SERVICE_NAME: &str = "user-core";

/// Default log filter directive
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Base configuration shared by every entry point.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CoreConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Log filter directive (e.g. `info`, `user_service_lib=debug`)
    pub log_level: String,
    /// Force debug logging regardless of `log_level`
    pub verbose: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            verbose: false,
        }
    }
}

impl CoreConfig {
    /// Load configuration from environment variables (and `.env`, if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// `CORE_LOG_LEVEL` falls back to `RUST_LOG`; unparseable booleans are
    /// treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            service_name: lookup("CORE_SERVICE_NAME").unwrap_or(defaults.service_name),
            log_level: lookup("CORE_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_level),
            verbose: lookup("CORE_VERBOSE")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.verbose),
        }
    }

    /// Effective filter directive (verbose mode sets debug level)
    pub fn filter_directive(&self) -> &str {
        if self.verbose {
            "debug"
        } else {
            &self.log_level
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
