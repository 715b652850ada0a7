//! Domain types and validators for Stackdock configuration.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const VALID_CONFIG_KEYS: &[&str] = &["api.base_url", "auth.token"];

/// Fallback API endpoint used when neither the environment nor the config
/// file supplies one.
pub const DEFAULT_BASE_URL: &str = "https://api.stackdock.dev";

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.stackdock/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StackdockConfig {
    /// API endpoint settings.
    #[serde(default)]
    pub api: ApiConfig,
    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
}

/// API endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Backend base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Authentication configuration. The token is issued by the external
/// identity provider and treated as opaque.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AuthConfig {
    pub token: Option<String>,
}

impl StackdockConfig {
    /// Read a setting by dotted key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "api.base_url" => Some(self.api.base_url.clone()),
            "auth.token" => self.auth.token.clone(),
            _ => None,
        }
    }

    /// Write a setting by dotted key. The key and value must already be
    /// validated.
    pub fn set(&mut self, key: &str, value: &str) {
        match key {
            "api.base_url" => self.api.base_url = value.to_string(),
            "auth.token" => self.auth.token = Some(value.to_string()),
            _ => {}
        }
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a configuration key against the whitelist.
///
/// # Errors
///
/// Returns an error if the key is not in the allowed list.
pub fn validate_config_key(key: &str) -> Result<()> {
    if !VALID_CONFIG_KEYS.contains(&key) {
        return Err(ConfigError::UnknownKey {
            key: key.to_string(),
            valid: VALID_CONFIG_KEYS.join(", "),
        }
        .into());
    }
    Ok(())
}

/// Validates a value for a given key.
///
/// # Errors
///
/// Returns an error if the value is not acceptable for the key.
pub fn validate_config_value(key: &str, value: &str) -> Result<()> {
    match key {
        "api.base_url" => {
            if !(value.starts_with("http://") || value.starts_with("https://")) {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: value.to_string(),
                    reason: "must start with http:// or https://".to_string(),
                }
                .into());
            }
        }
        "auth.token" => {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: value.to_string(),
                    reason: "token must not be empty".to_string(),
                }
                .into());
            }
        }
        _ => {}
    }
    Ok(())
}

// ── Unit tests ────────────────────────────────────────────────────────────────
