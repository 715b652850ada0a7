//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::time::Duration;

use anyhow::Result;

use crate::domain::config::StackdockConfig;
use crate::domain::error::ApiError;

// ── API Transport Port ────────────────────────────────────────────────────────

/// Abstracts the HTTP/JSON backend so services can be tested with canned
/// responses. Paths are relative to the configured base URL and start with
/// `/api/`.
#[allow(async_fn_in_trait)]
pub trait ApiTransport {
    /// `GET` a path with query parameters.
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<serde_json::Value, ApiError>;
    /// `POST` a JSON body.
    async fn post(&self, path: &str, body: &serde_json::Value) -> Result<serde_json::Value, ApiError>;
    /// `PUT` a JSON body.
    async fn put(&self, path: &str, body: &serde_json::Value) -> Result<serde_json::Value, ApiError>;
    /// `DELETE` a path.
    async fn delete(&self, path: &str) -> Result<serde_json::Value, ApiError>;
}

// ── Clock Port ────────────────────────────────────────────────────────────────

/// Abstracts the timed wait between polling attempts so the poll loop can be
/// driven deterministically in tests.
#[allow(async_fn_in_trait)]
pub trait Sleeper {
    async fn sleep(&self, duration: Duration);
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

// ── Session Port ──────────────────────────────────────────────────────────────

/// Provides the current session's credentials. Injected wherever auth is
/// needed — there is no ambient global session.
pub trait SessionProvider {
    /// The bearer token for the authenticated user, if any.
    fn bearer_token(&self) -> Option<String>;
}

// ── Config Store Port ─────────────────────────────────────────────────────────

/// Abstracts configuration persistence (load/save).
pub trait ConfigStore {
    /// Load the configuration, returning defaults if none exists.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or parsed.
    fn load(&self) -> Result<StackdockConfig>;
    /// Persist the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn save(&self, config: &StackdockConfig) -> Result<()>;
    /// Path of the backing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    fn path(&self) -> Result<std::path::PathBuf>;
}
