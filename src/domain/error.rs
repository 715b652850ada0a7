//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`, or
//! `crate::application`. All error types implement `thiserror::Error` and
//! convert to `anyhow::Error` via the `?` operator.

use thiserror::Error;

// ── API errors ────────────────────────────────────────────────────────────────

/// Errors surfaced by the backend API boundary.
///
/// Every failure crossing the transport is folded into one of these variants;
/// nothing propagates past the service layer as a panic or an untyped error.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status. Carries the server's
    /// `message` field when present, else a generic `HTTP <status>` text.
    #[error("{0}")]
    Api(String),

    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("cannot reach {url}: {reason}")]
    Network { url: String, reason: String },

    /// The response body was not JSON at all. Missing fields are *not* a
    /// shape error — they default during normalization.
    #[error("unexpected response from server: {0}")]
    Shape(String),
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration key/value validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value for {key}: {value}\n\n{reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}
