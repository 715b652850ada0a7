//! Domain layer — pure types, normalization, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::net`. All functions
//! are synchronous and take data in, returning data out.

pub mod catalog;
pub mod config;
pub mod deployment;
pub mod error;

#[allow(unused_imports)]
pub use catalog::{Bundle, Page, Portfolio, SearchQuery, Tool, Vendor};
#[allow(unused_imports)]
pub use config::{StackdockConfig, validate_config_key, validate_config_value};
#[allow(unused_imports)]
pub use deployment::{DeploymentStatus, PollOutcome, classify_status};
#[allow(unused_imports)]
pub use error::{ApiError, ConfigError};
