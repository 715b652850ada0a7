//! Deployment domain types and the pure polling state transitions.
//!
//! The poll loop itself lives in `application::services::poller`; this module
//! holds the data it acts on and the terminal-state classification, so the
//! decision logic is testable without any clock or transport.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Wire types ────────────────────────────────────────────────────────────────

/// Request body for creating a deployment.
#[derive(Debug, Clone, Serialize)]
pub struct DeploymentRequest {
    pub tool_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// Response from `POST /api/deployments`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct DeploymentCreated {
    pub deployment_id: String,
    pub cost_estimate: Option<f64>,
}

/// Response from `GET /api/deployments/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DeploymentStatus {
    pub ready: bool,
    pub status: String,
    pub service_url: Option<String>,
    pub error: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

// ── Terminal outcomes ─────────────────────────────────────────────────────────

/// The single terminal outcome of a polling operation.
///
/// A timeout is deliberately distinct from a failure: the backend never said
/// the job failed, we simply stopped watching.
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    /// The deployment came up; `service_url` is the provisioned endpoint.
    Ready { service_url: Option<String> },
    /// The backend reported the deployment failed.
    Failed { reason: String },
    /// The attempt budget ran out before any terminal server state.
    TimedOut { attempts: u32 },
}

/// Classify a successfully fetched status as terminal or not.
///
/// `ready` wins over a simultaneously present `error` field: a backend that
/// reports both is treated as ready (the error is leftover detail).
#[must_use]
pub fn classify_status(status: &DeploymentStatus) -> Option<PollOutcome> {
    if status.ready {
        return Some(PollOutcome::Ready {
            service_url: status.service_url.clone(),
        });
    }
    if status.status == "failed" || status.error.is_some() {
        let reason = status
            .error
            .clone()
            .unwrap_or_else(|| format!("deployment entered state '{}'", status.status));
        return Some(PollOutcome::Failed { reason });
    }
    None
}

// ── Unit tests ────────────────────────────────────────────────────────────────
