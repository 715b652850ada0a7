//! Application service — deployment use-cases.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use anyhow::{Context, Result};

use crate::application::ports::{ApiTransport, ProgressReporter, Sleeper};
use crate::application::services::poller::{PollConfig, StatusPoller};
use crate::domain::deployment::{
    DeploymentCreated, DeploymentRequest, DeploymentStatus, PollOutcome,
};
use crate::domain::error::ApiError;

// ── Service functions ─────────────────────────────────────────────────────────

/// `POST /api/deployments` — create a deployment job.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn create_deployment(
    transport: &impl ApiTransport,
    request: &DeploymentRequest,
) -> Result<DeploymentCreated, ApiError> {
    let body = serde_json::to_value(request)
        .map_err(|err| ApiError::Shape(err.to_string()))?;
    let value = transport.post("/api/deployments", &body).await?;
    serde_json::from_value(value).map_err(|err| ApiError::Shape(err.to_string()))
}

/// `GET /api/deployments/{id}` — current job status, fully defaulted.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn deployment_status(
    transport: &impl ApiTransport,
    id: &str,
) -> Result<DeploymentStatus, ApiError> {
    let value = transport.get(&format!("/api/deployments/{id}"), &[]).await?;
    serde_json::from_value(value).map_err(|err| ApiError::Shape(err.to_string()))
}

/// `DELETE /api/deployments/{id}` — tear down a deployment.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn destroy_deployment(
    transport: &impl ApiTransport,
    id: &str,
) -> Result<bool, ApiError> {
    let value = transport.delete(&format!("/api/deployments/{id}")).await?;
    Ok(value
        .get("success")
        .and_then(serde_json::Value::as_bool)
        .unwrap_or(true))
}

// ── Deploy-and-watch use-case ─────────────────────────────────────────────────

/// Result of the `deploy_and_watch` use-case.
#[derive(Debug)]
pub struct DeployReport {
    pub deployment_id: String,
    pub cost_estimate: Option<f64>,
    pub outcome: PollOutcome,
}

/// Create a deployment, then watch it to a terminal state.
///
/// Progress and the ready/timed-out notifications go through the injected
/// reporter; a backend-reported failure is left in the returned outcome for
/// the caller to surface as a blocking error. The service never touches any
/// presentation type.
///
/// # Errors
///
/// Returns an error if the deployment cannot be created.
pub async fn deploy_and_watch(
    transport: &impl ApiTransport,
    sleeper: impl Sleeper,
    reporter: &impl ProgressReporter,
    request: &DeploymentRequest,
    poll: PollConfig,
) -> Result<DeployReport> {
    let created = create_deployment(transport, request)
        .await
        .context("creating deployment")?;
    if let Some(cost) = created.cost_estimate {
        reporter.step(&format!("estimated cost: ${cost:.2}/month"));
    }
    reporter.step(&format!(
        "deployment {} created, waiting for it to become ready...",
        created.deployment_id
    ));

    let poller = StatusPoller::new(created.deployment_id.as_str(), poll, sleeper);
    let outcome = poller
        .run(|id: &str| {
            let id = id.to_owned();
            async move { deployment_status(transport, &id).await }
        })
        .await;

    let Some(outcome) = outcome else {
        anyhow::bail!("deployment watch cancelled");
    };

    match &outcome {
        PollOutcome::Ready { service_url } => {
            if let Some(url) = service_url {
                reporter.success(&format!("deployment ready: {url}"));
            } else {
                reporter.success("deployment ready");
            }
        }
        PollOutcome::TimedOut { attempts } => {
            reporter.warn(&format!(
                "deployment not ready after {attempts} checks — it may still be provisioning.\nCheck manually: stackdock status {}",
                created.deployment_id
            ));
        }
        PollOutcome::Failed { .. } => {} // surfaced by the caller as an error
    }

    Ok(DeployReport {
        deployment_id: created.deployment_id,
        cost_estimate: created.cost_estimate,
        outcome,
    })
}
