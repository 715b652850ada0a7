//! Tests for the deployment service functions and the deploy-and-watch
//! use-case.

#![allow(clippy::expect_used)]

use std::time::Duration;

use stackdock_cli::application::services::deploy::{
    create_deployment, deploy_and_watch, destroy_deployment, deployment_status,
};
use stackdock_cli::application::services::poller::PollConfig;
use stackdock_cli::domain::deployment::{DeploymentRequest, PollOutcome};

use crate::helpers::{InstantSleeper, RecordingReporter, StubTransport};

fn fast(max_attempts: u32) -> PollConfig {
    PollConfig {
        max_attempts,
        interval: Duration::ZERO,
    }
}

fn request() -> DeploymentRequest {
    DeploymentRequest {
        tool_id: "redis".to_string(),
        plan: Some("starter".to_string()),
        region: None,
    }
}

#[tokio::test]
async fn test_create_deployment_posts_request() {
    let transport = StubTransport::new(vec![Ok(serde_json::json!({
        "deployment_id": "d1", "cost_estimate": 12.5,
    }))]);

    let created = create_deployment(&transport, &request()).await.expect("created");
    assert_eq!(created.deployment_id, "d1");
    assert_eq!(created.cost_estimate, Some(12.5));

    let calls = transport.calls();
    assert_eq!(calls[0].method, "POST");
    assert_eq!(calls[0].path, "/api/deployments");
    let body = calls[0].body.as_ref().expect("body");
    assert_eq!(body.get("tool_id").and_then(|v| v.as_str()), Some("redis"));
    assert_eq!(body.get("plan").and_then(|v| v.as_str()), Some("starter"));
    // None fields are omitted, not sent as null.
    assert!(body.get("region").is_none());
}

#[tokio::test]
async fn test_deployment_status_defaults_missing_fields() {
    let transport = StubTransport::new(vec![Ok(serde_json::json!({"status": "provisioning"}))]);

    let status = deployment_status(&transport, "d1").await.expect("status");
    assert!(!status.ready);
    assert!(status.service_url.is_none());
    assert_eq!(transport.calls()[0].path, "/api/deployments/d1");
}

#[tokio::test]
async fn test_deploy_and_watch_reports_ready_with_url() {
    let transport = StubTransport::new(vec![
        Ok(serde_json::json!({"deployment_id": "d1", "cost_estimate": 12.5})),
        Ok(serde_json::json!({"ready": false, "status": "provisioning"})),
        Ok(serde_json::json!({"ready": true, "status": "running", "service_url": "https://redis-1.stackdock.dev"})),
    ]);
    let sleeper = InstantSleeper::new();
    let reporter = RecordingReporter::new();

    let report = deploy_and_watch(&transport, &sleeper, &reporter, &request(), fast(30))
        .await
        .expect("report");

    assert_eq!(report.deployment_id, "d1");
    assert_eq!(
        report.outcome,
        PollOutcome::Ready {
            service_url: Some("https://redis-1.stackdock.dev".to_string())
        }
    );

    // Create, then two status checks against the returned id.
    let paths: Vec<String> = transport.calls().iter().map(|c| c.path.clone()).collect();
    assert_eq!(
        paths,
        vec!["/api/deployments", "/api/deployments/d1", "/api/deployments/d1"]
    );

    let successes = reporter.messages_of("success");
    assert_eq!(successes.len(), 1);
    assert!(successes[0].contains("https://redis-1.stackdock.dev"));
    // Cost estimate surfaced as a step before polling.
    assert!(reporter.messages_of("step").iter().any(|m| m.contains("12.50")));
}

#[tokio::test]
async fn test_deploy_and_watch_surfaces_backend_failure_in_outcome() {
    let transport = StubTransport::new(vec![
        Ok(serde_json::json!({"deployment_id": "d2"})),
        Ok(serde_json::json!({"status": "failed", "error": "quota exceeded"})),
    ]);
    let sleeper = InstantSleeper::new();
    let reporter = RecordingReporter::new();

    let report = deploy_and_watch(&transport, &sleeper, &reporter, &request(), fast(30))
        .await
        .expect("report");

    assert_eq!(
        report.outcome,
        PollOutcome::Failed {
            reason: "quota exceeded".to_string()
        }
    );
    assert!(reporter.messages_of("success").is_empty());
}

#[tokio::test]
async fn test_deploy_and_watch_timeout_warns_to_check_manually() {
    let transport = StubTransport::new(vec![
        Ok(serde_json::json!({"deployment_id": "d3"})),
        Ok(serde_json::json!({"status": "provisioning"})),
        Ok(serde_json::json!({"status": "provisioning"})),
    ]);
    let sleeper = InstantSleeper::new();
    let reporter = RecordingReporter::new();

    let report = deploy_and_watch(&transport, &sleeper, &reporter, &request(), fast(2))
        .await
        .expect("report");

    assert_eq!(report.outcome, PollOutcome::TimedOut { attempts: 2 });
    let warnings = reporter.messages_of("warn");
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("stackdock status d3"));
}

#[tokio::test]
async fn test_deploy_and_watch_create_failure_is_an_error() {
    let transport = StubTransport::new(vec![Err("payment required".to_string())]);
    let sleeper = InstantSleeper::new();
    let reporter = RecordingReporter::new();

    let err = deploy_and_watch(&transport, &sleeper, &reporter, &request(), fast(2))
        .await
        .expect_err("error");
    assert!(format!("{err:#}").contains("payment required"));
}

#[tokio::test]
async fn test_destroy_deployment_deletes_by_id() {
    let transport = StubTransport::new(vec![Ok(serde_json::json!({"success": true}))]);

    assert!(destroy_deployment(&transport, "d1").await.expect("flag"));
    assert_eq!(transport.calls()[0].method, "DELETE");
    assert_eq!(transport.calls()[0].path, "/api/deployments/d1");
}
