//! `stackdock deploy` — create a deployment and watch it come up.

use std::time::Duration;

use anyhow::Result;
use clap::Args;
use indicatif::ProgressBar;

use crate::application::ports::{ApiTransport, ProgressReporter};
use crate::application::services::deploy::{DeployReport, deploy_and_watch};
use crate::application::services::poller::PollConfig;
use crate::domain::deployment::{DeploymentRequest, PollOutcome};
use crate::infra::clock::TokioSleeper;
use crate::output::reporter::TerminalReporter;
use crate::output::{OutputContext, progress};

/// Arguments for the deploy command.
#[derive(Args)]
pub struct DeployArgs {
    /// Tool to deploy
    pub tool_id: String,

    /// Pricing plan
    #[arg(long)]
    pub plan: Option<String>,

    /// Target region
    #[arg(long)]
    pub region: Option<String>,

    /// Status checks before giving up
    #[arg(long, default_value_t = 30, hide = true)]
    pub max_attempts: u32,

    /// Seconds between status checks
    #[arg(long, default_value_t = 5, hide = true)]
    pub interval_secs: u64,
}

/// Progress reporter that animates a spinner while the watch runs.
struct SpinnerReporter {
    pb: ProgressBar,
}

impl ProgressReporter for SpinnerReporter {
    fn step(&self, message: &str) {
        self.pb.set_message(message.to_string());
    }

    fn success(&self, message: &str) {
        progress::finish_ok(&self.pb, message);
    }

    fn warn(&self, message: &str) {
        self.pb.finish_and_clear();
        println!("  ⚠ {message}");
    }
}

/// Run `stackdock deploy <tool-id>`.
///
/// # Errors
///
/// Returns an error if the deployment cannot be created or the backend
/// reports that it failed.
pub async fn run(
    ctx: &OutputContext,
    transport: &impl ApiTransport,
    args: &DeployArgs,
) -> Result<()> {
    let request = DeploymentRequest {
        tool_id: args.tool_id.clone(),
        plan: args.plan.clone(),
        region: args.region.clone(),
    };
    let poll = PollConfig {
        max_attempts: args.max_attempts,
        interval: Duration::from_secs(args.interval_secs),
    };

    let report = if ctx.show_progress() {
        let pb = progress::spinner("creating deployment...");
        let reporter = SpinnerReporter { pb: pb.clone() };
        let report = deploy_and_watch(transport, TokioSleeper, &reporter, &request, poll).await;
        match &report {
            Err(_) => progress::finish_err(&pb, "deployment failed"),
            Ok(r) if matches!(r.outcome, PollOutcome::Failed { .. }) => pb.finish_and_clear(),
            Ok(_) => {}
        }
        report?
    } else {
        let reporter = TerminalReporter::new(ctx);
        deploy_and_watch(transport, TokioSleeper, &reporter, &request, poll).await?
    };

    finish(ctx, &report)
}

fn finish(ctx: &OutputContext, report: &DeployReport) -> Result<()> {
    match &report.outcome {
        PollOutcome::Failed { reason } => {
            ctx.error(&format!("deployment {} failed", report.deployment_id));
            anyhow::bail!("{reason}");
        }
        PollOutcome::Ready { .. } | PollOutcome::TimedOut { .. } => {
            ctx.dim(&format!(
                "Manage: stackdock status {id}  |  stackdock destroy {id}",
                id = report.deployment_id
            ));
            Ok(())
        }
    }
}
