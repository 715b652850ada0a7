//! `stackdock status` — one-shot deployment status check.

use anyhow::Result;
use clap::Args;

use crate::application::ports::ApiTransport;
use crate::application::services::deploy::deployment_status;
use crate::output::OutputContext;

/// Arguments for the status command.
#[derive(Args)]
pub struct StatusArgs {
    /// Deployment identifier
    pub deployment_id: String,
}

/// Run `stackdock status <deployment-id>`.
///
/// # Errors
///
/// Returns an error if the status cannot be fetched.
pub async fn run(
    ctx: &OutputContext,
    json: bool,
    transport: &impl ApiTransport,
    args: &StatusArgs,
) -> Result<()> {
    let status = deployment_status(transport, &args.deployment_id).await?;

    if json {
        println!("{}", crate::output::json::format_value(&status)?);
        return Ok(());
    }

    if status.ready {
        match &status.service_url {
            Some(url) => ctx.success(&format!("ready: {url}")),
            None => ctx.success("ready"),
        }
    } else if let Some(error) = &status.error {
        ctx.error(error);
    } else {
        let state = if status.status.is_empty() {
            "pending"
        } else {
            status.status.as_str()
        };
        ctx.info(state);
    }
    if let Some(created) = status.created_at {
        ctx.dim(&format!("created {}", created.format("%Y-%m-%d %H:%M UTC")));
    }
    Ok(())
}
