//! `stackdock destroy` — tear down a deployment.

use anyhow::Result;
use clap::Args;

use crate::application::ports::ApiTransport;
use crate::application::services::deploy::destroy_deployment;
use crate::output::OutputContext;

/// Arguments for the destroy command.
#[derive(Args)]
pub struct DestroyArgs {
    /// Deployment identifier
    pub deployment_id: String,
}

/// Run `stackdock destroy <deployment-id>`.
///
/// # Errors
///
/// Returns an error if the backend refuses or cannot be reached.
pub async fn run(
    ctx: &OutputContext,
    transport: &impl ApiTransport,
    args: &DestroyArgs,
) -> Result<()> {
    let removed = destroy_deployment(transport, &args.deployment_id).await?;
    if removed {
        ctx.success(&format!("deployment {} destroyed", args.deployment_id));
        Ok(())
    } else {
        anyhow::bail!("backend declined to destroy deployment {}", args.deployment_id);
    }
}
