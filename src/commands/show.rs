//! `stackdock show` — single-resource detail view.

use anyhow::Result;
use clap::Args;

use crate::application::ports::ApiTransport;
use crate::application::services::catalog::CatalogService;
use crate::commands::ResourceKind;
use crate::output::OutputContext;

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Resource collection
    #[arg(value_enum)]
    pub resource: ResourceKind,

    /// Resource identifier
    pub id: String,
}

/// Run `stackdock show <resource> <id>`.
///
/// # Errors
///
/// Returns an error if the resource cannot be fetched.
pub async fn run(
    ctx: &OutputContext,
    json: bool,
    transport: &impl ApiTransport,
    args: &ShowArgs,
) -> Result<()> {
    let service = CatalogService::new(transport);
    match args.resource {
        ResourceKind::Tools => {
            let tool = service.tool(&args.id).await?;
            if json {
                println!("{}", crate::output::json::format_value(&tool)?);
                return Ok(());
            }
            ctx.header(&tool.name);
            if !tool.description.is_empty() {
                ctx.line(&tool.description);
            }
            if !tool.category.is_empty() {
                ctx.dim(&format!("category: {}", tool.category));
            }
            if !tool.tags.is_empty() {
                ctx.dim(&format!("tags: {}", tool.tags.join(", ")));
            }
            if let Some(price) = tool.monthly_price {
                ctx.line(&format!("from ${price:.2}/month"));
            }
            if tool.deployable {
                ctx.info(&format!("Deploy: stackdock deploy {}", tool.id));
            }
        }
        ResourceKind::Bundles => {
            let bundle = service.bundle(&args.id).await?;
            if json {
                println!("{}", crate::output::json::format_value(&bundle)?);
                return Ok(());
            }
            ctx.header(&bundle.name);
            if !bundle.description.is_empty() {
                ctx.line(&bundle.description);
            }
            ctx.dim(&format!("{} tools", bundle.tool_ids.len()));
        }
        ResourceKind::Vendors => {
            let vendor = service.vendor(&args.id).await?;
            if json {
                println!("{}", crate::output::json::format_value(&vendor)?);
                return Ok(());
            }
            ctx.header(&vendor.name);
            if !vendor.description.is_empty() {
                ctx.line(&vendor.description);
            }
            if let Some(site) = &vendor.website {
                ctx.dim(site);
            }
        }
        ResourceKind::Portfolios => {
            let portfolio = service.portfolio(&args.id).await?;
            if json {
                println!("{}", crate::output::json::format_value(&portfolio)?);
                return Ok(());
            }
            ctx.header(&portfolio.name);
            ctx.dim(&format!("by {}", portfolio.owner));
            ctx.line(&format!("{} tools", portfolio.tool_ids.len()));
        }
    }
    Ok(())
}
