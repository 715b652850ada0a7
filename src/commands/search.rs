//! `stackdock search` — browse the catalog.
//!
//! Listing goes through an [`AsyncResource`] keyed on the search query, so
//! the command consumes exactly the `{data, loading, error}` contract the
//! service layer produces. A failed fetch renders an inline error with a
//! retry hint instead of a bare abort.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::application::ports::ApiTransport;
use crate::application::services::catalog::CatalogService;
use crate::application::services::resource::AsyncResource;
use crate::commands::ResourceKind;
use crate::domain::catalog::{Bundle, Page, Portfolio, SearchQuery, Tool, Vendor};
use crate::output::OutputContext;

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Resource collection to search
    #[arg(value_enum)]
    pub resource: ResourceKind,

    /// Free-text search term
    #[arg(long)]
    pub query: Option<String>,

    /// Category filter (tools only)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Page number (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Results per page
    #[arg(long, default_value_t = 12)]
    pub limit: u32,
}

impl SearchArgs {
    fn to_query(&self) -> SearchQuery {
        SearchQuery {
            query: self.query.clone(),
            category: self.category.clone(),
            page: self.page,
            limit: self.limit,
        }
    }
}

/// Run `stackdock search <resource>`.
///
/// # Errors
///
/// Returns an error if the listing fails.
pub async fn run(
    ctx: &OutputContext,
    json: bool,
    transport: &impl ApiTransport,
    args: &SearchArgs,
) -> Result<()> {
    let service = CatalogService::new(transport);
    let query = args.to_query();

    match args.resource {
        ResourceKind::Tools => {
            let page =
                load_page(ctx, args, || service.search_tools(&query), query.clone()).await?;
            render(ctx, json, &page, |t: &Tool| {
                let tags = if t.tags.is_empty() {
                    String::new()
                } else {
                    format!("  [{}]", t.tags.join(", "))
                };
                format!("{}  {} — {}{tags}", t.id, t.name, t.description)
            })
        }
        ResourceKind::Bundles => {
            let page =
                load_page(ctx, args, || service.search_bundles(&query), query.clone()).await?;
            render(ctx, json, &page, |b: &Bundle| {
                format!("{}  {} ({} tools)", b.id, b.name, b.tool_ids.len())
            })
        }
        ResourceKind::Vendors => {
            let page =
                load_page(ctx, args, || service.search_vendors(&query), query.clone()).await?;
            render(ctx, json, &page, |v: &Vendor| {
                format!("{}  {} ({} tools)", v.id, v.name, v.tool_count)
            })
        }
        ResourceKind::Portfolios => {
            let page =
                load_page(ctx, args, || service.search_portfolios(&query), query.clone()).await?;
            render(ctx, json, &page, |p: &Portfolio| {
                format!("{}  {} by {}", p.id, p.name, p.owner)
            })
        }
    }
}

/// Drive one listing through an `AsyncResource` and unwrap its snapshot.
async fn load_page<R, F, Fut>(
    ctx: &OutputContext,
    args: &SearchArgs,
    producer: F,
    query: SearchQuery,
) -> Result<Page<R>>
where
    R: Clone + DeserializeOwned,
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = Result<Page<R>, crate::domain::error::ApiError>>,
{
    let resource = AsyncResource::new(|| {
        let fut = producer();
        async move { fut.await.map_err(anyhow::Error::from) }
    });
    resource.sync_deps(query).await;
    let snapshot = resource.snapshot();

    if let Some(message) = snapshot.error {
        ctx.error(&message);
        ctx.dim(&format!(
            "Retry: stackdock search {}{}",
            args.resource.as_str(),
            args.query
                .as_deref()
                .map_or_else(String::new, |q| format!(" --query {q}")),
        ));
        anyhow::bail!("search failed: {message}");
    }
    snapshot
        .data
        .ok_or_else(|| anyhow::anyhow!("search produced no data"))
}

fn render<R: Serialize>(
    ctx: &OutputContext,
    json: bool,
    page: &Page<R>,
    line: impl Fn(&R) -> String,
) -> Result<()> {
    if json {
        println!("{}", crate::output::json::format_value(page)?);
        return Ok(());
    }
    if page.items.is_empty() {
        ctx.info("no results");
        return Ok(());
    }
    for item in &page.items {
        ctx.line(&line(item));
    }
    ctx.dim(&format!(
        "page {}/{} — {} total",
        page.page, page.total_pages, page.total
    ));
    Ok(())
}
