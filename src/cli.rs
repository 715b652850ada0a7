//! CLI argument parsing with clap derive

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::application::ports::ConfigStore;
use crate::commands;
use crate::infra::config::{YamlConfigStore, resolve_base_url};
use crate::infra::http::HttpTransport;
use crate::infra::session::ConfigSession;
use crate::output::OutputContext;

/// Discover and deploy infrastructure tools
#[derive(Parser)]
#[command(
    name = "stackdock",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output (the `NO_COLOR` environment variable is also
    /// honored, with any non-empty value)
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Search tools, bundles, vendors, or portfolios
    Search(commands::search::SearchArgs),

    /// Show one catalog resource
    Show(commands::show::ShowArgs),

    /// Deploy a tool and wait for it to become ready
    Deploy(commands::deploy::DeployArgs),

    /// Check a deployment's status
    Status(commands::status::StatusArgs),

    /// Tear down a deployment
    Destroy(commands::destroy::DestroyArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli { json, quiet, no_color, command } = self;
        let ctx = OutputContext::new(no_color, quiet);

        match command {
            Command::Version => {
                commands::version::run(json);
                Ok(())
            }
            Command::Config(cmd) => commands::config::run(&ctx, &YamlConfigStore, cmd),
            Command::Search(args) => {
                let transport = build_transport()?;
                commands::search::run(&ctx, json, &transport, &args).await
            }
            Command::Show(args) => {
                let transport = build_transport()?;
                commands::show::run(&ctx, json, &transport, &args).await
            }
            Command::Deploy(args) => {
                let transport = build_transport()?;
                commands::deploy::run(&ctx, &transport, &args).await
            }
            Command::Status(args) => {
                let transport = build_transport()?;
                commands::status::run(&ctx, json, &transport, &args).await
            }
            Command::Destroy(args) => {
                let transport = build_transport()?;
                commands::destroy::run(&ctx, &transport, &args).await
            }
        }
    }
}

/// Wire the production transport from config + environment + session.
fn build_transport() -> Result<HttpTransport> {
    let config = YamlConfigStore.load().context("loading configuration")?;
    let session = ConfigSession::from_config(&config);
    HttpTransport::new(resolve_base_url(&config), &session)
}
