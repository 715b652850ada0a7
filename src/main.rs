//! Stackdock CLI - Discover and deploy infrastructure tools

use clap::Parser;

use stackdock_cli::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = cli.run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
