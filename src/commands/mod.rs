//! Command implementations

pub mod config;
pub mod deploy;
pub mod destroy;
pub mod search;
pub mod show;
pub mod status;
pub mod version;

use clap::ValueEnum;

/// Catalog resource kinds addressable from the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResourceKind {
    Tools,
    Bundles,
    Vendors,
    Portfolios,
}

impl ResourceKind {
    /// Collection path segment under `/api/`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tools => "tools",
            Self::Bundles => "bundles",
            Self::Vendors => "vendors",
            Self::Portfolios => "portfolios",
        }
    }
}
