//! Catalog domain types — tools, bundles, vendors, portfolios.
//!
//! Normalization lives here and nowhere else: every type derives
//! `Deserialize` with `#[serde(default)]` on the whole struct, so a backend
//! payload missing optional fields deserializes to a fully-defaulted value
//! instead of failing. One struct per resource type is the single source of
//! truth for defaults.

use serde::{Deserialize, Serialize};

// ── Pagination ────────────────────────────────────────────────────────────────

/// One page of a backend collection response.
///
/// The backend spells the page count `totalPages`; older payloads use
/// `total_pages`. Both are accepted.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    #[serde(alias = "totalPages")]
    pub total_pages: u32,
}

// ── Resource types ────────────────────────────────────────────────────────────

/// A deployable tool listed in the catalog (e.g. Redis, PostgreSQL).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Tool {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    pub vendor_id: Option<String>,
    /// Whether one-command deployment is available for this tool.
    pub deployable: bool,
    /// Monthly price in USD for the default plan, when published.
    pub monthly_price: Option<f64>,
}

/// A curated set of tools deployed together.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Bundle {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub tool_ids: Vec<String>,
    pub tags: Vec<String>,
}

/// A vendor publishing tools on the platform.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Vendor {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub website: Option<String>,
    pub tool_count: u32,
}

/// A user-assembled collection of tools.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Portfolio {
    pub id: String,
    pub name: String,
    pub description: String,
    pub owner: String,
    pub tool_ids: Vec<String>,
    pub public: bool,
}

// ── Search query ──────────────────────────────────────────────────────────────

/// Query parameters for collection listing.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    /// Free-text search term.
    pub query: Option<String>,
    /// Category filter (tools only).
    pub category: Option<String>,
    /// 1-based page number.
    pub page: u32,
    /// Page size.
    pub limit: u32,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            query: None,
            category: None,
            page: 1,
            limit: 12,
        }
    }
}

impl SearchQuery {
    /// Render as URL query parameters. Empty filters are omitted entirely
    /// rather than sent as blank values.
    #[must_use]
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("page".to_string(), self.page.to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ];
        if let Some(q) = self.query.as_deref().filter(|s| !s.is_empty()) {
            params.push(("query".to_string(), q.to_string()));
        }
        if let Some(c) = self.category.as_deref().filter(|s| !s.is_empty()) {
            params.push(("category".to_string(), c.to_string()));
        }
        params
    }
}

// ── Unit tests ────────────────────────────────────────────────────────────────
