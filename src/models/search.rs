// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to search the web and crawl the result pages
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchRequest {
    /// Search query string
    pub query: String,
    /// Maximum number of result URLs to crawl (default from configuration)
    pub limit: Option<u32>,
    /// Comma-separated engine tokens to disable for this query
    /// (default from configuration)
    pub disabled_engines: Option<String>,
    /// Comma-separated engine tokens to enable for this query
    /// (default from configuration)
    pub enabled_engines: Option<String>,
}

/// Aggregated crawl digest returned for a search request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchResponse {
    /// Extracted text of every successfully crawled page, in search-result
    /// order, pages separated by a `==========` line
    pub content: String,
    /// Number of URLs that yielded content
    pub success_count: usize,
    /// URLs that could not be crawled, in search-result order
    pub failed_urls: Vec<String>,
}

/// JSON error envelope for all handler-produced error statuses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// One ranked result from the meta-search service
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
}

/// Expected shape of the meta-search service's JSON response.
/// Only the fields this service consumes are modeled; anything that does not
/// deserialize into this is treated as a malformed response.
#[derive(Debug, Deserialize)]
pub struct SearxngResponse {
    #[serde(default)]
    pub results: Vec<SearxngResult>,
}

/// One entry of the upstream `results` array. Answer/infobox entries may
/// lack a URL; those are skipped rather than rejected. Ranking fields are
/// not modeled: the upstream list arrives already ordered.
#[derive(Debug, Deserialize)]
pub struct SearxngResult {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}
