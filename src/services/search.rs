// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Client for the SearXNG-compatible meta-search service.
//!
//! The service is queried with a form-encoded POST and answers JSON. Engine
//! allow/deny lists travel in the preferences cookie, the same channel the
//! web UI uses, so no server-side configuration is required per request.

use std::time::Duration;

use anyhow::Result;
use reqwest::header::{COOKIE, USER_AGENT};
use thiserror::Error;
use tracing::{debug, info};

use crate::models::config::SearxngConfig;
use crate::models::search::{SearchHit, SearxngResponse};
use crate::services::logging::truncate_for_log;

/// Timeout for a single search round-trip.
const SEARCH_TIMEOUT_SECS: u64 = 30;

/// Failures of the search step. Both abort the whole request: with no
/// result list there is nothing to crawl.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The meta-search service could not be reached or answered non-2xx.
    #[error("search service unavailable: {0}")]
    Unavailable(String),
    /// The service answered 2xx but the body is not the expected JSON.
    #[error("search service returned malformed JSON: {0}")]
    Malformed(String),
}

/// HTTP client for the meta-search service.
pub struct SearchClient {
    http: reqwest::Client,
    config: SearxngConfig,
    user_agent: String,
}

impl SearchClient {
    pub fn new(config: SearxngConfig, user_agent: String) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(SEARCH_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            http,
            config,
            user_agent,
        })
    }

    /// Run a search and return at most `limit` hits, ranked order preserved.
    ///
    /// Results are cut to `limit` before entries without a URL (answer
    /// boxes, infoboxes) are dropped, so a page of such entries can yield
    /// fewer than `limit` crawlable hits.
    pub async fn search(
        &self,
        query: &str,
        limit: usize,
        disabled_engines: &str,
        enabled_engines: &str,
    ) -> Result<Vec<SearchHit>, SearchError> {
        let endpoint = self.config.endpoint();
        let params = [
            ("q", query),
            ("format", "json"),
            ("language", self.config.language.as_str()),
            ("time_range", "week"),
            ("safesearch", "2"),
            ("pageno", "1"),
            ("category_general", "1"),
        ];
        let cookie = format!(
            "disabled_engines={disabled_engines};enabled_engines={enabled_engines};method=POST"
        );

        debug!(
            query = %truncate_for_log(query, 120),
            limit,
            endpoint = %endpoint,
            "Sending search request"
        );

        let response = self
            .http
            .post(&endpoint)
            .header(USER_AGENT, &self.user_agent)
            .header(COOKIE, cookie)
            .form(&params)
            .send()
            .await
            .map_err(|e| SearchError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Unavailable(format!(
                "{endpoint} answered HTTP {status}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Unavailable(format!("failed to read body: {e}")))?;
        let parsed: SearxngResponse = serde_json::from_str(&body).map_err(|e| {
            SearchError::Malformed(format!("{e}; body starts: {}", truncate_for_log(&body, 200)))
        })?;

        let hits = hits_from_results(parsed, limit);
        info!(hits = hits.len(), "Search request completed");
        Ok(hits)
    }
}

/// Cut the raw result list to `limit`, then keep only entries carrying a URL.
fn hits_from_results(response: SearxngResponse, limit: usize) -> Vec<SearchHit> {
    response
        .results
        .into_iter()
        .take(limit)
        .filter_map(|result| {
            let url = result.url?;
            Some(SearchHit {
                title: result.title.unwrap_or_default(),
                url,
            })
        })
        .collect()
}
