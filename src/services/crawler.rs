// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Page crawler: robots.txt check, fetch, readable-content extraction.
//!
//! Every per-URL failure becomes a `CrawlOutcome` value; a batch never
//! aborts because one page misbehaved. Batches run with bounded
//! concurrency and keep input order in the output.

use std::time::Duration;

use anyhow::Result;
use futures::stream::{self, StreamExt};
use reqwest::header::USER_AGENT;
use texting_robots::{get_robots_url, Robot};
use tracing::{debug, warn};

use crate::models::config::CrawlerConfig;
use crate::models::crawler::CrawlOutcome;
use crate::services::extract::extract_content;

/// HTTP client for fetching and extracting result pages.
pub struct CrawlClient {
    http: reqwest::Client,
    config: CrawlerConfig,
    user_agent: String,
}

impl CrawlClient {
    pub fn new(config: CrawlerConfig, user_agent: String) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.crawl_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            config,
            user_agent,
        })
    }

    /// Crawl one URL into an outcome, respecting robots.txt rules.
    pub async fn crawl_page(&self, url: &str) -> CrawlOutcome {
        debug!(url, "Crawling");
        let outcome = self.fetch_and_extract(url).await;
        match &outcome.error {
            Some(reason) => warn!(url, reason = %reason, "Crawl failed"),
            None => debug!(url, "Crawl succeeded"),
        }
        outcome
    }

    async fn fetch_and_extract(&self, url: &str) -> CrawlOutcome {
        if let Err(e) = url::Url::parse(url) {
            return CrawlOutcome::failure(url, format!("invalid URL: {e}"));
        }

        match self.allowed_by_robots(url).await {
            Ok(true) => {}
            Ok(false) => return CrawlOutcome::failure(url, "disallowed by robots.txt"),
            Err(e) => return CrawlOutcome::failure(url, format!("robots.txt check failed: {e}")),
        }

        let response = match self
            .http
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return CrawlOutcome::failure(url, format!("fetch failed: {e}")),
        };

        let status = response.status();
        if !status.is_success() {
            return CrawlOutcome::failure(url, format!("HTTP {status}"));
        }

        let html = match response.text().await {
            Ok(html) => html,
            Err(e) => return CrawlOutcome::failure(url, format!("failed to read body: {e}")),
        };

        let text = extract_content(&html, self.config.content_filter_threshold);
        let words = text.split_whitespace().count();
        if words < self.config.word_count_threshold {
            return CrawlOutcome::failure(
                url,
                format!(
                    "extracted {words} words, below threshold {}",
                    self.config.word_count_threshold
                ),
            );
        }

        CrawlOutcome::success(url, text)
    }

    /// Check robots.txt for `url`. A robots.txt that cannot be fetched
    /// counts as allowed.
    async fn allowed_by_robots(&self, url: &str) -> Result<bool> {
        let robots_url = get_robots_url(url)?;
        let robots_txt = match self.http.get(&robots_url).send().await {
            Ok(response) => response.text().await.unwrap_or_default(),
            Err(_) => String::new(),
        };
        let robot = Robot::new(&self.user_agent, robots_txt.as_bytes())?;
        Ok(robot.allowed(url))
    }

    /// Crawl all URLs with bounded concurrency. Output order equals input
    /// order regardless of completion order. URLs that fail the first round
    /// are retried once, the retry result replacing the failed slot.
    pub async fn crawl_many(&self, urls: &[String]) -> Vec<CrawlOutcome> {
        let mut outcomes = self.crawl_round(urls.to_vec()).await;

        let failed_slots: Vec<(usize, String)> = outcomes
            .iter()
            .enumerate()
            .filter(|(_, outcome)| !outcome.is_success())
            .map(|(slot, outcome)| (slot, outcome.url.clone()))
            .collect();
        if failed_slots.is_empty() {
            return outcomes;
        }

        warn!(count = failed_slots.len(), "Retrying failed URLs once");
        let retry_urls: Vec<String> = failed_slots.iter().map(|(_, url)| url.clone()).collect();
        let retried = self.crawl_round(retry_urls).await;
        for ((slot, _), outcome) in failed_slots.into_iter().zip(retried) {
            outcomes[slot] = outcome;
        }
        outcomes
    }

    async fn crawl_round(&self, urls: Vec<String>) -> Vec<CrawlOutcome> {
        stream::iter(urls)
            .map(|url| async move { self.crawl_page(&url).await })
            .buffered(self.config.max_concurrent_crawls)
            .collect()
            .await
    }
}
