// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Environment-sourced service configuration.
//!
//! Every setting has a default so the agent starts with an empty environment.
//! Values are read once at startup into an explicit [`Config`] that is passed
//! into the client constructors; nothing reads the environment afterwards.

use anyhow::{anyhow, Result};
use serde::Serialize;
use std::env;
use std::fmt::Display;
use std::str::FromStr;

/// Engines disabled by default for general queries. Comma-separated
/// `engine__category` tokens understood by the meta-search service.
pub const DEFAULT_DISABLED_ENGINES: &str = "wikipedia__general,currency__general,\
wikidata__general,duckduckgo__general,google__general,lingva__general,\
qwant__general,startpage__general,dictzone__general,\
mymemory translated__general,brave__general";

/// Engines enabled by default for general queries.
pub const DEFAULT_ENABLED_ENGINES: &str = "baidu__general";

/// Connection settings for the meta-search service.
#[derive(Debug, Clone, Serialize)]
pub struct SearxngConfig {
    pub host: String,
    pub port: u16,
    pub base_path: String,
    /// Value of the `language` form field (`auto` lets the service detect it).
    pub language: String,
    /// Default comma-separated engine deny list, overridable per request.
    pub disabled_engines: String,
    /// Default comma-separated engine allow list, overridable per request.
    pub enabled_engines: String,
}

impl SearxngConfig {
    /// Full URL of the search endpoint.
    pub fn endpoint(&self) -> String {
        format!("http://{}:{}{}", self.host, self.port, self.base_path)
    }
}

/// Bind settings for the HTTP API.
#[derive(Debug, Clone, Serialize)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
}

impl ApiConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Crawl and extraction settings.
#[derive(Debug, Clone, Serialize)]
pub struct CrawlerConfig {
    /// Applied when a search request omits `limit`.
    pub default_search_limit: u32,
    /// Text blocks scoring below this relevance cutoff (range [0,1]) are
    /// pruned during extraction.
    pub content_filter_threshold: f64,
    /// Pages whose extracted text has fewer words than this count as failures.
    pub word_count_threshold: usize,
    /// Per-fetch timeout in seconds.
    pub crawl_timeout_secs: u64,
    /// Upper bound on concurrently in-flight page fetches.
    pub max_concurrent_crawls: usize,
}

/// Complete service configuration, loaded once at startup.
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    pub searxng: SearxngConfig,
    pub api: ApiConfig,
    pub crawler: CrawlerConfig,
    /// User-Agent sent on every outbound request (search and crawl).
    pub user_agent: String,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(&|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    /// Unparseable or out-of-range values are startup errors, never silently
    /// replaced with defaults.
    fn from_lookup(get: &dyn Fn(&str) -> Option<String>) -> Result<Self> {
        let searxng = SearxngConfig {
            host: string_or(get, "SEARXNG_HOST", "localhost"),
            port: parse_or(get, "SEARXNG_PORT", 8080)?,
            base_path: string_or(get, "SEARXNG_BASE_PATH", "/search"),
            language: string_or(get, "SEARCH_LANGUAGE", "auto"),
            disabled_engines: string_or(get, "DISABLED_ENGINES", DEFAULT_DISABLED_ENGINES),
            enabled_engines: string_or(get, "ENABLED_ENGINES", DEFAULT_ENABLED_ENGINES),
        };

        let api = ApiConfig {
            host: string_or(get, "API_HOST", "0.0.0.0"),
            port: parse_or(get, "API_PORT", 3000)?,
        };

        let crawler = CrawlerConfig {
            default_search_limit: parse_or(get, "DEFAULT_SEARCH_LIMIT", 10)?,
            content_filter_threshold: parse_or(get, "CONTENT_FILTER_THRESHOLD", 0.6)?,
            word_count_threshold: parse_or(get, "WORD_COUNT_THRESHOLD", 10)?,
            crawl_timeout_secs: parse_or(get, "CRAWL_TIMEOUT_SECS", 60)?,
            max_concurrent_crawls: parse_or(get, "MAX_CONCURRENT_CRAWLS", 8)?,
        };

        if !(0.0..=1.0).contains(&crawler.content_filter_threshold) {
            return Err(anyhow!(
                "CONTENT_FILTER_THRESHOLD must be within [0, 1], got: {}",
                crawler.content_filter_threshold
            ));
        }
        if crawler.default_search_limit == 0 {
            return Err(anyhow!("DEFAULT_SEARCH_LIMIT must be a positive integer"));
        }
        if crawler.max_concurrent_crawls == 0 {
            return Err(anyhow!("MAX_CONCURRENT_CRAWLS must be a positive integer"));
        }

        let user_agent = string_or(
            get,
            "USER_AGENT",
            &format!("sift-agent/{}", env!("SIFT_VERSION")),
        );

        Ok(Self {
            searxng,
            api,
            crawler,
            user_agent,
        })
    }
}

fn string_or(get: &dyn Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    get(key).unwrap_or_else(|| default.to_string())
}

fn parse_or<T>(get: &dyn Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match get(key) {
        Some(raw) => raw
            .parse()
            .map_err(|e| anyhow!("{} has invalid value '{}': {}", key, raw, e)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_with_empty_environment() {
        let config = Config::from_lookup(&lookup(&[])).unwrap();

        assert_eq!(config.searxng.host, "localhost");
        assert_eq!(config.searxng.port, 8080);
        assert_eq!(config.searxng.base_path, "/search");
        assert_eq!(config.searxng.language, "auto");
        assert_eq!(config.api.host, "0.0.0.0");
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.crawler.default_search_limit, 10);
        assert_eq!(config.crawler.content_filter_threshold, 0.6);
        assert_eq!(config.crawler.word_count_threshold, 10);
    }

    #[test]
    fn test_default_engine_lists() {
        let config = Config::from_lookup(&lookup(&[])).unwrap();

        assert_eq!(config.searxng.enabled_engines, "baidu__general");
        assert!(config
            .searxng
            .disabled_engines
            .contains("duckduckgo__general"));
        assert!(config.searxng.disabled_engines.contains("brave__general"));
    }

    #[test]
    fn test_environment_overrides() {
        let config = Config::from_lookup(&lookup(&[
            ("SEARXNG_HOST", "searx.internal"),
            ("SEARXNG_PORT", "8888"),
            ("API_PORT", "8080"),
            ("DEFAULT_SEARCH_LIMIT", "5"),
            ("CONTENT_FILTER_THRESHOLD", "0.45"),
            ("WORD_COUNT_THRESHOLD", "25"),
        ]))
        .unwrap();

        assert_eq!(config.searxng.host, "searx.internal");
        assert_eq!(config.searxng.port, 8888);
        assert_eq!(config.api.port, 8080);
        assert_eq!(config.crawler.default_search_limit, 5);
        assert_eq!(config.crawler.content_filter_threshold, 0.45);
        assert_eq!(config.crawler.word_count_threshold, 25);
    }

    #[test]
    fn test_unparseable_port_is_an_error() {
        let err = Config::from_lookup(&lookup(&[("SEARXNG_PORT", "not-a-port")]))
            .unwrap_err()
            .to_string();
        assert!(err.contains("SEARXNG_PORT"));
        assert!(err.contains("not-a-port"));
    }

    #[test]
    fn test_threshold_out_of_range_is_an_error() {
        let err = Config::from_lookup(&lookup(&[("CONTENT_FILTER_THRESHOLD", "1.5")]))
            .unwrap_err()
            .to_string();
        assert!(err.contains("CONTENT_FILTER_THRESHOLD"));
    }

    #[test]
    fn test_zero_default_limit_is_an_error() {
        let result = Config::from_lookup(&lookup(&[("DEFAULT_SEARCH_LIMIT", "0")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_searxng_endpoint_url() {
        let config = Config::from_lookup(&lookup(&[
            ("SEARXNG_HOST", "127.0.0.1"),
            ("SEARXNG_PORT", "8080"),
        ]))
        .unwrap();
        assert_eq!(config.searxng.endpoint(), "http://127.0.0.1:8080/search");
    }

    #[test]
    fn test_api_bind_addr() {
        let config = Config::from_lookup(&lookup(&[])).unwrap();
        assert_eq!(config.api.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_default_user_agent_carries_version() {
        let config = Config::from_lookup(&lookup(&[])).unwrap();
        assert!(config.user_agent.starts_with("sift-agent/"));
    }

    #[test]
    fn test_config_serializes_for_print_config() {
        let config = Config::from_lookup(&lookup(&[])).unwrap();
        let json = serde_json::to_value(&config).unwrap();

        assert!(json.get("searxng").is_some());
        assert!(json.get("api").is_some());
        assert!(json.get("crawler").is_some());
        assert_eq!(json["crawler"]["default_search_limit"], 10);
    }
}
