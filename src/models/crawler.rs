// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use serde::{Deserialize, Serialize};

/// Result of crawling a single URL. Lives only for the duration of one
/// search request; the aggregator folds a batch of these into the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlOutcome {
    /// The URL that was crawled
    pub url: String,
    /// Extracted plain text (present only on success)
    pub text: Option<String>,
    /// Failure reason, for logging (present only on failure)
    pub error: Option<String>,
}

impl CrawlOutcome {
    /// A successful extraction.
    pub fn success(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            text: Some(text.into()),
            error: None,
        }
    }

    /// A failed crawl with the reason recorded.
    pub fn failure(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            text: None,
            error: Some(reason.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.text.is_some()
    }
}
