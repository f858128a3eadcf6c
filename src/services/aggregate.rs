// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Folds ordered per-URL crawl outcomes into the response payload.

use crate::models::crawler::CrawlOutcome;
use crate::models::search::SearchResponse;

/// Separator line between two pages' text in the concatenated content.
const PAGE_SEPARATOR: &str = "\n==========\n";

/// Fold outcomes into the wire response. Outcome order is preserved in
/// both the concatenated content and the failed URL list. All-failed
/// batches produce an empty content string, not an error.
pub fn aggregate(outcomes: &[CrawlOutcome]) -> SearchResponse {
    let mut texts: Vec<&str> = Vec::new();
    let mut failed_urls: Vec<String> = Vec::new();
    for outcome in outcomes {
        match &outcome.text {
            Some(text) => texts.push(text),
            None => failed_urls.push(outcome.url.clone()),
        }
    }
    SearchResponse {
        content: texts.join(PAGE_SEPARATOR),
        success_count: texts.len(),
        failed_urls,
    }
}
