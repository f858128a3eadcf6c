// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Logging setup and helpers for keeping log lines bounded.

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// Honors `RUST_LOG` for per-module filtering and defaults to `info`.
/// Safe to call once at process start; tests use their own subscribers.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}

/// Truncate arbitrary user input (queries, page text) for logging.
/// Keeps log lines bounded and never splits a UTF-8 character.
pub fn truncate_for_log(input: &str, max_chars: usize) -> String {
    if input.chars().count() <= max_chars {
        return input.to_string();
    }
    let kept: String = input.chars().take(max_chars).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_input_unchanged() {
        assert_eq!(truncate_for_log("rust async", 80), "rust async");
    }

    #[test]
    fn test_truncate_long_input() {
        let truncated = truncate_for_log("abcdefghij", 4);
        assert_eq!(truncated, "abcd…");
    }

    #[test]
    fn test_truncate_exact_length_unchanged() {
        assert_eq!(truncate_for_log("abcd", 4), "abcd");
    }

    #[test]
    fn test_truncate_respects_multibyte_characters() {
        let truncated = truncate_for_log("привет мир", 6);
        assert_eq!(truncated, "привет…");
    }
}
