// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! sift-agent: forwards a query to a SearXNG-compatible meta-search service,
//! crawls the top hits, and serves the extracted content as one digest.

pub mod app;
pub mod models;
pub mod services;
