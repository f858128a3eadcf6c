// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Application state, route handlers, and router construction.
//!
//! This module is `pub` so that integration tests can build a test router
//! directly without starting the full binary.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{error, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::models::config::Config;
use crate::models::search::{ErrorResponse, SearchRequest, SearchResponse};
use crate::models::version::VersionResponse;
use crate::services::aggregate::aggregate;
use crate::services::crawler::CrawlClient;
use crate::services::logging::truncate_for_log;
use crate::services::search::SearchClient;

/// Application version extracted from `Cargo.toml` at compile time.
/// The patch segment can be overridden via `SIFT_PATCH_VERSION` (see `build.rs`).
pub const VERSION: &str = env!("SIFT_VERSION");

/// Agent name reported by `GET /version`.
pub const AGENT_NAME: &str = "sift-agent";

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Shared application state injected into every route handler via `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub search_client: Arc<SearchClient>,
    pub crawl_client: Arc<CrawlClient>,
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

fn api_error(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

#[utoipa::path(
    get,
    path = "/version",
    responses((status = 200, description = "Agent name and version", body = VersionResponse))
)]
pub async fn version_handler() -> Json<VersionResponse> {
    Json(VersionResponse {
        agent: AGENT_NAME.to_string(),
        version: VERSION.to_string(),
    })
}

/// `POST /search`: validate, search, crawl the hits, aggregate.
///
/// Partial crawl failure is the normal case and still answers 200; the
/// failed URLs are listed in the response. Only search-step failures and
/// invalid input abort the request.
#[utoipa::path(
    post,
    path = "/search",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Concatenated page content plus per-URL bookkeeping", body = SearchResponse),
        (status = 400, description = "Empty query or zero limit", body = ErrorResponse),
        (status = 404, description = "Search returned no usable results", body = ErrorResponse),
        (status = 502, description = "Meta-search service unavailable or answered garbage", body = ErrorResponse),
    )
)]
pub async fn search_handler(
    State(state): State<AppState>,
    Json(payload): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, (StatusCode, Json<ErrorResponse>)> {
    let query = payload.query.trim();
    if query.is_empty() {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "Query must not be empty",
        ));
    }

    let limit = match payload.limit {
        Some(0) => {
            return Err(api_error(
                StatusCode::BAD_REQUEST,
                "limit must be a positive integer",
            ));
        }
        Some(n) => n as usize,
        None => state.config.crawler.default_search_limit as usize,
    };

    let disabled_engines = payload
        .disabled_engines
        .as_deref()
        .unwrap_or(&state.config.searxng.disabled_engines);
    let enabled_engines = payload
        .enabled_engines
        .as_deref()
        .unwrap_or(&state.config.searxng.enabled_engines);

    info!(query = %truncate_for_log(query, 120), limit, "Search request received");

    let hits = state
        .search_client
        .search(query, limit, disabled_engines, enabled_engines)
        .await
        .map_err(|e| {
            error!(error = %e, "Search step failed");
            api_error(StatusCode::BAD_GATEWAY, e.to_string())
        })?;

    if hits.is_empty() {
        return Err(api_error(
            StatusCode::NOT_FOUND,
            "No search results found for the query",
        ));
    }

    let urls: Vec<String> = hits.into_iter().map(|hit| hit.url).collect();
    let outcomes = state.crawl_client.crawl_many(&urls).await;
    let response = aggregate(&outcomes);

    info!(
        success_count = response.success_count,
        failed = response.failed_urls.len(),
        "Search request served"
    );
    Ok(Json(response))
}

// ---------------------------------------------------------------------------
// OpenAPI documentation
// ---------------------------------------------------------------------------

#[derive(OpenApi)]
#[openapi(
    info(title = "sift-agent", description = "Search-and-crawl digest API"),
    paths(search_handler, version_handler),
    components(schemas(SearchRequest, SearchResponse, ErrorResponse, VersionResponse))
)]
pub struct ApiDoc;

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the Axum application router, Swagger UI included.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/search", post(search_handler))
        .route("/version", get(version_handler))
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
