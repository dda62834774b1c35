pub mod errors;

use anyhow::Result;
use axum::{extract::{Path, Query, State}, routing::get, Json, Router};
use engine::{Document, Engine, EngineConfig, Span};
use errors::ApiError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Upper bound on `k` accepted from clients.
const MAX_K: usize = 100;

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub k: Option<usize>,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub took_ms: u128,
    pub took_s: f64,
    pub total_hits: usize,
    pub unresolved: Vec<String>,
    pub results: Vec<SearchHit>,
}

#[derive(Serialize)]
pub struct SearchHit {
    pub rank: usize,
    pub doc_id: usize,
    pub score: f64,
    pub text: String,
    pub highlights: Vec<Span>,
}

#[derive(Serialize)]
pub struct TermStat {
    pub term: String,
    pub doc_count: u32,
}

#[derive(Serialize)]
pub struct TermFrequency {
    pub doc_id: i64,
    pub term: String,
    pub count: u32,
}

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Engine>,
}

/// Loads and indexes the corpus, then builds the router around it.
pub fn build_app(corpus: &str, config: EngineConfig) -> Result<Router> {
    let engine = Engine::open(corpus, config)?;
    Ok(router(Arc::new(engine)))
}

pub fn router(engine: Arc<Engine>) -> Router {
    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .route("/df", get(df_handler))
        .route("/tf/:doc_id/:term", get(tf_handler))
        .route("/doc/:doc_id", get(doc_handler))
        .with_state(AppState { engine })
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let start = std::time::Instant::now();
    let engine = &state.engine;
    let k = params.k.unwrap_or(engine.config().max_results).clamp(1, MAX_K);

    let found = engine.search_with_limit(&params.q, k)?;
    let results = found
        .hits
        .iter()
        .filter_map(|hit| {
            let doc = engine.document(hit.doc_id)?;
            Some(SearchHit {
                rank: hit.rank,
                doc_id: hit.doc_id,
                score: hit.score,
                text: doc.text.clone(),
                highlights: engine.highlights(hit.doc_id, found.terms.as_slice()),
            })
        })
        .collect();

    let elapsed = start.elapsed();
    Ok(Json(SearchResponse {
        query: params.q,
        took_ms: elapsed.as_millis(),
        took_s: elapsed.as_secs_f64(),
        total_hits: found.total_hits,
        unresolved: found.unresolved,
        results,
    }))
}

pub async fn df_handler(State(state): State<AppState>) -> Json<Vec<TermStat>> {
    let stats = state
        .engine
        .doc_frequencies()
        .map(|(term, doc_count)| TermStat { term, doc_count })
        .collect();
    Json(stats)
}

pub async fn tf_handler(
    State(state): State<AppState>,
    Path((doc_id, term)): Path<(i64, String)>,
) -> Result<Json<TermFrequency>, ApiError> {
    let count = state.engine.term_frequency(&term, doc_id)?;
    Ok(Json(TermFrequency { doc_id, term, count }))
}

pub async fn doc_handler(State(state): State<AppState>, Path(doc_id): Path<usize>) -> Result<Json<Document>, ApiError> {
    state
        .engine
        .document(doc_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("document {doc_id} not found")))
}
