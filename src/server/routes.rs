use axum::{
    extract::{Form, Path, Query, State},
    http::StatusCode,
    response::{Html, Redirect},
    Json,
};
use serde::{Deserialize, Serialize};
use crate::candidate::{Candidate, CandidateStatus};
use crate::server::{page, AppState};
use crate::Error;
use std::sync::Arc;

/// Banner flags set by the redirect after each action
#[derive(Debug, Default, Deserialize)]
pub struct IndexParams {
    pub saved: Option<usize>,
    pub failed: Option<bool>,
    pub updated: Option<i64>,
    pub missing: Option<i64>,
    pub exported: Option<usize>,
    /// Last search text, so the box keeps it after the reload
    pub query: Option<String>,
}

#[derive(Deserialize)]
pub struct FetchForm {
    pub query: String,
}

#[derive(Deserialize)]
pub struct StatusForm {
    pub status: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type PageError = (StatusCode, String);

fn status_for(err: &Error) -> StatusCode {
    match err {
        Error::InvalidStatus(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Run store/network work off the async workers
async fn run_blocking<T, F>(work: F) -> Result<T, PageError>
where
    F: FnOnce() -> crate::Result<T> + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(work).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => {
            tracing::error!("Request failed: {}", e);
            Err((status_for(&e), e.to_string()))
        }
        Err(e) => Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string())),
    }
}

pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(params): Query<IndexParams>,
) -> Result<Html<String>, PageError> {
    let tracker = state.tracker.clone();
    let candidates = run_blocking(move || tracker.candidates()).await?;
    Ok(Html(page::render_index(&candidates, &params)))
}

pub async fn fetch(
    State(state): State<Arc<AppState>>,
    Form(form): Form<FetchForm>,
) -> Result<Redirect, PageError> {
    let tracker = state.tracker.clone();
    let query = form.query.clone();
    let report = run_blocking(move || tracker.fetch_and_store(&form.query)).await?;

    let mut pairs = vec![("saved", report.saved().to_string())];
    if report.failure.is_some() {
        pairs.push(("failed", "true".to_string()));
    }
    pairs.push(("query", query));
    Ok(Redirect::to(&index_url(&pairs)?))
}

/// `/?k=v&..` with every value form-encoded
fn index_url(pairs: &[(&str, String)]) -> Result<String, PageError> {
    let mut url = reqwest::Url::parse("http://localhost/")
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    url.query_pairs_mut().extend_pairs(pairs);
    Ok(format!("/?{}", url.query().unwrap_or_default()))
}

pub async fn save_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Form(form): Form<StatusForm>,
) -> Result<Redirect, PageError> {
    let status: CandidateStatus = form
        .status
        .parse()
        .map_err(|e: Error| (status_for(&e), e.to_string()))?;

    let tracker = state.tracker.clone();
    let found = run_blocking(move || tracker.set_status(id, status)).await?;

    let target = if found {
        format!("/?updated={}", id)
    } else {
        format!("/?missing={}", id)
    };
    Ok(Redirect::to(&target))
}

pub async fn export(State(state): State<Arc<AppState>>) -> Result<Redirect, PageError> {
    let tracker = state.tracker.clone();
    let report = run_blocking(move || tracker.export()).await?;
    Ok(Redirect::to(&format!("/?exported={}", report.rows)))
}

pub async fn list_candidates(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Candidate>>, (StatusCode, Json<ErrorResponse>)> {
    let tracker = state.tracker.clone();
    run_blocking(move || tracker.candidates())
        .await
        .map(Json)
        .map_err(|(code, error)| (code, Json(ErrorResponse { error })))
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
