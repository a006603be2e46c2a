//! hh.ru resume search over blocking HTTP

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use super::{FetchFailure, FetchOutcome, RawResume, ResumeSource, SourceConfig};

#[derive(Debug, Deserialize)]
struct SearchResponse {
    /// Kept loose so one odd item cannot sink the rest of the batch
    #[serde(default)]
    items: Vec<Value>,
}

/// Resume source backed by the hh.ru `/resumes` endpoint.
///
/// A fresh blocking client is built for every search and dropped with it.
/// Must be called from a thread that may block (inside a tokio runtime,
/// use `spawn_blocking`).
#[derive(Debug, Clone)]
pub struct HhResumeSource {
    config: SourceConfig,
}

impl HhResumeSource {
    pub fn new(config: SourceConfig) -> Self {
        if config.token.is_empty() {
            tracing::warn!("No API token configured; resume searches will be unauthenticated");
        }
        Self { config }
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }
}

impl ResumeSource for HhResumeSource {
    fn search(&self, query: &str) -> FetchOutcome {
        let client = match Client::builder().user_agent(&self.config.user_agent).build() {
            Ok(client) => client,
            Err(e) => return FetchOutcome::failed(FetchFailure::Transport(e.to_string())),
        };

        let per_page = self.config.page_size.to_string();
        let mut request = client
            .get(&self.config.url)
            .query(&[("text", query), ("per_page", per_page.as_str())]);
        if !self.config.token.is_empty() {
            request = request.bearer_auth(&self.config.token);
        }

        tracing::debug!("Searching resumes for '{}' (per_page {})", query, per_page);
        let response = match request.send() {
            Ok(response) => response,
            Err(e) => return FetchOutcome::failed(FetchFailure::Transport(e.to_string())),
        };

        let status = response.status();
        if status != StatusCode::OK {
            return FetchOutcome::failed(FetchFailure::Status(status.as_u16()));
        }

        match response.json::<SearchResponse>() {
            Ok(body) => {
                tracing::info!("Resume search for '{}' returned {} items", query, body.items.len());
                FetchOutcome::found(body.items.into_iter().map(RawResume::from_value).collect())
            }
            Err(e) => FetchOutcome::failed(FetchFailure::Decode(e.to_string())),
        }
    }
}
