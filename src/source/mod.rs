//! External resume sources
//!
//! A source turns a free-text query into raw resume items. Failures never
//! reach the caller as errors: a failed search is an empty result, with the
//! reason kept on [`FetchOutcome::failure`] for anyone who wants it.

pub mod hh;
pub mod normalize;

use serde::{Deserialize, Serialize};

pub use hh::HhResumeSource;
pub use normalize::{normalize, normalize_all, RawResume, MISSING_VALUE, UNKNOWN_NAME};

/// Default resume search endpoint
pub const DEFAULT_API_URL: &str = "https://api.hh.ru/resumes";
/// Results requested per search
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_USER_AGENT: &str = "ResumeTracker/1.0";

/// Connection settings for the resume search API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub url: String,
    /// Bearer token; requests go out unauthenticated when empty
    pub token: String,
    pub page_size: u32,
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_API_URL.to_string(),
            token: String::new(),
            page_size: DEFAULT_PAGE_SIZE,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Why a search produced nothing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    /// The endpoint answered with something other than 200
    Status(u16),
    /// The request never got a response
    Transport(String),
    /// A 200 response whose body was not a resume list
    Decode(String),
}

impl std::fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchFailure::Status(code) => write!(f, "search endpoint returned HTTP {}", code),
            FetchFailure::Transport(msg) => write!(f, "request failed: {}", msg),
            FetchFailure::Decode(msg) => write!(f, "could not decode response: {}", msg),
        }
    }
}

/// Items from one search plus the failure, if any
#[derive(Debug, Clone, Default)]
pub struct FetchOutcome {
    pub items: Vec<RawResume>,
    pub failure: Option<FetchFailure>,
}

impl FetchOutcome {
    pub fn found(items: Vec<RawResume>) -> Self {
        Self { items, failure: None }
    }

    pub fn failed(failure: FetchFailure) -> Self {
        tracing::warn!("Resume search failed: {}", failure);
        Self { items: Vec::new(), failure: Some(failure) }
    }
}

/// Anything that can answer a resume search
pub trait ResumeSource: Send + Sync {
    /// Run one search, keeping the failure reason
    fn search(&self, query: &str) -> FetchOutcome;

    /// Run one search; failures come back as an empty list
    fn fetch(&self, query: &str) -> Vec<RawResume> {
        self.search(query).items
    }
}
