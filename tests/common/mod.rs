#![allow(dead_code)]

use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use resume_tracker::source::{FetchFailure, FetchOutcome, RawResume, ResumeSource, SourceConfig};
use resume_tracker::{SqliteStore, Tracker};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// What the stub search endpoint saw
#[derive(Debug, Clone, Default)]
pub struct SeenRequest {
    pub authorization: Option<String>,
    pub user_agent: Option<String>,
    pub params: HashMap<String, String>,
}

/// A local stand-in for the hh.ru `/resumes` endpoint, served from its own thread
pub struct StubApi {
    pub addr: SocketAddr,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl StubApi {
    pub fn start(status: StatusCode, body: Value) -> Self {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = seen.clone();

        let app = Router::new().route(
            "/resumes",
            get(
                move |headers: HeaderMap, Query(params): Query<HashMap<String, String>>| {
                    let recorder = recorder.clone();
                    let body = body.clone();
                    async move {
                        recorder.lock().unwrap().push(SeenRequest {
                            authorization: header_value(&headers, "authorization"),
                            user_agent: header_value(&headers, "user-agent"),
                            params,
                        });
                        (status, Json(body))
                    }
                },
            ),
        );

        let (tx, rx) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
                tx.send(listener.local_addr().unwrap()).unwrap();
                axum::serve(listener, app).await.unwrap();
            });
        });

        let addr = rx.recv().expect("stub server starts");
        Self { addr, seen }
    }

    pub fn source_config(&self, token: &str) -> SourceConfig {
        SourceConfig {
            url: format!("http://{}/resumes", self.addr),
            token: token.to_string(),
            ..SourceConfig::default()
        }
    }

    pub fn requests(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// Three resumes the way the search API returns them
pub fn three_resumes() -> Value {
    json!({
        "found": 3,
        "items": [
            {
                "first_name": "Anna",
                "email": "anna@example.com",
                "experience": { "months": 30 },
                "salary": { "amount": 150000, "currency": "RUR" },
                "status": "Interview"
            },
            {
                "first_name": "Boris",
                "experience": { "months": 61 },
                "salary": null
            },
            {
                "email": "vera@example.com",
                "status": "Rejected"
            }
        ]
    })
}

/// Items shaped like the live search API: `experience` is a list of jobs
/// and the month count lives in `total_experience`. The second item has a
/// numeric name and a bare-string salary.
pub fn live_shaped_resumes() -> Value {
    json!({
        "found": 3,
        "items": [
            {
                "first_name": "Anna",
                "email": "anna@example.com",
                "total_experience": { "months": 30 },
                "experience": [
                    { "company": "Yandex", "position": "Backend developer", "start": "2022-01-01" },
                    { "company": "Ozon", "position": "Intern", "start": "2021-06-01" }
                ],
                "salary": { "amount": 150000, "currency": "RUR" }
            },
            {
                "first_name": 42,
                "email": "vera@example.com",
                "total_experience": { "months": 61 },
                "experience": [{ "company": "Sber" }],
                "salary": "by agreement"
            },
            "not an object"
        ]
    })
}

/// Source that always answers with the same items
pub struct StaticSource {
    pub items: Vec<RawResume>,
}

impl ResumeSource for StaticSource {
    fn search(&self, _query: &str) -> FetchOutcome {
        FetchOutcome::found(self.items.clone())
    }
}

/// Source whose every search fails
pub struct FailingSource;

impl ResumeSource for FailingSource {
    fn search(&self, _query: &str) -> FetchOutcome {
        FetchOutcome::failed(FetchFailure::Status(503))
    }
}

pub fn raw_items(value: Value) -> Vec<RawResume> {
    value["items"]
        .as_array()
        .unwrap()
        .iter()
        .cloned()
        .map(RawResume::from_value)
        .collect()
}

/// Tracker over a fresh database in a temp dir
pub fn temp_tracker(source: Arc<dyn ResumeSource>) -> (TempDir, Tracker) {
    let dir = TempDir::new().unwrap();
    let store = SqliteStore::open(&dir.path().join("candidates.db")).unwrap();
    let tracker = Tracker::new(store, source, dir.path().join("candidates.csv"));
    (dir, tracker)
}
