//! A local stand-in for the upstream responses endpoint.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::post;
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::{Value, json};

pub const APPLE: &str = r#"{"english":"Apple","pronunciation_ar":"أبل","arabic":"تفاحة","description_ar":"فاكهة معروفة."}"#;

/// One request as the fake upstream saw it.
#[derive(Debug, Clone)]
pub struct Seen {
    pub authorization: Option<String>,
    pub payload: Value,
}

/// Canned answer plus a record of every request received.
#[derive(Debug)]
pub struct FakeUpstream {
    status: StatusCode,
    body: String,
    hits: AtomicUsize,
    seen: Mutex<Vec<Seen>>,
}

impl FakeUpstream {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<Seen> {
        self.seen.lock().clone()
    }
}

/// Response body whose output text is split into the given fragments.
pub fn fragments_body(parts: &[&str]) -> String {
    let content: Vec<Value> = parts
        .iter()
        .map(|p| json!({ "type": "output_text", "text": p, "annotations": [] }))
        .collect();
    json!({
        "id": "resp_test",
        "object": "response",
        "output": [{ "type": "message", "role": "assistant", "content": content }],
    })
    .to_string()
}

/// Start a fake upstream answering every call with `status` and `body`.
/// Returns its base URL.
pub async fn spawn(status: u16, body: impl Into<String>) -> (String, Arc<FakeUpstream>) {
    let fake = Arc::new(FakeUpstream {
        status: StatusCode::from_u16(status).expect("valid status"),
        body: body.into(),
        hits: AtomicUsize::new(0),
        seen: Mutex::new(Vec::new()),
    });

    let app = Router::new()
        .route("/v1/responses", post(responses))
        .with_state(Arc::clone(&fake));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake upstream");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake upstream");
    });

    (format!("http://{addr}"), fake)
}

async fn responses(
    State(fake): State<Arc<FakeUpstream>>,
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    fake.hits.fetch_add(1, Ordering::SeqCst);
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    fake.seen.lock().push(Seen { authorization, payload });

    (
        fake.status,
        [(header::CONTENT_TYPE, "application/json")],
        fake.body.clone(),
    )
}
