use super::mocks::MockLlmClient;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use medtranslate::{
    config::ApiKey,
    server::{self, handlers::AppState},
    translate::Translator,
};
use serde_json::{Value, json};
use std::{
    io,
    sync::{Arc, Mutex},
};

pub const TEST_API_KEY: &str = "test-api-key";

/// Build the router around a shared mock so tests can inspect calls afterwards
pub fn create_test_app(client: Arc<MockLlmClient>, api_key: Option<&str>) -> Router {
    let api_key = api_key.and_then(ApiKey::new);
    let state = AppState {
        translator: Arc::new(Translator::new(client, api_key)),
    };
    server::router(state)
}

pub fn valid_body() -> Value {
    json!({
        "text": "The patient has a fever",
        "sourceLang": "English",
        "targetLang": "Spanish"
    })
}

pub fn json_request(method: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri("/api/translate")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn raw_request(method: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri("/api/translate")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

pub async fn read_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// In-memory log sink for asserting on what reached the log stream
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).to_string()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Route tracing output on the current thread into a buffer until the guard drops
pub fn capture_logs() -> (LogBuffer, tracing::subscriber::DefaultGuard) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (buffer, guard)
}
