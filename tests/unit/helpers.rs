//! Shared test helpers: stub transport, recording reporter, instant sleeper.

#![allow(dead_code)]
#![allow(clippy::expect_used)]

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use stackdock_cli::application::ports::{ApiTransport, ProgressReporter, Sleeper};
use stackdock_cli::domain::error::ApiError;

// ── Stub transport ────────────────────────────────────────────────────────────

/// One request as the transport saw it.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

/// Canned-response `ApiTransport`: pops one queued response per request and
/// records every call. A queued `Err(message)` becomes `ApiError::Api`.
pub struct StubTransport {
    responses: Mutex<VecDeque<Result<serde_json::Value, String>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubTransport {
    pub fn new(responses: Vec<Result<serde_json::Value, String>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A transport that answers every request with the same value.
    pub fn always(value: serde_json::Value, times: usize) -> Self {
        Self::new(vec![Ok(value); times])
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("lock").clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("lock").len()
    }

    fn record_and_pop(
        &self,
        method: &str,
        path: &str,
        query: &[(String, String)],
        body: Option<&serde_json::Value>,
    ) -> Result<serde_json::Value, ApiError> {
        self.calls.lock().expect("lock").push(RecordedCall {
            method: method.to_string(),
            path: path.to_string(),
            query: query.to_vec(),
            body: body.cloned(),
        });
        match self.responses.lock().expect("lock").pop_front() {
            Some(Ok(value)) => Ok(value),
            Some(Err(message)) => Err(ApiError::Api(message)),
            None => Err(ApiError::Api("no stubbed response left".to_string())),
        }
    }
}

impl ApiTransport for StubTransport {
    async fn get(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<serde_json::Value, ApiError> {
        self.record_and_pop("GET", path, query, None)
    }

    async fn post(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        self.record_and_pop("POST", path, &[], Some(body))
    }

    async fn put(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        self.record_and_pop("PUT", path, &[], Some(body))
    }

    async fn delete(&self, path: &str) -> Result<serde_json::Value, ApiError> {
        self.record_and_pop("DELETE", path, &[], None)
    }
}

// ── Recording reporter ────────────────────────────────────────────────────────

/// Captures every reporter event as `("step" | "success" | "warn", message)`.
#[derive(Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<(String, String)>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(String, String)> {
        self.events.lock().expect("lock").clone()
    }

    pub fn messages_of(&self, kind: &str) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|(k, _)| k == kind)
            .map(|(_, m)| m)
            .collect()
    }
}

impl ProgressReporter for RecordingReporter {
    fn step(&self, message: &str) {
        self.events
            .lock()
            .expect("lock")
            .push(("step".to_string(), message.to_string()));
    }

    fn success(&self, message: &str) {
        self.events
            .lock()
            .expect("lock")
            .push(("success".to_string(), message.to_string()));
    }

    fn warn(&self, message: &str) {
        self.events
            .lock()
            .expect("lock")
            .push(("warn".to_string(), message.to_string()));
    }
}

// ── Instant sleeper ───────────────────────────────────────────────────────────

/// Returns immediately; counts how often the loop slept.
#[derive(Default)]
pub struct InstantSleeper {
    sleeps: Mutex<Vec<Duration>>,
}

impl InstantSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sleep_count(&self) -> usize {
        self.sleeps.lock().expect("lock").len()
    }
}

impl Sleeper for &InstantSleeper {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.lock().expect("lock").push(duration);
    }
}
