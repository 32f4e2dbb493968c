//! Shared fixtures for handler tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use crate::bot::{Notifier, NotifyError, OutboundMessage};
use crate::config::Config;
use crate::models::PrivilegeTable;
use crate::routes::create_routes;
use crate::state::AppState;
use crate::store::MemoryEventStore;

pub const TEST_SECRET: &str = "test-secret";

/// Keeps every message instead of sending it.
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<OutboundMessage>>,
    fail_next: AtomicBool,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, message: &OutboundMessage) -> Result<(), NotifyError> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(NotifyError::Rejected {
                status: 502,
                body: "bad gateway".to_string(),
            });
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

pub fn test_config() -> Config {
    Config {
        database_url: None,
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        webhook_secret: TEST_SECRET.to_string(),
        bot_api_url: "http://localhost/bottest".to_string(),
        privileges: PrivilegeTable {
            admin_id: Some(1),
            admins: vec![2],
            core: vec![-100],
            members: vec![-200],
        },
        timezone: chrono_tz::Asia::Kolkata,
        production: false,
        cors_allowed_origins: Vec::new(),
    }
}

pub fn test_app() -> (Router, Arc<MemoryEventStore>, Arc<RecordingNotifier>) {
    let store = Arc::new(MemoryEventStore::new());
    let notifier = Arc::new(RecordingNotifier::default());
    let state = AppState::new(test_config(), store.clone(), notifier.clone());
    (create_routes(state), store, notifier)
}

pub struct SendRequest {
    method: Method,
    uri: String,
    body: Option<String>,
}

impl SendRequest {
    pub fn new(method: Method, uri: &str) -> Self {
        Self {
            method,
            uri: uri.to_string(),
            body: None,
        }
    }

    pub fn get(uri: &str) -> Self {
        Self::new(Method::GET, uri)
    }

    pub fn json(method: Method, uri: &str, body: Value) -> Self {
        Self::raw(method, uri, &body.to_string())
    }

    pub fn raw(method: Method, uri: &str, body: &str) -> Self {
        Self {
            body: Some(body.to_string()),
            ..Self::new(method, uri)
        }
    }
}

/// Runs one request and returns the status and JSON body (`Null` when empty).
pub async fn send(app: &Router, request: SendRequest) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(request.method).uri(request.uri);
    let body = match request.body {
        Some(body) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(body)
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
