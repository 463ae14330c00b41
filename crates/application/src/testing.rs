//! Test doubles shared by the unit tests of this crate.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::{BTreeMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use imageer_domain::Theme;
use parking_lot::{Mutex, RwLock};
use serde_json::{Value, json};
use url::Url;

use crate::client::{ApiRequest, ApiResponse};
use crate::error::{StorageError, TransportError};
use crate::loaders::LoadEvent;
use crate::ports::{
    Clock, KeyValueStorage, SystemThemeListener, SystemThemeSource, ThemeSurface, Transport,
};
use crate::stores::ToastStore;

/// Transport answering from canned responses and recording every request.
///
/// Responses registered with [`StubTransport::route`] are matched by URL
/// path; everything else is served from a FIFO queue.
#[derive(Default)]
pub struct StubTransport {
    queue: Mutex<VecDeque<ApiResponse>>,
    routes: Mutex<Vec<(String, ApiResponse)>>,
    fallback: Mutex<Option<ApiResponse>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, response: ApiResponse) {
        self.queue.lock().push_back(response);
    }

    pub fn respond_json(&self, status: u16, body: Value) {
        self.respond(json_response(status, &body));
    }

    /// Serves `body` for every request whose path is exactly `path`.
    pub fn route(&self, path: &str, status: u16, body: Value) {
        self.routes
            .lock()
            .push((path.to_string(), json_response(status, &body)));
    }

    /// Serves `response` for every request no route or queued response answers.
    pub fn respond_always(&self, response: ApiResponse) {
        *self.fallback.lock() = Some(response);
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests
            .lock()
            .iter()
            .map(|request| request.url.clone())
            .collect()
    }
}

fn json_response(status: u16, body: &Value) -> ApiResponse {
    ApiResponse::new(status, serde_json::to_vec(body).unwrap())
        .with_status_text(reason(status))
        .with_header("content-type", "application/json")
}

const fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "",
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let path = request
            .url
            .split('?')
            .next()
            .unwrap_or_default()
            .to_string();
        self.requests.lock().push(request);

        let routed = self
            .routes
            .lock()
            .iter()
            .find(|(route, _)| path.ends_with(route.as_str()))
            .map(|(_, response)| response.clone());
        if let Some(response) = routed {
            return Ok(response);
        }

        let queued = self.queue.lock().pop_front();
        queued
            .or_else(|| self.fallback.lock().clone())
            .ok_or_else(|| TransportError::Other(format!("no stubbed response for {path}")))
    }
}

/// Clock frozen at 2025-01-01T00:00:00Z until advanced.
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl Default for FixedClock {
    fn default() -> Self {
        Self {
            now: Mutex::new(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()),
        }
    }
}

impl FixedClock {
    pub fn advance(&self, by: Duration) {
        *self.now.lock() += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}

/// In-memory key-value storage.
#[derive(Default)]
pub struct MemoryStorage {
    values: RwLock<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<const N: usize>(entries: [(&str, &str); N]) -> Self {
        Self {
            values: RwLock::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ),
        }
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.values.write().remove(key);
        Ok(())
    }
}

/// Storage that reads as empty and refuses every write.
pub struct FailingStorage;

impl KeyValueStorage for FailingStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("read-only".to_string()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("read-only".to_string()))
    }
}

/// Host theme preference that tests flip by hand.
pub struct StaticSystemTheme {
    prefers_dark: Mutex<bool>,
    listeners: Mutex<Vec<Arc<dyn Fn(bool) + Send + Sync>>>,
}

impl StaticSystemTheme {
    pub fn new(prefers_dark: bool) -> Self {
        Self {
            prefers_dark: Mutex::new(prefers_dark),
            listeners: Mutex::new(Vec::new()),
        }
    }

    pub fn change(&self, prefers_dark: bool) {
        *self.prefers_dark.lock() = prefers_dark;
        let listeners = self.listeners.lock().clone();
        for listener in listeners {
            listener(prefers_dark);
        }
    }
}

impl SystemThemeSource for StaticSystemTheme {
    fn prefers_dark(&self) -> bool {
        *self.prefers_dark.lock()
    }

    fn subscribe(&self, listener: SystemThemeListener) {
        self.listeners.lock().push(Arc::from(listener));
    }
}

/// Surface remembering every applied theme.
#[derive(Default)]
pub struct RecordingSurface {
    applied: Mutex<Vec<Theme>>,
}

impl RecordingSurface {
    pub fn applied(&self) -> Vec<Theme> {
        self.applied.lock().clone()
    }
}

impl ThemeSurface for RecordingSurface {
    fn apply(&self, theme: Theme) {
        self.applied.lock().push(theme);
    }
}

pub fn user_json(role: &str) -> Value {
    json!({
        "id": "u-1",
        "createdAt": "2025-01-01T00:00:00Z",
        "updatedAt": "2025-01-01T00:00:00Z",
        "role": role,
        "nickname": "ops",
        "email": "ops@imageer.test",
        "photoUrl": null
    })
}

pub fn project_json(id: &str) -> Value {
    json!({
        "id": id,
        "createdAt": "2025-01-01T00:00:00Z",
        "updatedAt": "2025-01-02T00:00:00Z",
        "name": format!("project {id}"),
        "presets": [],
        "imageCount": 3
    })
}

pub fn projects_json(total: u64) -> Value {
    let items: Vec<Value> = (0..total.min(1))
        .map(|i| project_json(&format!("p-{i}")))
        .collect();
    json!({"items": items, "total": total})
}

pub fn service_account_json(id: &str) -> Value {
    json!({
        "id": id,
        "createdAt": "2025-01-01T00:00:00Z",
        "updatedAt": "2025-01-01T00:00:00Z",
        "name": "uploader",
        "accessScope": "PROJECT",
        "projects": [{"id": "p-0", "name": "project p-0"}]
    })
}

pub fn service_accounts_json(total: u64) -> Value {
    let items: Vec<Value> = (0..total.min(1))
        .map(|i| service_account_json(&format!("sa-{i}")))
        .collect();
    json!({"items": items, "total": total})
}

pub fn app_error_json(message: &str, code_id: i64, code_name: &str) -> Value {
    json!({"message": message, "codeId": code_id, "codeName": code_name})
}

/// A server-render event for `path` on a test origin.
pub fn load_event(path: &str, transport: &Arc<StubTransport>) -> LoadEvent {
    let url = Url::parse("http://console.test").unwrap().join(path).unwrap();
    LoadEvent::new(
        url,
        transport.clone(),
        ToastStore::new(Arc::new(FixedClock::default())),
    )
}
