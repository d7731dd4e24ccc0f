use chrono::Utc;
use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{RwLock, watch};

/// The log keeps the most recent calls only, newest first.
pub const LOG_CAPACITY: usize = 100;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("{0}")]
    Request(String),
    #[error("{status}: {body}")]
    Status { status: u16, body: String },
    #[error("bad response body: {0}")]
    Decode(String),
}

/// One call to the darts service. The request half is recorded before the
/// request leaves; the response half is filled in when it lands.
#[derive(Serialize, Clone, Debug)]
pub struct ApiLogEntry {
    pub time: String,
    pub operation: String,
    pub method: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_body: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip)]
    id: u64,
}

#[derive(Default)]
struct TransportLog {
    entries: Vec<ApiLogEntry>,
    last_error: Option<String>,
    next_id: u64,
}

/// Shared HTTP client for the darts service. Every call lands in the log,
/// and the newest failure is kept as `last_error` until a later call
/// succeeds or the error is cleared.
#[derive(Clone)]
pub struct ApiContext {
    base_url: String,
    client: Client,
    log: Arc<RwLock<TransportLog>>,
    changed: Arc<watch::Sender<u64>>,
}

impl ApiContext {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let (tx, _rx) = watch::channel(0u64);
        ApiContext {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            log: Arc::new(RwLock::new(TransportLog::default())),
            changed: Arc::new(tx),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Receiver that ticks on every log mutation.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changed.subscribe()
    }

    pub async fn logs(&self) -> Vec<ApiLogEntry> {
        self.log.read().await.entries.clone()
    }

    pub async fn last_error(&self) -> Option<String> {
        self.log.read().await.last_error.clone()
    }

    pub async fn clear_error(&self) {
        self.log.write().await.last_error = None;
        self.notify();
    }

    /// # Errors
    ///
    /// Will return `Err` if the request cannot be sent, the service answers
    /// with a non-2xx status, or the body does not decode as `T`.
    pub async fn call<T: DeserializeOwned>(
        &self,
        operation: &str,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, TransportError> {
        let url = format!("{}{path}", self.base_url);
        let id = {
            let mut log = self.log.write().await;
            let id = log.next_id;
            log.next_id += 1;
            log.entries.insert(
                0,
                ApiLogEntry {
                    time: Utc::now().to_rfc3339(),
                    operation: operation.to_string(),
                    method: method.to_string(),
                    url: url.clone(),
                    request_body: body.clone(),
                    status: None,
                    response_body: None,
                    error: None,
                    id,
                },
            );
            log.entries.truncate(LOG_CAPACITY);
            log.last_error = None;
            id
        };
        self.notify();

        let mut request = self.client.request(method, &url);
        if let Some(ref payload) = body {
            request = request.json(payload);
        }
        let response = match request.send().await {
            Ok(r) => r,
            Err(e) => {
                let msg = e.to_string();
                self.finish(id, None, None, Some(msg.clone())).await;
                return Err(TransportError::Request(msg));
            }
        };
        let status = response.status().as_u16();
        let text = match response.text().await {
            Ok(t) => t,
            Err(e) => {
                let msg = e.to_string();
                self.finish(id, Some(status), None, Some(msg.clone())).await;
                return Err(TransportError::Request(msg));
            }
        };
        let recorded = if text.is_empty() {
            None
        } else {
            Some(serde_json::from_str::<Value>(&text).unwrap_or_else(|_| Value::String(text.clone())))
        };
        if !(200..300).contains(&status) {
            let body_text = text.trim().to_string();
            let msg = format!("{status}: {body_text}");
            self.finish(id, Some(status), recorded, Some(msg)).await;
            return Err(TransportError::Status {
                status,
                body: body_text,
            });
        }
        let source = if text.is_empty() { "null" } else { text.as_str() };
        match serde_json::from_str::<T>(source) {
            Ok(value) => {
                self.finish(id, Some(status), recorded, None).await;
                Ok(value)
            }
            Err(e) => {
                self.finish(
                    id,
                    Some(status),
                    recorded,
                    Some(format!("bad response body: {e}")),
                )
                .await;
                Err(TransportError::Decode(e.to_string()))
            }
        }
    }

    async fn finish(
        &self,
        id: u64,
        status: Option<u16>,
        response_body: Option<Value>,
        error: Option<String>,
    ) {
        {
            let mut log = self.log.write().await;
            if let Some(entry) = log.entries.iter_mut().find(|e| e.id == id) {
                entry.status = status;
                entry.response_body = response_body;
                entry.error = error.clone();
            }
            if error.is_some() {
                log.last_error = error;
            }
        }
        self.notify();
    }

    fn notify(&self) {
        self.changed.send_modify(|v| *v = v.wrapping_add(1));
    }
}
