//! Request transport
//!
//! Repositories talk to the backend through the [`Transport`] trait so the
//! wire can be swapped (reqwest in production, scripted fakes in tests).

use crate::{ClientConfig, ClientResult};
use async_trait::async_trait;
use http::{Method, StatusCode};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// A single outgoing request
#[derive(Debug, Clone, PartialEq)]
pub struct WireRequest {
    pub method: Method,
    pub url: String,
    /// JSON body; sent with `Content-Type: application/json`
    pub body: Option<Value>,
    /// Also send `Accept: application/json`
    pub accept_json: bool,
}

impl WireRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body: None,
            accept_json: false,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::DELETE, url)
    }

    pub fn with_json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_accept_json(mut self, accept: bool) -> Self {
        self.accept_json = accept;
        self
    }
}

/// Status and raw body of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireResponse {
    pub status: StatusCode,
    pub body: String,
}

impl WireResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn status_text(&self) -> &'static str {
        self.status.canonical_reason().unwrap_or_default()
    }

    /// Parse the body as JSON; an empty body parses as `null`
    pub fn json(&self) -> ClientResult<Value> {
        if self.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Request/response primitive used by the repositories
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: WireRequest) -> ClientResult<WireResponse>;
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build a transport from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: WireRequest) -> ClientResult<WireResponse> {
        let mut req = self.client.request(request.method, &request.url);
        if let Some(body) = &request.body {
            req = req.json(body);
        }
        if request.accept_json {
            req = req.header(reqwest::header::ACCEPT, "application/json");
        }

        let response = req.send().await?;
        let status = response.status();
        let body = match response.text().await {
            Ok(text) => text,
            // 错误响应的 body 仅用于诊断，读取失败不影响错误本身
            Err(e) if !status.is_success() => {
                tracing::warn!(%status, error = %e, "Failed to read error response body");
                String::new()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(WireResponse { status, body })
    }
}
