//! # Completion Client (`common::ai::client`)
//!
//! File: cli/src/common/ai/client.rs
//!
//! ## Overview
//!
//! Sends one chat-completion request and waits for one response. The command
//! layer depends on the `CompletionClient` trait; `OpenAiClient` is the HTTP
//! implementation.
//!
//! ## Architecture
//!
//! - `POST <api_url>` with `Authorization: Bearer <key>` and the serialized
//!   `CompletionRequest` as JSON.
//! - The body is handed to `response::parse_body` whatever the HTTP status,
//!   so an `error` object is reported with its own message. A non-2xx status
//!   whose body carries neither an error nor choices becomes `AiError::Api`.
//! - The request races an optional timeout and a `CancellationToken`.
//! - A `ProgressReporter` is started before sending and finished when the
//!   race settles.
//!
use super::{
    request::CompletionRequest,
    response::{parse_body, CompletionResponse},
    AiError,
};
use crate::common::ui::progress::{NoopProgress, ProgressReporter};
use async_trait::async_trait;
use std::{sync::Arc, time::Duration};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

const CONNECTING: &str = "Processing your prompt, please wait...";
const REQUEST_COMPLETED: &str = "Request completed";

/// Anything that can turn a `CompletionRequest` into a `CompletionResponse`.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(
        &self,
        api_key: &str,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, AiError>;
}

/// `reqwest`-backed client for OpenAI-compatible endpoints.
pub struct OpenAiClient {
    http: reqwest::Client,
    url: String,
    timeout: Option<Duration>,
    cancel: CancellationToken,
    progress: Arc<dyn ProgressReporter>,
}

impl OpenAiClient {
    pub fn new(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
            timeout: None,
            cancel: CancellationToken::new(),
            progress: Arc::new(NoopProgress),
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn with_progress(mut self, progress: Arc<dyn ProgressReporter>) -> Self {
        self.progress = progress;
        self
    }

    async fn send(
        &self,
        api_key: &str,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, AiError> {
        debug!("POST {} (model {})", self.url, request.model());
        let response = self
            .http
            .post(&self.url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| AiError::Request(e.to_string()))?;

        let status = response.status();
        debug!("Completion endpoint answered {}", status);
        let body = response
            .text()
            .await
            .map_err(|e| AiError::Request(e.to_string()))?;

        match parse_body(&body) {
            Err(AiError::InvalidResponse(_) | AiError::EmptyResponse) if !status.is_success() => {
                Err(AiError::Api(format!("HTTP {}", status)))
            }
            other => other,
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(
        &self,
        api_key: &str,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, AiError> {
        self.progress.start(CONNECTING);

        let limit = self.timeout;
        let deadline = async move {
            match limit {
                Some(limit) => tokio::time::sleep(limit).await,
                None => std::future::pending::<()>().await,
            }
        };

        let result = tokio::select! {
            result = self.send(api_key, request) => result,
            _ = deadline => Err(AiError::Timeout(limit.map_or(0, |l| l.as_secs()))),
            _ = self.cancel.cancelled() => Err(AiError::Cancelled),
        };

        match &result {
            Ok(_) => self.progress.finish(REQUEST_COMPLETED),
            Err(e) => {
                warn!("Completion request failed: {}", e);
                self.progress.finish_with_error(&e.to_string());
            }
        }
        result
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ai::request::Purpose;
    use axum::{http::HeaderMap, http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorded {
        auth: Option<String>,
        body: Option<Value>,
    }

    /// Serves `reply` on `/v1/chat/completions` and records what it received.
    async fn mock_endpoint(
        status: StatusCode,
        reply: &'static str,
        delay: Duration,
    ) -> (String, Arc<Mutex<Recorded>>) {
        let recorded = Arc::new(Mutex::new(Recorded::default()));
        let seen = recorded.clone();
        let app = Router::new().route(
            "/v1/chat/completions",
            post(move |headers: HeaderMap, Json(body): Json<Value>| {
                let seen = seen.clone();
                async move {
                    {
                        let mut seen = seen.lock().unwrap();
                        seen.auth = headers
                            .get("authorization")
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string);
                        seen.body = Some(body);
                    }
                    tokio::time::sleep(delay).await;
                    (status, reply)
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{}/v1/chat/completions", addr), recorded)
    }

    fn http() -> reqwest::Client {
        reqwest::Client::builder().no_proxy().build().unwrap()
    }

    #[tokio::test]
    async fn test_complete_sends_bearer_and_body() {
        let reply = r#"{"choices":[{"message":{"role":"assistant","content":"Brasília"}}],
                        "usage":{"prompt_tokens":5,"completion_tokens":2,"total_tokens":7}}"#;
        let (url, recorded) = mock_endpoint(StatusCode::OK, reply, Duration::ZERO).await;
        let client = OpenAiClient::new(http(), url);
        let request = CompletionRequest::new(Purpose::Ask, "What is the brazilian capital?")
            .with_max_tokens(100);

        let response = client.complete("sk-test", &request).await.unwrap();
        assert_eq!(response.first_text(), Some("Brasília"));
        assert_eq!(response.usage.map(|u| u.total_tokens), Some(7));

        let recorded = recorded.lock().unwrap();
        assert_eq!(recorded.auth.as_deref(), Some("Bearer sk-test"));
        let body = recorded.body.as_ref().unwrap();
        assert_eq!(body["max_tokens"], json!(100));
        assert_eq!(body["messages"][1]["content"], json!("What is the brazilian capital?"));
    }

    #[tokio::test]
    async fn test_error_object_with_http_401() {
        let reply = r#"{"error":{"message":"Incorrect API key provided: sk-bad"}}"#;
        let (url, _) = mock_endpoint(StatusCode::UNAUTHORIZED, reply, Duration::ZERO).await;
        let client = OpenAiClient::new(http(), url);
        let err = client
            .complete("sk-bad", &CompletionRequest::new(Purpose::Ask, "hi"))
            .await
            .unwrap_err();
        assert_eq!(err, AiError::Api("Incorrect API key provided: sk-bad".into()));
    }

    #[tokio::test]
    async fn test_non_json_error_status() {
        let (url, _) = mock_endpoint(StatusCode::BAD_GATEWAY, "upstream down", Duration::ZERO).await;
        let client = OpenAiClient::new(http(), url);
        let err = client
            .complete("k", &CompletionRequest::new(Purpose::Ask, "hi"))
            .await
            .unwrap_err();
        assert_eq!(err, AiError::Api("HTTP 502 Bad Gateway".into()));
    }

    #[tokio::test]
    async fn test_empty_choices() {
        let (url, _) = mock_endpoint(StatusCode::OK, r#"{"choices":[]}"#, Duration::ZERO).await;
        let client = OpenAiClient::new(http(), url);
        let err = client
            .complete("k", &CompletionRequest::new(Purpose::Commit, "diff"))
            .await
            .unwrap_err();
        assert_eq!(err, AiError::EmptyResponse);
    }

    #[tokio::test]
    async fn test_timeout_is_distinguished() {
        let (url, _) = mock_endpoint(StatusCode::OK, "{}", Duration::from_secs(5)).await;
        let client = OpenAiClient::new(http(), url).with_timeout(Some(Duration::from_millis(100)));
        let err = client
            .complete("k", &CompletionRequest::new(Purpose::Ask, "hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, AiError::Timeout(_)));
    }

    #[tokio::test]
    async fn test_cancellation_is_distinguished() {
        let (url, _) = mock_endpoint(StatusCode::OK, "{}", Duration::from_secs(5)).await;
        let cancel = CancellationToken::new();
        cancel.cancel();
        let client = OpenAiClient::new(http(), url).with_cancel(cancel);
        let err = client
            .complete("k", &CompletionRequest::new(Purpose::Ask, "hi"))
            .await
            .unwrap_err();
        assert_eq!(err, AiError::Cancelled);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_request_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = OpenAiClient::new(http(), format!("http://{}/v1/chat/completions", addr));
        let err = client
            .complete("k", &CompletionRequest::new(Purpose::Ask, "hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, AiError::Request(_)));
    }
}
