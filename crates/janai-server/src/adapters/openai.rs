//! OpenAI Completion Client
//!
//! Calls an OpenAI-compatible `/chat/completions` endpoint using reqwest.
//! One attempt per call, no retry.

use async_trait::async_trait;
use reqwest::{Client, Request, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use janai::{ChatMessage, CompletionClient, CompletionResponse, DomainError, TokenUsage};

/// HTTP implementation of CompletionClient
pub struct OpenAiCompletionClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<ApiUsage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiUsage {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
    #[serde(default)]
    total_tokens: u32,
}

impl OpenAiCompletionClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// `POST <base>/chat/completions` with bearer auth and a JSON body
    fn request(&self, messages: &[ChatMessage]) -> Result<Request, DomainError> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages,
        };

        self.client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .build()
            .map_err(|e| DomainError::Completion(format!("Invalid request: {e}")))
    }

    /// Turn a decoded API body into a usable response
    fn parse_completion(
        &self,
        body: ChatCompletionResponse,
    ) -> Result<CompletionResponse, DomainError> {
        let choice = body
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::Completion("No choices returned".to_string()))?;

        let content = choice
            .message
            .content
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| DomainError::Completion("Empty completion content".to_string()))?;

        let usage = body
            .usage
            .map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            })
            .unwrap_or_default();

        Ok(CompletionResponse {
            content,
            model: body.model.unwrap_or_else(|| self.model.clone()),
            usage,
            finish_reason: choice.finish_reason,
        })
    }
}

/// Error for a non-2xx answer from the completion API
fn status_error(status: StatusCode, body: &str) -> DomainError {
    DomainError::Completion(format!("Completion API error {status}: {body}"))
}

#[async_trait]
impl CompletionClient for OpenAiCompletionClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<CompletionResponse, DomainError> {
        let request = self.request(messages)?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| DomainError::Completion(format!("Request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(status_error(status, &body));
        }

        let body: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Completion(format!("Invalid completion body: {e}")))?;

        self.parse_completion(body)
    }

    fn provider_name(&self) -> &str {
        "openai"
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::HeaderMap, routing::post, Json, Router};
    use serde_json::{json, Value};

    fn client() -> OpenAiCompletionClient {
        client_for("https://api.openai.com/v1/")
    }

    fn client_for(base_url: &str) -> OpenAiCompletionClient {
        OpenAiCompletionClient::new(base_url, "sk-test", "gpt-4.1-mini", Duration::from_secs(5))
            .unwrap()
    }

    /// Serve `router` on an ephemeral loopback port and return its base URL
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
        format!("http://{addr}/v1")
    }

    fn decode(value: serde_json::Value) -> ChatCompletionResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        assert_eq!(
            client().endpoint(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_request_targets_endpoint_with_bearer_auth() {
        let messages = vec![ChatMessage::user("hello")];
        let request = client().request(&messages).unwrap();

        assert_eq!(request.method(), reqwest::Method::POST);
        assert_eq!(
            request.url().as_str(),
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(request.headers()["authorization"], "Bearer sk-test");
        assert_eq!(request.headers()["content-type"], "application/json");

        let bytes = request.body().and_then(|b| b.as_bytes()).unwrap();
        let body: Value = serde_json::from_slice(bytes).unwrap();
        assert_eq!(body["model"], "gpt-4.1-mini");
        assert_eq!(body["messages"][0]["content"], "hello");
    }

    #[test]
    fn test_status_error_is_completion_error() {
        for status in [
            StatusCode::UNAUTHORIZED,
            StatusCode::TOO_MANY_REQUESTS,
            StatusCode::INTERNAL_SERVER_ERROR,
        ] {
            match status_error(status, "rate limited") {
                DomainError::Completion(message) => {
                    assert!(message.contains(status.as_str()));
                    assert!(message.ends_with("rate limited"));
                }
                other => panic!("expected completion error for {status}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_request_wire_format() {
        let messages = vec![ChatMessage::system("rules"), ChatMessage::user("hello")];
        let body = serde_json::to_value(ChatCompletionRequest {
            model: "gpt-4.1-mini",
            messages: &messages,
        })
        .unwrap();

        assert_eq!(
            body,
            json!({
                "model": "gpt-4.1-mini",
                "messages": [
                    {"role": "system", "content": "rules"},
                    {"role": "user", "content": "hello"}
                ]
            })
        );
    }

    #[test]
    fn test_first_choice_is_used() {
        let response = client()
            .parse_completion(decode(json!({
                "model": "gpt-4.1-mini-2025-04-14",
                "choices": [
                    {"message": {"role": "assistant", "content": "Xin chào"}, "finish_reason": "stop"},
                    {"message": {"role": "assistant", "content": "ignored"}}
                ],
                "usage": {"prompt_tokens": 10, "completion_tokens": 3, "total_tokens": 13}
            })))
            .unwrap();

        assert_eq!(response.content, "Xin chào");
        assert_eq!(response.model, "gpt-4.1-mini-2025-04-14");
        assert_eq!(response.usage.total_tokens, 13);
        assert_eq!(response.finish_reason.as_deref(), Some("stop"));
    }

    #[test]
    fn test_no_choices_is_completion_error() {
        let result = client().parse_completion(decode(json!({"choices": []})));
        assert!(matches!(result, Err(DomainError::Completion(_))));
    }

    #[test]
    fn test_null_content_is_completion_error() {
        let result = client().parse_completion(decode(json!({
            "choices": [{"message": {"role": "assistant", "content": null}}]
        })));
        assert!(matches!(result, Err(DomainError::Completion(_))));
    }

    #[test]
    fn test_whitespace_content_is_completion_error() {
        let result = client().parse_completion(decode(json!({
            "choices": [{"message": {"role": "assistant", "content": " \n\t "}}]
        })));
        assert!(matches!(result, Err(DomainError::Completion(_))));
    }

    #[test]
    fn test_missing_model_falls_back_to_configured() {
        let response = client()
            .parse_completion(decode(json!({
                "choices": [{"message": {"content": "ok"}}]
            })))
            .unwrap();
        assert_eq!(response.model, "gpt-4.1-mini");
        assert_eq!(response.usage.total_tokens, 0);
    }

    #[tokio::test]
    async fn test_complete_against_api() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                let auth = headers["authorization"].to_str().unwrap().to_string();
                Json(json!({
                    "model": body["model"],
                    "choices": [{
                        "message": {"role": "assistant", "content": auth},
                        "finish_reason": "stop"
                    }]
                }))
            }),
        );
        let base_url = serve(router).await;

        let response = client_for(&base_url)
            .complete(&[ChatMessage::user("hello")])
            .await
            .unwrap();

        assert_eq!(response.content, "Bearer sk-test");
        assert_eq!(response.model, "gpt-4.1-mini");
    }

    #[tokio::test]
    async fn test_api_error_status_is_completion_error() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async { (axum::http::StatusCode::TOO_MANY_REQUESTS, "rate limited") }),
        );
        let base_url = serve(router).await;

        let result = client_for(&base_url)
            .complete(&[ChatMessage::user("hello")])
            .await;

        match result {
            Err(DomainError::Completion(message)) => {
                assert!(message.contains("429"));
                assert!(message.ends_with("rate limited"));
            }
            other => panic!("expected completion error, got {other:?}"),
        }
    }
}
