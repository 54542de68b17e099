//! Groq API client for reply generation.
//!
//! Groq exposes an OpenAI-compatible chat completions endpoint, so this client also
//! works against any other server speaking that protocol.

use super::{bearer_header, build_client, response_error, send_error};
use async_trait::async_trait;
use companion_ai::traits::generation::Provider;
use companion_ai::{Error as ProviderError, GenerationRequest};
use log::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const PROVIDER: &str = "Groq";

/// A chat message in the OpenAI wire format
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatMessage {
    fn new(role: &str, content: String) -> Self {
        Self {
            role: role.to_string(),
            content: Some(content),
        }
    }
}

/// Request body for `POST /chat/completions`
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

/// Response body from `POST /chat/completions`
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub id: Option<String>,
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChatMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Groq API client
pub struct GroqClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl GroqClient {
    /// Create a new Groq client with the given API key, base URL and model
    pub fn new(
        api_key: &str,
        base_url: &str,
        model: &str,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(reqwest::header::AUTHORIZATION, bearer_header(api_key)?);

        Ok(Self {
            client: build_client(headers, timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        })
    }

    fn build_request(&self, request: GenerationRequest) -> ChatCompletionRequest {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = request.system {
            messages.push(ChatMessage::new("system", system));
        }
        messages.push(ChatMessage::new("user", request.prompt));

        ChatCompletionRequest {
            model: self.model.clone(),
            messages,
        }
    }
}

#[async_trait]
impl Provider for GroqClient {
    async fn generate(&self, request: GenerationRequest) -> Result<String, ProviderError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = self.build_request(request);

        debug!(
            "Requesting chat completion from {PROVIDER} with model {}",
            body.model
        );

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| send_error(PROVIDER, e))?;

        if !response.status().is_success() {
            return Err(response_error(PROVIDER, response).await);
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse {PROVIDER} response: {:?}", e);
            ProviderError::Deserialization(format!("Invalid response from {PROVIDER}: {e}"))
        })?;

        debug!("{PROVIDER} completion received: {:?}", completion.id);

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| {
                ProviderError::Provider(format!("{PROVIDER} returned an empty completion"))
            })
    }

    fn provider_id(&self) -> &str {
        "groq"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn client(base_url: &str) -> GroqClient {
        GroqClient::new(
            "gsk_test_key",
            base_url,
            "llama3-8b-8192",
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn generate_sends_prompt_and_returns_first_choice() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer gsk_test_key")
            .match_body(Matcher::Json(serde_json::json!({
                "model": "llama3-8b-8192",
                "messages": [
                    {"role": "system", "content": "Be kind."},
                    {"role": "user", "content": "Hello, world!"}
                ]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                serde_json::json!({
                    "id": "chatcmpl-1",
                    "choices": [
                        {"index": 0, "message": {"role": "assistant", "content": "Hi there!"}, "finish_reason": "stop"}
                    ]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let reply = client(&server.url())
            .generate(GenerationRequest::new("Hello, world!").with_system("Be kind."))
            .await
            .unwrap();

        assert_eq!(reply, "Hi there!");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn provider_error_message_is_surfaced() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(400)
            .with_body(
                r#"{"error":{"message":"The model `llama3-8b-8192` has been decommissioned","type":"invalid_request_error"}}"#,
            )
            .create_async()
            .await;

        let err = client(&server.url())
            .generate(GenerationRequest::new("Hello"))
            .await
            .unwrap_err();

        match err {
            ProviderError::Provider(message) => {
                assert!(message.contains("decommissioned"), "{message}")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn invalid_key_is_an_authentication_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(401)
            .with_body(r#"{"error":{"message":"Invalid API Key"}}"#)
            .create_async()
            .await;

        let err = client(&server.url())
            .generate(GenerationRequest::new("Hello"))
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::Authentication(ref m) if m == "Invalid API Key"));
    }

    #[tokio::test]
    async fn empty_completion_is_rejected() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices":[{"message":{"role":"assistant","content":"  "}}]}"#)
            .create_async()
            .await;

        let err = client(&server.url())
            .generate(GenerationRequest::new("Hello"))
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::Provider(_)));
    }

    #[tokio::test]
    async fn unreachable_server_is_a_network_error() {
        let err = client("http://127.0.0.1:1")
            .generate(GenerationRequest::new("Hello"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ProviderError::Network(_) | ProviderError::Timeout(_)
        ));
    }
}
