//! HTTP clients for the remote model providers.

use companion_ai::Error as ProviderError;
use log::*;
use serde::Deserialize;
use std::time::Duration;

pub mod groq;
pub mod hugging_face;

/// Error body shapes used by OpenAI-compatible servers (`{"error": {"message"}}`)
/// and by Hugging Face (`{"error": "..."}`).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorBody {
    Nested { error: NestedError },
    Flat { error: String },
}

#[derive(Debug, Deserialize)]
struct NestedError {
    message: String,
}

/// Builds a reqwest client with the given default headers and a hard per-request timeout.
pub(crate) fn build_client(
    headers: reqwest::header::HeaderMap,
    timeout: Duration,
) -> Result<reqwest::Client, ProviderError> {
    reqwest::Client::builder()
        .use_rustls_tls()
        .default_headers(headers)
        .timeout(timeout)
        .build()
        .map_err(|e| ProviderError::Configuration(format!("Failed to build HTTP client: {e}")))
}

/// `authorization: Bearer <key>` header value, marked sensitive so it never shows in logs.
pub(crate) fn bearer_header(
    api_key: &str,
) -> Result<reqwest::header::HeaderValue, ProviderError> {
    let mut header_value = reqwest::header::HeaderValue::from_str(&format!("Bearer {api_key}"))
        .map_err(|e| {
            warn!("Failed to create auth header: {:?}", e);
            ProviderError::Configuration("Invalid API key format".to_string())
        })?;
    header_value.set_sensitive(true);
    Ok(header_value)
}

/// Maps a failed `send()` onto the provider error taxonomy.
pub(crate) fn send_error(provider: &str, err: reqwest::Error) -> ProviderError {
    warn!("Request to {provider} failed: {:?}", err);
    if err.is_timeout() {
        ProviderError::Timeout(format!("{provider} did not respond in time"))
    } else {
        ProviderError::Network(format!("Could not reach {provider}: {err}"))
    }
}

/// Consumes a non-success response and turns it into a provider error, keeping the
/// provider's own message when the body carries one.
pub(crate) async fn response_error(provider: &str, response: reqwest::Response) -> ProviderError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    error!("{provider} API returned {status}: {body}");

    let message = match serde_json::from_str::<ErrorBody>(&body) {
        Ok(ErrorBody::Nested { error }) => error.message,
        Ok(ErrorBody::Flat { error }) => error,
        Err(_) if body.trim().is_empty() => status.to_string(),
        Err(_) => body,
    };

    match status {
        reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
            ProviderError::Authentication(message)
        }
        _ => ProviderError::Provider(message),
    }
}
