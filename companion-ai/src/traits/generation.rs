//! Reply generation provider trait.

use crate::types::generation::Request;
use crate::Error;
use async_trait::async_trait;

/// Abstraction for a remote large language model producing free-text replies.
///
/// Supports Groq, OpenAI and any other OpenAI-compatible chat completion server.
/// No retry is performed here; a failed call is reported as-is.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Generate a reply for a single-turn request.
    ///
    /// Returns the raw text of the first completion choice.
    async fn generate(&self, request: Request) -> std::result::Result<String, Error>;

    /// Return unique identifier for this provider (e.g., "groq").
    ///
    /// Must be lowercase, alphanumeric with underscores only.
    fn provider_id(&self) -> &str;
}
