//! Emotion classification provider trait.

use crate::types::classification::EmotionScore;
use crate::Error;
use async_trait::async_trait;

/// Abstraction for a pre-trained text emotion classifier.
///
/// Implementations wrap a hosted inference API or a locally loaded model. The
/// classifier is treated as an opaque oracle: callers only rely on the ranked output.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Classify `text` and return the ranked labels in the order the model emitted them.
    ///
    /// Behaviour on empty input is model dependent; callers should not send it.
    async fn classify(&self, text: &str) -> std::result::Result<Vec<EmotionScore>, Error>;

    /// Return unique identifier for this provider (e.g., "hugging_face").
    ///
    /// Must be lowercase, alphanumeric with underscores only.
    fn provider_id(&self) -> &str;
}
