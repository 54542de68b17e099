//! Hugging Face Inference API client for emotion classification.
//!
//! Runs a hosted text-classification model (by default
//! `j-hartmann/emotion-english-distilroberta-base`, whose labels are exactly the seven
//! emotions the rest of the system knows about).

use super::{bearer_header, build_client, response_error, send_error};
use async_trait::async_trait;
use companion_ai::traits::classification::Provider;
use companion_ai::{EmotionScore, Error as ProviderError};
use log::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const PROVIDER: &str = "Hugging Face";

/// Request body for a text-classification model
#[derive(Debug, Serialize)]
pub struct ClassificationRequest<'a> {
    pub inputs: &'a str,
    pub parameters: ClassificationParameters,
    pub options: InferenceOptions,
}

#[derive(Debug, Serialize)]
pub struct ClassificationParameters {
    pub top_k: u32,
}

#[derive(Debug, Serialize)]
pub struct InferenceOptions {
    /// Block until a cold model is loaded instead of failing with 503
    pub wait_for_model: bool,
}

/// The API answers with one list per input when batching, or a flat list otherwise.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ClassificationResponse {
    Batched(Vec<Vec<EmotionScore>>),
    Single(Vec<EmotionScore>),
}

impl ClassificationResponse {
    fn into_scores(self) -> Vec<EmotionScore> {
        match self {
            ClassificationResponse::Batched(batches) => {
                batches.into_iter().next().unwrap_or_default()
            }
            ClassificationResponse::Single(scores) => scores,
        }
    }
}

/// Hugging Face Inference API client
pub struct HuggingFaceClient {
    client: reqwest::Client,
    model_url: String,
    top_k: u32,
}

impl HuggingFaceClient {
    /// Create a new client for `model`. Public models can be called without an API key.
    pub fn new(
        api_key: Option<&str>,
        base_url: &str,
        model: &str,
        top_k: u32,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let mut headers = reqwest::header::HeaderMap::new();
        if let Some(api_key) = api_key {
            headers.insert(reqwest::header::AUTHORIZATION, bearer_header(api_key)?);
        }

        Ok(Self {
            client: build_client(headers, timeout)?,
            model_url: format!("{}/{}", base_url.trim_end_matches('/'), model),
            top_k: top_k.max(1),
        })
    }
}

#[async_trait]
impl Provider for HuggingFaceClient {
    async fn classify(&self, text: &str) -> Result<Vec<EmotionScore>, ProviderError> {
        debug!("Classifying {} characters with {PROVIDER}", text.len());

        let request = ClassificationRequest {
            inputs: text,
            parameters: ClassificationParameters { top_k: self.top_k },
            options: InferenceOptions {
                wait_for_model: true,
            },
        };

        let response = self
            .client
            .post(&self.model_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| send_error(PROVIDER, e))?;

        if !response.status().is_success() {
            return Err(response_error(PROVIDER, response).await);
        }

        let scores = response
            .json::<ClassificationResponse>()
            .await
            .map_err(|e| {
                warn!("Failed to parse {PROVIDER} response: {:?}", e);
                ProviderError::Deserialization(format!("Invalid response from {PROVIDER}: {e}"))
            })?
            .into_scores();

        trace!("{PROVIDER} scores: {scores:?}");

        Ok(scores)
    }

    fn provider_id(&self) -> &str {
        "hugging_face"
    }
}
