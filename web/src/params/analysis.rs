use serde::Deserialize;
use utoipa::ToSchema;

/// Body of `POST /analyze_emotions`
#[derive(Debug, Deserialize, ToSchema)]
#[schema(example = json!({"text": "I am so happy today!"}))]
pub(crate) struct AnalyzeParams {
    /// The chat message to analyze
    pub(crate) text: String,
}
