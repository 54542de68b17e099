//! Response DTOs for emotion analysis and the diagnostic probe.

use domain::analysis::{Analysis, DiagnosticReport, EmotionReport};
use domain::crisis::CrisisAdvisory;
use domain::emotion::{Emotion, EmotionScores};
use serde::ser::{Serialize, Serializer};
use std::collections::HashMap;
use utoipa::ToSchema;

/// Emotion label to confidence, serialized as a JSON object in classifier order.
#[derive(Debug, Clone, PartialEq)]
pub struct EmotionScoreMap(Vec<(Emotion, f64)>);

impl From<EmotionScores> for EmotionScoreMap {
    fn from(scores: EmotionScores) -> Self {
        Self(scores.iter().collect())
    }
}

impl Serialize for EmotionScoreMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(emotion, score)| (emotion.as_str(), score)))
    }
}

/// Crisis resources returned alongside a flagged message
#[derive(Debug, Clone, PartialEq, serde::Serialize, ToSchema)]
pub struct CrisisHelp {
    pub hotline: String,
    pub advice: String,
}

impl From<CrisisAdvisory> for CrisisHelp {
    fn from(advisory: CrisisAdvisory) -> Self {
        Self {
            hotline: advisory.hotline.to_string(),
            advice: advisory.advice.to_string(),
        }
    }
}

/// Result of `POST /analyze_emotions`
#[derive(Debug, Clone, PartialEq, serde::Serialize, ToSchema)]
pub struct AnalysisResponse {
    pub text: String,
    #[schema(value_type = HashMap<String, f64>)]
    pub emotions: EmotionScoreMap,
    pub primary_emotion: Emotion,
    pub coping_strategy: String,
    pub crisis_detected: bool,
    /// Present (non-null) only when `crisis_detected` is true
    pub crisis_help: Option<CrisisHelp>,
    pub ai_response: String,
}

impl From<Analysis> for AnalysisResponse {
    fn from(analysis: Analysis) -> Self {
        Self {
            text: analysis.text,
            emotions: analysis.emotions.into(),
            primary_emotion: analysis.primary_emotion,
            coping_strategy: analysis.coping_strategy.to_string(),
            crisis_detected: analysis.crisis_detected,
            crisis_help: analysis.crisis_help.map(CrisisHelp::from),
            ai_response: analysis.ai_response,
        }
    }
}

/// Classification of a message without a generated reply
#[derive(Debug, Clone, PartialEq, serde::Serialize, ToSchema)]
pub struct EmotionReportResponse {
    pub text: String,
    #[schema(value_type = HashMap<String, f64>)]
    pub emotions: EmotionScoreMap,
    pub primary_emotion: Emotion,
    pub coping_strategy: String,
}

impl From<EmotionReport> for EmotionReportResponse {
    fn from(report: EmotionReport) -> Self {
        Self {
            text: report.text,
            emotions: report.emotions.into(),
            primary_emotion: report.primary_emotion,
            coping_strategy: report.coping_strategy.to_string(),
        }
    }
}

/// Result of `GET /`
#[derive(Debug, Clone, PartialEq, serde::Serialize, ToSchema)]
pub struct DiagnosticResponse {
    pub response: String,
    pub emotion: EmotionReportResponse,
}

impl From<DiagnosticReport> for DiagnosticResponse {
    fn from(report: DiagnosticReport) -> Self {
        Self {
            response: report.response,
            emotion: report.emotion.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::crisis::CRISIS_ADVISORY;
    use serde_json::json;

    #[test]
    fn emotions_serialize_as_an_object_in_classifier_order() {
        let map = EmotionScoreMap(vec![(Emotion::Sadness, 0.7), (Emotion::Fear, 0.2)]);
        assert_eq!(
            serde_json::to_string(&map).unwrap(),
            r#"{"sadness":0.7,"fear":0.2}"#
        );
    }

    #[test]
    fn crisis_help_carries_the_hotline() {
        let help = CrisisHelp::from(CRISIS_ADVISORY);
        let value = serde_json::to_value(&help).unwrap();

        assert_eq!(value["hotline"], json!(CRISIS_ADVISORY.hotline));
        assert!(value["advice"].is_string());
    }
}
