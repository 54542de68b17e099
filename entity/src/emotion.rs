use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

/// The closed set of emotion labels produced by the emotion classifier.
#[derive(
    Debug,
    Clone,
    Copy,
    Eq,
    PartialEq,
    Hash,
    EnumIter,
    Deserialize,
    Serialize,
    DeriveActiveEnum,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "emotion")]
pub enum Emotion {
    #[sea_orm(string_value = "anger")]
    Anger,
    #[sea_orm(string_value = "disgust")]
    Disgust,
    #[sea_orm(string_value = "fear")]
    Fear,
    #[sea_orm(string_value = "joy")]
    Joy,
    #[sea_orm(string_value = "neutral")]
    Neutral,
    #[sea_orm(string_value = "sadness")]
    Sadness,
    #[sea_orm(string_value = "surprise")]
    Surprise,
}

impl Emotion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Anger => "anger",
            Emotion::Disgust => "disgust",
            Emotion::Fear => "fear",
            Emotion::Joy => "joy",
            Emotion::Neutral => "neutral",
            Emotion::Sadness => "sadness",
            Emotion::Surprise => "surprise",
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(fmt, "{}", self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct EmotionParseError(pub String);

impl std::fmt::Display for EmotionParseError {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(fmt, "unknown emotion label: {}", self.0)
    }
}

impl std::error::Error for EmotionParseError {}

impl FromStr for Emotion {
    type Err = EmotionParseError;

    /// Labels are matched case-insensitively since classifier models differ in casing.
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label.trim().to_lowercase().as_str() {
            "anger" => Ok(Emotion::Anger),
            "disgust" => Ok(Emotion::Disgust),
            "fear" => Ok(Emotion::Fear),
            "joy" => Ok(Emotion::Joy),
            "neutral" => Ok(Emotion::Neutral),
            "sadness" => Ok(Emotion::Sadness),
            "surprise" => Ok(Emotion::Surprise),
            _ => Err(EmotionParseError(label.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::Iterable;

    #[test]
    fn every_variant_round_trips_through_its_label() {
        for emotion in Emotion::iter() {
            assert_eq!(emotion.as_str().parse::<Emotion>(), Ok(emotion));
        }
        assert_eq!(Emotion::iter().count(), 7);
    }

    #[test]
    fn parsing_ignores_case_and_padding() {
        assert_eq!(" JOY ".parse::<Emotion>(), Ok(Emotion::Joy));
        assert_eq!("Sadness".parse::<Emotion>(), Ok(Emotion::Sadness));
    }

    #[test]
    fn unknown_labels_are_rejected() {
        assert_eq!(
            "love".parse::<Emotion>(),
            Err(EmotionParseError("love".to_string()))
        );
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Emotion::Surprise).unwrap(),
            "\"surprise\""
        );
    }
}
