use crate::emotion::Emotion;

pub const DEFAULT_COPING_STRATEGY: &str = "Stay mindful and take care of yourself.";

/// The coping strategy suggested for a known emotion.
pub fn strategy_for_emotion(emotion: Emotion) -> &'static str {
    match emotion {
        Emotion::Anger => {
            "Try deep breathing, meditation, or physical exercise to release stress."
        }
        Emotion::Disgust => "Engage in positive self-talk and avoid toxic environments.",
        Emotion::Fear => {
            "Practice mindfulness, grounding techniques, or talk to a trusted person."
        }
        Emotion::Joy => {
            "Enjoy the moment, express gratitude, and share your happiness with others!"
        }
        Emotion::Neutral => "Maintain a balanced lifestyle and engage in self-care activities.",
        Emotion::Sadness => {
            "Reach out to friends, journal your feelings, or try relaxing activities."
        }
        Emotion::Surprise => {
            "Embrace change, reflect on new opportunities, and stay adaptable."
        }
    }
}

/// The coping strategy for a raw emotion label, falling back to
/// [`DEFAULT_COPING_STRATEGY`] for labels outside the known set.
pub fn strategy_for(label: &str) -> &'static str {
    label
        .parse::<Emotion>()
        .map(strategy_for_emotion)
        .unwrap_or(DEFAULT_COPING_STRATEGY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::Iterable;

    #[test]
    fn joy_has_its_own_strategy() {
        assert_eq!(
            strategy_for("joy"),
            "Enjoy the moment, express gratitude, and share your happiness with others!"
        );
    }

    #[test]
    fn unknown_labels_fall_back_to_default() {
        assert_eq!(strategy_for("unknown_label"), DEFAULT_COPING_STRATEGY);
        assert_eq!(strategy_for(""), DEFAULT_COPING_STRATEGY);
    }

    #[test]
    fn every_known_emotion_has_a_specific_strategy() {
        for emotion in Emotion::iter() {
            assert_ne!(strategy_for(emotion.as_str()), DEFAULT_COPING_STRATEGY);
            assert_eq!(
                strategy_for(emotion.as_str()),
                strategy_for_emotion(emotion)
            );
        }
    }
}
