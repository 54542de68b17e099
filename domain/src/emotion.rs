//! Emotion scores as seen by the rest of the domain.

use crate::error::{DomainErrorKind, Error, ExternalErrorKind};
use companion_ai::EmotionScore;

pub use entity_api::emotion::Emotion;

/// Classifier output mapped onto the closed [`Emotion`] set.
///
/// Keeps the order in which the classifier first listed each label; that order decides
/// ties. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct EmotionScores {
    scores: Vec<(Emotion, f64)>,
}

impl EmotionScores {
    /// Maps raw provider labels onto [`Emotion`]. A label outside the known set, or an
    /// empty result, means the classifier broke its contract and is reported as an
    /// external error. A repeated label keeps its first position and takes its last score.
    pub fn from_provider(raw: Vec<EmotionScore>) -> Result<Self, Error> {
        let mut scores: Vec<(Emotion, f64)> = Vec::with_capacity(raw.len());

        for EmotionScore { label, score } in raw {
            let emotion = label.parse::<Emotion>().map_err(|e| Error {
                source: Some(Box::new(e)),
                error_kind: DomainErrorKind::External(ExternalErrorKind::Other(format!(
                    "Classifier returned unknown emotion label '{label}'"
                ))),
            })?;

            match scores.iter_mut().find(|(seen, _)| *seen == emotion) {
                Some(entry) => entry.1 = score,
                None => scores.push((emotion, score)),
            }
        }

        if scores.is_empty() {
            return Err(Error {
                source: None,
                error_kind: DomainErrorKind::External(ExternalErrorKind::Other(
                    "Classifier returned no emotion scores".to_string(),
                )),
            });
        }

        Ok(Self { scores })
    }

    /// The highest scoring emotion. On equal scores the one listed first wins.
    pub fn primary(&self) -> Emotion {
        let (mut best, mut best_score) = self.scores[0];
        for &(emotion, score) in &self.scores[1..] {
            if score > best_score {
                best = emotion;
                best_score = score;
            }
        }
        best
    }

    pub fn iter(&self) -> impl Iterator<Item = (Emotion, f64)> + '_ {
        self.scores.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(raw: &[(&str, f64)]) -> Result<EmotionScores, Error> {
        EmotionScores::from_provider(
            raw.iter()
                .map(|(label, score)| EmotionScore::new(*label, *score))
                .collect(),
        )
    }

    #[test]
    fn primary_is_the_arg_max() {
        let scores = scores(&[("neutral", 0.2), ("joy", 0.7), ("surprise", 0.1)]).unwrap();
        assert_eq!(scores.primary(), Emotion::Joy);
    }

    #[test]
    fn ties_go_to_the_first_listed_label() {
        let scores = scores(&[("fear", 0.4), ("sadness", 0.4), ("anger", 0.2)]).unwrap();
        assert_eq!(scores.primary(), Emotion::Fear);
    }

    #[test]
    fn keeps_classifier_order() {
        let scores = scores(&[("sadness", 0.6), ("fear", 0.3), ("neutral", 0.1)]).unwrap();
        let order: Vec<Emotion> = scores.iter().map(|(emotion, _)| emotion).collect();
        assert_eq!(order, vec![Emotion::Sadness, Emotion::Fear, Emotion::Neutral]);
    }

    #[test]
    fn repeated_labels_keep_first_position_and_last_score() {
        let scores = scores(&[("joy", 0.5), ("fear", 0.6), ("joy", 0.9)]).unwrap();
        let collected: Vec<(Emotion, f64)> = scores.iter().collect();
        assert_eq!(collected, vec![(Emotion::Joy, 0.9), (Emotion::Fear, 0.6)]);
        assert_eq!(scores.primary(), Emotion::Joy);
    }

    #[test]
    fn unknown_labels_are_external_errors() {
        let err = scores(&[("joy", 0.5), ("love", 0.5)]).unwrap_err();
        assert_eq!(
            err.error_kind,
            DomainErrorKind::External(ExternalErrorKind::Other(
                "Classifier returned unknown emotion label 'love'".to_string()
            ))
        );
    }

    #[test]
    fn empty_output_is_an_external_error() {
        let err = scores(&[]).unwrap_err();
        assert!(matches!(err.error_kind, DomainErrorKind::External(_)));
    }
}
