//! Types returned by emotion classification providers.

use serde::{Deserialize, Serialize};

/// A single label reported by a classifier together with its confidence.
///
/// Labels are provider-defined strings; mapping them onto a closed label set is the
/// caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionScore {
    pub label: String,
    /// Confidence in `[0, 1]`
    pub score: f64,
}

impl EmotionScore {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}
