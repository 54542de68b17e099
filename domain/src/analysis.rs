//! Message analysis: classify, look up a coping strategy, check for crisis language,
//! generate a reply and record the exchange.

use crate::chat_record::{self, NewChatRecord};
use crate::coping;
use crate::crisis::{self, CrisisAdvisory};
use crate::emotion::{Emotion, EmotionScores};
use crate::error::Error;
use companion_ai::traits::{classification, generation};
use companion_ai::GenerationRequest;
use log::*;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Text sent by the diagnostic probe.
pub const PROBE_TEXT: &str = "Hello, world!";

const SYSTEM_PROMPT: &str = "You are a warm, supportive mental health companion. \
     You are not a therapist and never diagnose. Keep replies short, kind and practical.";

/// Classification-only view of a message; nothing is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct EmotionReport {
    pub text: String,
    pub emotions: EmotionScores,
    pub primary_emotion: Emotion,
    pub coping_strategy: &'static str,
}

/// Full result of analyzing a chat message.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub text: String,
    pub emotions: EmotionScores,
    pub primary_emotion: Emotion,
    pub coping_strategy: &'static str,
    pub crisis_detected: bool,
    pub crisis_help: Option<CrisisAdvisory>,
    pub ai_response: String,
}

/// Result of exercising both providers with [`PROBE_TEXT`].
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticReport {
    pub response: String,
    pub emotion: EmotionReport,
}

/// Coordinates the classifier and reply generator for each chat message.
///
/// Holds no per-request state; one instance is shared by every request.
pub struct Analyzer {
    classifier: Arc<dyn classification::Provider>,
    generator: Arc<dyn generation::Provider>,
}

impl Analyzer {
    pub fn new(
        classifier: Arc<dyn classification::Provider>,
        generator: Arc<dyn generation::Provider>,
    ) -> Self {
        Self {
            classifier,
            generator,
        }
    }

    /// Classifies `text` and picks its coping strategy.
    pub async fn assess(&self, text: &str) -> Result<EmotionReport, Error> {
        let emotions = EmotionScores::from_provider(self.classifier.classify(text).await?)?;
        let primary_emotion = emotions.primary();

        Ok(EmotionReport {
            text: text.to_string(),
            emotions,
            primary_emotion,
            coping_strategy: coping::strategy_for_emotion(primary_emotion),
        })
    }

    /// Runs the full pipeline for one chat message and appends it to the chat history.
    ///
    /// Either every step succeeds and exactly one record is stored, or an error is
    /// returned and nothing is stored. Provider calls are not retried.
    pub async fn analyze(&self, db: &DatabaseConnection, text: &str) -> Result<Analysis, Error> {
        if text.trim().is_empty() {
            return Err(Error::validation("Text to analyze must not be empty"));
        }

        let EmotionReport {
            text: _,
            emotions,
            primary_emotion,
            coping_strategy,
        } = self.assess(text).await?;

        let crisis_detected = crisis::detect(text);
        if crisis_detected {
            warn!("Crisis language detected in incoming message");
        }

        let prompt = compose_prompt(text, primary_emotion, coping_strategy, crisis_detected);
        let ai_response = self
            .generator
            .generate(GenerationRequest::new(prompt).with_system(SYSTEM_PROMPT))
            .await?;

        let record = chat_record::create(
            db,
            NewChatRecord {
                text: text.to_string(),
                primary_emotion,
                crisis_detected,
            },
        )
        .await?;

        info!(
            "Analyzed chat record {}: primary_emotion={primary_emotion}, crisis_detected={crisis_detected}",
            record.id
        );

        Ok(Analysis {
            text: text.to_string(),
            emotions,
            primary_emotion,
            coping_strategy,
            crisis_detected,
            crisis_help: crisis::advisory_for(text),
            ai_response,
        })
    }

    /// Sends [`PROBE_TEXT`] through the reply generator and the classifier without
    /// recording anything.
    pub async fn probe(&self) -> Result<DiagnosticReport, Error> {
        debug!("Probing reply generation and emotion classification");

        let response = self
            .generator
            .generate(GenerationRequest::new(PROBE_TEXT))
            .await?;
        let emotion = self.assess(PROBE_TEXT).await?;

        Ok(DiagnosticReport { response, emotion })
    }
}

/// Builds the instruction sent to the reply generator.
pub fn compose_prompt(
    text: &str,
    primary_emotion: Emotion,
    coping_strategy: &str,
    crisis_detected: bool,
) -> String {
    let mut prompt = format!(
        "The user wrote: \"{text}\"\n\
         Their primary detected emotion is {primary_emotion}.\n\
         A coping strategy that may help: {coping_strategy}\n"
    );

    if crisis_detected {
        prompt.push_str(
            "The message contains language suggesting the user may be in crisis. \
             Respond with care, encourage them to contact a crisis line such as 988 \
             or local emergency services, and to reach out to someone they trust.\n",
        );
    }

    prompt.push_str(
        "Write a brief, empathetic reply that acknowledges how they feel and gently \
         weaves in the coping strategy.",
    );

    prompt
}
