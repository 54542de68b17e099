use log::info;
use sea_orm::DatabaseConnection;

pub use entity::{chat_records, emotion, Id};

pub mod chat_record;
pub mod error;

use chat_record::NewChatRecord;
use emotion::Emotion;

/// Appends a handful of sample conversations so the chat UI has history to replay
/// on a freshly migrated development database.
pub async fn seed_database(db: &DatabaseConnection) -> Result<(), error::Error> {
    let samples = [
        ("I am so happy today!", Emotion::Joy, false),
        ("Work has been overwhelming this week.", Emotion::Fear, false),
        ("I miss my grandmother a lot lately.", Emotion::Sadness, false),
        ("I feel hopeless and can't see a way out.", Emotion::Sadness, true),
        ("Someone cut in line and I lost my temper.", Emotion::Anger, false),
    ];

    for (text, primary_emotion, crisis_detected) in samples {
        let record = chat_record::create(
            db,
            NewChatRecord {
                text: text.to_owned(),
                primary_emotion,
                crisis_detected,
            },
        )
        .await?;
        info!("Seeded chat record {}", record.id);
    }

    Ok(())
}
