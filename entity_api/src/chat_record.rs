//! Append and list operations for the chat_records table.
//!
//! The table is append-only.

use super::error::Error;
use entity::chat_records::{ActiveModel, Column, Entity, Model};
use entity::emotion::Emotion;
use log::*;
use sea_orm::{entity::prelude::*, ActiveValue::Set, DatabaseConnection, QueryOrder};

/// Input for appending a chat record
#[derive(Debug, Clone, PartialEq)]
pub struct NewChatRecord {
    pub text: String,
    pub primary_emotion: Emotion,
    pub crisis_detected: bool,
}

/// Appends a new chat record and returns it with its assigned id
pub async fn create(db: &DatabaseConnection, record: NewChatRecord) -> Result<Model, Error> {
    debug!(
        "Appending chat record: primary_emotion={}, crisis_detected={}",
        record.primary_emotion, record.crisis_detected
    );

    let now = chrono::Utc::now();

    let active_model = ActiveModel {
        text: Set(record.text),
        primary_emotion: Set(record.primary_emotion),
        crisis_detected: Set(record.crisis_detected),
        created_at: Set(now.into()),
        ..Default::default()
    };

    Ok(active_model.insert(db).await?)
}

/// Lists every chat record in insertion order
pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, Error> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, Transaction};

    fn chat_record(id: i32, text: &str, primary_emotion: Emotion, crisis: bool) -> Model {
        Model {
            id,
            text: text.to_owned(),
            primary_emotion,
            crisis_detected: crisis,
            created_at: chrono::Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn create_returns_the_inserted_chat_record() -> Result<(), Error> {
        let stored = chat_record(1, "I am so happy today!", Emotion::Joy, false);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![stored.clone()]])
            .into_connection();

        let created = create(
            &db,
            NewChatRecord {
                text: "I am so happy today!".to_owned(),
                primary_emotion: Emotion::Joy,
                crisis_detected: false,
            },
        )
        .await?;

        assert_eq!(created.id, 1);
        assert_eq!(created.text, stored.text);
        assert_eq!(created.primary_emotion, Emotion::Joy);
        assert!(!created.crisis_detected);

        Ok(())
    }

    #[tokio::test]
    async fn create_issues_exactly_one_insert() -> Result<(), Error> {
        let stored = chat_record(7, "I feel hopeless", Emotion::Sadness, true);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![stored]])
            .into_connection();

        create(
            &db,
            NewChatRecord {
                text: "I feel hopeless".to_owned(),
                primary_emotion: Emotion::Sadness,
                crisis_detected: true,
            },
        )
        .await?;

        let log: Vec<Transaction> = db.into_transaction_log();
        assert_eq!(log.len(), 1);
        assert!(format!("{:?}", log[0]).contains("INSERT INTO"));

        Ok(())
    }

    #[tokio::test]
    async fn find_all_returns_records_with_their_fields_intact() -> Result<(), Error> {
        let records = vec![
            chat_record(1, "first", Emotion::Neutral, false),
            chat_record(2, "I want to kill myself", Emotion::Sadness, true),
        ];

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![records.clone()])
            .into_connection();

        let listed = find_all(&db).await?;

        assert_eq!(listed, records);

        Ok(())
    }

    #[tokio::test]
    async fn find_all_orders_by_id() -> Result<(), Error> {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .into_connection();

        find_all(&db).await?;

        let log = db.into_transaction_log();
        assert!(format!("{:?}", log[0]).contains("ORDER BY"));

        Ok(())
    }

    #[tokio::test]
    async fn storage_faults_propagate() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("disk full".to_owned())])
            .into_connection();

        let result = find_all(&db).await;

        assert!(result.is_err());
    }
}
