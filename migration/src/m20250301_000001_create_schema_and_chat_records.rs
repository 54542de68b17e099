use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared("CREATE SCHEMA IF NOT EXISTS companion")
            .await?;

        // Closed label set of the emotion classifier
        db.execute_unprepared(
            "CREATE TYPE companion.emotion AS ENUM (
                'anger', 'disgust', 'fear', 'joy', 'neutral', 'sadness', 'surprise'
            )",
        )
        .await?;

        // Append-only: rows are never updated or deleted by the application
        db.execute_unprepared(
            r#"
            CREATE TABLE IF NOT EXISTS companion.chat_records (
                id SERIAL PRIMARY KEY,
                text TEXT NOT NULL,
                primary_emotion companion.emotion NOT NULL,
                crisis_detected BOOLEAN NOT NULL DEFAULT FALSE,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .await?;

        db.execute_unprepared(
            "CREATE INDEX IF NOT EXISTS idx_chat_records_crisis_detected
             ON companion.chat_records(crisis_detected)
             WHERE crisis_detected",
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared("DROP TABLE IF EXISTS companion.chat_records")
            .await?;
        db.execute_unprepared("DROP TYPE IF EXISTS companion.emotion")
            .await?;

        Ok(())
    }
}
