//! SeaORM Entity for the chat_records table.
//! One append-only row per analyzed chat message.

use crate::emotion::Emotion;
use crate::Id;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[schema(as = entity::chat_records::Model)]
#[sea_orm(schema_name = "companion", table_name = "chat_records")]
pub struct Model {
    #[serde(skip_deserializing)]
    #[sea_orm(primary_key)]
    pub id: Id,

    /// The message exactly as the user sent it
    #[sea_orm(column_type = "Text")]
    pub text: String,

    /// Highest scoring emotion reported by the classifier
    pub primary_emotion: Emotion,

    /// Whether the message matched any crisis phrase
    pub crisis_detected: bool,

    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
