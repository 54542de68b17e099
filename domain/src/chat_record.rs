//! Chat history as exposed to the web layer.

use crate::chat_records::Model;
use crate::error::Error;
use sea_orm::DatabaseConnection;

pub use entity_api::chat_record::{create, NewChatRecord};

/// Every stored chat record, oldest first.
pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, Error> {
    Ok(entity_api::chat_record::find_all(db).await?)
}
