//! Business logic for the companion: emotion classification, coping strategies,
//! crisis screening and reply generation.
//!
//! Consumers of the `domain` crate never need to depend on `entity_api` or
//! `companion_ai` directly; the entity types they need are re-exported here.
pub use entity_api::{chat_records, Id};

pub mod analysis;
pub mod chat_record;
pub mod coping;
pub mod crisis;
pub mod emotion;
pub mod error;

pub mod gateway;
