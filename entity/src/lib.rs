pub mod chat_records;
pub mod emotion;

/// A type alias that represents any Entity's internal id field data type.
/// Ids are sequential surrogate keys assigned by Postgres and carry no meaning outside it.
pub type Id = i32;
