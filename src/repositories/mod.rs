// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO rule validation
// - NO event emission
// - Explicit SQL only

pub mod card_repository;
pub mod deck_card_repository;
pub mod deck_repository;

pub use card_repository::{CardRepository, SqliteCardRepository};
pub use deck_card_repository::{DeckCardRepository, SqliteDeckCardRepository};
pub use deck_repository::{DeckRepository, SqliteDeckRepository};

use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use uuid::Uuid;

/// Wrap a parse failure so it can be returned from a row mapper
pub(crate) fn conversion_error<E>(column: usize, err: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(err))
}

pub(crate) fn parse_uuid(column: usize, value: &str) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(value).map_err(|e| conversion_error(column, e))
}

pub(crate) fn parse_timestamp(column: usize, value: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| conversion_error(column, e))
}
