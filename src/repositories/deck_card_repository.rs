// src/repositories/deck_card_repository.rs
//
// Deck entries (deck <-> card join rows)

use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::ConnectionPool;
use crate::domain::{DeckCard, PrintingSelection};
use crate::error::{AppError, AppResult};

use super::card_repository::{SqliteCardRepository, CARD_COLUMNS};
use super::{parse_timestamp, parse_uuid};

pub trait DeckCardRepository: Send + Sync {
    /// Append an entry at the end of the deck
    fn add(&self, entry: &DeckCard) -> AppResult<()>;
    fn update(&self, entry: &DeckCard) -> AppResult<()>;
    fn remove(&self, deck_id: Uuid, card_id: &str) -> AppResult<()>;
    fn get(&self, deck_id: Uuid, card_id: &str) -> AppResult<Option<DeckCard>>;
    fn list_by_deck(&self, deck_id: Uuid) -> AppResult<Vec<DeckCard>>;
    fn find_commander(&self, deck_id: Uuid) -> AppResult<Option<DeckCard>>;
    /// Move the commander flag to `card_id`, clearing it everywhere else
    fn set_commander(&self, deck_id: Uuid, card_id: &str) -> AppResult<()>;
}

const ENTRY_COLUMNS: &str = "dc.id, dc.deck_id, dc.card_id, dc.quantity, dc.is_commander,
    dc.category, dc.selected_printing_id, dc.selected_image_url, dc.selected_set_code,
    dc.selected_collector_number, dc.added_at";

/// Select hydrated entries; the card side is NULL when unresolved
pub(crate) fn select_entries_sql(filter: &str) -> String {
    format!(
        "SELECT {}, {} FROM deck_cards dc LEFT JOIN cards c ON c.id = dc.card_id WHERE {} ORDER BY dc.position",
        ENTRY_COLUMNS, CARD_COLUMNS, filter
    )
}

pub(crate) fn row_to_entry(row: &Row) -> rusqlite::Result<DeckCard> {
    let id_str: String = row.get("id")?;
    let deck_id_str: String = row.get("deck_id")?;
    let quantity: i64 = row.get("quantity")?;
    let added_at_str: String = row.get("added_at")?;

    let resolved: Option<String> = row.get("c_id")?;
    let card = match resolved {
        Some(_) => Some(SqliteCardRepository::row_to_card(row)?),
        None => None,
    };

    Ok(DeckCard {
        id: parse_uuid(0, &id_str)?,
        deck_id: parse_uuid(1, &deck_id_str)?,
        card_id: row.get("card_id")?,
        quantity: u32::try_from(quantity).map_err(|e| super::conversion_error(3, e))?,
        is_commander: row.get("is_commander")?,
        category: row.get("category")?,
        printing: PrintingSelection {
            printing_id: row.get("selected_printing_id")?,
            image_url: row.get("selected_image_url")?,
            set_code: row.get("selected_set_code")?,
            collector_number: row.get("selected_collector_number")?,
        },
        added_at: parse_timestamp(10, &added_at_str)?,
        card,
    })
}

/// Hydrated entries of one deck, in position order
pub(crate) fn load_entries(conn: &Connection, deck_id: Uuid) -> rusqlite::Result<Vec<DeckCard>> {
    let mut stmt = conn.prepare(&select_entries_sql("dc.deck_id = ?1"))?;
    let entries = stmt
        .query_map(params![deck_id.to_string()], row_to_entry)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(entries)
}

pub struct SqliteDeckCardRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteDeckCardRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl DeckCardRepository for SqliteDeckCardRepository {
    fn add(&self, entry: &DeckCard) -> AppResult<()> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT INTO deck_cards (
                id, deck_id, card_id, position, quantity, is_commander, category,
                selected_printing_id, selected_image_url, selected_set_code,
                selected_collector_number, added_at
            ) VALUES (
                ?1, ?2, ?3,
                (SELECT COALESCE(MAX(position), -1) + 1 FROM deck_cards WHERE deck_id = ?2),
                ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11
            )",
            params![
                entry.id.to_string(),
                entry.deck_id.to_string(),
                entry.card_id,
                i64::from(entry.quantity),
                entry.is_commander,
                entry.category,
                entry.printing.printing_id,
                entry.printing.image_url,
                entry.printing.set_code,
                entry.printing.collector_number,
                entry.added_at.to_rfc3339(),
            ],
        )?;

        Ok(())
    }

    fn update(&self, entry: &DeckCard) -> AppResult<()> {
        let conn = self.pool.get()?;

        let rows_affected = conn.execute(
            "UPDATE deck_cards SET
                quantity = ?3,
                is_commander = ?4,
                category = ?5,
                selected_printing_id = ?6,
                selected_image_url = ?7,
                selected_set_code = ?8,
                selected_collector_number = ?9
             WHERE deck_id = ?1 AND card_id = ?2",
            params![
                entry.deck_id.to_string(),
                entry.card_id,
                i64::from(entry.quantity),
                entry.is_commander,
                entry.category,
                entry.printing.printing_id,
                entry.printing.image_url,
                entry.printing.set_code,
                entry.printing.collector_number,
            ],
        )?;

        if rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    fn remove(&self, deck_id: Uuid, card_id: &str) -> AppResult<()> {
        let conn = self.pool.get()?;

        let rows_affected = conn.execute(
            "DELETE FROM deck_cards WHERE deck_id = ?1 AND card_id = ?2",
            params![deck_id.to_string(), card_id],
        )?;

        if rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    fn get(&self, deck_id: Uuid, card_id: &str) -> AppResult<Option<DeckCard>> {
        let conn = self.pool.get()?;
        let sql = select_entries_sql("dc.deck_id = ?1 AND dc.card_id = ?2");

        let entry = conn
            .query_row(&sql, params![deck_id.to_string(), card_id], row_to_entry)
            .optional()?;
        Ok(entry)
    }

    fn list_by_deck(&self, deck_id: Uuid) -> AppResult<Vec<DeckCard>> {
        let conn = self.pool.get()?;
        Ok(load_entries(&conn, deck_id)?)
    }

    fn find_commander(&self, deck_id: Uuid) -> AppResult<Option<DeckCard>> {
        let conn = self.pool.get()?;
        let sql = select_entries_sql("dc.deck_id = ?1 AND dc.is_commander = 1");

        let entry = conn
            .query_row(&sql, params![deck_id.to_string()], row_to_entry)
            .optional()?;
        Ok(entry)
    }

    fn set_commander(&self, deck_id: Uuid, card_id: &str) -> AppResult<()> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        tx.execute(
            "UPDATE deck_cards SET is_commander = 0 WHERE deck_id = ?1",
            params![deck_id.to_string()],
        )?;
        let rows_affected = tx.execute(
            "UPDATE deck_cards SET is_commander = 1 WHERE deck_id = ?1 AND card_id = ?2",
            params![deck_id.to_string(), card_id],
        )?;

        if rows_affected == 0 {
            // Dropping the transaction rolls back the clear
            return Err(AppError::NotFound);
        }

        tx.commit()?;
        Ok(())
    }
}
