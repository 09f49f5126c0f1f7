// src/repositories/card_repository.rs
//
// Local cache of card data fetched from the card database

use rusqlite::{params, OptionalExtension, Row};
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::{Card, ColorIdentity};
use crate::error::AppResult;

use super::{conversion_error, parse_timestamp};

pub trait CardRepository: Send + Sync {
    /// Insert or update (by id)
    fn save(&self, card: &Card) -> AppResult<()>;
    fn get_by_id(&self, id: &str) -> AppResult<Option<Card>>;
    fn find_by_name(&self, name: &str) -> AppResult<Option<Card>>;
    fn exists(&self, id: &str) -> AppResult<bool>;
}

/// Card columns, for use in joins. Aliased with a `c_` prefix.
pub(crate) const CARD_COLUMNS: &str = "c.id AS c_id, c.name AS c_name, c.mana_cost AS c_mana_cost,
    c.cmc AS c_cmc, c.type_line AS c_type_line, c.oracle_text AS c_oracle_text,
    c.colors AS c_colors, c.color_identity AS c_color_identity, c.power AS c_power,
    c.toughness AS c_toughness, c.loyalty AS c_loyalty, c.image_url AS c_image_url,
    c.image_url_small AS c_image_url_small, c.is_legal_commander AS c_is_legal_commander,
    c.is_banned AS c_is_banned, c.set_code AS c_set_code, c.set_name AS c_set_name,
    c.rarity AS c_rarity, c.collector_number AS c_collector_number, c.cached_at AS c_cached_at";

pub struct SqliteCardRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteCardRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Map a row selected with `CARD_COLUMNS` to a Card
    pub(crate) fn row_to_card(row: &Row) -> rusqlite::Result<Card> {
        let colors_str: String = row.get("c_colors")?;
        let colors = ColorIdentity::from_symbol_list(&colors_str)
            .map_err(|e| conversion_error(6, e))?
            .colors()
            .collect();

        let identity_str: String = row.get("c_color_identity")?;
        let color_identity =
            ColorIdentity::from_symbol_list(&identity_str).map_err(|e| conversion_error(7, e))?;

        let cached_at_str: String = row.get("c_cached_at")?;

        Ok(Card {
            id: row.get("c_id")?,
            name: row.get("c_name")?,
            mana_cost: row.get("c_mana_cost")?,
            cmc: row.get("c_cmc")?,
            type_line: row.get("c_type_line")?,
            oracle_text: row.get("c_oracle_text")?,
            colors,
            color_identity,
            power: row.get("c_power")?,
            toughness: row.get("c_toughness")?,
            loyalty: row.get("c_loyalty")?,
            image_url: row.get("c_image_url")?,
            image_url_small: row.get("c_image_url_small")?,
            is_legal_commander: row.get("c_is_legal_commander")?,
            is_banned: row.get("c_is_banned")?,
            set_code: row.get("c_set_code")?,
            set_name: row.get("c_set_name")?,
            rarity: row.get("c_rarity")?,
            collector_number: row.get("c_collector_number")?,
            cached_at: parse_timestamp(19, &cached_at_str)?,
        })
    }
}

impl CardRepository for SqliteCardRepository {
    fn save(&self, card: &Card) -> AppResult<()> {
        let conn = self.pool.get()?;

        // Upsert rather than REPLACE: deck entries reference cards by id
        conn.execute(
            "INSERT INTO cards (
                id, name, mana_cost, cmc, type_line, oracle_text, colors, color_identity,
                power, toughness, loyalty, image_url, image_url_small, is_legal_commander,
                is_banned, set_code, set_name, rarity, collector_number, cached_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                mana_cost = excluded.mana_cost,
                cmc = excluded.cmc,
                type_line = excluded.type_line,
                oracle_text = excluded.oracle_text,
                colors = excluded.colors,
                color_identity = excluded.color_identity,
                power = excluded.power,
                toughness = excluded.toughness,
                loyalty = excluded.loyalty,
                image_url = excluded.image_url,
                image_url_small = excluded.image_url_small,
                is_legal_commander = excluded.is_legal_commander,
                is_banned = excluded.is_banned,
                set_code = excluded.set_code,
                set_name = excluded.set_name,
                rarity = excluded.rarity,
                collector_number = excluded.collector_number,
                cached_at = excluded.cached_at",
            params![
                card.id,
                card.name,
                card.mana_cost,
                card.cmc,
                card.type_line,
                card.oracle_text,
                ColorIdentity::from_colors(card.colors.iter().copied()).symbol_list(),
                card.color_identity.symbol_list(),
                card.power,
                card.toughness,
                card.loyalty,
                card.image_url,
                card.image_url_small,
                card.is_legal_commander,
                card.is_banned,
                card.set_code,
                card.set_name,
                card.rarity,
                card.collector_number,
                card.cached_at.to_rfc3339(),
            ],
        )?;

        Ok(())
    }

    fn get_by_id(&self, id: &str) -> AppResult<Option<Card>> {
        let conn = self.pool.get()?;
        let sql = format!("SELECT {} FROM cards c WHERE c.id = ?1", CARD_COLUMNS);

        let card = conn
            .query_row(&sql, params![id], Self::row_to_card)
            .optional()?;
        Ok(card)
    }

    fn find_by_name(&self, name: &str) -> AppResult<Option<Card>> {
        let conn = self.pool.get()?;
        let sql = format!(
            "SELECT {} FROM cards c WHERE c.name = ?1 ORDER BY c.cached_at DESC LIMIT 1",
            CARD_COLUMNS
        );

        let card = conn
            .query_row(&sql, params![name], Self::row_to_card)
            .optional()?;
        Ok(card)
    }

    fn exists(&self, id: &str) -> AppResult<bool> {
        let conn = self.pool.get()?;

        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM cards WHERE id = ?1",
            params![id],
            |row| row.get(0),
        )?;

        Ok(count > 0)
    }
}
