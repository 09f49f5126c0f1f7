// src/repositories/deck_repository.rs
//
// Deck persistence. Decks are returned hydrated with their entries and the
// cached cards those entries reference.

use rusqlite::{params, OptionalExtension, Row};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::ConnectionPool;
use crate::domain::{ColorIdentity, Deck};
use crate::error::{AppError, AppResult};

use super::deck_card_repository::load_entries;
use super::{conversion_error, parse_timestamp, parse_uuid};

pub trait DeckRepository: Send + Sync {
    /// Insert or update deck metadata. Entries are managed by
    /// `DeckCardRepository`.
    fn save(&self, deck: &Deck) -> AppResult<()>;
    fn get_by_id(&self, id: Uuid) -> AppResult<Option<Deck>>;
    /// All decks in creation order
    fn list_all(&self) -> AppResult<Vec<Deck>>;
    fn find_by_color_identity(&self, identity: ColorIdentity) -> AppResult<Option<Deck>>;
    fn delete(&self, id: Uuid) -> AppResult<()>;
    fn count(&self) -> AppResult<usize>;
}

const DECK_COLUMNS: &str = "id, name, color_identity, description, created_at, updated_at";

pub struct SqliteDeckRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteDeckRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Deck metadata only; `cards` is filled by the caller
    fn row_to_deck(row: &Row) -> rusqlite::Result<Deck> {
        let id_str: String = row.get(0)?;
        let code: String = row.get(2)?;
        let created_at_str: String = row.get(4)?;
        let updated_at_str: String = row.get(5)?;

        let color_identity = ColorIdentity::parse_code(&code).map_err(|e| conversion_error(2, e))?;

        Ok(Deck {
            id: parse_uuid(0, &id_str)?,
            name: row.get(1)?,
            color_identity: Some(color_identity),
            description: row.get(3)?,
            cards: Vec::new(),
            created_at: parse_timestamp(4, &created_at_str)?,
            updated_at: parse_timestamp(5, &updated_at_str)?,
        })
    }
}

impl DeckRepository for SqliteDeckRepository {
    fn save(&self, deck: &Deck) -> AppResult<()> {
        let color_code = deck.color_code().ok_or_else(|| {
            AppError::Validation(format!("Deck '{}' has no color identity", deck.name))
        })?;

        let conn = self.pool.get()?;

        // INSERT OR REPLACE would delete the row first and cascade to entries
        conn.execute(
            "INSERT INTO decks (id, name, color_identity, description, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                color_identity = excluded.color_identity,
                description = excluded.description,
                updated_at = excluded.updated_at",
            params![
                deck.id.to_string(),
                deck.name,
                color_code,
                deck.description,
                deck.created_at.to_rfc3339(),
                deck.updated_at.to_rfc3339(),
            ],
        )?;

        Ok(())
    }

    fn get_by_id(&self, id: Uuid) -> AppResult<Option<Deck>> {
        let conn = self.pool.get()?;
        let sql = format!("SELECT {} FROM decks WHERE id = ?1", DECK_COLUMNS);

        let deck = conn
            .query_row(&sql, params![id.to_string()], Self::row_to_deck)
            .optional()?;

        match deck {
            Some(mut deck) => {
                deck.cards = load_entries(&conn, deck.id)?;
                Ok(Some(deck))
            }
            None => Ok(None),
        }
    }

    fn list_all(&self) -> AppResult<Vec<Deck>> {
        let conn = self.pool.get()?;
        let sql = format!(
            "SELECT {} FROM decks ORDER BY created_at, rowid",
            DECK_COLUMNS
        );

        let mut stmt = conn.prepare(&sql)?;
        let mut decks = stmt
            .query_map([], Self::row_to_deck)?
            .collect::<Result<Vec<_>, _>>()?;

        for deck in &mut decks {
            deck.cards = load_entries(&conn, deck.id)?;
        }

        Ok(decks)
    }

    fn find_by_color_identity(&self, identity: ColorIdentity) -> AppResult<Option<Deck>> {
        let conn = self.pool.get()?;
        let sql = format!("SELECT {} FROM decks WHERE color_identity = ?1", DECK_COLUMNS);

        let deck = conn
            .query_row(&sql, params![identity.code()], Self::row_to_deck)
            .optional()?;

        match deck {
            Some(mut deck) => {
                deck.cards = load_entries(&conn, deck.id)?;
                Ok(Some(deck))
            }
            None => Ok(None),
        }
    }

    fn delete(&self, id: Uuid) -> AppResult<()> {
        let conn = self.pool.get()?;

        let rows_affected =
            conn.execute("DELETE FROM decks WHERE id = ?1", params![id.to_string()])?;

        if rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    fn count(&self) -> AppResult<usize> {
        let conn = self.pool.get()?;

        let count: i64 = conn.query_row("SELECT COUNT(*) FROM decks", [], |row| row.get(0))?;

        Ok(usize::try_from(count).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_connection_pool, initialize_database};
    use crate::domain::{Card, DeckCard};
    use crate::repositories::{
        CardRepository, DeckCardRepository, SqliteCardRepository, SqliteDeckCardRepository,
    };

    struct Repos {
        _dir: tempfile::TempDir,
        decks: SqliteDeckRepository,
        cards: SqliteCardRepository,
        entries: SqliteDeckCardRepository,
    }

    fn setup() -> Repos {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_connection_pool(&dir.path().join("decks.db")).unwrap();
        initialize_database(&pool.get().unwrap()).unwrap();
        let pool = Arc::new(pool);
        Repos {
            _dir: dir,
            decks: SqliteDeckRepository::new(pool.clone()),
            cards: SqliteCardRepository::new(pool.clone()),
            entries: SqliteDeckCardRepository::new(pool),
        }
    }

    fn izzet() -> Deck {
        Deck::new(
            "Izzet Spells".to_string(),
            ColorIdentity::parse_code("UR").unwrap(),
            "Spellslinger".to_string(),
        )
    }

    fn cached_card(repos: &Repos, id: &str, name: &str, legal_commander: bool) -> Card {
        let mut card = Card::new(
            id.to_string(),
            name.to_string(),
            "Legendary Creature — Dragon Wizard".to_string(),
            ColorIdentity::parse_code("UR").unwrap(),
        );
        card.is_legal_commander = legal_commander;
        repos.cards.save(&card).unwrap();
        card
    }

    #[test]
    fn test_save_and_get_hydrated() {
        let repos = setup();
        let deck = izzet();
        repos.decks.save(&deck).unwrap();

        let niv = cached_card(&repos, "niv", "Niv-Mizzet, Parun", true);
        let ponder = cached_card(&repos, "ponder", "Ponder", false);
        repos.entries.add(&DeckCard::new(deck.id, niv, 1, true)).unwrap();
        repos.entries.add(&DeckCard::new(deck.id, ponder, 1, false)).unwrap();

        let loaded = repos.decks.get_by_id(deck.id).unwrap().unwrap();
        assert_eq!(loaded.name, "Izzet Spells");
        assert_eq!(loaded.color_code().as_deref(), Some("UR"));
        assert_eq!(loaded.cards.len(), 2);
        assert_eq!(loaded.cards[0].card_id, "niv");
        assert_eq!(loaded.cards[1].card_name(), Some("Ponder"));
        assert_eq!(loaded.commander_name(), Some("Niv-Mizzet, Parun"));
    }

    #[test]
    fn test_save_existing_keeps_entries() {
        let repos = setup();
        let mut deck = izzet();
        repos.decks.save(&deck).unwrap();
        let ponder = cached_card(&repos, "ponder", "Ponder", false);
        repos.entries.add(&DeckCard::new(deck.id, ponder, 1, false)).unwrap();

        deck.update(Some("Renamed".to_string()), None);
        repos.decks.save(&deck).unwrap();

        let loaded = repos.decks.get_by_id(deck.id).unwrap().unwrap();
        assert_eq!(loaded.name, "Renamed");
        assert_eq!(loaded.cards.len(), 1);
    }

    #[test]
    fn test_duplicate_color_identity_rejected() {
        let repos = setup();
        repos.decks.save(&izzet()).unwrap();
        assert!(repos.decks.save(&izzet()).is_err());
    }

    #[test]
    fn test_find_by_color_identity() {
        let repos = setup();
        let deck = izzet();
        repos.decks.save(&deck).unwrap();

        let found = repos
            .decks
            .find_by_color_identity(ColorIdentity::parse_code("RU").unwrap())
            .unwrap()
            .unwrap();
        assert_eq!(found.id, deck.id);

        let none = repos
            .decks
            .find_by_color_identity(ColorIdentity::parse_code("G").unwrap())
            .unwrap();
        assert!(none.is_none());
    }

    #[test]
    fn test_list_all_in_creation_order() {
        let repos = setup();
        let first = izzet();
        let second = Deck::new(
            "Gruul".to_string(),
            ColorIdentity::parse_code("RG").unwrap(),
            String::new(),
        );
        repos.decks.save(&first).unwrap();
        repos.decks.save(&second).unwrap();

        let all = repos.decks.list_all().unwrap();
        let ids: Vec<_> = all.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
        assert_eq!(repos.decks.count().unwrap(), 2);
    }

    #[test]
    fn test_delete_cascades_to_entries() {
        let repos = setup();
        let deck = izzet();
        repos.decks.save(&deck).unwrap();
        let ponder = cached_card(&repos, "ponder", "Ponder", false);
        repos.entries.add(&DeckCard::new(deck.id, ponder, 1, false)).unwrap();

        repos.decks.delete(deck.id).unwrap();

        assert!(repos.decks.get_by_id(deck.id).unwrap().is_none());
        assert!(repos.entries.list_by_deck(deck.id).unwrap().is_empty());
        // Cached cards outlive the deck
        assert!(repos.cards.exists("ponder").unwrap());
    }

    #[test]
    fn test_delete_missing_deck() {
        let repos = setup();
        assert!(matches!(
            repos.decks.delete(Uuid::new_v4()),
            Err(AppError::NotFound)
        ));
    }

    #[test]
    fn test_entry_update_and_remove() {
        let repos = setup();
        let deck = izzet();
        repos.decks.save(&deck).unwrap();
        let island = cached_card(&repos, "island", "Island", false);
        let mut entry = DeckCard::new(deck.id, island, 10, false);
        repos.entries.add(&entry).unwrap();

        entry.quantity = 30;
        entry.category = Some("Lands".to_string());
        repos.entries.update(&entry).unwrap();

        let loaded = repos.entries.get(deck.id, "island").unwrap().unwrap();
        assert_eq!(loaded.quantity, 30);
        assert_eq!(loaded.category.as_deref(), Some("Lands"));

        repos.entries.remove(deck.id, "island").unwrap();
        assert!(repos.entries.get(deck.id, "island").unwrap().is_none());
        assert!(matches!(
            repos.entries.remove(deck.id, "island"),
            Err(AppError::NotFound)
        ));
    }

    #[test]
    fn test_set_commander_moves_flag() {
        let repos = setup();
        let deck = izzet();
        repos.decks.save(&deck).unwrap();
        let niv = cached_card(&repos, "niv", "Niv-Mizzet, Parun", true);
        let jhoira = cached_card(&repos, "jhoira", "Jhoira, Weatherlight Captain", true);
        repos.entries.add(&DeckCard::new(deck.id, niv, 1, true)).unwrap();
        repos.entries.add(&DeckCard::new(deck.id, jhoira, 1, false)).unwrap();

        repos.entries.set_commander(deck.id, "jhoira").unwrap();

        let commander = repos.entries.find_commander(deck.id).unwrap().unwrap();
        assert_eq!(commander.card_id, "jhoira");

        // Unknown card leaves the current commander in place
        assert!(repos.entries.set_commander(deck.id, "missing").is_err());
        let commander = repos.entries.find_commander(deck.id).unwrap().unwrap();
        assert_eq!(commander.card_id, "jhoira");
    }

    #[test]
    fn test_second_commander_entry_rejected() {
        let repos = setup();
        let deck = izzet();
        repos.decks.save(&deck).unwrap();
        let niv = cached_card(&repos, "niv", "Niv-Mizzet, Parun", true);
        let jhoira = cached_card(&repos, "jhoira", "Jhoira, Weatherlight Captain", true);
        repos.entries.add(&DeckCard::new(deck.id, niv, 1, true)).unwrap();

        assert!(repos
            .entries
            .add(&DeckCard::new(deck.id, jhoira, 1, true))
            .is_err());
    }
}
