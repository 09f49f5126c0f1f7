// src/services/test_support.rs
//
// Shared fixtures for service tests: an on-disk SQLite database in a temp
// directory and the repositories on top of it.

use std::sync::Arc;

use crate::db::{create_connection_pool, initialize_database};
use crate::domain::{Card, Color, ColorIdentity};
use crate::events::EventBus;
use crate::repositories::{
    CardRepository, SqliteCardRepository, SqliteDeckCardRepository, SqliteDeckRepository,
};

pub struct TestDb {
    _dir: tempfile::TempDir,
    pub decks: Arc<SqliteDeckRepository>,
    pub entries: Arc<SqliteDeckCardRepository>,
    pub cards: Arc<SqliteCardRepository>,
    pub event_bus: Arc<EventBus>,
}

impl TestDb {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_connection_pool(&dir.path().join("test.db")).unwrap();
        initialize_database(&pool.get().unwrap()).unwrap();
        let pool = Arc::new(pool);

        Self {
            _dir: dir,
            decks: Arc::new(SqliteDeckRepository::new(pool.clone())),
            entries: Arc::new(SqliteDeckCardRepository::new(pool.clone())),
            cards: Arc::new(SqliteCardRepository::new(pool)),
            event_bus: Arc::new(EventBus::new()),
        }
    }

    /// Put a card in the local cache
    pub fn cache(&self, card: &Card) {
        self.cards.save(card).unwrap();
    }
}

pub fn card(id: &str, name: &str, type_line: &str, identity: &str) -> Card {
    let color_identity = if identity.is_empty() {
        ColorIdentity::colorless()
    } else {
        ColorIdentity::parse_code(identity).unwrap()
    };
    let mut card = Card::new(
        id.to_string(),
        name.to_string(),
        type_line.to_string(),
        color_identity,
    );
    card.colors = color_identity.colors().collect::<Vec<Color>>();
    card.cmc = Some(2.0);
    card
}

pub fn legendary(id: &str, name: &str, identity: &str) -> Card {
    let mut c = card(id, name, "Legendary Creature — Wizard", identity);
    c.is_legal_commander = true;
    c
}
