// src/application/state.rs

use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::RuleTables;
use crate::events::{register_challenge_handlers, ChallengeMonitor, EventBus};
use crate::integrations::CardDataSource;
use crate::repositories::{
    CardRepository, DeckCardRepository, DeckRepository, SqliteCardRepository,
    SqliteDeckCardRepository, SqliteDeckRepository,
};
use crate::services::{CardService, DeckService, StatisticsService, ValidationService};

/// Shared application state handed to every command.
/// All fields are Arc-wrapped for thread-safe sharing.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub rules: Arc<RuleTables>,
    pub deck_service: Arc<DeckService>,
    pub card_service: Arc<CardService>,
    pub validation_service: Arc<ValidationService>,
    pub statistics_service: Arc<StatisticsService>,
    pub challenge_monitor: Arc<ChallengeMonitor>,
}

impl AppState {
    /// Wire repositories and services over an initialized database
    pub fn new(
        pool: Arc<ConnectionPool>,
        rules: RuleTables,
        card_source: Arc<dyn CardDataSource>,
    ) -> Self {
        let event_bus = Arc::new(EventBus::new());
        let rules = Arc::new(rules);

        // REPOSITORIES
        let deck_repo: Arc<dyn DeckRepository> = Arc::new(SqliteDeckRepository::new(pool.clone()));
        let deck_card_repo: Arc<dyn DeckCardRepository> =
            Arc::new(SqliteDeckCardRepository::new(pool.clone()));
        let card_repo: Arc<dyn CardRepository> = Arc::new(SqliteCardRepository::new(pool));

        // SERVICES
        let deck_service = Arc::new(DeckService::new(
            deck_repo.clone(),
            deck_card_repo,
            card_repo.clone(),
            event_bus.clone(),
        ));
        let card_service = Arc::new(CardService::new(card_repo, card_source, event_bus.clone()));
        let validation_service = Arc::new(ValidationService::new(deck_repo.clone(), rules.clone()));
        let statistics_service = Arc::new(StatisticsService::new(deck_repo));

        // EVENT HANDLERS
        let challenge_monitor = Arc::new(ChallengeMonitor::new(validation_service.clone()));
        challenge_monitor.refresh();
        register_challenge_handlers(&event_bus, challenge_monitor.clone());

        Self {
            event_bus,
            rules,
            deck_service,
            card_service,
            validation_service,
            statistics_service,
            challenge_monitor,
        }
    }
}
