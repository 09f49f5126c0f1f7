// src/lib.rs
// Commander Decks - Local-first Commander deck collection manager
//
// Architecture:
// - Domain-centric: card, deck and rule logic lives in the domain
// - Event-driven: services announce state changes on the event bus
// - Explicit: rule violations are data, storage failures are errors
// - Local-first: decks and cached cards live in a local SQLite file
// - Application Layer: DTO boundary for a presentation layer

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod integrations;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    validate_card,
    validate_deck,
    validate_deck_card,
    // Cards
    Card,
    // Rule engine
    ChallengeResult,
    ChallengeTracker,
    // Colors
    Color,
    ColorCombination,
    ColorIdentity,
    ColorProgress,
    ColorProgressMap,
    // Decks
    Deck,
    DeckCard,
    DeckRuleValidator,
    DeckStatistics,
    DomainError,
    PrintingSelection,
    RuleTables,
    ValidationResult,
};

// ============================================================================
// PUBLIC API - Errors & Config
// ============================================================================

pub use config::AppConfig;
pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus, register_challenge_handlers, CardAddedToDeck, CardCached,
    CardRemovedFromDeck, ChallengeMonitor, CommanderAssigned, DeckCreated, DeckDeleted,
    DeckUpdated, DomainEvent, EventBus, EventLogEntry,
};

// ============================================================================
// PUBLIC API - Database & Repositories
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool};

pub use repositories::{
    CardRepository, DeckCardRepository, DeckRepository, SqliteCardRepository,
    SqliteDeckCardRepository, SqliteDeckRepository,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    AddCardRequest, CardService, CreateDeckRequest, DeckService, StatisticsService,
    UpdateDeckCardRequest, UpdateDeckRequest, ValidationService,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;

pub use application::commands;
pub use application::dto;

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::{CardDataSource, CardPrinting, CardSearchPage, ScryfallClient};
