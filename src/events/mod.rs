// src/events/mod.rs
//
// Internal Event System - Public API
//
// EventHandler is internal to the bus and is not exported

pub mod bus;
pub mod handlers;
pub mod types;

pub use bus::{EventBus, EventLogEntry, DEFAULT_EVENT_LOG_CAPACITY};
pub use handlers::{register_challenge_handlers, ChallengeMonitor};

pub use types::{
    CardAddedToDeck, CardCached, CardRemovedFromDeck, CommanderAssigned, DeckCreated,
    DeckDeleted, DeckUpdated, DomainEvent,
};

pub fn create_event_bus() -> EventBus {
    EventBus::new()
}
