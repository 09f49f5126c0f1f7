// events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

macro_rules! impl_domain_event {
    ($event:ident) => {
        impl DomainEvent for $event {
            fn event_id(&self) -> Uuid {
                self.event_id
            }
            fn occurred_at(&self) -> DateTime<Utc> {
                self.occurred_at
            }
            fn event_type(&self) -> &'static str {
                stringify!($event)
            }
        }
    };
}

// ============================================================================
// DECK EVENTS
// ============================================================================

/// Emitted when a new deck is created
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckCreated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub deck_id: Uuid,
    pub name: String,
    pub color_identity: String,
}

impl DeckCreated {
    pub fn new(deck_id: Uuid, name: String, color_identity: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            deck_id,
            name,
            color_identity,
        }
    }
}

impl_domain_event!(DeckCreated);

/// Emitted when deck metadata changes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckUpdated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub deck_id: Uuid,
    pub fields_updated: Vec<String>,
}

impl DeckUpdated {
    pub fn new(deck_id: Uuid, fields_updated: Vec<String>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            deck_id,
            fields_updated,
        }
    }
}

impl_domain_event!(DeckUpdated);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub deck_id: Uuid,
    pub name: String,
}

impl DeckDeleted {
    pub fn new(deck_id: Uuid, name: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            deck_id,
            name,
        }
    }
}

impl_domain_event!(DeckDeleted);

// ============================================================================
// DECK ENTRY EVENTS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardAddedToDeck {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub deck_id: Uuid,
    pub card_id: String,
    pub quantity: u32,
    pub is_commander: bool,
}

impl CardAddedToDeck {
    pub fn new(deck_id: Uuid, card_id: String, quantity: u32, is_commander: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            deck_id,
            card_id,
            quantity,
            is_commander,
        }
    }
}

impl_domain_event!(CardAddedToDeck);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardRemovedFromDeck {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub deck_id: Uuid,
    pub card_id: String,
}

impl CardRemovedFromDeck {
    pub fn new(deck_id: Uuid, card_id: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            deck_id,
            card_id,
        }
    }
}

impl_domain_event!(CardRemovedFromDeck);

/// Emitted when a deck's commander flag moves to a card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommanderAssigned {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub deck_id: Uuid,
    pub card_id: String,
}

impl CommanderAssigned {
    pub fn new(deck_id: Uuid, card_id: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            deck_id,
            card_id,
        }
    }
}

impl_domain_event!(CommanderAssigned);

// ============================================================================
// CARD CACHE EVENTS
// ============================================================================

/// Emitted when card data is fetched from the source and stored locally
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardCached {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub card_id: String,
    pub name: String,
}

impl CardCached {
    pub fn new(card_id: String, name: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            card_id,
            name,
        }
    }
}

impl_domain_event!(CardCached);
