use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::card::Card;
use crate::domain::color::ColorIdentity;

/// A Commander deck with its ordered card entries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    /// Internal immutable identifier
    pub id: Uuid,

    pub name: String,

    /// Declared color identity; `None` only for decks built outside the
    /// service layer
    pub color_identity: Option<ColorIdentity>,

    pub description: String,

    /// Entries in insertion order
    pub cards: Vec<DeckCard>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Specific printing chosen for an entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrintingSelection {
    pub printing_id: Option<String>,
    pub image_url: Option<String>,
    pub set_code: Option<String>,
    pub collector_number: Option<String>,
}

/// Join of a deck and a card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckCard {
    pub id: Uuid,
    pub deck_id: Uuid,
    pub card_id: String,
    pub quantity: u32,
    pub is_commander: bool,
    pub category: Option<String>,
    pub printing: PrintingSelection,
    pub added_at: DateTime<Utc>,

    /// Hydrated card; `None` when the card could not be resolved
    pub card: Option<Card>,
}

impl Deck {
    pub fn new(name: String, color_identity: ColorIdentity, description: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            color_identity: Some(color_identity),
            description,
            cards: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Update metadata, bumping the modification timestamp
    pub fn update(&mut self, name: Option<String>, description: Option<String>) {
        if let Some(n) = name {
            self.name = n;
        }
        if let Some(d) = description {
            self.description = d;
        }
        self.updated_at = Utc::now();
    }

    /// Canonical color code, if declared
    pub fn color_code(&self) -> Option<String> {
        self.color_identity.map(|ci| ci.code())
    }

    /// Sum of quantities, widened so huge quantities cannot overflow
    pub fn card_count(&self) -> u64 {
        self.cards.iter().map(|dc| u64::from(dc.quantity)).sum()
    }

    /// The commander entry, when exactly one entry is flagged
    pub fn commander(&self) -> Option<&DeckCard> {
        let mut commanders = self.cards.iter().filter(|dc| dc.is_commander);
        match (commanders.next(), commanders.next()) {
            (Some(dc), None) => Some(dc),
            _ => None,
        }
    }

    pub fn commander_id(&self) -> Option<&str> {
        self.commander().map(|dc| dc.card_id.as_str())
    }

    pub fn commander_name(&self) -> Option<&str> {
        self.commander()
            .and_then(|dc| dc.card.as_ref())
            .map(|c| c.name.as_str())
    }

    pub fn entry_for(&self, card_id: &str) -> Option<&DeckCard> {
        self.cards.iter().find(|dc| dc.card_id == card_id)
    }
}

impl PrintingSelection {
    /// Overwrite the fields that are set in `other`
    pub fn apply(&mut self, other: PrintingSelection) {
        if other.printing_id.is_some() {
            self.printing_id = other.printing_id;
        }
        if other.image_url.is_some() {
            self.image_url = other.image_url;
        }
        if other.set_code.is_some() {
            self.set_code = other.set_code;
        }
        if other.collector_number.is_some() {
            self.collector_number = other.collector_number;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.printing_id.is_none()
            && self.image_url.is_none()
            && self.set_code.is_none()
            && self.collector_number.is_none()
    }
}

impl DeckCard {
    pub fn new(deck_id: Uuid, card: Card, quantity: u32, is_commander: bool) -> Self {
        let printing = PrintingSelection {
            printing_id: Some(card.id.clone()),
            image_url: card.image_url.clone(),
            set_code: card.set_code.clone(),
            collector_number: card.collector_number.clone(),
        };
        Self {
            id: Uuid::new_v4(),
            deck_id,
            card_id: card.id.clone(),
            quantity,
            is_commander,
            category: None,
            printing,
            added_at: Utc::now(),
            card: Some(card),
        }
    }

    /// Name of the hydrated card
    pub fn card_name(&self) -> Option<&str> {
        self.card.as_ref().map(|c| c.name.as_str())
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.color_identity {
            Some(ci) => write!(f, "{} ({})", self.name, ci),
            None => write!(f, "{}", self.name),
        }
    }
}
