// src/services/deck_service.rs
//
// Deck lifecycle and deck-entry management.
//
// Cards must already be in the local cache before they can be added; fetching
// from the card source is `CardService`'s job.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{
    validate_deck, validate_deck_card, ColorIdentity, Deck, DeckCard, PrintingSelection,
};
use crate::error::{AppError, AppResult};
use crate::events::{
    CardAddedToDeck, CardRemovedFromDeck, CommanderAssigned, DeckCreated, DeckDeleted,
    DeckUpdated, EventBus,
};
use crate::repositories::{CardRepository, DeckCardRepository, DeckRepository};

#[derive(Debug, Clone)]
pub struct CreateDeckRequest {
    pub name: String,
    /// Color code in any letter order ("RU", "wubrg", "C")
    pub color_identity: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateDeckRequest {
    pub deck_id: Uuid,
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AddCardRequest {
    pub deck_id: Uuid,
    pub card_id: String,
    pub quantity: u32,
    pub is_commander: bool,
    pub category: Option<String>,
    /// Fields set here override the printing taken from the cached card
    pub printing: Option<PrintingSelection>,
}

#[derive(Debug, Clone)]
pub struct UpdateDeckCardRequest {
    pub deck_id: Uuid,
    pub card_id: String,
    pub quantity: Option<u32>,
    pub category: Option<Option<String>>,
    /// Fields set here replace the stored selection's
    pub printing: Option<PrintingSelection>,
}

pub struct DeckService {
    deck_repo: Arc<dyn DeckRepository>,
    deck_card_repo: Arc<dyn DeckCardRepository>,
    card_repo: Arc<dyn CardRepository>,
    event_bus: Arc<EventBus>,
}

impl DeckService {
    pub fn new(
        deck_repo: Arc<dyn DeckRepository>,
        deck_card_repo: Arc<dyn DeckCardRepository>,
        card_repo: Arc<dyn CardRepository>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            deck_repo,
            deck_card_repo,
            card_repo,
            event_bus,
        }
    }

    /// Create a deck for an unused color identity
    pub fn create_deck(&self, request: CreateDeckRequest) -> AppResult<Deck> {
        let name = request.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::Validation("Deck name is required".to_string()));
        }

        let color_identity = ColorIdentity::parse_code(&request.color_identity)?;

        if self
            .deck_repo
            .find_by_color_identity(color_identity)?
            .is_some()
        {
            return Err(AppError::Conflict(format!(
                "Deck for {} already exists",
                color_identity
            )));
        }

        let deck = Deck::new(name, color_identity, request.description.unwrap_or_default());
        validate_deck(&deck)?;
        self.deck_repo.save(&deck)?;

        log::info!("Created deck {} ({})", deck.name, color_identity);
        self.event_bus.emit(DeckCreated::new(
            deck.id,
            deck.name.clone(),
            color_identity.code(),
        ));

        Ok(deck)
    }

    /// Rename or re-describe a deck. The color identity is fixed.
    pub fn update_deck(&self, request: UpdateDeckRequest) -> AppResult<Deck> {
        let mut deck = self.get_deck(request.deck_id)?;

        let mut fields_updated = Vec::new();
        if request.name.is_some() {
            fields_updated.push("name".to_string());
        }
        if request.description.is_some() {
            fields_updated.push("description".to_string());
        }

        let name = request.name.map(|n| n.trim().to_string());
        deck.update(name, request.description);

        validate_deck(&deck)?;
        self.deck_repo.save(&deck)?;

        self.event_bus.emit(DeckUpdated::new(deck.id, fields_updated));
        Ok(deck)
    }

    pub fn delete_deck(&self, deck_id: Uuid) -> AppResult<()> {
        let deck = self.get_deck(deck_id)?;
        self.deck_repo.delete(deck_id)?;

        log::info!("Deleted deck {}", deck);
        self.event_bus.emit(DeckDeleted::new(deck.id, deck.name));
        Ok(())
    }

    pub fn get_deck(&self, deck_id: Uuid) -> AppResult<Deck> {
        self.deck_repo.get_by_id(deck_id)?.ok_or(AppError::NotFound)
    }

    pub fn list_decks(&self) -> AppResult<Vec<Deck>> {
        self.deck_repo.list_all()
    }

    /// Add a cached card to a deck.
    ///
    /// A legal commander added to a deck without one becomes its commander.
    pub fn add_card(&self, request: AddCardRequest) -> AppResult<DeckCard> {
        if request.quantity == 0 {
            return Err(AppError::Validation(
                "Quantity must be at least 1".to_string(),
            ));
        }

        let deck = self.get_deck(request.deck_id)?;
        let card = self
            .card_repo
            .get_by_id(&request.card_id)?
            .ok_or(AppError::NotFound)?;

        if deck.entry_for(&card.id).is_some() {
            return Err(AppError::Conflict(format!(
                "{} is already in deck {}",
                card.name, deck.name
            )));
        }

        let has_commander = deck.cards.iter().any(|dc| dc.is_commander);
        if request.is_commander && has_commander {
            return Err(AppError::Conflict(format!(
                "Deck {} already has a commander",
                deck.name
            )));
        }
        let is_commander = request.is_commander || (card.is_legal_commander && !has_commander);

        let mut entry = DeckCard::new(deck.id, card, request.quantity, is_commander);
        entry.category = request.category;
        if let Some(printing) = request.printing {
            entry.printing.apply(printing);
        }

        validate_deck_card(&entry)?;
        self.deck_card_repo.add(&entry)?;

        log::debug!(
            "Added {} x{} to deck {}{}",
            entry.card_id,
            entry.quantity,
            deck.name,
            if is_commander { " as commander" } else { "" }
        );
        self.event_bus.emit(CardAddedToDeck::new(
            deck.id,
            entry.card_id.clone(),
            entry.quantity,
            is_commander,
        ));
        if is_commander {
            self.event_bus
                .emit(CommanderAssigned::new(deck.id, entry.card_id.clone()));
        }

        Ok(entry)
    }

    /// Change quantity, category or printing of an entry
    pub fn update_deck_card(&self, request: UpdateDeckCardRequest) -> AppResult<DeckCard> {
        let mut entry = self
            .deck_card_repo
            .get(request.deck_id, &request.card_id)?
            .ok_or(AppError::NotFound)?;

        if let Some(quantity) = request.quantity {
            if quantity == 0 {
                return Err(AppError::Validation(
                    "Quantity must be at least 1".to_string(),
                ));
            }
            entry.quantity = quantity;
        }
        if let Some(category) = request.category {
            entry.category = category;
        }
        if let Some(printing) = request.printing {
            entry.printing.apply(printing);
        }

        validate_deck_card(&entry)?;
        self.deck_card_repo.update(&entry)?;

        Ok(entry)
    }

    pub fn remove_card(&self, deck_id: Uuid, card_id: &str) -> AppResult<()> {
        self.deck_card_repo.remove(deck_id, card_id)?;
        self.event_bus
            .emit(CardRemovedFromDeck::new(deck_id, card_id.to_string()));
        Ok(())
    }

    /// Make an existing entry the deck's commander, demoting any other
    pub fn set_commander(&self, deck_id: Uuid, card_id: &str) -> AppResult<Deck> {
        let deck = self.get_deck(deck_id)?;
        let entry = deck.entry_for(card_id).ok_or(AppError::NotFound)?;

        if let Some(card) = &entry.card {
            if !card.is_legal_commander {
                log::warn!(
                    "{} set as commander of {} but is not a legal commander",
                    card.name,
                    deck.name
                );
            }
        }

        self.deck_card_repo.set_commander(deck_id, card_id)?;
        self.event_bus
            .emit(CommanderAssigned::new(deck_id, card_id.to_string()));

        self.get_deck(deck_id)
    }
}
