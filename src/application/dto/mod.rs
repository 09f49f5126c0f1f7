// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// - DTOs are caller-friendly, serializable shapes
// - Ids and timestamps travel as strings
// - Conversion FROM domain entities only (never TO)

use serde::{Deserialize, Serialize};

use crate::domain::{Card, Deck, DeckCard, PrintingSelection};
use crate::integrations::CardSearchPage;

// ============================================================================
// CARD DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardDto {
    pub id: String,
    pub name: String,
    pub mana_cost: Option<String>,
    pub cmc: Option<f64>,
    pub type_line: String,
    pub oracle_text: Option<String>,
    /// Symbols in WUBRG order, e.g. ["U", "R"]
    pub colors: Vec<String>,
    pub color_identity: Vec<String>,
    pub power: Option<String>,
    pub toughness: Option<String>,
    pub loyalty: Option<String>,
    pub image_url: Option<String>,
    pub image_url_small: Option<String>,
    pub is_legal_commander: bool,
    pub is_banned: bool,
    pub set_code: Option<String>,
    pub set_name: Option<String>,
    pub rarity: Option<String>,
    pub collector_number: Option<String>,
    pub cached_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardSearchDto {
    pub cards: Vec<CardDto>,
    pub has_more: bool,
    pub total_cards: u32,
}

// ============================================================================
// DECK DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckCardDto {
    pub id: String,
    pub card_id: String,
    pub quantity: u32,
    pub is_commander: bool,
    pub category: Option<String>,
    pub selected_printing_id: Option<String>,
    pub selected_image_url: Option<String>,
    pub selected_set_code: Option<String>,
    pub selected_collector_number: Option<String>,
    pub added_at: String,
    /// `None` when the card is missing from the local cache
    pub card: Option<CardDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckDto {
    pub id: String,
    pub name: String,
    pub color_identity: Option<String>,
    pub description: String,
    pub commander_id: Option<String>,
    pub commander_name: Option<String>,
    pub card_count: u64,
    pub cards: Vec<DeckCardDto>,
    pub created_at: String,
    pub updated_at: String,
}

/// Deck without its entries, for listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckSummaryDto {
    pub id: String,
    pub name: String,
    pub color_identity: Option<String>,
    pub commander_name: Option<String>,
    pub card_count: u64,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDeckDto {
    pub name: String,
    pub color_identity: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDeckDto {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrintingSelectionDto {
    pub selected_printing_id: Option<String>,
    pub selected_image_url: Option<String>,
    pub selected_set_code: Option<String>,
    pub selected_collector_number: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddCardDto {
    pub card_id: String,
    /// Defaults to 1
    pub quantity: Option<u32>,
    #[serde(default)]
    pub is_commander: bool,
    pub category: Option<String>,
    #[serde(flatten)]
    pub printing: PrintingSelectionDto,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDeckCardDto {
    pub quantity: Option<u32>,
    /// An empty string clears the category
    pub category: Option<String>,
    #[serde(flatten)]
    pub printing: PrintingSelectionDto,
}

// ============================================================================
// CONVERSION HELPERS
// ============================================================================

fn symbols(colors: impl Iterator<Item = crate::domain::Color>) -> Vec<String> {
    colors.map(|c| c.symbol().to_string()).collect()
}

impl From<Card> for CardDto {
    fn from(card: Card) -> Self {
        Self {
            colors: symbols(card.colors.iter().copied()),
            color_identity: symbols(card.color_identity.colors()),
            id: card.id,
            name: card.name,
            mana_cost: card.mana_cost,
            cmc: card.cmc,
            type_line: card.type_line,
            oracle_text: card.oracle_text,
            power: card.power,
            toughness: card.toughness,
            loyalty: card.loyalty,
            image_url: card.image_url,
            image_url_small: card.image_url_small,
            is_legal_commander: card.is_legal_commander,
            is_banned: card.is_banned,
            set_code: card.set_code,
            set_name: card.set_name,
            rarity: card.rarity,
            collector_number: card.collector_number,
            cached_at: card.cached_at.to_rfc3339(),
        }
    }
}

impl From<CardSearchPage> for CardSearchDto {
    fn from(page: CardSearchPage) -> Self {
        Self {
            cards: page.cards.into_iter().map(CardDto::from).collect(),
            has_more: page.has_more,
            total_cards: page.total_cards,
        }
    }
}

impl From<DeckCard> for DeckCardDto {
    fn from(entry: DeckCard) -> Self {
        Self {
            id: entry.id.to_string(),
            card_id: entry.card_id,
            quantity: entry.quantity,
            is_commander: entry.is_commander,
            category: entry.category,
            selected_printing_id: entry.printing.printing_id,
            selected_image_url: entry.printing.image_url,
            selected_set_code: entry.printing.set_code,
            selected_collector_number: entry.printing.collector_number,
            added_at: entry.added_at.to_rfc3339(),
            card: entry.card.map(CardDto::from),
        }
    }
}

impl From<Deck> for DeckDto {
    fn from(deck: Deck) -> Self {
        Self {
            id: deck.id.to_string(),
            color_identity: deck.color_code(),
            commander_id: deck.commander_id().map(str::to_string),
            commander_name: deck.commander_name().map(str::to_string),
            card_count: deck.card_count(),
            name: deck.name,
            description: deck.description,
            cards: deck.cards.into_iter().map(DeckCardDto::from).collect(),
            created_at: deck.created_at.to_rfc3339(),
            updated_at: deck.updated_at.to_rfc3339(),
        }
    }
}

impl From<&Deck> for DeckSummaryDto {
    fn from(deck: &Deck) -> Self {
        Self {
            id: deck.id.to_string(),
            name: deck.name.clone(),
            color_identity: deck.color_code(),
            commander_name: deck.commander_name().map(str::to_string),
            card_count: deck.card_count(),
            updated_at: deck.updated_at.to_rfc3339(),
        }
    }
}

impl PrintingSelectionDto {
    /// `None` when no field is set
    pub fn into_selection(self) -> Option<PrintingSelection> {
        let selection = PrintingSelection {
            printing_id: self.selected_printing_id,
            image_url: self.selected_image_url,
            set_code: self.selected_set_code,
            collector_number: self.selected_collector_number,
        };
        (!selection.is_empty()).then_some(selection)
    }
}
