// src/integrations/scryfall/mapping.rs
//
// Scryfall JSON payloads and their mapping to domain cards

use std::collections::HashMap;

use chrono::Utc;
use serde::Deserialize;

use crate::domain::{Card, ColorIdentity};
use crate::error::{AppError, AppResult};
use crate::integrations::card_source::CardPrinting;

/// Paginated list wrapper (`object: "list"`)
#[derive(Debug, Deserialize)]
pub(crate) struct ListResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
    pub total_cards: Option<u32>,
}

/// Catalog wrapper used by autocomplete
#[derive(Debug, Deserialize)]
pub(crate) struct CatalogResponse {
    #[serde(default)]
    pub data: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ImageUris {
    pub normal: Option<String>,
    pub small: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CardFace {
    pub image_uris: Option<ImageUris>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ScryfallCard {
    pub id: String,
    pub name: String,
    pub mana_cost: Option<String>,
    pub cmc: Option<f64>,
    #[serde(default)]
    pub type_line: String,
    pub oracle_text: Option<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub color_identity: Vec<String>,
    pub power: Option<String>,
    pub toughness: Option<String>,
    pub loyalty: Option<String>,
    pub image_uris: Option<ImageUris>,
    #[serde(default)]
    pub card_faces: Vec<CardFace>,
    #[serde(default)]
    pub legalities: HashMap<String, String>,
    pub set: Option<String>,
    pub set_name: Option<String>,
    pub rarity: Option<String>,
    pub collector_number: Option<String>,
}

impl ScryfallCard {
    fn commander_legality(&self) -> Option<&str> {
        self.legalities.get("commander").map(String::as_str)
    }

    /// Legendary (or explicitly allowed by its text), a creature or
    /// planeswalker, and legal or restricted in Commander
    pub fn is_legal_commander(&self) -> bool {
        let allowed_by_text = self
            .oracle_text
            .as_deref()
            .map(|t| t.to_lowercase().contains("can be your commander"))
            .unwrap_or(false);
        if !self.type_line.contains("Legendary") && !allowed_by_text {
            return false;
        }

        let eligible_type =
            self.type_line.contains("Creature") || self.type_line.contains("Planeswalker");

        eligible_type && matches!(self.commander_legality(), Some("legal") | Some("restricted"))
    }

    pub fn is_banned(&self) -> bool {
        self.commander_legality() == Some("banned")
    }

    /// Normal and small image URLs. Double-faced cards carry them on the
    /// first face.
    pub fn images(&self) -> (Option<String>, Option<String>) {
        let uris = self
            .image_uris
            .as_ref()
            .or_else(|| self.card_faces.first().and_then(|f| f.image_uris.as_ref()));

        match uris {
            Some(u) => (u.normal.clone(), u.small.clone()),
            None => (None, None),
        }
    }

    pub fn into_card(self) -> AppResult<Card> {
        let color_identity = ColorIdentity::from_symbols(&self.color_identity).map_err(|e| {
            AppError::ExternalService(format!("Card '{}' has {}", self.name, e))
        })?;
        let colors = ColorIdentity::from_symbols(&self.colors)
            .map_err(|e| AppError::ExternalService(format!("Card '{}' has {}", self.name, e)))?
            .colors()
            .collect();

        let is_legal_commander = self.is_legal_commander();
        let is_banned = self.is_banned();
        let (image_url, image_url_small) = self.images();

        Ok(Card {
            id: self.id,
            name: self.name,
            mana_cost: self.mana_cost,
            cmc: self.cmc,
            type_line: self.type_line,
            oracle_text: self.oracle_text,
            colors,
            color_identity,
            power: self.power,
            toughness: self.toughness,
            loyalty: self.loyalty,
            image_url,
            image_url_small,
            is_legal_commander,
            is_banned,
            set_code: self.set,
            set_name: self.set_name,
            rarity: self.rarity,
            collector_number: self.collector_number,
            cached_at: Utc::now(),
        })
    }

    pub fn into_printing(self) -> CardPrinting {
        let (image_url, image_url_small) = self.images();
        CardPrinting {
            id: self.id,
            name: self.name,
            set_code: self.set,
            set_name: self.set_name,
            collector_number: self.collector_number,
            rarity: self.rarity,
            image_url,
            image_url_small,
        }
    }
}
