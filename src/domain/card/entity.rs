use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::color::{Color, ColorIdentity};

/// A Magic card as cached from the external card database.
///
/// The rules-relevant flags (`is_legal_commander`, `is_banned`) are computed
/// by the card-data source, never by the validators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// External (Scryfall) identifier
    pub id: String,

    pub name: String,
    pub mana_cost: Option<String>,
    pub cmc: Option<f64>,
    pub type_line: String,
    pub oracle_text: Option<String>,

    /// Colors of the card itself (used for statistics)
    pub colors: Vec<Color>,

    /// Color identity (used for deck legality)
    pub color_identity: ColorIdentity,

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

    /// Last time the card data was fetched from the source
    pub cached_at: DateTime<Utc>,
}

impl Card {
    /// Minimal card with the given identity; remaining attributes empty.
    pub fn new(id: String, name: String, type_line: String, color_identity: ColorIdentity) -> Self {
        Self {
            id,
            name,
            mana_cost: None,
            cmc: None,
            type_line,
            oracle_text: None,
            colors: Vec::new(),
            color_identity,
            power: None,
            toughness: None,
            loyalty: None,
            image_url: None,
            image_url_small: None,
            is_legal_commander: false,
            is_banned: false,
            set_code: None,
            set_name: None,
            rarity: None,
            collector_number: None,
            cached_at: Utc::now(),
        }
    }

    /// Merge freshly fetched data into the cached card.
    ///
    /// Only the fields listed here are refreshed; the identifier is kept and
    /// `cached_at` is bumped.
    pub fn refresh_from(&mut self, fresh: &Card) {
        self.name = fresh.name.clone();
        self.mana_cost = fresh.mana_cost.clone();
        self.cmc = fresh.cmc;
        self.type_line = fresh.type_line.clone();
        self.oracle_text = fresh.oracle_text.clone();
        self.colors = fresh.colors.clone();
        self.color_identity = fresh.color_identity;
        self.power = fresh.power.clone();
        self.toughness = fresh.toughness.clone();
        self.loyalty = fresh.loyalty.clone();
        self.image_url = fresh.image_url.clone();
        self.image_url_small = fresh.image_url_small.clone();
        self.is_legal_commander = fresh.is_legal_commander;
        self.is_banned = fresh.is_banned;
        self.set_code = fresh.set_code.clone();
        self.set_name = fresh.set_name.clone();
        self.rarity = fresh.rarity.clone();
        self.collector_number = fresh.collector_number.clone();
        self.cached_at = Utc::now();
    }

    pub fn has_type(&self, card_type: &str) -> bool {
        self.type_line
            .to_lowercase()
            .contains(&card_type.to_lowercase())
    }

    pub fn is_land(&self) -> bool {
        self.has_type("land")
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
