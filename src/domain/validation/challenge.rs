// src/domain/validation/challenge.rs
//
// 32-deck challenge tracking.
//
// The challenge requires one deck per color combination and forbids reusing a
// non-basic card in more than one deck. Within-deck repetition is the
// singleton check's concern and is ignored here.

use std::collections::{BTreeMap, HashSet};

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;

use crate::domain::deck::Deck;
use crate::domain::rules::RuleTables;

/// A required combination no deck covers yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingColor {
    pub code: String,
    pub name: String,
}

/// A deck containing a duplicated card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckUsage {
    pub deck_id: Uuid,
    pub deck_name: String,
    pub color_identity: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeResult {
    pub complete: bool,
    pub total_decks: usize,
    /// "{decks built}/{combinations}"
    pub progress: String,
    pub missing_colors: Vec<MissingColor>,
    pub duplicate_cards: BTreeMap<String, Vec<DeckUsage>>,
    pub duplicate_count: usize,
    pub valid: bool,
}

/// Progress of one color combination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorProgress {
    #[serde(skip)]
    pub code: String,
    pub name: String,
    pub completed: bool,
    pub deck_id: Option<Uuid>,
    pub deck_name: Option<String>,
}

/// Code -> progress, in rule-table order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColorProgressMap {
    entries: Vec<ColorProgress>,
}

impl ColorProgressMap {
    pub fn get(&self, code: &str) -> Option<&ColorProgress> {
        self.entries.iter().find(|p| p.code == code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColorProgress> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.entries.iter().filter(|p| p.completed).count()
    }
}

impl Serialize for ColorProgressMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.code, entry)?;
        }
        map.end()
    }
}

/// Validates the deck collection against the challenge rules
pub struct ChallengeTracker<'a> {
    rules: &'a RuleTables,
}

impl<'a> ChallengeTracker<'a> {
    pub fn new(rules: &'a RuleTables) -> Self {
        Self { rules }
    }

    pub fn check_challenge(&self, decks: &[Deck]) -> ChallengeResult {
        let present: HashSet<String> = decks.iter().filter_map(Deck::color_code).collect();

        let mut missing_colors: Vec<MissingColor> = self
            .rules
            .color_combinations
            .iter()
            .filter(|combo| !present.contains(&combo.code))
            .map(|combo| MissingColor {
                code: combo.code.clone(),
                name: combo.name.clone(),
            })
            .collect();
        missing_colors.sort_by(|a, b| a.code.cmp(&b.code));

        let duplicate_cards = self.find_duplicates(decks);
        let duplicate_count = duplicate_cards.len();
        let complete = missing_colors.is_empty();

        ChallengeResult {
            complete,
            total_decks: decks.len(),
            progress: format!("{}/{}", decks.len(), self.rules.color_combinations.len()),
            missing_colors,
            duplicate_cards,
            duplicate_count,
            valid: complete && duplicate_count == 0,
        }
    }

    /// Every configured code with the first deck (collection order) using it
    pub fn progress_by_color(&self, decks: &[Deck]) -> ColorProgressMap {
        let entries = self
            .rules
            .color_combinations
            .iter()
            .map(|combo| {
                let deck = decks
                    .iter()
                    .find(|d| d.color_code().as_deref() == Some(combo.code.as_str()));
                ColorProgress {
                    code: combo.code.clone(),
                    name: combo.name.clone(),
                    completed: deck.is_some(),
                    deck_id: deck.map(|d| d.id),
                    deck_name: deck.map(|d| d.name.clone()),
                }
            })
            .collect();

        ColorProgressMap { entries }
    }

    /// Card name -> decks using it, for names found in two or more decks
    fn find_duplicates(&self, decks: &[Deck]) -> BTreeMap<String, Vec<DeckUsage>> {
        let mut usage: BTreeMap<String, Vec<DeckUsage>> = BTreeMap::new();

        for deck in decks {
            let mut seen_in_deck: HashSet<&str> = HashSet::new();
            for name in deck.cards.iter().filter_map(|dc| dc.card_name()) {
                if self.rules.is_basic_land(name) || !seen_in_deck.insert(name) {
                    continue;
                }
                usage.entry(name.to_string()).or_default().push(DeckUsage {
                    deck_id: deck.id,
                    deck_name: deck.name.clone(),
                    color_identity: deck.color_code(),
                });
            }
        }

        usage.retain(|_, decks| decks.len() > 1);
        usage
    }
}
