// src/domain/rules.rs
//
// Static rule tables for the Commander format and the 32-deck challenge.
//
// Tables are loaded once at startup and never change afterwards.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::color::ColorIdentity;
use crate::domain::{DomainError, DomainResult};

/// Number of cards in a legal Commander deck
pub const CARDS_PER_DECK: u64 = 100;

/// Number of color combinations (and decks) in the challenge
pub const CHALLENGE_DECK_COUNT: usize = 32;

/// Commander ban list (as of October 2025)
const COMMANDER_BANNED: &[&str] = &[
    "Ancestral Recall",
    "Balance",
    "Biorhythm",
    "Black Lotus",
    "Braids, Cabal Minion",
    "Chaos Orb",
    "Coalition Victory",
    "Channel",
    "Dockside Extortionist",
    "Emrakul, the Aeons Torn",
    "Erayo, Soratami Ascendant",
    "Falling Star",
    "Fastbond",
    "Flash",
    "Gifts Ungiven",
    "Golos, Tireless Pilgrim",
    "Griselbrand",
    "Hullbreacher",
    "Iona, Shield of Emeria",
    "Jeweled Lotus",
    "Karakas",
    "Leovold, Emissary of Trest",
    "Library of Alexandria",
    "Limited Resources",
    "Lutri, the Spellchaser",
    "Mana Crypt",
    "Mox Emerald",
    "Mox Jet",
    "Mox Pearl",
    "Mox Ruby",
    "Mox Sapphire",
    "Nadu, Winged Wisdom",
    "Paradox Engine",
    "Panoptic Mirror",
    "Primeval Titan",
    "Prophet of Kruphix",
    "Recurring Nightmare",
    "Rofellos, Llanowar Emissary",
    "Shahrazad",
    "Sundering Titan",
    "Sway of the Stars",
    "Sylvan Primordial",
    "Time Vault",
    "Time Walk",
    "Tinker",
    "Tolarian Academy",
    "Trade Secrets",
    "Upheaval",
    "Worldfire",
    "Yawgmoths Bargain",
];

const BASIC_LANDS: &[&str] = &[
    "Plains",
    "Island",
    "Swamp",
    "Mountain",
    "Forest",
    "Wastes",
    "Snow-Covered Plains",
    "Snow-Covered Island",
    "Snow-Covered Swamp",
    "Snow-Covered Mountain",
    "Snow-Covered Forest",
];

const COLOR_COMBINATIONS: &[(&str, &str)] = &[
    ("C", "Colorless"),
    ("W", "White (Mono-White)"),
    ("U", "Blue (Mono-Blue)"),
    ("B", "Black (Mono-Black)"),
    ("R", "Red (Mono-Red)"),
    ("G", "Green (Mono-Green)"),
    ("WU", "Azorius (White-Blue)"),
    ("WB", "Orzhov (White-Black)"),
    ("WR", "Boros (White-Red)"),
    ("WG", "Selesnya (White-Green)"),
    ("UB", "Dimir (Blue-Black)"),
    ("UR", "Izzet (Blue-Red)"),
    ("UG", "Simic (Blue-Green)"),
    ("BR", "Rakdos (Black-Red)"),
    ("BG", "Golgari (Black-Green)"),
    ("RG", "Gruul (Red-Green)"),
    ("WUB", "Esper (White-Blue-Black)"),
    ("WUR", "Jeskai (White-Blue-Red)"),
    ("WUG", "Bant (White-Blue-Green)"),
    ("WBR", "Mardu (White-Black-Red)"),
    ("WBG", "Abzan (White-Black-Green)"),
    ("WRG", "Naya (White-Red-Green)"),
    ("UBR", "Grixis (Blue-Black-Red)"),
    ("UBG", "Sultai (Blue-Black-Green)"),
    ("URG", "Temur (Blue-Red-Green)"),
    ("BRG", "Jund (Black-Red-Green)"),
    ("WUBR", "Yore-Tiller (No Green)"),
    ("WUBG", "Witch-Maw (No Red)"),
    ("WURG", "Ink-Treader (No Black)"),
    ("WBRG", "Dune-Brood (No Blue)"),
    ("UBRG", "Glint-Eye (No White)"),
    ("WUBRG", "Five-Color"),
];

/// A required color combination of the challenge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorCombination {
    pub code: String,
    pub name: String,
}

/// The three configured tables consumed by the validators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleTables {
    pub banned_cards: HashSet<String>,
    pub basic_lands: HashSet<String>,

    /// Table order is preserved for progress reporting
    pub color_combinations: Vec<ColorCombination>,
}

impl RuleTables {
    /// Built-in Commander tables
    pub fn commander_defaults() -> Self {
        Self {
            banned_cards: COMMANDER_BANNED.iter().map(|s| s.to_string()).collect(),
            basic_lands: BASIC_LANDS.iter().map(|s| s.to_string()).collect(),
            color_combinations: COLOR_COMBINATIONS
                .iter()
                .map(|(code, name)| ColorCombination {
                    code: code.to_string(),
                    name: name.to_string(),
                })
                .collect(),
        }
    }

    /// Load tables from a JSON file and validate them
    pub fn from_json_file(path: &Path) -> crate::error::AppResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let tables: RuleTables = serde_json::from_str(&raw)?;
        validate_rule_tables(&tables)?;
        Ok(tables)
    }

    pub fn is_banned(&self, name: &str) -> bool {
        self.banned_cards.contains(name)
    }

    pub fn is_basic_land(&self, name: &str) -> bool {
        self.basic_lands.contains(name)
    }

    pub fn combination_name(&self, code: &str) -> Option<&str> {
        self.color_combinations
            .iter()
            .find(|c| c.code == code)
            .map(|c| c.name.as_str())
    }
}

impl Default for RuleTables {
    fn default() -> Self {
        Self::commander_defaults()
    }
}

/// The combination table must hold exactly 32 unique canonical codes and
/// no table may contain blank names.
pub fn validate_rule_tables(tables: &RuleTables) -> DomainResult<()> {
    if tables.color_combinations.len() != CHALLENGE_DECK_COUNT {
        return Err(DomainError::InvariantViolation(format!(
            "Expected {} color combinations, found {}",
            CHALLENGE_DECK_COUNT,
            tables.color_combinations.len()
        )));
    }

    let mut codes = HashSet::new();
    for combination in &tables.color_combinations {
        let canonical = ColorIdentity::parse_code(&combination.code)?.code();
        if canonical != combination.code {
            return Err(DomainError::InvariantViolation(format!(
                "Color combination code {} is not canonical (expected {})",
                combination.code, canonical
            )));
        }
        if !codes.insert(canonical) {
            return Err(DomainError::InvariantViolation(format!(
                "Color combination {} is listed twice",
                combination.code
            )));
        }
    }

    let blank = tables
        .banned_cards
        .iter()
        .chain(tables.basic_lands.iter())
        .chain(tables.color_combinations.iter().map(|c| &c.name))
        .any(|name| name.trim().is_empty());
    if blank {
        return Err(DomainError::InvariantViolation(
            "Rule tables cannot contain empty names".to_string(),
        ));
    }

    Ok(())
}
