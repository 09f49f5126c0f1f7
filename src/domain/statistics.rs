// src/domain/statistics.rs
//
// Derived deck statistics. Never a source of truth; always recomputed from
// the deck's entries.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::color::Color;
use crate::domain::deck::Deck;

/// Per-deck breakdown by card type, mana value and color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckStatistics {
    pub total_cards: u64,
    pub creatures: u64,
    pub instants: u64,
    pub sorceries: u64,
    pub artifacts: u64,
    pub enchantments: u64,
    pub planeswalkers: u64,
    pub lands: u64,

    /// Average mana value of non-land cards, rounded to 2 decimals
    pub avg_cmc: f64,

    /// Quantity per color symbol; colorless cards count under "C"
    pub color_distribution: BTreeMap<String, u64>,
}

impl DeckStatistics {
    /// Entries whose card could not be resolved are skipped
    pub fn from_deck(deck: &Deck) -> Self {
        let mut stats = Self {
            total_cards: 0,
            creatures: 0,
            instants: 0,
            sorceries: 0,
            artifacts: 0,
            enchantments: 0,
            planeswalkers: 0,
            lands: 0,
            avg_cmc: 0.0,
            color_distribution: Color::ALL
                .iter()
                .map(|c| c.symbol().to_string())
                .chain(std::iter::once("C".to_string()))
                .map(|k| (k, 0))
                .collect(),
        };

        let mut total_cmc = 0.0;
        let mut non_land_count = 0u64;

        for entry in &deck.cards {
            let Some(card) = entry.card.as_ref() else {
                continue;
            };
            let qty = u64::from(entry.quantity);
            let type_line = card.type_line.to_lowercase();

            stats.total_cards += qty;
            let counters: [(&str, &mut u64); 7] = [
                ("creature", &mut stats.creatures),
                ("instant", &mut stats.instants),
                ("sorcery", &mut stats.sorceries),
                ("artifact", &mut stats.artifacts),
                ("enchantment", &mut stats.enchantments),
                ("planeswalker", &mut stats.planeswalkers),
                ("land", &mut stats.lands),
            ];
            for (keyword, counter) in counters {
                if type_line.contains(keyword) {
                    *counter += qty;
                }
            }

            if !type_line.contains("land") {
                if let Some(cmc) = card.cmc {
                    total_cmc += cmc * qty as f64;
                    non_land_count += qty;
                }
            }

            if card.colors.is_empty() {
                *stats.color_distribution.entry("C".to_string()).or_insert(0) += qty;
            } else {
                for color in &card.colors {
                    *stats
                        .color_distribution
                        .entry(color.symbol().to_string())
                        .or_insert(0) += qty;
                }
            }
        }

        if non_land_count > 0 {
            stats.avg_cmc = (total_cmc / non_land_count as f64 * 100.0).round() / 100.0;
        }

        stats
    }
}
