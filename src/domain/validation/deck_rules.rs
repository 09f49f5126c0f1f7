// src/domain/validation/deck_rules.rs
//
// Commander deck legality checks.
//
// Checks run in a fixed order so output is reproducible:
// size, commander, singleton, color identity, ban list.

use std::collections::HashMap;

use crate::domain::deck::Deck;
use crate::domain::rules::{RuleTables, CARDS_PER_DECK};

use super::result::ValidationResult;

/// Validates a single deck against the Commander rules
pub struct DeckRuleValidator<'a> {
    rules: &'a RuleTables,
}

impl<'a> DeckRuleValidator<'a> {
    pub fn new(rules: &'a RuleTables) -> Self {
        Self { rules }
    }

    pub fn validate(&self, deck: &Deck) -> ValidationResult {
        let mut result = ValidationResult::new();

        self.check_size(deck, &mut result);
        self.check_commander(deck, &mut result);
        self.check_singleton(deck, &mut result);
        self.check_color_identity(deck, &mut result);
        self.check_banned(deck, &mut result);

        result
    }

    /// Exactly 100 cards; a short deck also gets a shortfall warning
    fn check_size(&self, deck: &Deck, result: &mut ValidationResult) {
        let total = deck.card_count();
        if total != CARDS_PER_DECK {
            result.error(format!(
                "Deck must be exactly {} cards (current: {})",
                CARDS_PER_DECK, total
            ));
        }
        if total < CARDS_PER_DECK {
            result.warning(format!("Deck needs {} more cards", CARDS_PER_DECK - total));
        }
    }

    fn check_commander(&self, deck: &Deck, result: &mut ValidationResult) {
        let commanders: Vec<_> = deck.cards.iter().filter(|dc| dc.is_commander).collect();

        match commanders.as_slice() {
            [] => result.error("Deck must have a commander"),
            [commander] => match &commander.card {
                Some(card) if !card.is_legal_commander => result.error(format!(
                    "{} is not a legal commander. Must be a legendary creature or planeswalker.",
                    card.name
                )),
                Some(_) => {}
                None => result.error(format!(
                    "Commander card {} could not be resolved. Must be a legendary creature or planeswalker.",
                    commander.card_id
                )),
            },
            _ => result.error("Deck can only have one commander (partners not yet supported)"),
        }
    }

    /// Basic lands are exempt; entries without a card are skipped
    fn check_singleton(&self, deck: &Deck, result: &mut ValidationResult) {
        let mut order: Vec<&str> = Vec::new();
        let mut counts: HashMap<&str, u64> = HashMap::new();

        for entry in &deck.cards {
            let Some(name) = entry.card_name() else {
                continue;
            };
            if self.rules.is_basic_land(name) {
                continue;
            }
            let count = counts.entry(name).or_insert_with(|| {
                order.push(name);
                0
            });
            *count += u64::from(entry.quantity);
        }

        for name in order {
            let count = counts[name];
            if count > 1 {
                result.error(format!(
                    "{} appears {} times (singleton format allows only 1 copy)",
                    name, count
                ));
            }
        }
    }

    fn check_color_identity(&self, deck: &Deck, result: &mut ValidationResult) {
        let Some(deck_colors) = deck.color_identity else {
            return;
        };

        for card in deck.cards.iter().filter_map(|dc| dc.card.as_ref()) {
            if card.color_identity.is_colorless() {
                continue;
            }
            if !card.color_identity.is_subset_of(deck_colors) {
                result.error(format!(
                    "{} ({}) is outside commander's color identity ({})",
                    card.name,
                    card.color_identity.symbol_list(),
                    deck_colors.code()
                ));
            }
        }
    }

    fn check_banned(&self, deck: &Deck, result: &mut ValidationResult) {
        for name in deck.cards.iter().filter_map(|dc| dc.card_name()) {
            if self.rules.is_banned(name) {
                result.error(format!("{} is banned in Commander format", name));
            }
        }
    }
}
