use std::collections::HashSet;

use super::entity::{Deck, DeckCard};
use crate::domain::{DomainError, DomainResult};

/// Validates structural Deck invariants (not format legality)
pub fn validate_deck(deck: &Deck) -> DomainResult<()> {
    validate_name(&deck.name)?;

    let mut seen = HashSet::new();
    for entry in &deck.cards {
        validate_deck_card(entry)?;
        if !seen.insert(entry.card_id.as_str()) {
            return Err(DomainError::InvariantViolation(format!(
                "Card {} appears in more than one entry",
                entry.card_id
            )));
        }
    }

    let commanders = deck.cards.iter().filter(|dc| dc.is_commander).count();
    if commanders > 1 {
        return Err(DomainError::InvariantViolation(
            "A deck can have at most one commander entry".to_string(),
        ));
    }
    Ok(())
}

/// Quantity must be positive
pub fn validate_deck_card(entry: &DeckCard) -> DomainResult<()> {
    if entry.quantity == 0 {
        return Err(DomainError::InvariantViolation(format!(
            "Quantity for card {} must be at least 1",
            entry.card_id
        )));
    }
    Ok(())
}

fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Deck name cannot be empty".to_string(),
        ));
    }
    Ok(())
}
