use super::entity::Card;
use crate::domain::{DomainError, DomainResult};

/// Validates Card invariants before it is cached
pub fn validate_card(card: &Card) -> DomainResult<()> {
    if card.id.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Card id cannot be empty".to_string(),
        ));
    }
    if card.name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Card name cannot be empty".to_string(),
        ));
    }
    if let Some(cmc) = card.cmc {
        if cmc < 0.0 || !cmc.is_finite() {
            return Err(DomainError::InvariantViolation(format!(
                "Card {} has invalid mana value {}",
                card.name, cmc
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ColorIdentity;

    #[test]
    fn test_valid_card() {
        let card = Card::new(
            "id-1".to_string(),
            "Sol Ring".to_string(),
            "Artifact".to_string(),
            ColorIdentity::colorless(),
        );
        assert!(validate_card(&card).is_ok());
    }

    #[test]
    fn test_empty_name_fails() {
        let card = Card::new(
            "id-1".to_string(),
            "  ".to_string(),
            "Artifact".to_string(),
            ColorIdentity::colorless(),
        );
        assert!(validate_card(&card).is_err());
    }
}
