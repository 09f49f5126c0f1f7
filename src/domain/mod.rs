// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod card;
pub mod color;
pub mod deck;
pub mod rules;
pub mod statistics;
pub mod validation;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use card::{validate_card, Card};
pub use color::{Color, ColorIdentity};
pub use deck::{validate_deck, validate_deck_card, Deck, DeckCard, PrintingSelection};
pub use rules::{
    validate_rule_tables, ColorCombination, RuleTables, CARDS_PER_DECK, CHALLENGE_DECK_COUNT,
};
pub use statistics::DeckStatistics;
pub use validation::{
    ChallengeResult, ChallengeTracker, ColorProgress, ColorProgressMap, DeckRuleValidator,
    DeckUsage, MissingColor, ValidationResult,
};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of structural invariants, not format rules
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Invalid color identity: {0:?}")]
    InvalidColorIdentity(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
