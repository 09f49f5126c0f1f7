//! Deck invariants:
//!
//! 1. Deck name cannot be empty
//! 2. Quantity of every entry is at least 1
//! 3. At most one entry is marked as commander
//! 4. A card appears in at most one entry of a deck
//! 5. Commander id/name are derived from the entries, never stored
//!
//! Format legality (size, singleton, color identity, bans) is NOT an
//! invariant: it is reported by the rule validator.

pub mod entity;
pub mod invariants;

pub use entity::{Deck, DeckCard, PrintingSelection};
pub use invariants::{validate_deck, validate_deck_card};
