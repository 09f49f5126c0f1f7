//! Rule validation engine.
//!
//! Both validators are pure: they borrow a snapshot of decks plus the rule
//! tables and return a fresh result. Rule violations are data, not errors.

pub mod challenge;
pub mod deck_rules;
pub mod result;

pub use challenge::{
    ChallengeResult, ChallengeTracker, ColorProgress, ColorProgressMap, DeckUsage, MissingColor,
};
pub use deck_rules::DeckRuleValidator;
pub use result::ValidationResult;
