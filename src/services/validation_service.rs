// src/services/validation_service.rs
//
// Loads deck snapshots and runs the rule checks over them. The checks
// themselves live in the domain and never touch storage.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{
    ChallengeResult, ChallengeTracker, ColorProgressMap, DeckRuleValidator, RuleTables,
    ValidationResult,
};
use crate::error::{AppError, AppResult};
use crate::repositories::DeckRepository;

pub struct ValidationService {
    deck_repo: Arc<dyn DeckRepository>,
    rules: Arc<RuleTables>,
}

impl ValidationService {
    pub fn new(deck_repo: Arc<dyn DeckRepository>, rules: Arc<RuleTables>) -> Self {
        Self { deck_repo, rules }
    }

    pub fn rules(&self) -> &RuleTables {
        &self.rules
    }

    /// Commander legality report for one deck
    pub fn validate_deck(&self, deck_id: Uuid) -> AppResult<ValidationResult> {
        let deck = self
            .deck_repo
            .get_by_id(deck_id)?
            .ok_or(AppError::NotFound)?;

        let result = DeckRuleValidator::new(&self.rules).validate(&deck);
        log::debug!(
            "Validated {}: {} errors, {} warnings",
            deck,
            result.errors.len(),
            result.warnings.len()
        );
        Ok(result)
    }

    /// Challenge status over every stored deck
    pub fn challenge_status(&self) -> AppResult<ChallengeResult> {
        let decks = self.deck_repo.list_all()?;
        Ok(ChallengeTracker::new(&self.rules).check_challenge(&decks))
    }

    /// Per-combination progress over every stored deck
    pub fn challenge_progress(&self) -> AppResult<ColorProgressMap> {
        let decks = self.deck_repo.list_all()?;
        Ok(ChallengeTracker::new(&self.rules).progress_by_color(&decks))
    }
}
