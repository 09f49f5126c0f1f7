// src/application/commands/challenge_commands.rs
//
// Deck legality and 32-deck challenge commands

use crate::application::{error_handling::CommandResult, state::AppState};
use crate::domain::{ChallengeResult, ColorProgressMap, ValidationResult};

use super::parse_deck_id;

pub async fn validate_deck(state: &AppState, deck_id: &str) -> CommandResult<ValidationResult> {
    let id = parse_deck_id(deck_id)?;
    Ok(state.validation_service.validate_deck(id)?)
}

pub async fn challenge_status(state: &AppState) -> CommandResult<ChallengeResult> {
    Ok(state.validation_service.challenge_status()?)
}

pub async fn challenge_progress(state: &AppState) -> CommandResult<ColorProgressMap> {
    Ok(state.validation_service.challenge_progress()?)
}
