// src/application/commands/mod.rs
//
// Command Handlers
//
// - Commands are thin adapters between a presentation layer and services
// - Commands accept DTOs, return DTOs or an ErrorResponse
// - Commands NEVER contain business logic

pub mod card_commands;
pub mod challenge_commands;
pub mod deck_commands;

pub use card_commands::*;
pub use challenge_commands::*;
pub use deck_commands::*;

use uuid::Uuid;

use crate::application::error_handling::{CommandResult, ErrorResponse};

pub(crate) fn parse_deck_id(deck_id: &str) -> CommandResult<Uuid> {
    Uuid::parse_str(deck_id.trim())
        .map_err(|e| ErrorResponse::validation(format!("Invalid deck id: {}", e)))
}
