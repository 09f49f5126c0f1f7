// src/application/mod.rs
//
// Application Layer
//
// - Boundary between a presentation layer and the services
// - Translates between DTOs and domain entities
// - Maps every failure to an ErrorResponse

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod state;

pub use commands::*;
pub use dto::*;
pub use error_handling::{CommandResult, ErrorResponse, ErrorType};
pub use state::AppState;
