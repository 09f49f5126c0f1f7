// src/events/handlers/mod.rs
//
// Event Handlers
//
// Handlers use closure-based subscription via EventBus::subscribe and
// delegate all work to services.

pub mod challenge_handler;

pub use challenge_handler::{register_challenge_handlers, ChallengeMonitor};
