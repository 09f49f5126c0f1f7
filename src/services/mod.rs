// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod card_service;
pub mod deck_service;
pub mod statistics_service;
pub mod validation_service;

#[cfg(test)]
mod test_support;

#[cfg(test)]
mod validation_service_tests;

pub use card_service::CardService;

pub use deck_service::{
    AddCardRequest,
    CreateDeckRequest,
    DeckService,
    UpdateDeckCardRequest,
    UpdateDeckRequest,
};

pub use statistics_service::StatisticsService;

pub use validation_service::ValidationService;
