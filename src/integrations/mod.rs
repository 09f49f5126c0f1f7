// src/integrations/mod.rs
//
// External Integrations Module
//
// Infrastructure only: clients map external payloads to domain types and
// never touch persistence.

pub mod card_source;
pub mod scryfall;

pub use card_source::{CardDataSource, CardPrinting, CardSearchPage};
pub use scryfall::ScryfallClient;

#[cfg(test)]
pub use card_source::MockCardDataSource;
