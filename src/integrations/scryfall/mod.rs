// src/integrations/scryfall/mod.rs

pub mod client;
mod mapping;

pub use client::ScryfallClient;
