// src/integrations/card_source.rs
//
// Card-data source abstraction
//
// Services depend on this trait, never on a concrete HTTP client, so the
// source can be swapped or mocked.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::Card;
use crate::error::AppResult;

/// One page of search results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardSearchPage {
    pub cards: Vec<Card>,
    pub has_more: bool,
    pub total_cards: u32,
}

/// One printing of a card (set, collector number, art)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardPrinting {
    pub id: String,
    pub name: String,
    pub set_code: Option<String>,
    pub set_name: Option<String>,
    pub collector_number: Option<String>,
    pub rarity: Option<String>,
    pub image_url: Option<String>,
    pub image_url_small: Option<String>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CardDataSource: Send + Sync {
    /// Full-text search using the source's query syntax. Pages start at 1.
    async fn search_cards(&self, query: &str, page: u32) -> AppResult<CardSearchPage>;

    /// `Ok(None)` when the source has no card with this id
    async fn get_card_by_id(&self, id: &str) -> AppResult<Option<Card>>;

    /// Exact or fuzzy name lookup
    async fn get_card_by_name(&self, name: &str, exact: bool) -> AppResult<Option<Card>>;

    async fn get_all_printings(&self, name: &str) -> AppResult<Vec<CardPrinting>>;

    /// Card name suggestions
    async fn autocomplete(&self, query: &str) -> AppResult<Vec<String>>;
}
