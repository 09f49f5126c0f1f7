// src/services/card_service.rs
//
// Card lookup with a local cache in front of the card-data source.

use std::sync::Arc;

use crate::domain::{validate_card, Card};
use crate::error::{AppError, AppResult};
use crate::events::{CardCached, EventBus};
use crate::integrations::{CardDataSource, CardPrinting, CardSearchPage};
use crate::repositories::CardRepository;

/// Autocomplete queries shorter than this return no suggestions
pub const MIN_AUTOCOMPLETE_LEN: usize = 2;

pub struct CardService {
    card_repo: Arc<dyn CardRepository>,
    source: Arc<dyn CardDataSource>,
    event_bus: Arc<EventBus>,
}

impl CardService {
    pub fn new(
        card_repo: Arc<dyn CardRepository>,
        source: Arc<dyn CardDataSource>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            card_repo,
            source,
            event_bus,
        }
    }

    /// Search the source and cache every card found
    pub async fn search_cards(&self, query: &str, page: u32) -> AppResult<CardSearchPage> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::Validation("Query parameter required".to_string()));
        }

        let results = self.source.search_cards(query, page.max(1)).await?;
        log::debug!(
            "Search {:?} page {} returned {} of {} cards",
            query,
            page,
            results.cards.len(),
            results.total_cards
        );

        let cards = results
            .cards
            .into_iter()
            .map(|card| self.cache_card(card))
            .collect::<AppResult<Vec<_>>>()?;

        Ok(CardSearchPage {
            cards,
            has_more: results.has_more,
            total_cards: results.total_cards,
        })
    }

    /// Cached card, or fetched from the source and cached
    pub async fn get_card(&self, card_id: &str) -> AppResult<Card> {
        if let Some(card) = self.card_repo.get_by_id(card_id)? {
            return Ok(card);
        }

        let card = self
            .source
            .get_card_by_id(card_id)
            .await?
            .ok_or(AppError::NotFound)?;
        self.cache_card(card)
    }

    /// Look a card up by name. Exact lookups try the cache first.
    pub async fn get_card_by_name(&self, name: &str, exact: bool) -> AppResult<Card> {
        if exact {
            if let Some(card) = self.card_repo.find_by_name(name)? {
                return Ok(card);
            }
        }

        let card = self
            .source
            .get_card_by_name(name, exact)
            .await?
            .ok_or(AppError::NotFound)?;
        self.cache_card(card)
    }

    /// Every printing of a card; `NotFound` when there are none
    pub async fn get_printings(&self, card_name: &str) -> AppResult<Vec<CardPrinting>> {
        let printings = self.source.get_all_printings(card_name).await?;
        if printings.is_empty() {
            return Err(AppError::NotFound);
        }
        Ok(printings)
    }

    pub async fn autocomplete(&self, query: &str) -> AppResult<Vec<String>> {
        if query.chars().count() < MIN_AUTOCOMPLETE_LEN {
            return Ok(Vec::new());
        }
        self.source.autocomplete(query).await
    }

    /// Store fresh card data, refreshing an existing cache entry in place
    fn cache_card(&self, fresh: Card) -> AppResult<Card> {
        validate_card(&fresh)?;

        let card = match self.card_repo.get_by_id(&fresh.id)? {
            Some(mut cached) => {
                cached.refresh_from(&fresh);
                cached
            }
            None => fresh,
        };

        self.card_repo.save(&card)?;
        self.event_bus
            .emit(CardCached::new(card.id.clone(), card.name.clone()));

        Ok(card)
    }
}
