// src/integrations/scryfall/client.rs
//
// Scryfall REST client
//
// - Requests are spaced by a minimum interval shared across all callers
// - A 404 means "no such card" (or "no search results"), not an error
// - Payloads are mapped to domain cards; nothing is persisted here

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use crate::config::AppConfig;
use crate::domain::Card;
use crate::error::{AppError, AppResult};
use crate::integrations::card_source::{CardDataSource, CardPrinting, CardSearchPage};

use super::mapping::{CatalogResponse, ListResponse, ScryfallCard};

const USER_AGENT: &str = concat!("commander-decks/", env!("CARGO_PKG_VERSION"));

/// Minimum-interval rate limiter
struct RateLimiter {
    last_request: Option<Instant>,
    min_interval: Duration,
}

impl RateLimiter {
    fn new(min_interval: Duration) -> Self {
        Self {
            last_request: None,
            min_interval,
        }
    }

    async fn wait_if_needed(&mut self) {
        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                tokio::time::sleep(self.min_interval - elapsed).await;
            }
        }
        self.last_request = Some(Instant::now());
    }
}

pub struct ScryfallClient {
    base_url: String,
    http_client: Client,
    rate_limiter: Mutex<RateLimiter>,
}

impl ScryfallClient {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::ExternalService(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.scryfall_api_base.clone(),
            http_client,
            rate_limiter: Mutex::new(RateLimiter::new(config.rate_limit)),
        })
    }

    /// GET `endpoint`, returning `None` on 404
    async fn get_json<T>(&self, endpoint: &str, query: &[(&str, String)]) -> AppResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        self.rate_limiter.lock().await.wait_if_needed().await;

        let url = format!("{}{}", self.base_url, endpoint);
        log::debug!("Scryfall GET {} {:?}", url, query);

        let response = self
            .http_client
            .get(&url)
            .query(query)
            .header(header::ACCEPT, "application/json")
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|e| {
                log::error!("Scryfall request to {} failed: {}", endpoint, e);
                AppError::ExternalService(format!("Scryfall request failed: {}", e))
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("Scryfall returned {} for {}: {}", status, endpoint, body);
            return Err(AppError::ExternalService(format!(
                "Scryfall returned HTTP {}",
                status
            )));
        }

        let payload = response.json::<T>().await.map_err(|e| {
            AppError::ExternalService(format!("Failed to parse Scryfall response: {}", e))
        })?;

        Ok(Some(payload))
    }
}

#[async_trait]
impl CardDataSource for ScryfallClient {
    async fn search_cards(&self, query: &str, page: u32) -> AppResult<CardSearchPage> {
        let params = [
            ("q", query.to_string()),
            ("page", page.max(1).to_string()),
            ("unique", "cards".to_string()),
        ];

        let Some(list) = self
            .get_json::<ListResponse<ScryfallCard>>("/cards/search", &params)
            .await?
        else {
            return Ok(CardSearchPage::default());
        };

        let total_cards = list.total_cards.unwrap_or(list.data.len() as u32);
        let cards = list
            .data
            .into_iter()
            .map(ScryfallCard::into_card)
            .collect::<AppResult<Vec<_>>>()?;

        Ok(CardSearchPage {
            cards,
            has_more: list.has_more,
            total_cards,
        })
    }

    async fn get_card_by_id(&self, id: &str) -> AppResult<Option<Card>> {
        let endpoint = format!("/cards/{}", id);
        match self.get_json::<ScryfallCard>(&endpoint, &[]).await? {
            Some(card) => Ok(Some(card.into_card()?)),
            None => Ok(None),
        }
    }

    async fn get_card_by_name(&self, name: &str, exact: bool) -> AppResult<Option<Card>> {
        let mode = if exact { "exact" } else { "fuzzy" };
        match self
            .get_json::<ScryfallCard>("/cards/named", &[(mode, name.to_string())])
            .await?
        {
            Some(card) => Ok(Some(card.into_card()?)),
            None => Ok(None),
        }
    }

    async fn get_all_printings(&self, name: &str) -> AppResult<Vec<CardPrinting>> {
        let params = [
            ("q", format!("!\"{}\"", name)),
            ("unique", "prints".to_string()),
        ];

        let printings = self
            .get_json::<ListResponse<ScryfallCard>>("/cards/search", &params)
            .await?
            .map(|list| list.data.into_iter().map(ScryfallCard::into_printing).collect())
            .unwrap_or_default();

        Ok(printings)
    }

    async fn autocomplete(&self, query: &str) -> AppResult<Vec<String>> {
        let catalog = self
            .get_json::<CatalogResponse>("/cards/autocomplete", &[("q", query.to_string())])
            .await?;

        Ok(catalog.map(|c| c.data).unwrap_or_default())
    }
}
