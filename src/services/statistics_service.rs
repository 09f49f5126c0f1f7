// src/services/statistics_service.rs
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::DeckStatistics;
use crate::error::{AppError, AppResult};
use crate::repositories::DeckRepository;

pub struct StatisticsService {
    deck_repo: Arc<dyn DeckRepository>,
}

impl StatisticsService {
    pub fn new(deck_repo: Arc<dyn DeckRepository>) -> Self {
        Self { deck_repo }
    }

    pub fn deck_statistics(&self, deck_id: Uuid) -> AppResult<DeckStatistics> {
        let deck = self
            .deck_repo
            .get_by_id(deck_id)?
            .ok_or(AppError::NotFound)?;

        Ok(DeckStatistics::from_deck(&deck))
    }
}
