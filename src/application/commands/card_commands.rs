// src/application/commands/card_commands.rs
//
// Card lookup commands, backed by the local cache and the card database

use crate::application::{dto::*, error_handling::CommandResult, state::AppState};
use crate::integrations::CardPrinting;

pub async fn search_cards(
    state: &AppState,
    query: &str,
    page: Option<u32>,
) -> CommandResult<CardSearchDto> {
    let page = state
        .card_service
        .search_cards(query, page.unwrap_or(1))
        .await?;
    Ok(CardSearchDto::from(page))
}

pub async fn get_card(state: &AppState, card_id: &str) -> CommandResult<CardDto> {
    Ok(CardDto::from(state.card_service.get_card(card_id).await?))
}

pub async fn get_card_by_name(
    state: &AppState,
    name: &str,
    exact: bool,
) -> CommandResult<CardDto> {
    Ok(CardDto::from(
        state.card_service.get_card_by_name(name, exact).await?,
    ))
}

pub async fn get_card_printings(
    state: &AppState,
    card_name: &str,
) -> CommandResult<Vec<CardPrinting>> {
    Ok(state.card_service.get_printings(card_name).await?)
}

pub async fn autocomplete_cards(state: &AppState, query: &str) -> CommandResult<Vec<String>> {
    Ok(state.card_service.autocomplete(query).await?)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::application::error_handling::ErrorType;
    use crate::db::{create_connection_pool, initialize_database};
    use crate::domain::{Card, ColorIdentity, RuleTables};
    use crate::integrations::{CardSearchPage, MockCardDataSource};

    fn state_with(source: MockCardDataSource) -> (tempfile::TempDir, AppState) {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_connection_pool(&dir.path().join("cards.db")).unwrap();
        initialize_database(&pool.get().unwrap()).unwrap();
        let state = AppState::new(
            Arc::new(pool),
            RuleTables::commander_defaults(),
            Arc::new(source),
        );
        (dir, state)
    }

    fn bolt() -> Card {
        Card::new(
            "bolt".to_string(),
            "Lightning Bolt".to_string(),
            "Instant".to_string(),
            ColorIdentity::parse_code("R").unwrap(),
        )
    }

    #[tokio::test]
    async fn test_search_defaults_to_first_page() {
        let mut source = MockCardDataSource::new();
        source
            .expect_search_cards()
            .withf(|query, page| query == "bolt" && *page == 1)
            .times(1)
            .returning(|_, _| {
                Ok(CardSearchPage {
                    cards: vec![bolt()],
                    has_more: false,
                    total_cards: 1,
                })
            });
        let (_dir, state) = state_with(source);

        let result = search_cards(&state, "bolt", None).await.unwrap();
        assert_eq!(result.total_cards, 1);
        assert_eq!(result.cards[0].color_identity, vec!["R".to_string()]);
    }

    #[tokio::test]
    async fn test_blank_search_is_validation_error() {
        let (_dir, state) = state_with(MockCardDataSource::new());
        let err = search_cards(&state, "   ", None).await.unwrap_err();
        assert_eq!(err.error_type, ErrorType::Validation);
    }

    #[tokio::test]
    async fn test_unknown_card_is_not_found() {
        let mut source = MockCardDataSource::new();
        source.expect_get_card_by_id().returning(|_| Ok(None));
        let (_dir, state) = state_with(source);

        let err = get_card(&state, "missing").await.unwrap_err();
        assert_eq!(err.error_type, ErrorType::NotFound);
    }

    #[tokio::test]
    async fn test_autocomplete_short_query_skips_source() {
        let (_dir, state) = state_with(MockCardDataSource::new());
        let names = autocomplete_cards(&state, "l").await.unwrap();
        assert!(names.is_empty());
    }
}
