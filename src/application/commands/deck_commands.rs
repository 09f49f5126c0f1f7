// src/application/commands/deck_commands.rs
//
// Deck and deck-entry commands

use crate::application::{dto::*, error_handling::CommandResult, state::AppState};
use crate::domain::DeckStatistics;
use crate::services::{AddCardRequest, CreateDeckRequest, UpdateDeckCardRequest, UpdateDeckRequest};

use super::parse_deck_id;

pub async fn list_decks(state: &AppState) -> CommandResult<Vec<DeckSummaryDto>> {
    let decks = state.deck_service.list_decks()?;
    Ok(decks.iter().map(DeckSummaryDto::from).collect())
}

pub async fn get_deck(state: &AppState, deck_id: &str) -> CommandResult<DeckDto> {
    let id = parse_deck_id(deck_id)?;
    Ok(DeckDto::from(state.deck_service.get_deck(id)?))
}

pub async fn create_deck(state: &AppState, dto: CreateDeckDto) -> CommandResult<DeckDto> {
    let deck = state.deck_service.create_deck(CreateDeckRequest {
        name: dto.name,
        color_identity: dto.color_identity,
        description: dto.description,
    })?;
    Ok(DeckDto::from(deck))
}

pub async fn update_deck(
    state: &AppState,
    deck_id: &str,
    dto: UpdateDeckDto,
) -> CommandResult<DeckDto> {
    let id = parse_deck_id(deck_id)?;
    let deck = state.deck_service.update_deck(UpdateDeckRequest {
        deck_id: id,
        name: dto.name,
        description: dto.description,
    })?;
    Ok(DeckDto::from(deck))
}

pub async fn delete_deck(state: &AppState, deck_id: &str) -> CommandResult<()> {
    let id = parse_deck_id(deck_id)?;
    state.deck_service.delete_deck(id)?;
    Ok(())
}

/// Add a card, fetching it from the card database when not cached yet
pub async fn add_card_to_deck(
    state: &AppState,
    deck_id: &str,
    dto: AddCardDto,
) -> CommandResult<DeckCardDto> {
    let id = parse_deck_id(deck_id)?;
    let card = state.card_service.get_card(&dto.card_id).await?;

    let entry = state.deck_service.add_card(AddCardRequest {
        deck_id: id,
        card_id: card.id,
        quantity: dto.quantity.unwrap_or(1),
        is_commander: dto.is_commander,
        category: dto.category,
        printing: dto.printing.into_selection(),
    })?;
    Ok(DeckCardDto::from(entry))
}

pub async fn update_deck_card(
    state: &AppState,
    deck_id: &str,
    card_id: &str,
    dto: UpdateDeckCardDto,
) -> CommandResult<DeckCardDto> {
    let id = parse_deck_id(deck_id)?;
    let category = dto
        .category
        .map(|c| if c.trim().is_empty() { None } else { Some(c) });

    let entry = state.deck_service.update_deck_card(UpdateDeckCardRequest {
        deck_id: id,
        card_id: card_id.to_string(),
        quantity: dto.quantity,
        category,
        printing: dto.printing.into_selection(),
    })?;
    Ok(DeckCardDto::from(entry))
}

pub async fn remove_card_from_deck(
    state: &AppState,
    deck_id: &str,
    card_id: &str,
) -> CommandResult<()> {
    let id = parse_deck_id(deck_id)?;
    state.deck_service.remove_card(id, card_id)?;
    Ok(())
}

pub async fn set_commander(state: &AppState, deck_id: &str, card_id: &str) -> CommandResult<DeckDto> {
    let id = parse_deck_id(deck_id)?;
    Ok(DeckDto::from(state.deck_service.set_commander(id, card_id)?))
}

pub async fn get_deck_statistics(state: &AppState, deck_id: &str) -> CommandResult<DeckStatistics> {
    let id = parse_deck_id(deck_id)?;
    Ok(state.statistics_service.deck_statistics(id)?)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::application::error_handling::ErrorType;
    use crate::db::{create_connection_pool, initialize_database};
    use crate::domain::{Card, ColorIdentity, RuleTables};
    use crate::integrations::MockCardDataSource;

    fn state_with(source: MockCardDataSource) -> (tempfile::TempDir, AppState) {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_connection_pool(&dir.path().join("commands.db")).unwrap();
        initialize_database(&pool.get().unwrap()).unwrap();
        let state = AppState::new(
            Arc::new(pool),
            RuleTables::commander_defaults(),
            Arc::new(source),
        );
        (dir, state)
    }

    fn niv() -> Card {
        let mut card = Card::new(
            "niv".to_string(),
            "Niv-Mizzet, Parun".to_string(),
            "Legendary Creature — Dragon Wizard".to_string(),
            ColorIdentity::parse_code("UR").unwrap(),
        );
        card.is_legal_commander = true;
        card.image_url = Some("niv-normal.jpg".to_string());
        card
    }

    fn create_dto(code: &str) -> CreateDeckDto {
        CreateDeckDto {
            name: "Izzet".to_string(),
            color_identity: code.to_string(),
            description: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_deck() {
        let (_dir, state) = state_with(MockCardDataSource::new());

        let created = create_deck(&state, create_dto("ru")).await.unwrap();
        assert_eq!(created.color_identity.as_deref(), Some("UR"));

        let fetched = get_deck(&state, &created.id).await.unwrap();
        assert_eq!(fetched.name, "Izzet");
        assert_eq!(fetched.card_count, 0);

        let listed = list_decks(&state).await.unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_code_is_conflict() {
        let (_dir, state) = state_with(MockCardDataSource::new());
        create_deck(&state, create_dto("UR")).await.unwrap();

        let err = create_deck(&state, create_dto("RU")).await.unwrap_err();
        assert_eq!(err.error_type, ErrorType::Conflict);
    }

    #[tokio::test]
    async fn test_bad_deck_id_is_validation_error() {
        let (_dir, state) = state_with(MockCardDataSource::new());
        let err = get_deck(&state, "not-a-uuid").await.unwrap_err();
        assert_eq!(err.error_type, ErrorType::Validation);
    }

    #[tokio::test]
    async fn test_add_card_fetches_uncached_card() {
        let mut source = MockCardDataSource::new();
        source
            .expect_get_card_by_id()
            .withf(|id| id == "niv")
            .times(1)
            .returning(|_| Ok(Some(niv())));
        let (_dir, state) = state_with(source);
        let deck = create_deck(&state, create_dto("UR")).await.unwrap();

        let entry = add_card_to_deck(
            &state,
            &deck.id,
            AddCardDto {
                card_id: "niv".to_string(),
                quantity: None,
                is_commander: false,
                category: Some("Commander".to_string()),
                printing: PrintingSelectionDto::default(),
            },
        )
        .await
        .unwrap();

        assert!(entry.is_commander);
        assert_eq!(entry.quantity, 1);
        assert_eq!(entry.selected_image_url.as_deref(), Some("niv-normal.jpg"));

        let deck = get_deck(&state, &deck.id).await.unwrap();
        assert_eq!(deck.commander_name.as_deref(), Some("Niv-Mizzet, Parun"));
    }

    #[tokio::test]
    async fn test_update_and_remove_entry() {
        let mut source = MockCardDataSource::new();
        source.expect_get_card_by_id().returning(|_| Ok(Some(niv())));
        let (_dir, state) = state_with(source);
        let deck = create_deck(&state, create_dto("UR")).await.unwrap();
        add_card_to_deck(
            &state,
            &deck.id,
            AddCardDto {
                card_id: "niv".to_string(),
                quantity: Some(1),
                is_commander: true,
                category: Some("Commander".to_string()),
                printing: PrintingSelectionDto::default(),
            },
        )
        .await
        .unwrap();

        let updated = update_deck_card(
            &state,
            &deck.id,
            "niv",
            UpdateDeckCardDto {
                category: Some(String::new()),
                printing: PrintingSelectionDto {
                    selected_set_code: Some("prm".to_string()),
                    ..PrintingSelectionDto::default()
                },
                ..UpdateDeckCardDto::default()
            },
        )
        .await
        .unwrap();
        assert!(updated.category.is_none());
        assert_eq!(updated.selected_set_code.as_deref(), Some("prm"));
        assert_eq!(updated.selected_image_url.as_deref(), Some("niv-normal.jpg"));

        remove_card_from_deck(&state, &deck.id, "niv").await.unwrap();
        let err = remove_card_from_deck(&state, &deck.id, "niv").await.unwrap_err();
        assert_eq!(err.error_type, ErrorType::NotFound);
    }

    #[tokio::test]
    async fn test_statistics_and_delete() {
        let (_dir, state) = state_with(MockCardDataSource::new());
        let deck = create_deck(&state, create_dto("UR")).await.unwrap();

        let stats = get_deck_statistics(&state, &deck.id).await.unwrap();
        assert_eq!(stats.total_cards, 0);
        assert_eq!(stats.avg_cmc, 0.0);

        delete_deck(&state, &deck.id).await.unwrap();
        let err = get_deck(&state, &deck.id).await.unwrap_err();
        assert_eq!(err.error_type, ErrorType::NotFound);
    }
}
