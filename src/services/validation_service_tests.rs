// src/services/validation_service_tests.rs
//
// Rule checks over decks loaded from the database, plus statistics.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::domain::{ColorIdentity, RuleTables};
    use crate::error::AppError;
    use crate::services::deck_service::{AddCardRequest, CreateDeckRequest, DeckService};
    use crate::services::statistics_service::StatisticsService;
    use crate::services::test_support::{card, legendary, TestDb};
    use crate::services::validation_service::ValidationService;
    use uuid::Uuid;

    struct Fixture {
        db: TestDb,
        decks: DeckService,
        validation: ValidationService,
        statistics: StatisticsService,
    }

    fn fixture() -> Fixture {
        let db = TestDb::new();
        let decks = DeckService::new(
            db.decks.clone(),
            db.entries.clone(),
            db.cards.clone(),
            db.event_bus.clone(),
        );
        let validation =
            ValidationService::new(db.decks.clone(), Arc::new(RuleTables::commander_defaults()));
        let statistics = StatisticsService::new(db.decks.clone());
        Fixture {
            db,
            decks,
            validation,
            statistics,
        }
    }

    fn create(f: &Fixture, code: &str) -> Uuid {
        f.decks
            .create_deck(CreateDeckRequest {
                name: format!("Deck {}", code),
                color_identity: code.to_string(),
                description: None,
            })
            .unwrap()
            .id
    }

    fn add(f: &Fixture, deck_id: Uuid, card_id: &str, quantity: u32) {
        f.decks
            .add_card(AddCardRequest {
                deck_id,
                card_id: card_id.to_string(),
                quantity,
                is_commander: false,
                category: None,
                printing: None,
            })
            .unwrap();
    }

    #[test]
    fn test_ur_deck_one_card_short() {
        let f = fixture();
        let deck_id = create(&f, "UR");

        f.db.cache(&legendary("niv", "Niv-Mizzet, Parun", "UR"));
        f.db.cache(&card("island", "Island", "Basic Land — Island", ""));
        f.db.cache(&card("mountain", "Mountain", "Basic Land — Mountain", ""));
        add(&f, deck_id, "niv", 1);
        for i in 0..38 {
            let id = format!("spell-{}", i);
            f.db.cache(&card(&id, &format!("Izzet Spell {}", i), "Instant", "U"));
            add(&f, deck_id, &id, 1);
        }
        add(&f, deck_id, "island", 30);
        add(&f, deck_id, "mountain", 30);

        let result = f.validation.validate_deck(deck_id).unwrap();

        assert!(!result.valid);
        assert_eq!(
            result.errors,
            vec!["Deck must be exactly 100 cards (current: 99)".to_string()]
        );
        assert_eq!(result.warnings, vec!["Deck needs 1 more cards".to_string()]);
    }

    #[test]
    fn test_validate_unknown_deck() {
        let f = fixture();
        assert!(matches!(
            f.validation.validate_deck(Uuid::new_v4()),
            Err(AppError::NotFound)
        ));
    }

    #[test]
    fn test_off_color_and_banned_cards_reported() {
        let f = fixture();
        let deck_id = create(&f, "G");
        f.db.cache(&legendary("omnath", "Omnath, Locus of Mana", "G"));
        f.db.cache(&card("bolt", "Lightning Bolt", "Instant", "R"));
        f.db.cache(&card("crypt", "Mana Crypt", "Artifact", ""));
        add(&f, deck_id, "omnath", 1);
        add(&f, deck_id, "bolt", 1);
        add(&f, deck_id, "crypt", 1);

        let result = f.validation.validate_deck(deck_id).unwrap();
        assert!(result
            .errors
            .contains(&"Lightning Bolt (R) is outside commander's color identity (G)".to_string()));
        assert!(result
            .errors
            .contains(&"Mana Crypt is banned in Commander format".to_string()));
    }

    #[test]
    fn test_challenge_status_reports_duplicates() {
        let f = fixture();
        let izzet = create(&f, "UR");
        let gruul = create(&f, "RG");
        f.db.cache(&card("sol", "Sol Ring", "Artifact", ""));
        f.db.cache(&card("mountain", "Mountain", "Basic Land — Mountain", ""));
        for deck_id in [izzet, gruul] {
            add(&f, deck_id, "sol", 1);
            add(&f, deck_id, "mountain", 20);
        }

        let status = f.validation.challenge_status().unwrap();

        assert_eq!(status.total_decks, 2);
        assert_eq!(status.progress, "2/32");
        assert_eq!(status.missing_colors.len(), 30);
        assert_eq!(status.duplicate_count, 1);
        let ids: Vec<_> = status.duplicate_cards["Sol Ring"]
            .iter()
            .map(|u| u.deck_id)
            .collect();
        assert_eq!(ids, vec![izzet, gruul]);
        assert!(!status.valid);
    }

    #[test]
    fn test_challenge_progress() {
        let f = fixture();
        let deck_id = create(&f, "WUBRG");

        let progress = f.validation.challenge_progress().unwrap();

        assert_eq!(progress.len(), 32);
        let five = progress.get(&ColorIdentity::parse_code("GRBUW").unwrap().code()).unwrap();
        assert!(five.completed);
        assert_eq!(five.deck_id, Some(deck_id));
        assert_eq!(progress.completed_count(), 1);
    }

    #[test]
    fn test_deck_statistics() {
        let f = fixture();
        let deck_id = create(&f, "UR");
        let mut niv = legendary("niv", "Niv-Mizzet, Parun", "UR");
        niv.cmc = Some(6.0);
        f.db.cache(&niv);
        f.db.cache(&card("island", "Island", "Basic Land — Island", ""));
        add(&f, deck_id, "niv", 1);
        add(&f, deck_id, "island", 10);

        let stats = f.statistics.deck_statistics(deck_id).unwrap();

        assert_eq!(stats.total_cards, 11);
        assert_eq!(stats.creatures, 1);
        assert_eq!(stats.lands, 10);
        assert_eq!(stats.avg_cmc, 6.0);

        assert!(matches!(
            f.statistics.deck_statistics(Uuid::new_v4()),
            Err(AppError::NotFound)
        ));
    }
}
