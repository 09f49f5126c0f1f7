// src/events/handlers/challenge_handler.rs
//
// Keeps a current view of the 32-deck challenge.
//
// Any change to the deck collection triggers a recomputation through
// ValidationService. Newly shared cards and the challenge becoming complete
// are reported through the log. Errors are logged and never reach the bus.

use std::collections::BTreeSet;
use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::ChallengeResult;
use crate::events::{CardAddedToDeck, CardRemovedFromDeck, DeckCreated, DeckDeleted, EventBus};
use crate::services::ValidationService;

pub struct ChallengeMonitor {
    validation: Arc<ValidationService>,
    latest: RwLock<Option<ChallengeResult>>,
}

impl ChallengeMonitor {
    pub fn new(validation: Arc<ValidationService>) -> Self {
        Self {
            validation,
            latest: RwLock::new(None),
        }
    }

    /// Last computed status; `None` until the first refresh
    pub fn latest(&self) -> Option<ChallengeResult> {
        self.latest
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Recompute the challenge status and report what changed
    pub fn refresh(&self) {
        let current = match self.validation.challenge_status() {
            Ok(result) => result,
            Err(e) => {
                log::error!("[CHALLENGE] Failed to recompute status: {}", e);
                return;
            }
        };

        let mut latest = self.latest.write().unwrap_or_else(PoisonError::into_inner);

        let known: BTreeSet<&str> = latest
            .as_ref()
            .map(|prev| prev.duplicate_cards.keys().map(String::as_str).collect())
            .unwrap_or_default();
        for (name, usages) in &current.duplicate_cards {
            if !known.contains(name.as_str()) {
                let decks: Vec<&str> = usages.iter().map(|u| u.deck_name.as_str()).collect();
                log::warn!(
                    "[CHALLENGE] {} is now used in {} decks: {}",
                    name,
                    usages.len(),
                    decks.join(", ")
                );
            }
        }

        let was_complete = latest.as_ref().map(|prev| prev.complete).unwrap_or(false);
        if current.complete && !was_complete {
            log::info!("[CHALLENGE] Every color combination has a deck");
        }
        log::debug!(
            "[CHALLENGE] Progress {} with {} shared cards",
            current.progress,
            current.duplicate_count
        );

        *latest = Some(current);
    }
}

/// Subscribe the monitor to every event that changes the deck collection
pub fn register_challenge_handlers(bus: &EventBus, monitor: Arc<ChallengeMonitor>) {
    let m = Arc::clone(&monitor);
    bus.subscribe::<DeckCreated, _>(move |_| m.refresh());

    let m = Arc::clone(&monitor);
    bus.subscribe::<DeckDeleted, _>(move |_| m.refresh());

    let m = Arc::clone(&monitor);
    bus.subscribe::<CardAddedToDeck, _>(move |_| m.refresh());

    bus.subscribe::<CardRemovedFromDeck, _>(move |_| monitor.refresh());

    log::debug!("[CHALLENGE] Handlers registered");
}
