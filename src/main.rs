// src/main.rs
//
// Bootstrap: configuration, database, rule tables, card client, services.
// Prints the current challenge status as JSON.

use std::sync::Arc;

use anyhow::Context;

use commander_decks::application::commands::challenge_status;
use commander_decks::application::state::AppState;
use commander_decks::config::AppConfig;
use commander_decks::db::{create_connection_pool, initialize_database, verify_database_integrity};
use commander_decks::integrations::ScryfallClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1. CONFIGURATION
    let config = AppConfig::from_env().context("Invalid configuration")?;
    log::info!("Using database at {}", config.database_path.display());

    // 2. INFRASTRUCTURE
    let pool = Arc::new(
        create_connection_pool(&config.database_path).context("Failed to open database")?,
    );
    {
        let conn = pool.get().context("Failed to get a database connection")?;
        initialize_database(&conn).context("Failed to initialize schema")?;
        verify_database_integrity(&conn)?;
    }

    let rules = config.load_rules().context("Failed to load rule tables")?;
    let card_source = Arc::new(ScryfallClient::new(&config)?);

    // 3. APPLICATION STATE
    let state = AppState::new(pool, rules, card_source);

    let status = challenge_status(&state)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to compute challenge status: {}", e))?;
    println!("{}", serde_json::to_string_pretty(&status)?);

    Ok(())
}
