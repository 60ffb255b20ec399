//! Trivia API server entry point.

use std::error::Error;
use trivia_core::db::open_db;
use trivia_server::{serve, AppState, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = ServerConfig::from_env()?;
    trivia_core::init_logging(&config.log_level, &config.log_dir.to_string_lossy())?;

    let conn = open_db(&config.db_path)?;
    serve(&config, AppState::new(conn)).await?;
    Ok(())
}
