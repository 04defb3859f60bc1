use std::sync::Arc;

use crate::config::ServerConfig;
use crate::wiki::WikiClient;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: caraday_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Wikipedia summary client.
    pub wiki: Arc<WikiClient>,
}

impl AppState {
    /// Build state from a pool and configuration.
    pub fn new(pool: caraday_db::DbPool, config: ServerConfig) -> Self {
        let wiki = Arc::new(WikiClient::new(&config.wiki));
        Self {
            pool,
            config: Arc::new(config),
            wiki,
        }
    }

    /// Today's puzzle date key in the configured zone.
    pub fn today_key(&self) -> String {
        caraday_core::date_key::date_key(chrono::Utc::now(), self.config.puzzle_timezone)
    }
}
