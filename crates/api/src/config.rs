use chrono_tz::Tz;

use caraday_core::date_key::{parse_timezone, DEFAULT_PUZZLE_TIMEZONE};
use caraday_core::wiki::DEFAULT_CACHE_DAYS;

/// Default Wikipedia REST base; `{lang}` is replaced with the edition code.
pub const DEFAULT_WIKI_API_BASE: &str = "https://{lang}.wikipedia.org/api/rest_v1";

/// Default `User-Agent` sent to Wikipedia.
pub const DEFAULT_WIKI_USER_AGENT: &str = concat!("caraday/", env!("CARGO_PKG_VERSION"));

/// Wikipedia summary client settings.
#[derive(Debug, Clone)]
pub struct WikiConfig {
    /// REST API base URL template containing a `{lang}` placeholder.
    pub api_base: String,
    pub user_agent: String,
    /// Days a fetched summary stays in the cache.
    pub cache_days: i64,
    /// Per-request timeout for Wikipedia calls, in seconds.
    pub request_timeout_secs: u64,
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Zone in which the puzzle day rolls over.
    pub puzzle_timezone: Tz,
    /// Attempts a player gets per puzzle, reported to the client.
    pub max_attempts: u32,
    /// Load the starter catalog at startup.
    pub seed_catalog: bool,
    pub wiki: WikiConfig,
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.into())
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                   |
    /// |------------------------|-------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                 |
    /// | `PORT`                 | `3000`                                    |
    /// | `CORS_ORIGINS`         | `http://localhost:4200`                   |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                      |
    /// | `PUZZLE_TIMEZONE`      | `Europe/Paris`                            |
    /// | `MAX_ATTEMPTS`         | `10`                                      |
    /// | `SEED_CATALOG`         | `false`                                   |
    /// | `WIKI_API_BASE`        | `https://{lang}.wikipedia.org/api/rest_v1`|
    /// | `WIKI_USER_AGENT`      | `caraday/<version>`                       |
    /// | `WIKI_CACHE_DAYS`      | `30`                                      |
    /// | `WIKI_TIMEOUT_SECS`    | `5`                                       |
    ///
    /// Panics on malformed values so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let host = env_or("HOST", "0.0.0.0");

        let port: u16 = env_or("PORT", "3000")
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = env_or("CORS_ORIGINS", "http://localhost:4200")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = env_or("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let puzzle_timezone = parse_timezone(&env_or("PUZZLE_TIMEZONE", DEFAULT_PUZZLE_TIMEZONE))
            .unwrap_or_else(|e| panic!("{e}"));

        let max_attempts: u32 = env_or("MAX_ATTEMPTS", "10")
            .parse()
            .expect("MAX_ATTEMPTS must be a valid u32");

        let seed_catalog = matches!(
            env_or("SEED_CATALOG", "false").to_ascii_lowercase().as_str(),
            "1" | "true" | "yes"
        );

        let wiki = WikiConfig {
            api_base: env_or("WIKI_API_BASE", DEFAULT_WIKI_API_BASE),
            user_agent: env_or("WIKI_USER_AGENT", DEFAULT_WIKI_USER_AGENT),
            cache_days: env_or("WIKI_CACHE_DAYS", &DEFAULT_CACHE_DAYS.to_string())
                .parse()
                .expect("WIKI_CACHE_DAYS must be a valid i64"),
            request_timeout_secs: env_or("WIKI_TIMEOUT_SECS", "5")
                .parse()
                .expect("WIKI_TIMEOUT_SECS must be a valid u64"),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            puzzle_timezone,
            max_attempts,
            seed_catalog,
            wiki,
        }
    }
}
