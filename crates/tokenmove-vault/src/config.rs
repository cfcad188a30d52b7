//! Vault configuration

use serde::{Deserialize, Serialize};

/// Largest result set a single record query may return
pub const DEFAULT_PAGE_LIMIT: usize = 1_000;

/// Environment variable overriding the page limit
pub const PAGE_LIMIT_ENV: &str = "TOKENMOVE_PAGE_LIMIT";

/// Vault configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultConfig {
    /// Queries matching more records than this fail instead of truncating
    pub page_limit: usize,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            page_limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl VaultConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        Self {
            page_limit: std::env::var(PAGE_LIMIT_ENV)
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PAGE_LIMIT),
        }
    }

    pub fn with_page_limit(page_limit: usize) -> Self {
        Self { page_limit }
    }
}
