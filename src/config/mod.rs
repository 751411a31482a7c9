#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::listing::{DEFAULT_PAGE_SIZE, FEATURED_LIMIT};
use crate::core::ConfigProvider;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ITINERARY_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_RECOMMEND_API_URL: &str = "http://localhost:8001";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Effective configuration after merging the config file and command-line flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub itinerary_api_url: String,
    pub recommend_api_url: String,
    pub timeout_secs: u64,
    pub page_size: usize,
    pub featured_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            itinerary_api_url: DEFAULT_ITINERARY_API_URL.to_string(),
            recommend_api_url: DEFAULT_RECOMMEND_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            page_size: DEFAULT_PAGE_SIZE,
            featured_limit: FEATURED_LIMIT,
        }
    }
}

impl ConfigProvider for Settings {
    fn itinerary_api_url(&self) -> &str {
        &self.itinerary_api_url
    }

    fn recommend_api_url(&self) -> &str {
        &self.recommend_api_url
    }

    fn request_timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    fn page_size(&self) -> usize {
        self.page_size
    }

    fn featured_limit(&self) -> usize {
        self.featured_limit
    }
}
