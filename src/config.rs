//! API Configuration
//!
//! Base URL and key of the catalog service. Fixed at build time.

const DEFAULT_BASE_URL: &str = "https://kata-sweet-shop-management-system.onrender.com";
const DEFAULT_API_KEY: &str = "1234567890";

/// Header carrying the static key
pub const API_KEY_HEADER: &str = "API-Key";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_API_KEY)
    }
}

impl ApiConfig {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Defaults, overridden by `SWEET_API_BASE_URL` / `SWEET_API_KEY` at compile time
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("SWEET_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL),
            option_env!("SWEET_API_KEY").unwrap_or(DEFAULT_API_KEY),
        )
    }

    /// Absolute URL for an endpoint path (`/getsweets`)
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
