//! Application Configuration
//!
//! Build-time settings baked in through `option_env!`.

use std::fmt;
use std::str::FromStr;

const DEFAULT_API_HOST: &str = "http://localhost:8080";
const DEFAULT_TOKEN_KEY: &str = "token";

/// Where pagination happens for the breed list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaginationMode {
    /// Fetch everything once, slice locally
    #[default]
    Client,
    /// Fetch one page per cursor change
    Server,
}

impl FromStr for PaginationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "client" => Ok(Self::Client),
            "server" => Ok(Self::Server),
            other => Err(format!("unknown pagination mode: {other}")),
        }
    }
}

impl fmt::Display for PaginationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client => f.write_str("client"),
            Self::Server => f.write_str("server"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_host: String,
    pub pagination_mode: PaginationMode,
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
    /// Page size requested when the whole catalog is fetched for client-side paging
    pub client_fetch_size: usize,
    /// localStorage key holding the bearer token
    pub token_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_host: DEFAULT_API_HOST.to_string(),
            pagination_mode: PaginationMode::default(),
            default_page_size: 12,
            page_size_options: vec![6, 12, 24],
            client_fetch_size: 1000,
            token_key: DEFAULT_TOKEN_KEY.to_string(),
        }
    }
}

impl AppConfig {
    /// Config from `SHELTER_API_HOST` / `SHELTER_PAGINATION` captured at compile time
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("SHELTER_API_HOST"), option_env!("SHELTER_PAGINATION"))
    }

    fn from_values(api_host: Option<&str>, pagination: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(host) = api_host.map(str::trim).filter(|h| !h.is_empty()) {
            config.api_host = host.to_string();
        }
        if let Some(raw) = pagination {
            match raw.parse() {
                Ok(mode) => config.pagination_mode = mode,
                Err(e) => log::warn!("{e}, falling back to {}", config.pagination_mode),
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_host, "http://localhost:8080");
        assert_eq!(config.pagination_mode, PaginationMode::Client);
        assert!(config.page_size_options.contains(&config.default_page_size));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_values(Some(" https://api.schronisko.pl "), Some("Server"));
        assert_eq!(config.api_host, "https://api.schronisko.pl");
        assert_eq!(config.pagination_mode, PaginationMode::Server);
    }

    #[test]
    fn test_unknown_mode_keeps_default() {
        let config = AppConfig::from_values(Some(""), Some("hybrid"));
        assert_eq!(config.api_host, "http://localhost:8080");
        assert_eq!(config.pagination_mode, PaginationMode::Client);
    }
}
