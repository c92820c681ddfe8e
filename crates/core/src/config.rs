//! Runtime configuration for the collection API. Loaded from
//! `.artscope.toml` with defaults merged, then the `ARTSCOPE_API_KEY`
//! environment variable as the final override for the key.

use std::path::Path;

use tracing::{debug, warn};

/// Default object-endpoint base.
pub const DEFAULT_BASE_URL: &str = "https://api.harvardartmuseums.org";

/// Keys recognized in `.artscope.toml`.
const KNOWN_CONFIG_KEYS: &[&str] = &["api_key", "base_url", "page_size"];

/// API configuration.
#[derive(Clone)]
pub struct ApiConfig {
    pub base_url: String,
    /// Collection API key. None = every dispatch fails and is logged.
    pub api_key: Option<String>,
    /// Result page size per query.
    pub page_size: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string(), api_key: None, page_size: 15 }
    }
}

impl ApiConfig {
    /// Load configuration from `.artscope.toml` under `root`.
    ///
    /// A missing or unparseable file yields defaults with a warning.
    /// Unknown keys are warned about with the known-key list.
    pub fn load(root: &Path) -> Self {
        let mut config = Self::default();
        let config_path = root.join(".artscope.toml");

        if config_path.exists() {
            debug!("Loading .artscope.toml");
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match content.parse::<toml::Table>() {
                    Ok(table) => config.apply_table(&table),
                    Err(e) => warn!(error = %e, "Could not parse .artscope.toml — using defaults"),
                },
                Err(e) => warn!(error = %e, "Could not read .artscope.toml — using defaults"),
            }
        }

        if let Ok(key) = std::env::var("ARTSCOPE_API_KEY") {
            if !key.is_empty() {
                config.api_key = Some(key);
            }
        }

        config
    }

    fn apply_table(&mut self, table: &toml::Table) {
        for key in table.keys() {
            if !KNOWN_CONFIG_KEYS.contains(&key.as_str()) {
                warn!(
                    key = key.as_str(),
                    "Unknown key in .artscope.toml (known keys: {})",
                    KNOWN_CONFIG_KEYS.join(", ")
                );
            }
        }

        if let Some(url) = table.get("base_url").and_then(|v| v.as_str()) {
            self.base_url = url.trim_end_matches('/').to_string();
        }

        if let Some(key) = table.get("api_key").and_then(|v| v.as_str()) {
            if !key.is_empty() {
                self.api_key = Some(key.to_string());
            }
        }

        if let Some(size) = table.get("page_size").and_then(|v| v.as_integer()) {
            if size > 0 {
                self.page_size = size as u32;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_overrides_merge_over_defaults() {
        let table: toml::Table =
            "api_key = \"secret\"\npage_size = 30".parse().unwrap();
        let mut config = ApiConfig::default();
        config.apply_table(&table);
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.page_size, 30);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn empty_key_and_bad_page_size_are_ignored() {
        let table: toml::Table = "api_key = \"\"\npage_size = -1".parse().unwrap();
        let mut config = ApiConfig::default();
        config.apply_table(&table);
        assert!(config.api_key.is_none());
        assert_eq!(config.page_size, 15);
    }

    #[test]
    fn base_url_is_stripped_of_trailing_slash() {
        let table: toml::Table =
            "base_url = \"https://api.example.org/\"".parse().unwrap();
        let mut config = ApiConfig::default();
        config.apply_table(&table);
        assert_eq!(config.base_url, "https://api.example.org");
    }
}
