//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use plant_observability::LogConfig;
use plant_views::{Locale, DEFAULT_PAGE_SIZE};
use serde::{Deserialize, Serialize};

/// Contents of `plant.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlantConfig {
    /// Backend connection.
    #[serde(default)]
    pub api: ApiConfig,

    /// Storefront behaviour.
    #[serde(default)]
    pub storefront: StorefrontConfig,

    /// Logging.
    #[serde(default)]
    pub log: LogConfig,
}

impl PlantConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Problems that make the config unusable, then advisories.
    pub fn check(&self) -> (Vec<String>, Vec<String>) {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if plant_data::StoreClient::with_base_url(&self.api.base_url, self.api.timeout_secs)
            .is_err()
        {
            errors.push(format!("api.base_url '{}' is not a valid URL", self.api.base_url));
        }
        if self.api.timeout_secs == 0 {
            errors.push("api.timeout_secs must be at least 1".to_string());
        }
        if self.storefront.admin_page_size == 0 {
            errors.push("storefront.admin_page_size must be at least 1".to_string());
        }
        if !self.storefront.share_origin.starts_with("http") {
            warnings.push(format!(
                "storefront.share_origin '{}' does not look like an http(s) origin",
                self.storefront.share_origin
            ));
        }
        if self.api.timeout_secs > 120 {
            warnings.push("api.timeout_secs above 120 makes failures slow to surface".to_string());
        }

        (errors, warnings)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Backend connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    plant_data::DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Storefront behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Language of notices.
    #[serde(default)]
    pub locale: Locale,

    /// Rows per page in `plant products list`.
    #[serde(default = "default_page_size")]
    pub admin_page_size: usize,

    /// Public origin used for share links.
    #[serde(default = "default_share_origin")]
    pub share_origin: String,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_share_origin() -> String {
    "http://localhost:5173".to_string()
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            admin_page_size: default_page_size(),
            share_origin: default_share_origin(),
        }
    }
}

/// Generate a default plant.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Plant shop CLI configuration

[api]
base_url = "{base_url}"
timeout_secs = 10

[storefront]
locale = "vi"            # vi | en
admin_page_size = {page_size}
share_origin = "http://localhost:5173"

[log]
level = "warn"           # trace | debug | info | warn | error
format = "human"         # human | json
"#,
        base_url = plant_data::DEFAULT_BASE_URL,
        page_size = DEFAULT_PAGE_SIZE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use plant_observability::{LogFormat, LogLevel};

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: PlantConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, PlantConfig::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: PlantConfig = toml::from_str(
            r#"
            [storefront]
            locale = "en"

            [log]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.storefront.locale, Locale::En);
        assert_eq!(config.storefront.admin_page_size, 10);
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.log.format, LogFormat::Json);
        assert_eq!(config.log.level, LogLevel::Warn);
    }

    #[test]
    fn test_save_and_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plant.json");
        let mut config = PlantConfig::default();
        config.api.timeout_secs = 3;

        config.save(&path).unwrap();
        assert_eq!(PlantConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_check_flags_bad_values() {
        let mut config = PlantConfig::default();
        assert_eq!(config.check(), (vec![], vec![]));

        config.api.base_url = "not a url".into();
        config.storefront.admin_page_size = 0;
        config.storefront.share_origin = "shop".into();
        let (errors, warnings) = config.check();
        assert_eq!(errors.len(), 2);
        assert_eq!(warnings.len(), 1);
    }
}
