//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use plant_data::StoreClient;
use plant_views::adapters::{SessionAuth, SharedCart};
use plant_views::{Locale, Ports};

use crate::config::PlantConfig;
use crate::output::{ConsoleNotifier, LoginHint, Output, SpinnerBusy};
use crate::store;

/// Config file names searched from the working directory upwards.
pub const CONFIG_NAMES: [&str; 3] = ["plant.toml", ".plant.toml", "plant.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: PlantConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = PathBuf::from(path);
                (PlantConfig::load(&path)?, Some(path))
            }
            None => match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (PlantConfig::default(), None),
            },
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(PlantConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = PlantConfig::load(&config_path) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    pub fn locale(&self) -> Locale {
        self.config.storefront.locale
    }

    /// HTTP client for the configured backend.
    pub fn client(&self) -> Result<StoreClient> {
        StoreClient::with_base_url(&self.config.api.base_url, self.config.api.timeout_secs)
            .with_context(|| format!("Invalid api.base_url: {}", self.config.api.base_url))
    }

    /// Ports wired to the terminal, the stored session and `cart`.
    pub fn ports(&self, cart: SharedCart) -> Result<Ports> {
        let session = store::load_session(&self.session_path()?)?;
        Ok(Ports::default()
            .with_auth(Arc::new(SessionAuth::new(session)))
            .with_cart(Arc::new(cart))
            .with_busy(Arc::new(SpinnerBusy::new(self.output.clone(), "Loading...")))
            .with_notifier(Arc::new(ConsoleNotifier::new(self.output.clone())))
            .with_navigator(Arc::new(LoginHint::new(self.output.clone()))))
    }

    /// Directory holding the session and cart files.
    pub fn data_dir(&self) -> Result<PathBuf> {
        let dir = match std::env::var_os("PLANT_DATA_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => dirs_path().join("plant-cli"),
        };
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create data directory: {}", dir.display()))?;
        Ok(dir)
    }

    pub fn session_path(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join("session.json"))
    }

    pub fn cart_path(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join("cart.json"))
    }
}

/// Get the platform-specific data directory.
fn dirs_path() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".local").join("share")
    } else {
        std::env::temp_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(
            root.path().join(".plant.toml"),
            "[storefront]\nadmin_page_size = 25\n",
        )
        .unwrap();

        let (config, path) = Context::find_config(&nested).unwrap();
        assert_eq!(config.storefront.admin_page_size, 25);
        assert_eq!(path, root.path().join(".plant.toml"));
    }

    #[test]
    fn test_nearest_config_wins() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("shop");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.path().join("plant.toml"), "[api]\ntimeout_secs = 1\n").unwrap();
        std::fs::write(nested.join("plant.json"), r#"{"api": {"timeout_secs": 2}}"#).unwrap();

        let (config, _) = Context::find_config(&nested).unwrap();
        assert_eq!(config.api.timeout_secs, 2);
    }
}
