//! CLI configuration.

use std::path::Path;

use anyhow::{bail, Context, Result};
use flame_commerce::cart::CART_STORAGE_KEY;
use flame_commerce::catalog::MENU_CURRENCY;
use flame_commerce::Currency;
use serde::{Deserialize, Serialize};

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["flame.toml", ".flame.toml", "flame.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Where the cart is kept.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

impl AppConfig {
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

    /// The configured display currency.
    ///
    /// Menu prices are fixed in the catalog currency, so any other code is
    /// rejected.
    pub fn currency(&self) -> Result<Currency> {
        let Some(currency) = Currency::from_code(&self.display.currency) else {
            bail!("Unknown currency code: {}", self.display.currency);
        };
        if currency != MENU_CURRENCY {
            bail!(
                "display.currency is {} but the menu is priced in {}",
                currency,
                MENU_CURRENCY
            );
        }
        Ok(currency)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Storage backend kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// JSON files under `storage.dir`.
    #[default]
    File,
    /// Process memory; nothing survives the command.
    Memory,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::File => "file",
            Backend::Memory => "memory",
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: Backend,

    /// Directory for the file backend, relative to the config file.
    #[serde(default = "default_dir")]
    pub dir: String,

    /// Key the cart is stored under.
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

fn default_dir() -> String {
    ".flame".to_string()
}

fn default_namespace() -> String {
    CART_STORAGE_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            dir: default_dir(),
            namespace: default_namespace(),
        }
    }
}

/// Display configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// ISO currency code.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    MENU_CURRENCY.code().to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogConfig {
    /// Filter directive used when `FLAME_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

/// Generate a default flame.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Flamegrill CLI configuration

[storage]
backend = "file"          # "file" or "memory"
dir = "{dir}"
namespace = "{namespace}"

[display]
currency = "{currency}"

[log]
level = "{level}"         # overridden by FLAME_LOG or --verbose
"#,
        dir = default_dir(),
        namespace = default_namespace(),
        currency = default_currency(),
        level = default_level(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_parses_to_default() {
        let config: AppConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig = toml::from_str("[storage]\nbackend = \"memory\"\n").unwrap();
        assert_eq!(config.storage.backend, Backend::Memory);
        assert_eq!(config.storage.namespace, CART_STORAGE_KEY);
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_currency_must_match_menu() {
        let mut config = AppConfig::default();
        assert_eq!(config.currency().unwrap(), Currency::INR);

        config.display.currency = "usd".into();
        assert!(config.currency().is_err());

        config.display.currency = "XYZ".into();
        assert!(config.currency().is_err());
    }

    #[test]
    fn test_save_and_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flame.json");

        let mut config = AppConfig::default();
        config.storage.dir = "carts".into();
        config.save(&path).unwrap();

        assert_eq!(AppConfig::load(&path).unwrap(), config);
    }
}
