//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use flame_cache::{Cache, Slot};
use flame_commerce::cart::{cart_slot_named, CartSnapshot, CartStore};

use crate::config::{AppConfig, Backend, CONFIG_FILE_NAMES};
use crate::output::Output;

/// The cart store the CLI works with.
pub type Store = CartStore<Slot<CartSnapshot>>;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: AppConfig,
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

        let (config, config_path) = if let Some(path) = config_path {
            let path = resolve(&cwd, Path::new(path));
            (AppConfig::load(&path)?, Some(path))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((path, config)) => (config, Some(path)),
                None => (AppConfig::default(), None),
            }
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(PathBuf, AppConfig)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = AppConfig::load(&config_path) {
                        return Some((config_path, config));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Directory relative paths in the config are resolved against: the config
    /// file's directory, or the working directory when there is none.
    pub fn base_dir(&self) -> &Path {
        self.config_path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(&self.cwd)
    }

    /// Directory the file backend writes to.
    pub fn storage_dir(&self) -> PathBuf {
        resolve(self.base_dir(), Path::new(&self.config.storage.dir))
    }

    /// Open the cart store on the configured backend.
    pub fn open_store(&self) -> Result<Store> {
        let currency = self.config.currency()?;

        let cache = match self.config.storage.backend {
            Backend::File => {
                let dir = self.storage_dir();
                self.output
                    .debug(&format!("Cart storage: {}", dir.display()));
                Cache::open(&dir)
                    .with_context(|| format!("Failed to open cart storage: {}", dir.display()))?
            }
            Backend::Memory => {
                self.output.debug("Cart storage: memory");
                Cache::memory()
            }
        };

        let slot = cart_slot_named(cache, self.config.storage.namespace.clone());
        Ok(CartStore::open_with_currency(slot, currency))
    }
}

/// Resolve a path relative to `base`.
fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
