//! # Catalog Configuration
//!
//! Describes the store and its starting inventory.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     STOREFRONT_STORE_NAME="Corner Shop"                                │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, else STOREFRONT_CONFIG, else                      │
//! │     ~/.config/storefront/storefront.toml (Linux)                       │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     Built-in demo inventory                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [store]
//! name = "Best Buy"
//!
//! [[products]]
//! name = "MacBook Air M2"
//! price = 1450.0
//! quantity = 100
//! promotion = { kind = "second_item_half_price" }
//!
//! [[products]]
//! name = "Windows License"
//! price = 125.0
//! kind = "non_stocked"
//!
//! [[products]]
//! name = "Shipping"
//! price = 10.0
//! quantity = 250
//! kind = "limited"
//! maximum = 1
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use storefront_core::{Product, Promotion, Store};
use tracing::{debug, info, warn};

use crate::error::{CliError, CliResult};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "STOREFRONT_CONFIG";

/// Environment variable overriding the store name.
pub const STORE_NAME_ENV: &str = "STOREFRONT_STORE_NAME";

// =============================================================================
// Store Settings
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Shown in the menu banner.
    #[serde(default = "default_store_name")]
    pub name: String,
}

fn default_store_name() -> String {
    "Best Buy".to_string()
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            name: default_store_name(),
        }
    }
}

// =============================================================================
// Product Entries
// =============================================================================

/// Which product constructor an entry goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    #[default]
    Plain,
    NonStocked,
    Limited,
}

/// One product of the starting inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductEntry {
    pub name: String,
    pub price: f64,

    /// Ignored for non-stocked entries.
    #[serde(default)]
    pub quantity: i64,

    #[serde(default)]
    pub kind: EntryKind,

    /// Required for limited entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<Promotion>,
}

impl ProductEntry {
    fn plain(name: &str, price: f64, quantity: i64, promotion: Option<Promotion>) -> Self {
        ProductEntry {
            name: name.to_string(),
            price,
            quantity,
            kind: EntryKind::Plain,
            maximum: None,
            promotion,
        }
    }

    /// Builds the product through the core constructors.
    pub fn to_product(&self) -> CliResult<Product> {
        let mut product = match self.kind {
            EntryKind::Plain => Product::new(self.name.as_str(), self.price, self.quantity)?,
            EntryKind::NonStocked => {
                if self.quantity != 0 {
                    warn!(product = %self.name, "Ignoring quantity of non-stocked product");
                }
                Product::non_stocked(self.name.as_str(), self.price)?
            }
            EntryKind::Limited => {
                let maximum = self.maximum.ok_or_else(|| {
                    CliError::InvalidConfig(format!(
                        "limited product '{}' needs a maximum",
                        self.name
                    ))
                })?;
                Product::limited(self.name.as_str(), self.price, self.quantity, maximum)?
            }
        };

        if let Some(promotion) = &self.promotion {
            product.set_promotion(promotion.clone());
        }
        Ok(product)
    }
}

/// Where the catalog file comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ConfigSource {
    /// Named by the user; must exist.
    Explicit(PathBuf),
    /// Platform config dir; may be absent.
    Default(PathBuf),
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete storefront configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub products: Vec<ProductEntry>,
}

impl Default for StorefrontConfig {
    /// The demo inventory: three stocked products with one promotion each,
    /// a software licence and a shipping fee limited to one per order.
    fn default() -> Self {
        StorefrontConfig {
            store: StoreSettings::default(),
            products: vec![
                ProductEntry::plain(
                    "MacBook Air M2",
                    1450.0,
                    100,
                    Some(Promotion::second_item_half_price()),
                ),
                ProductEntry::plain(
                    "Bose QuietComfort Earbuds",
                    250.0,
                    500,
                    Some(Promotion::buy_two_get_one_free()),
                ),
                ProductEntry::plain(
                    "Google Pixel 7",
                    500.0,
                    250,
                    Some(Promotion::percentage_discount("30% off!", 30.0)),
                ),
                ProductEntry {
                    name: "Windows License".to_string(),
                    price: 125.0,
                    quantity: 0,
                    kind: EntryKind::NonStocked,
                    maximum: None,
                    promotion: None,
                },
                ProductEntry {
                    name: "Shipping".to_string(),
                    price: 10.0,
                    quantity: 250,
                    kind: EntryKind::Limited,
                    maximum: Some(1),
                    promotion: None,
                },
            ],
        }
    }
}

impl StorefrontConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (storefront.toml)
    /// 3. Environment variables
    ///
    /// A file named by `--config` or `STOREFRONT_CONFIG` must exist. Only the
    /// platform default location may be absent.
    pub fn load(config_path: Option<PathBuf>) -> CliResult<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// [`load`](Self::load) with the environment supplied by `env`.
    pub fn load_with(
        config_path: Option<PathBuf>,
        env: impl Fn(&str) -> Option<String>,
    ) -> CliResult<Self> {
        let mut config = Self::default();

        match Self::resolve_path(config_path, &env) {
            Some(ConfigSource::Explicit(path)) => {
                if !path.exists() {
                    return Err(CliError::InvalidConfig(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                config = Self::read_file(&path)?;
            }
            Some(ConfigSource::Default(path)) if path.exists() => {
                config = Self::read_file(&path)?;
            }
            Some(ConfigSource::Default(path)) => {
                debug!(?path, "Config file not found, using demo inventory");
            }
            None => debug!("No config directory, using demo inventory"),
        }

        config.apply_env_overrides(&env);
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML document.
    pub fn from_toml(contents: &str) -> CliResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Checks the settings that the core constructors do not cover.
    pub fn validate(&self) -> CliResult<()> {
        if self.store.name.trim().is_empty() {
            return Err(CliError::InvalidConfig("store name is empty".into()));
        }

        for entry in &self.products {
            if entry.kind == EntryKind::Limited && entry.maximum.is_none() {
                return Err(CliError::InvalidConfig(format!(
                    "limited product '{}' needs a maximum",
                    entry.name
                )));
            }
            if entry.kind != EntryKind::Limited && entry.maximum.is_some() {
                return Err(CliError::InvalidConfig(format!(
                    "maximum is only valid for limited products (on '{}')",
                    entry.name
                )));
            }
        }

        Ok(())
    }

    /// Builds the store from the configured inventory, in file order.
    pub fn build_store(&self) -> CliResult<Store> {
        let products = self
            .products
            .iter()
            .map(ProductEntry::to_product)
            .collect::<CliResult<Vec<_>>>()?;

        info!(
            store = %self.store.name,
            products = products.len(),
            "Catalog loaded"
        );
        Ok(Store::new(products))
    }

    fn resolve_path(
        config_path: Option<PathBuf>,
        env: &impl Fn(&str) -> Option<String>,
    ) -> Option<ConfigSource> {
        config_path
            .or_else(|| env(CONFIG_PATH_ENV).map(PathBuf::from))
            .map(ConfigSource::Explicit)
            .or_else(|| Self::default_config_path().map(ConfigSource::Default))
    }

    fn read_file(path: &Path) -> CliResult<Self> {
        info!(?path, "Loading catalog from file");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    fn apply_env_overrides(&mut self, env: &impl Fn(&str) -> Option<String>) {
        if let Some(name) = env(STORE_NAME_ENV) {
            debug!(name = %name, "Overriding store name from environment");
            self.store.name = name;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "storefront", "storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }
}
