//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use mini_commerce::catalog::Catalog;
use mini_commerce::search::{CategoryFilter, QueryParams, SortMode};
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where products come from.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Listing parameters a session starts with.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

impl CliConfig {
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
}

/// Catalog source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON or TOML product file. The built-in catalog is used when unset.
    #[serde(default)]
    pub path: Option<String>,
}

impl CatalogConfig {
    /// Load the catalog from `path`, or fall back to the built-in one.
    pub fn load(&self, resolve: impl Fn(&str) -> std::path::PathBuf) -> Result<Catalog> {
        let Some(path) = self.path.as_deref() else {
            return Ok(Catalog::builtin());
        };
        let path = resolve(path);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

        if is_json(&path) {
            Catalog::from_json_str(&content)
                .with_context(|| format!("Failed to parse JSON catalog: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML catalog: {}", path.display()))
        }
    }
}

/// Initial listing parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Category name or "All".
    #[serde(default)]
    pub category: CategoryFilter,

    /// "none", "priceAsc" or "priceDesc".
    #[serde(default)]
    pub sort: SortMode,
}

impl DefaultsConfig {
    pub fn params(&self) -> QueryParams {
        QueryParams::new()
            .with_category(self.category)
            .with_sort(self.sort)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default)]
    pub filter: Option<String>,
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}
