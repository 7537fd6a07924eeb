//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use mini_commerce::catalog::Catalog;
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::logging;
use crate::output::Output;

/// Config file names searched from the working directory upwards.
const CONFIG_NAMES: [&str; 3] = ["mini.toml", ".mini.toml", "mini.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Products for this run.
    pub catalog: Catalog,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load config, install logging, then load the catalog.
    pub fn load(config_path: Option<&str>, output: Output, verbose: bool) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, source) = match config_path {
            Some(path) => (CliConfig::load(Path::new(path))?, Some(PathBuf::from(path))),
            None => match Self::find_config(&cwd)? {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            },
        };

        logging::init(&config.log, verbose);
        match &source {
            Some(path) => debug!(path = %path.display(), "loaded config"),
            None => debug!("no config file found, using defaults"),
        }

        let catalog = config
            .catalog
            .load(|path| resolve_path(&cwd, path))?;
        info!(products = catalog.len(), "catalog ready");

        Ok(Self {
            config,
            output,
            catalog,
            cwd,
        })
    }

    /// Find config file in directory tree.
    ///
    /// The first file that exists wins; a malformed one is an error rather
    /// than a reason to keep searching.
    fn find_config(start: &Path) -> Result<Option<(CliConfig, PathBuf)>> {
        let mut current = start.to_path_buf();
        loop {
            for name in CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    let config = CliConfig::load(&config_path)?;
                    return Ok(Some((config, config_path)));
                }
            }

            if !current.pop() {
                break;
            }
        }

        Ok(None)
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve_path(&self.cwd, path)
    }
}

fn resolve_path(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}
