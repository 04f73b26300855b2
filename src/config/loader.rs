use std::{collections::HashMap, fs, fs::File, io::Write, path::Path};

use anyhow::{Context, Result};
use config::{Config, Environment};
use log::{debug, info};

use super::defaults::SearcherConfig;

pub fn get_default_config() -> &'static str {
    include_str!("../../config/config.toml")
}

/// Loads the `[searcher]` table from `path`, then applies `JITO_*`
/// environment overrides (`JITO_SEARCHER__MAX_RETRIES=2`). A default file is
/// written first when `path` does not exist.
pub fn load_configuration(path: &Path) -> Result<SearcherConfig> {
    load_configuration_with_env(path, None)
}

/// Same as [`load_configuration`], reading overrides from `env` instead of the
/// process environment when it is `Some`.
pub fn load_configuration_with_env(path: &Path, env: Option<HashMap<String, String>>) -> Result<SearcherConfig> {
    if !path.exists() {
        write_config_to(path, get_default_config()).context("Could not create default config")?;
        info!(path:% = path.display(); "Created new configuration file");
    }

    let filename = path.to_str().context("Invalid config file path")?;

    let cfg = Config::builder()
        .add_source(config::File::with_name(filename))
        .add_source(
            Environment::with_prefix("JITO")
                .prefix_separator("_")
                .separator("__")
                .source(env),
        )
        .build()
        .context("Could not build config")?;

    match cfg.get::<SearcherConfig>(SearcherConfig::main_key_prefix()) {
        Ok(config) => {
            debug!(path:% = path.display(); "Configuration loaded");
            Ok(config)
        },
        Err(config::ConfigError::NotFound(_)) => Ok(SearcherConfig::default()),
        Err(e) => Err(e).context("Invalid searcher configuration"),
    }
}

pub fn write_config_to(path: &Path, source: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create parent directories")?;
    };

    let mut file = File::create(path).context("Failed to create config file")?;
    file.write_all(source.as_bytes())
        .context("Failed to write config content")?;
    file.write_all(b"\n").context("Failed to write newline")?;
    Ok(())
}
