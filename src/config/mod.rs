//! Configuration for the `jito-searcher` application.
//!
//! Values come from a TOML file (created with defaults on first run), then
//! `JITO_*` environment variables, then command-line arguments.

mod defaults;
mod loader;

pub use defaults::{DEFAULT_BLOCK_ENGINE_URL, SearcherConfig};
pub use loader::{get_default_config, load_configuration, load_configuration_with_env, write_config_to};
