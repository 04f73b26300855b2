pub mod key_value_encoder;

use std::path::Path;

use log::{debug, info};
use log4rs::{
    Config,
    config::{Deserializers, RawConfig},
};

use crate::log::key_value_encoder::KeyValueEncoderDeserializer;

pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

/// Initializes logging
///
/// A `log4rs.yml` in the working directory is used when present; otherwise
/// the embedded default sends everything at `info` and above to stderr.
pub fn init_logging() {
    let mut deserializers = Deserializers::default();
    deserializers.insert("key_value", KeyValueEncoderDeserializer);

    let path = Path::new(LOG_CONFIG_FILE);

    if path.exists() {
        match log4rs::init_file(path, deserializers) {
            Ok(_) => {
                info!(
                    path = LOG_CONFIG_FILE;
                    "Logging initialized from external configuration"
                );
                return;
            },
            Err(e) => {
                panic!("Failed to load external {}: {}", LOG_CONFIG_FILE, e);
            },
        }
    }

    let config = embedded_config(&deserializers);
    log4rs::init_config(config).expect("Failed to initialize logging from embedded config");

    debug!("Logging initialized from embedded defaults (no external log4rs.yml found)");
}

fn embedded_config(deserializers: &Deserializers) -> Config {
    let yaml_content = include_str!("../../resources/default_log4rs.yml");
    let raw_config: RawConfig =
        serde_yaml::from_str(yaml_content).expect("Embedded logging configuration is invalid YAML");

    let (appenders, errors) = raw_config.appenders_lossy(deserializers);
    if !errors.is_empty() {
        panic!("Errors parsing embedded appenders: {:?}", errors);
    }

    Config::builder()
        .appenders(appenders)
        .loggers(raw_config.loggers())
        .build(raw_config.root())
        .expect("Failed to build logging config")
}
