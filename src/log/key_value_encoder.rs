use std::fmt::Write as _;

use log::{
    Record,
    kv::{self, Key, Value, VisitSource},
};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::encode::{Encode, Write};
use serde::Deserialize;

const DEFAULT_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} {l} {t} - {m}";

#[derive(Debug, Deserialize)]
pub struct KeyValueEncoderConfig {
    pub pattern: Option<String>,
}

/// Pattern encoder that appends the record's key-values as ` key=value`,
/// then a newline.
#[derive(Debug)]
pub struct KeyValueEncoder {
    pattern: PatternEncoder,
}

impl KeyValueEncoder {
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: PatternEncoder::new(pattern),
        }
    }
}

impl Encode for KeyValueEncoder {
    fn encode(&self, w: &mut dyn Write, record: &Record) -> anyhow::Result<()> {
        self.pattern.encode(w, record)?;

        let mut pairs = PairCollector::default();
        if let Err(e) = record.key_values().visit(&mut pairs) {
            write!(pairs.line, " [kv error: {e}]")?;
        }
        pairs.line.push('\n');

        w.write_all(pairs.line.as_bytes())?;
        Ok(())
    }
}

#[derive(Default)]
struct PairCollector {
    line: String,
}

impl<'kvs> VisitSource<'kvs> for PairCollector {
    fn visit_pair(&mut self, key: Key<'kvs>, value: Value<'kvs>) -> Result<(), kv::Error> {
        write!(self.line, " {key}={value}").map_err(|_| kv::Error::msg("formatting failed"))
    }
}

pub struct KeyValueEncoderDeserializer;

impl log4rs::config::Deserialize for KeyValueEncoderDeserializer {
    type Trait = dyn Encode;
    type Config = KeyValueEncoderConfig;

    fn deserialize(
        &self,
        config: KeyValueEncoderConfig,
        _: &log4rs::config::Deserializers,
    ) -> anyhow::Result<Box<dyn Encode>> {
        let pattern = config.pattern.as_deref().unwrap_or(DEFAULT_PATTERN);
        Ok(Box::new(KeyValueEncoder::new(pattern)))
    }
}
