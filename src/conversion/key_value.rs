//! `key,value` lines to a JSON object

use crate::conversion::config::ConverterConfig;
use crate::conversion::stats::ConversionStats;
use crate::conversion::{Converted, Converter};
use crate::error::ConversionResult;
use crate::parser::Records;
use serde::Serialize;
use serde_json::{Map, Value};

/// Fields required on every key/value line
pub const KEY_VALUE_FIELDS: usize = 2;

/// One parsed `key,value` line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyValueEntry<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

/// String to string mapping, ordered by first appearance of each key
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct KeyValueMap(Map<String, Value>);

impl KeyValueMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning true when it replaced an existing key.
    ///
    /// A replaced key keeps its original position.
    pub fn merge(&mut self, entry: KeyValueEntry<'_>) -> bool {
        self.0
            .insert(entry.key.to_string(), Value::String(entry.value.to_string()))
            .is_some()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str().unwrap_or_default()))
    }
}

/// Converts `key,value` lines into a single JSON object
#[derive(Debug, Clone, Default)]
pub struct KeyValueConverter {
    config: ConverterConfig,
}

impl KeyValueConverter {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }
}

impl Converter for KeyValueConverter {
    type Document = KeyValueMap;

    const NAME: &'static str = "key-value";

    fn config(&self) -> &ConverterConfig {
        &self.config
    }

    fn convert(&self, input: &str) -> ConversionResult<Converted<KeyValueMap>> {
        let mut map = KeyValueMap::new();
        let mut stats = ConversionStats::new();
        let mut records = Records::new(input, &self.config);

        for record in records.by_ref() {
            let record = record?;
            let [key, value] = record.require::<KEY_VALUE_FIELDS>()?;
            if map.merge(KeyValueEntry { key, value }) {
                tracing::trace!(line = record.line(), key, "key overwritten");
                stats.duplicate_keys += 1;
            }
            stats.records += 1;
        }

        stats.blank_lines = records.blank_lines();
        stats.lines_read = stats.records + stats.blank_lines;
        Ok(Converted::new(map, stats))
    }
}
