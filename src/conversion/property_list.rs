//! `key,value,unit,annotation` lines to a JSON array of property objects

use crate::conversion::config::ConverterConfig;
use crate::conversion::stats::ConversionStats;
use crate::conversion::{Converted, Converter};
use crate::error::ConversionResult;
use crate::parser::Records;
use serde::{Deserialize, Serialize};

/// Fields required on every property line
pub const PROPERTY_FIELDS: usize = 4;

/// A single property with optional unit and annotation.
///
/// Optional fields are `None` when their column was empty and are left out
/// of the serialized object entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub key: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
}

impl PropertyRecord {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            unit: None,
            annotation: None,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = non_empty(unit.into());
        self
    }

    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = non_empty(annotation.into());
        self
    }

    /// Build a record from the four positional fields
    pub fn from_fields([key, value, unit, annotation]: [&str; PROPERTY_FIELDS]) -> Self {
        Self::new(key, value)
            .with_unit(unit)
            .with_annotation(annotation)
    }

    /// The four positional fields, absent ones as empty strings
    pub fn to_fields(&self) -> [&str; PROPERTY_FIELDS] {
        [
            self.key.as_str(),
            self.value.as_str(),
            self.unit.as_deref().unwrap_or_default(),
            self.annotation.as_deref().unwrap_or_default(),
        ]
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Converts property lines into an ordered JSON array
#[derive(Debug, Clone, Default)]
pub struct PropertyListConverter {
    config: ConverterConfig,
}

impl PropertyListConverter {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }
}

impl Converter for PropertyListConverter {
    type Document = Vec<PropertyRecord>;

    const NAME: &'static str = "property-list";

    fn config(&self) -> &ConverterConfig {
        &self.config
    }

    fn convert(&self, input: &str) -> ConversionResult<Converted<Vec<PropertyRecord>>> {
        let mut properties = Vec::new();
        let mut records = Records::new(input, &self.config);

        for record in records.by_ref() {
            let fields = record?.require::<PROPERTY_FIELDS>()?;
            properties.push(PropertyRecord::from_fields(fields));
        }

        let mut stats = ConversionStats::new();
        stats.records = properties.len();
        stats.blank_lines = records.blank_lines();
        stats.lines_read = stats.records + stats.blank_lines;
        Ok(Converted::new(properties, stats))
    }
}
