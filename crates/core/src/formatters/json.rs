use crate::Result;
use crate::profile::Profile;
use crate::profiler::Extraction;
use serde::Serialize;

/// Configuration for JSON output
#[derive(Debug, Clone, Default)]
pub struct JsonConfig {
    /// Pretty print JSON output
    pub pretty: bool,
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    if pretty { Ok(serde_json::to_string_pretty(value)?) } else { Ok(serde_json::to_string(value)?) }
}

/// Convert profiles to a JSON array of `{name, role, company, quote, confidence}` objects
pub fn convert_to_json(profiles: &[Profile], config: &JsonConfig) -> Result<String> {
    to_json(profiles, config.pretty)
}

/// Convert a whole extraction (source, title, selector, counts, profiles) to JSON
pub fn extraction_to_json(extraction: &Extraction, pretty: bool) -> Result<String> {
    to_json(extraction, pretty)
}

/// JSON formatter with configurable options
pub struct JsonFormatter {
    config: JsonConfig,
}

impl JsonFormatter {
    pub fn new(config: JsonConfig) -> Self {
        Self { config }
    }

    pub fn convert(&self, profiles: &[Profile]) -> Result<String> {
        convert_to_json(profiles, &self.config)
    }

    pub fn extraction(&self, extraction: &Extraction) -> Result<String> {
        extraction_to_json(extraction, self.config.pretty)
    }
}
