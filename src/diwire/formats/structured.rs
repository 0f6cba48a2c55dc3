//! Serde-backed formats

use super::registry::{FormatError, Formatter};
use crate::diwire::ast::Container;

/// Pretty-printed JSON
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, container: &Container) -> Result<String, FormatError> {
        serde_json::to_string_pretty(container)
            .map(|mut json| {
                json.push('\n');
                json
            })
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Container as pretty-printed JSON"
    }
}

/// YAML document
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, container: &Container) -> Result<String, FormatError> {
        serde_yaml::to_string(container).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Container as YAML"
    }
}
