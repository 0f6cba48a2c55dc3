//! Format registry for container serialization
//!
//! Each format implements the `Formatter` trait and is registered with
//! `FormatRegistry` under its name.

use crate::diwire::ast::Container;
use std::collections::HashMap;
use thiserror::Error;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Trait for container formatters
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "dsl", "tag")
    fn name(&self) -> &str;

    /// Serialize a container to this format
    fn serialize(&self, container: &Container) -> Result<String, FormatError>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }
}

/// Registry of container formatters
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter
    ///
    /// If a formatter with the same name already exists, it will be replaced.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    /// Get a formatter by name
    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize a container using the specified format
    pub fn serialize(&self, container: &Container, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(container)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with the built-in formatters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(super::DslFormatter);
        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);
        registry.register(super::TagFormatter);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diwire::ast::{Import, Resolver};

    struct TestFormatter;
    impl Formatter for TestFormatter {
        fn name(&self) -> &str {
            "test"
        }
        fn serialize(&self, _container: &Container) -> Result<String, FormatError> {
            Ok("test output".to_string())
        }
        fn description(&self) -> &str {
            "Test formatter"
        }
    }

    fn container() -> Container {
        Container::new(
            vec![Import::from_package("my/pkg")],
            Resolver::new("pkg", "Main", Vec::<String>::new()),
        )
    }

    #[test]
    fn test_registry_creation() {
        let registry = FormatRegistry::new();
        assert_eq!(registry.formatters.len(), 0);
    }

    #[test]
    fn test_registry_register() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormatter);

        assert!(registry.has("test"));
        assert_eq!(registry.list_formats(), vec!["test"]);
        assert_eq!(
            registry.get("test").map(|f| f.description()),
            Some("Test formatter")
        );
    }

    #[test]
    fn test_registry_serialize() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormatter);

        assert_eq!(
            registry.serialize(&container(), "test"),
            Ok("test output".to_string())
        );
    }

    #[test]
    fn test_registry_format_not_found() {
        let registry = FormatRegistry::new();
        let err = registry.serialize(&container(), "nope").unwrap_err();
        assert_eq!(err, FormatError::FormatNotFound("nope".to_string()));
        assert_eq!(err.to_string(), "Format 'nope' not found");
    }

    #[test]
    fn test_registry_defaults() {
        let registry = FormatRegistry::default();
        assert_eq!(registry.list_formats(), vec!["dsl", "json", "tag", "yaml"]);
    }
}
