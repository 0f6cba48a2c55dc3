//! Canonical diwire text
//!
//! Delegates to the `Display` implementation of [`Container`], so the output parses
//! back to an equal container.

use super::registry::{FormatError, Formatter};
use crate::diwire::ast::Container;

pub struct DslFormatter;

impl Formatter for DslFormatter {
    fn name(&self) -> &str {
        "dsl"
    }

    fn serialize(&self, container: &Container) -> Result<String, FormatError> {
        Ok(container.to_string())
    }

    fn description(&self) -> &str {
        "Canonical diwire source"
    }
}
