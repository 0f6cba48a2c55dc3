//! Output formats for parsed containers
//!
//! Formats are looked up by name in a [`FormatRegistry`]:
//!
//! - `dsl`: canonical diwire source
//! - `json`: pretty-printed JSON
//! - `yaml`: YAML
//! - `tag`: XML-like tag tree

pub mod dsl;
pub mod registry;
pub mod structured;
pub mod tag;

pub use dsl::DslFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use structured::{JsonFormatter, YamlFormatter};
pub use tag::TagFormatter;
