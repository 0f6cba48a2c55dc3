//! File processing API for the diwire format
//!
//! Glue between the parser and the format registry: take a source (or a path), parse
//! it, and render the container in the requested format.
//!
//! ```rust,ignore
//! use diwire::diwire::formats::FormatRegistry;
//! use diwire::diwire::processor::process_file;
//!
//! let registry = FormatRegistry::with_defaults();
//! let output = process_file("app.diwire", "json", &registry)?;
//! ```

use crate::diwire::formats::{FormatError, FormatRegistry};
use crate::diwire::lexing::{tokenize, Token};
use crate::diwire::parsing::{parse, ParseError};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessingError {
    #[error("{path}: {message}")]
    Io { path: String, message: String },

    /// Parse failure, with a 1-based position when one is known
    #[error("{path}:{line}:{column}: {error}")]
    Parse {
        path: String,
        line: usize,
        column: usize,
        error: ParseError,
    },

    #[error(transparent)]
    Format(#[from] FormatError),
}

impl ProcessingError {
    fn parse(path: &str, source: &str, error: ParseError) -> Self {
        let (line, column) = error.line_col(source).unwrap_or((1, 1));
        ProcessingError::Parse {
            path: path.to_string(),
            line,
            column,
            error,
        }
    }
}

const SOURCE_NAME: &str = "<source>";

/// Parse `source` and render it with the named format
pub fn process_source(
    source: &str,
    format: &str,
    registry: &FormatRegistry,
) -> Result<String, ProcessingError> {
    process_named(SOURCE_NAME, source, format, registry)
}

/// Read, parse and render a diwire file
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    format: &str,
    registry: &FormatRegistry,
) -> Result<String, ProcessingError> {
    let path = file_path.as_ref().display().to_string();
    let source = read_source(file_path.as_ref())?;
    process_named(&path, &source, format, registry)
}

/// Dump the tokens of a diwire file, one per line
pub fn tokens_for_file<P: AsRef<Path>>(file_path: P) -> Result<String, ProcessingError> {
    let path = file_path.as_ref().display().to_string();
    let source = read_source(file_path.as_ref())?;
    tokens_named(&path, &source)
}

/// Dump the tokens of `source`, one per line: `Kind` or `Kind(value)`
pub fn tokens_for(source: &str) -> Result<String, ProcessingError> {
    tokens_named(SOURCE_NAME, source)
}

fn process_named(
    path: &str,
    source: &str,
    format: &str,
    registry: &FormatRegistry,
) -> Result<String, ProcessingError> {
    // Fail on an unknown format before doing any work
    if !registry.has(format) {
        return Err(FormatError::FormatNotFound(format.to_string()).into());
    }

    let container = parse(source).map_err(|e| ProcessingError::parse(path, source, e))?;
    tracing::debug!(path, format, "rendering container");

    Ok(registry.serialize(&container, format)?)
}

fn tokens_named(path: &str, source: &str) -> Result<String, ProcessingError> {
    let tokens =
        tokenize(source).map_err(|e| ProcessingError::parse(path, source, e.into()))?;

    let mut output = String::new();
    for (token, value) in tokens {
        if token.has_value() {
            output.push_str(&format!("{token}({value})\n"));
        } else {
            output.push_str(&format!("{token}\n"));
        }
    }
    Ok(output)
}

fn read_source(path: &Path) -> Result<String, ProcessingError> {
    fs::read_to_string(path).map_err(|e| ProcessingError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
