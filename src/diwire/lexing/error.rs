//! Lexical errors

use thiserror::Error;

/// A failure to turn input text into tokens
///
/// Offsets are byte offsets into the source where the offending unit starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("Invalid token {ch:?}")]
    InvalidCharacter { ch: char, offset: usize },

    #[error("literal not terminated")]
    UnterminatedString { offset: usize },

    #[error("comment not terminated")]
    UnterminatedComment { offset: usize },

    #[error("invalid char escape")]
    InvalidEscape { offset: usize },

    /// The underlying reader failed before any token could be produced
    #[error("read error: {0}")]
    Read(String),
}

impl LexError {
    /// Byte offset of the failure, when it is tied to a position in the source
    pub fn offset(&self) -> Option<usize> {
        match self {
            LexError::InvalidCharacter { offset, .. }
            | LexError::UnterminatedString { offset }
            | LexError::UnterminatedComment { offset }
            | LexError::InvalidEscape { offset } => Some(*offset),
            LexError::Read(_) => None,
        }
    }
}
