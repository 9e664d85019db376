// src/error.rs

use thiserror::Error;

/// Every failure the pipeline can report.
///
/// One variant per error kind so callers can match on the kind instead
/// of scraping a message string; each carries what a position-aware
/// one-line diagnostic needs. Errors are always returned, never
/// panicked, and the first one short-circuits the pipeline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Input was empty or whitespace-only.
    #[error("empty expression provided")]
    EmptyExpression,

    /// A character outside the allowed set
    /// (hex digits, `x`/`X`, `+`, `-`, `.`, `/`, whitespace).
    #[error("invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// Structural violation: wrong token order, insufficient operands,
    /// unknown operator symbol, unparseable number literal, malformed
    /// postfix sequence.
    #[error("parse error at position {position}: {message}")]
    ParseError { message: String, position: usize },

    /// Right operand of `/` was exactly zero.
    #[error("division by zero at position {position}")]
    DivisionByZero { position: usize },
}

impl CalcError {
    pub(crate) fn parse(message: impl Into<String>, position: usize) -> Self {
        CalcError::ParseError {
            message: message.into(),
            position,
        }
    }
}
