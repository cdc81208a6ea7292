//! Parse error model.

use thiserror::Error;

/// Result type used at the string boundaries of the engine.
pub type ParseResult<T> = Result<T, ParseError>;

/// Failure to interpret an externally supplied string.
///
/// The module enumeration and permission wire format are closed; anything
/// outside them is rejected here, loudly, instead of being silently granted
/// or ignored downstream.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The string does not name a module in the closed enumeration.
    #[error("unknown module id: {0}")]
    UnknownModule(String),

    /// The string does not name a permission action.
    #[error("unknown action: {0}")]
    UnknownAction(String),

    /// The string is not a well-formed permission token.
    #[error("malformed permission: {0}")]
    MalformedPermission(String),

    /// An identifier was invalid (e.g. uuid parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl ParseError {
    pub fn unknown_module(s: impl Into<String>) -> Self {
        Self::UnknownModule(s.into())
    }

    pub fn unknown_action(s: impl Into<String>) -> Self {
        Self::UnknownAction(s.into())
    }

    pub fn malformed_permission(s: impl Into<String>) -> Self {
        Self::MalformedPermission(s.into())
    }

    pub fn invalid_id(s: impl Into<String>) -> Self {
        Self::InvalidId(s.into())
    }
}
