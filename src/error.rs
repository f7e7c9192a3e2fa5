//! Error types.
//!
//! Resolving a calendar can only fail on an unknown state. Loading rule
//! definitions from JSON has its own error type.

use std::fmt;

use thiserror::Error;

/// How an input was interpreted when the state lookup failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LookupContext {
    /// Two-letter state code such as `"NW"`.
    Code,
    /// Full state name such as `"Nordrhein-Westfalen"`.
    Name,
    /// Tried as a code first, then as a full name.
    CodeOrName
}

impl fmt::Display for LookupContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupContext::Code => write!(f, "as state code"),
            LookupContext::Name => write!(f, "as state name"),
            LookupContext::CodeOrName => write!(f, "as state code or name")
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HolidayError {
    #[error("unknown state '{input}' ({lookup})")]
    UnknownStateCode {
        input: String,
        lookup: LookupContext
    }
}

impl HolidayError {
    pub fn unknown_code(input: &str) -> HolidayError {
        HolidayError::UnknownStateCode { input: input.to_owned(), lookup: LookupContext::Code }
    }

    /// The input that could not be matched.
    pub fn input(&self) -> &str {
        match self {
            HolidayError::UnknownStateCode { input, .. } => input
        }
    }
}

/// Errors raised while reading holiday rule definitions.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("holiday rule name must not be empty")]
    EmptyName,

    #[error("invalid holiday rule '{name}': {reason}")]
    InvalidRule {
        name: String,
        reason: String
    },

    #[error("holiday rule '{0}' defined more than once")]
    DuplicateName(String)
}

impl ConfigurationError {
    pub fn invalid_rule(name: &str, reason: impl Into<String>) -> ConfigurationError {
        ConfigurationError::InvalidRule { name: name.to_owned(), reason: reason.into() }
    }
}
