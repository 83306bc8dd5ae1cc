//! Structured conversion errors
//!
//! Errors never abort the process. Every converter call returns a typed
//! outcome; the presentation layer decides how to render a failure.

use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const DOMAIN_ERROR: &str = "DOMAIN_ERROR";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const UNSUPPORTED_PAIR: &str = "UNSUPPORTED_PAIR";
    pub const EMPTY_INPUT: &str = "EMPTY_INPUT";
    pub const INVALID_AMOUNT: &str = "INVALID_AMOUNT";
    pub const FETCH_FAILED: &str = "FETCH_FAILED";
    pub const FETCH_UNAVAILABLE: &str = "FETCH_UNAVAILABLE";
}

/// Structured error returned by every converter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ConvertError {
    /// Create a new error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    // ========== Common Error Constructors ==========

    pub fn parse_error(details: impl Into<String>) -> Self {
        Self::new(codes::PARSE_ERROR, format!("Parse error: {}", details.into()))
            .with_suggestion("Enter a finite numeric value")
    }

    /// Non-finite value reached the core (caller's numeric parse let it through)
    pub fn non_finite(arg: &str) -> Self {
        Self::new(
            codes::PARSE_ERROR,
            format!("Parse error: '{}' must be a finite number", arg),
        )
    }

    pub fn domain_error(details: impl Into<String>) -> Self {
        Self::new(codes::DOMAIN_ERROR, format!("Domain error: {}", details.into()))
    }

    pub fn unknown_unit(name: &str) -> Self {
        Self::new(codes::UNKNOWN_UNIT, format!("Unknown unit: {}", name))
            .with_suggestion("Pick a unit from the category's unit list")
    }

    pub fn unsupported_pair(from: &str, to: &str) -> Self {
        Self::new(
            codes::UNSUPPORTED_PAIR,
            format!("No rate from {} to {}", from, to),
        )
        .with_suggestion("The provider's rate table does not cover this pair")
    }

    pub fn empty_input(details: impl Into<String>) -> Self {
        Self::new(codes::EMPTY_INPUT, format!("Empty input: {}", details.into()))
    }

    pub fn invalid_amount(details: impl Into<String>) -> Self {
        Self::new(
            codes::INVALID_AMOUNT,
            format!("Invalid amount: {}", details.into()),
        )
    }

    pub fn fetch_failed(details: impl Into<String>) -> Self {
        Self::new(codes::FETCH_FAILED, format!("Rate fetch failed: {}", details.into()))
            .with_suggestion("Check connectivity or force a refresh")
    }

    pub fn fetch_unavailable() -> Self {
        Self::new(
            codes::FETCH_UNAVAILABLE,
            "Network layer not available in this build",
        )
    }
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ConvertError {}
