//! # Policy Error Types
//!
//! The decision functions themselves are total and never fail; errors exist
//! only at the configuration boundary, where externally supplied rule tables
//! and preference values are checked before they are allowed to drive
//! decisions. This module provides that boundary's error type.
//!
//! ## Usage
//!
//! ```rust
//! use adaptive_presentation::error::PolicyError;
//!
//! let error = PolicyError::validation("text_bonus", "must be within 0.0..=1.0", "2.5");
//! assert_eq!(error.category(), "validation");
//! ```

use std::{error::Error as StdError, fmt};

use pres_layout::RuleError;

/// Errors raised when checking externally supplied policy configuration.
#[derive(Debug)]
pub enum PolicyError {
    /// A strategy rule field was outside its documented range.
    Validation {
        field: String,
        constraint: String,
        value: String,
    },
    /// A layout rule table failed its own validation.
    Layout { source: RuleError },
}

impl PolicyError {
    /// Create a validation error.
    pub fn validation(
        field: impl Into<String>,
        constraint: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::Validation {
            field: field.into(),
            constraint: constraint.into(),
            value: value.into(),
        }
    }

    /// Get the error category as a string.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation",
            Self::Layout { .. } => "layout",
        }
    }
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyError::Validation {
                field,
                constraint,
                value,
            } => {
                write!(
                    f,
                    "Validation failed for '{}': {} (value: {})",
                    field, constraint, value
                )
            }
            PolicyError::Layout { source } => {
                write!(f, "Layout rules rejected: {}", source)
            }
        }
    }
}

impl StdError for PolicyError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Layout { source } => Some(source),
            _ => None,
        }
    }
}

impl From<RuleError> for PolicyError {
    fn from(source: RuleError) -> Self {
        Self::Layout { source }
    }
}

/// Result type alias using our custom error type
pub type PolicyResult<T> = Result<T, PolicyError>;
